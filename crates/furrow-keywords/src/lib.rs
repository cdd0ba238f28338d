//! Locale keyword tables for the furrow feature-file reader.
//!
//! The tokenizer treats this crate as an opaque lookup: given a locale code it
//! receives a [`Keywords`] record of literal synonyms for every structural and
//! step keyword. Tables come from the built-in set or from a JSON document.

mod builtin;
mod errors;
mod step_keyword;
mod table;

pub use errors::KeywordTableError;
pub use step_keyword::{StepKeyword, StepKeywordParseError};
pub use table::{KeywordTable, Keywords};
