//! Reader for line-oriented feature files.
//!
//! Reading happens in two stages. The [`Tokenizer`] scans document lines
//! against a locale keyword table and produces a flat stream of [`Token`]s;
//! [`builder::build`] then assembles that stream into [`Feature`] trees with
//! tags, descriptions, steps, tables and multiline blocks attached to their
//! owners. [`parse`] runs both stages.
//!
//! The crate performs no I/O. Callers hand in text or lines they have
//! already read.

pub mod ast;
pub mod builder;
pub mod dump;
mod error;
pub mod row;
mod token;
mod tokenizer;

pub use ast::{
    Background, Definition, Examples, Feature, Row, Scenario, ScenarioItem, ScenarioOutline,
    Step, StepArgument, StepsContainer, Tag, Taggable,
};
pub use error::ParseError;
pub use furrow_keywords::{KeywordTable, KeywordTableError, Keywords, StepKeyword};
pub use token::{Token, TokenKind};
pub use tokenizer::{Tokenizer, language_directive};

/// Tokenize `source` with `table` and build its feature trees.
///
/// # Errors
///
/// Returns [`ParseError::LocaleNotFound`] when the document's locale has no
/// keyword record in `table`.
///
/// # Examples
/// ```
/// use furrow::{KeywordTable, StepsContainer, parse};
///
/// let source = "Feature: Eating\n  Scenario: Lunch\n    Given a cucumber\n    And a plate";
/// let features = parse(source, &KeywordTable::builtin()).unwrap();
/// let lunch = &features[0].scenarios[0];
/// assert_eq!(lunch.steps().len(), 2);
/// ```
pub fn parse(source: &str, table: &KeywordTable) -> Result<Vec<Feature>, ParseError> {
    parse_lines(source.lines(), table)
}

/// Like [`parse`], for documents already split into lines.
///
/// # Errors
///
/// See [`parse`].
pub fn parse_lines<I, S>(lines: I, table: &KeywordTable) -> Result<Vec<Feature>, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tokens = Tokenizer::new(table).tokenize(lines)?;
    Ok(builder::build(tokens))
}
