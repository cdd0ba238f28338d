//! Errors surfaced by the tokenizer.
//!
//! Only a missing locale is fatal. Unclosed multiline blocks, malformed rows
//! and orphan tags degrade silently and are reported through `tracing`.

use thiserror::Error;

/// Errors returned while reading a feature document.
///
/// # Examples
/// ```
/// use furrow::ParseError;
/// let err = ParseError::LocaleNotFound { locale: "xx".into() };
/// assert_eq!(err.to_string(), "no keywords defined for locale `xx`");
/// ```
#[derive(Debug, Error)]
pub enum ParseError {
    /// The resolved locale code has no entry in the keyword table.
    #[error("no keywords defined for locale `{locale}`")]
    LocaleNotFound {
        /// Locale code taken from the language directive or table base.
        locale: String,
    },
    /// A keyword matcher could not be compiled.
    #[error(transparent)]
    Matcher(#[from] regex::Error),
}
