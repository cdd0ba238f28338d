//! Error types raised while assembling keyword tables.

use thiserror::Error;

/// Errors surfaced while loading or configuring a [`KeywordTable`].
///
/// [`KeywordTable`]: crate::KeywordTable
///
/// # Examples
/// ```
/// use furrow_keywords::KeywordTableError;
/// let err = KeywordTableError::MissingKeyword {
///     locale: "fr".into(),
///     key: "examples",
/// };
/// assert_eq!(err.to_string(), "locale `fr` defines no `examples` keyword");
/// ```
#[derive(Debug, Error)]
pub enum KeywordTableError {
    /// The JSON document could not be decoded into keyword records.
    #[error("invalid keyword table: {0}")]
    Json(#[from] serde_json::Error),
    /// A record left one of the required keys empty.
    #[error("locale `{locale}` defines no `{key}` keyword")]
    MissingKeyword {
        /// Locale code of the offending record.
        locale: String,
        /// Name of the empty key.
        key: &'static str,
    },
    /// The requested base locale has no record in the table.
    #[error("base locale `{0}` is not defined in the keyword table")]
    UnknownBase(String),
}
