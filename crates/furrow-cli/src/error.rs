//! Error types for the command line front end.

use std::path::PathBuf;

use furrow::{KeywordTableError, ParseError};
use thiserror::Error;

/// Errors raised while configuring or running the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The document could not be tokenized.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The keyword table file is malformed.
    #[error(transparent)]
    Keywords(#[from] KeywordTableError),
}

impl CliError {
    /// Whether the error stems from configuration rather than the input
    /// document.
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self, Self::InvalidConfig(_) | Self::Keywords(_))
    }
}
