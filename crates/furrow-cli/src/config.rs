//! CLI configuration parsed from environment variables.
//!
//! Every setting can be overridden by a command line flag. Environment
//! variables are prefixed with `FURROW_`.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use furrow::KeywordTable;
use tracing::debug;

use crate::error::CliError;

/// Log level enumeration matching tracing crate levels.
///
/// Defaults to `Warn` so stderr stays quiet unless asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Most verbose logging, includes all trace spans.
    Trace,
    /// Debug-level information, including dropped input.
    Debug,
    /// Standard informational messages.
    Info,
    /// Warning messages for potentially problematic situations.
    #[default]
    Warn,
    /// Error messages for failures.
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(CliError::InvalidConfig(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert to a tracing filter directive string.
    #[must_use]
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Locale used when no other base locale is configured.
const DEFAULT_BASE_LOCALE: &str = "en";

/// Configuration for the `furrow` binary.
///
/// # Environment Variables
///
/// - `FURROW_LOG_LEVEL`: log level (trace, debug, info, warn, error)
/// - `FURROW_KEYWORDS`: path to a JSON keyword table replacing the built-in
///   one
/// - `FURROW_BASE_LOCALE`: base locale of that table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: LogLevel,
    /// JSON keyword table to load instead of the built-in one.
    pub keywords: Option<PathBuf>,
    /// Locale applied to documents without a language directive.
    pub base_locale: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            keywords: None,
            base_locale: DEFAULT_BASE_LOCALE.to_string(),
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Falls back to defaults for missing values.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if an environment variable contains
    /// an invalid value.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// See [`from_env`](Self::from_env).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = match lookup("FURROW_LOG_LEVEL") {
            Some(val) => val.parse()?,
            None => LogLevel::default(),
        };
        let keywords = lookup("FURROW_KEYWORDS")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);
        let base_locale = match lookup("FURROW_BASE_LOCALE") {
            Some(val) if val.trim().is_empty() => {
                return Err(CliError::InvalidConfig(
                    "base locale must not be empty".to_string(),
                ));
            }
            Some(val) => val.trim().to_string(),
            None => DEFAULT_BASE_LOCALE.to_string(),
        };

        Ok(Self {
            log_level,
            keywords,
            base_locale,
        })
    }

    /// Apply optional overrides to an existing configuration.
    ///
    /// This is intended for CLI overrides that should take precedence over
    /// environment-based defaults.
    #[must_use]
    pub fn apply_overrides(
        mut self,
        log_level: Option<LogLevel>,
        keywords: Option<PathBuf>,
        base_locale: Option<String>,
    ) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }

        if let Some(path) = keywords {
            self.keywords = Some(path);
        }

        if let Some(code) = base_locale {
            self.base_locale = code;
        }

        self
    }

    /// Create a new configuration with the specified log level.
    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    /// Build the keyword table this configuration selects.
    ///
    /// Without a keyword file the built-in table is used, rebased onto
    /// `base_locale`.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Io` when the keyword file cannot be read and
    /// `CliError::Keywords` when it is malformed or lacks the base locale.
    pub fn keyword_table(&self) -> Result<KeywordTable, CliError> {
        let Some(path) = &self.keywords else {
            return Ok(KeywordTable::builtin().with_base(&self.base_locale)?);
        };
        debug!(path = %path.display(), "loading keyword table");
        let json = fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(KeywordTable::from_json(&json, &self.base_locale)?)
    }
}
