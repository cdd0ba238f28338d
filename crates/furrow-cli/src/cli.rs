//! Command definitions and dispatch for the `furrow` binary.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use eyre::{Context, Result};
use furrow::{KeywordTable, Tokenizer};
use tracing::info;

use crate::config::{CliConfig, LogLevel};
use crate::error::CliError;
use crate::output::{write_json, write_tokens, write_tree};

/// Inspect how feature files are tokenized and assembled.
#[derive(Parser, Debug)]
#[command(name = "furrow", version, about)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,
    /// JSON keyword table to use instead of the built-in locales.
    #[arg(long, global = true, value_name = "FILE")]
    pub keywords: Option<PathBuf>,
    /// Locale applied when a document has no language directive.
    #[arg(long, global = true, value_name = "CODE")]
    pub base_locale: Option<String>,
    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the token stream, one token per line.
    Tokens(DocumentArgs),
    /// Print the assembled feature trees.
    Tree(TreeArgs),
}

/// Arguments naming the document to read.
#[derive(Args, Debug)]
pub struct DocumentArgs {
    /// Feature file to read.
    pub file: PathBuf,
}

/// Arguments of the `tree` command.
#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Feature file to read.
    pub file: PathBuf,
    /// Emit JSON instead of the indented text dump.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Combine environment configuration with the flags on this command
    /// line.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` when an environment variable holds
    /// an invalid value.
    pub fn config(&self) -> Result<CliConfig, CliError> {
        let config = CliConfig::from_env()?;
        Ok(config.apply_overrides(
            self.log_level,
            self.keywords.clone(),
            self.base_locale.clone(),
        ))
    }
}

/// Run `command` against `table`, writing results to `writer`.
///
/// # Errors
///
/// Returns an error if the document cannot be read or tokenized, or if
/// writing the output fails.
pub fn run(command: &Command, table: &KeywordTable, writer: &mut dyn Write) -> Result<()> {
    match command {
        Command::Tokens(args) => {
            let source = read_document(&args.file)?;
            let tokens = Tokenizer::new(table)
                .tokenize_str(&source)
                .map_err(CliError::from)
                .wrap_err_with(|| format!("failed to tokenize {}", args.file.display()))?;
            info!(tokens = tokens.len(), "tokenized document");
            write_tokens(writer, &tokens)
        }
        Command::Tree(args) => {
            let source = read_document(&args.file)?;
            let features = furrow::parse(&source, table)
                .map_err(CliError::from)
                .wrap_err_with(|| format!("failed to parse {}", args.file.display()))?;
            info!(features = features.len(), "built feature trees");
            if args.json {
                write_json(writer, &features)
            } else {
                write_tree(writer, &features)
            }
        }
    }
}

fn read_document(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tempfile::NamedTempFile;

    #[fixture]
    fn document() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap_or_else(|err| panic!("{err}"));
        file.write_all(b"@wip\nFeature: F\n  Scenario: S\n    Given x\n")
            .unwrap_or_else(|err| panic!("{err}"));
        file
    }

    fn run_to_string(command: &Command) -> Result<String> {
        let mut buffer = Vec::new();
        run(command, &KeywordTable::builtin(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    #[rstest]
    fn tokens_command_lists_tokens(document: NamedTempFile) {
        let command = Command::Tokens(DocumentArgs {
            file: document.path().to_path_buf(),
        });
        let output = run_to_string(&command).unwrap_or_else(|err| panic!("{err:?}"));
        assert_eq!(
            output,
            "0\ttag\t@\twip\n1\tfeature\tFeature\tF\n2\tscenario\tScenario\tS\n3\tstep\tGiven\tx\n"
        );
    }

    #[rstest]
    fn tree_command_dumps_text(document: NamedTempFile) {
        let command = Command::Tree(TreeArgs {
            file: document.path().to_path_buf(),
            json: false,
        });
        let output = run_to_string(&command).unwrap_or_else(|err| panic!("{err:?}"));
        assert_eq!(output, "Feature: F [@wip]\n  Scenario: S\n    Given x\n");
    }

    #[test]
    fn missing_file_reports_path() {
        let command = Command::Tree(TreeArgs {
            file: PathBuf::from("/nonexistent/missing.feature"),
            json: false,
        });
        let err = run_to_string(&command).err();
        assert!(err.is_some_and(|err| err.to_string().contains("missing.feature")));
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "furrow",
            "tree",
            "doc.feature",
            "--json",
            "--log-level",
            "debug",
        ])
        .unwrap_or_else(|err| panic!("{err}"));
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
        assert!(matches!(cli.command, Command::Tree(TreeArgs { json: true, .. })));
    }
}
