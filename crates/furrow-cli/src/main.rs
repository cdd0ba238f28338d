//! The `furrow` binary.
//!
//! Exits with status 0 on success, 1 when the document cannot be read or
//! tokenized and 2 when the configuration is invalid.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use furrow::KeywordTable;
use tracing::{debug, error};

use furrow_cli::cli::{self, Cli};
use furrow_cli::config::CliConfig;
use furrow_cli::error::CliError;
use furrow_cli::logging::init_logging;

fn main() -> ExitCode {
    let args = Cli::parse();

    let (config, table) = match configure(&args) {
        Ok(configured) => configured,
        Err(e) => {
            init_logging(&CliConfig::default());
            error!(error = %e, "invalid configuration");
            return ExitCode::from(2);
        }
    };
    init_logging(&config);
    debug!(locale = table.base_locale(), "configured keyword table");

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    match cli::run(&args.command, &table, &mut writer) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn configure(args: &Cli) -> Result<(CliConfig, KeywordTable), CliError> {
    let config = args.config()?;
    let table = config.keyword_table()?;
    Ok((config, table))
}
