//! Command line front end for the furrow feature-file reader.
//!
//! The `furrow` binary reads one feature file and prints either its token
//! stream or its assembled feature trees. Configuration comes from
//! `FURROW_*` environment variables, overridden by command line flags.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
