//! CLI module for the product API
//!
//! Provides command-line interface for:
//! - serve: Start the HTTP server
//! - openapi: Print the API document

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{openapi, resolve_config, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
