//! CLI argument definitions using clap
//!
//! Commands:
//! - product-api serve [--config <path>] [--host <host>] [--port <port>]
//! - product-api openapi

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Product API - product management over an in-memory store
#[derive(Parser, Debug)]
#[command(name = "product-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides the config file)
        #[arg(long, short)]
        port: Option<u16>,
    },

    /// Print the OpenAPI document and exit
    Openapi,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
