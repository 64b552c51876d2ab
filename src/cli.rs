//! CLI definitions for the to-do server.
//!
//! This module defines the CLI structure using clap's derive macros.

use clap::Parser;

/// Single-user to-do list server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Path to the JSON store file (overrides config)
    #[arg(short, long)]
    pub store: Option<String>,

    /// Port for the HTTP server (overrides config)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2")]
    pub log: String,
}
