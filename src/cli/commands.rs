//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// HTTP pagination helper CLI
#[derive(Parser, Debug)]
#[command(name = "http-paging")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Options file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the pagination parameters of a request
    Inspect {
        /// Request URL or bare query string (e.g. "limit=10&offset=20")
        target: String,

        /// Cursor value of the last returned record (cursor pagination)
        #[arg(long, allow_hyphen_values = true)]
        last_cursor: Option<i64>,
    },

    /// Generate a next-page query string
    #[command(subcommand)]
    Uri(UriCommand),

    /// Print the effective options
    Defaults,
}

/// Query string generators
#[derive(Subcommand, Debug)]
pub enum UriCommand {
    /// `?limit=..&offset=..`
    Offset {
        #[arg(long, allow_hyphen_values = true)]
        limit: i64,

        #[arg(long, allow_hyphen_values = true)]
        offset: i64,
    },

    /// `?limit=..&cursor=..`
    Cursor {
        #[arg(long, allow_hyphen_values = true)]
        limit: i64,

        #[arg(long, allow_hyphen_values = true)]
        cursor: i64,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Human-readable output
    Pretty,
}
