//! CLI module
//!
//! Command-line interface for checking pagination behavior.
//!
//! # Commands
//!
//! - `inspect` - Show how a request URL is paginated
//! - `uri` - Generate a next-page query string
//! - `defaults` - Print the effective options

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, UriCommand};
pub use runner::Runner;
