//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat, UriCommand};
use crate::config::Options;
use crate::error::Result;
use crate::pagination::{generate_cursor_uri, generate_offset_uri, PageRequest, PaginationType};
use serde_json::{json, Value};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print its output
    pub fn run(&self) -> Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }

    /// Output of the CLI command
    pub fn render(&self) -> Result<String> {
        let options = self.load_options()?;

        match &self.cli.command {
            Commands::Inspect {
                target,
                last_cursor,
            } => Ok(self.inspect(target, *last_cursor, &options)),
            Commands::Uri(UriCommand::Offset { limit, offset }) => {
                Ok(generate_offset_uri(*limit, *offset, &options))
            }
            Commands::Uri(UriCommand::Cursor { limit, cursor }) => {
                Ok(generate_cursor_uri(*limit, *cursor, &options))
            }
            Commands::Defaults => Ok(serde_yaml::to_string(&options)?),
        }
    }

    fn load_options(&self) -> Result<Options> {
        match &self.cli.config {
            Some(path) => Options::from_file(path),
            None => Ok(Options::default()),
        }
    }

    fn inspect(&self, target: &str, last_cursor: Option<i64>, options: &Options) -> String {
        let page = match url::Url::parse(target) {
            Ok(url) => PageRequest::from_request(&url, options),
            // Path with a query ("/events?limit=10") or a bare query string
            Err(_) => {
                let query = target.split_once('?').map_or(target, |(_, query)| query);
                PageRequest::from_request(query, options)
            }
        };

        let next = if page.is_valid() {
            match page.pagination_type {
                PaginationType::Offset => Some(page.next_offset_uri(options)),
                PaginationType::Cursor => {
                    last_cursor.map(|cursor| generate_cursor_uri(page.limit, cursor, options))
                }
            }
        } else {
            None
        };

        tracing::debug!(?page, ?next, "Inspected request");

        match self.cli.format {
            OutputFormat::Json => {
                let output = json!({
                    "pagination_type": page.pagination_type,
                    "limit": page.limit,
                    "offset": page.offset,
                    "cursor": page.cursor,
                    "valid": page.is_valid(),
                    "next": next.map_or(Value::Null, Value::String),
                });
                output.to_string()
            }
            OutputFormat::Pretty => {
                let mut lines = vec![
                    format!("Pagination type: {}", page.pagination_type),
                    format!("Limit:           {}", page.limit),
                    format!("Offset:          {}", page.offset),
                    format!("Cursor:          {}", page.cursor),
                    format!("Valid:           {}", page.is_valid()),
                ];
                if let Some(next) = next {
                    lines.push(format!("Next page:       {next}"));
                }
                lines.join("\n")
            }
        }
    }
}
