//! Pagination options
//!
//! `Options` names the query parameters the helpers read and write, and
//! the default and maximum page sizes. It can be built in code or loaded
//! from a YAML/JSON file where every field is optional.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// Defaults
// ============================================================================

/// Default number of items per page
pub const DEFAULT_LIMIT: i64 = 20;

/// Default upper bound for a requested limit
pub const DEFAULT_MAX_LIMIT: i64 = 100;

/// Default query parameter for the limit
pub const DEFAULT_LIMIT_KEY_NAME: &str = "limit";

/// Default query parameter for the offset
pub const DEFAULT_OFFSET_KEY_NAME: &str = "offset";

/// Default query parameter for the cursor
pub const DEFAULT_CURSOR_KEY_NAME: &str = "cursor";

fn default_limit_key_name() -> String {
    DEFAULT_LIMIT_KEY_NAME.to_string()
}

fn default_offset_key_name() -> String {
    DEFAULT_OFFSET_KEY_NAME.to_string()
}

fn default_cursor_key_name() -> String {
    DEFAULT_CURSOR_KEY_NAME.to_string()
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

fn default_max_limit() -> i64 {
    DEFAULT_MAX_LIMIT
}

// ============================================================================
// Options
// ============================================================================

/// Pagination options shared by every helper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Query parameter holding the limit
    #[serde(default = "default_limit_key_name")]
    pub limit_key_name: String,

    /// Query parameter holding the offset
    #[serde(default = "default_offset_key_name")]
    pub offset_key_name: String,

    /// Query parameter holding the cursor
    #[serde(default = "default_cursor_key_name")]
    pub cursor_key_name: String,

    /// Limit used when the request carries none (or an unparseable one)
    #[serde(default = "default_limit")]
    pub default_limit: i64,

    /// Upper bound for a requested limit; zero or negative means unbounded
    #[serde(default = "default_max_limit")]
    pub max_limit: i64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            limit_key_name: default_limit_key_name(),
            offset_key_name: default_offset_key_name(),
            cursor_key_name: default_cursor_key_name(),
            default_limit: DEFAULT_LIMIT,
            max_limit: DEFAULT_MAX_LIMIT,
        }
    }
}

impl Options {
    /// Create options with the default key names and limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the limit query parameter name
    pub fn with_limit_key_name(mut self, name: impl Into<String>) -> Self {
        self.limit_key_name = name.into();
        self
    }

    /// Set the offset query parameter name
    pub fn with_offset_key_name(mut self, name: impl Into<String>) -> Self {
        self.offset_key_name = name.into();
        self
    }

    /// Set the cursor query parameter name
    pub fn with_cursor_key_name(mut self, name: impl Into<String>) -> Self {
        self.cursor_key_name = name.into();
        self
    }

    /// Set the default limit
    pub fn with_default_limit(mut self, limit: i64) -> Self {
        self.default_limit = limit;
        self
    }

    /// Set the maximum limit (zero or negative disables the bound)
    pub fn with_max_limit(mut self, limit: i64) -> Self {
        self.max_limit = limit;
        self
    }

    /// Whether requested limits are clamped
    pub fn is_bounded(&self) -> bool {
        self.max_limit > 0
    }

    /// Check that the options are usable
    pub fn validate(&self) -> Result<()> {
        let keys = [
            ("limit_key_name", &self.limit_key_name),
            ("offset_key_name", &self.offset_key_name),
            ("cursor_key_name", &self.cursor_key_name),
        ];

        for (field, value) in &keys {
            if value.is_empty() {
                return Err(Error::invalid_value(*field, "cannot be empty"));
            }
        }

        for (i, (field, value)) in keys.iter().enumerate() {
            if let Some((other, _)) = keys[i + 1..].iter().find(|(_, v)| v == value) {
                return Err(Error::invalid_value(
                    *field,
                    format!("'{value}' is also used by {other}"),
                ));
            }
        }

        if self.default_limit <= 0 {
            return Err(Error::invalid_value("default_limit", "must be positive"));
        }

        if self.is_bounded() && self.default_limit > self.max_limit {
            return Err(Error::invalid_value(
                "default_limit",
                format!("{} exceeds max_limit {}", self.default_limit, self.max_limit),
            ));
        }

        Ok(())
    }

    /// Parse and validate options from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let options: Options = serde_yaml::from_str(yaml)?;
        options.validate()?;
        Ok(options)
    }

    /// Parse and validate options from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Options = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a file
    ///
    /// `.json` files are parsed as JSON, anything else as YAML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read options file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let options = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_yaml_str(&content)?
        };

        tracing::info!(
            path = %path.display(),
            default_limit = options.default_limit,
            max_limit = options.max_limit,
            "Loaded pagination options"
        );

        Ok(options)
    }
}
