//! Error types for http-paging
//!
//! Extraction and URI generation never fail. Errors only come from the
//! last-element accessor (a call-site type mismatch), from explicit page
//! validation, and from loading options.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// The main error type for http-paging
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Accessor Errors
    // ============================================================================
    #[error("Type {type_name} is not supported by last")]
    UnsupportedType { type_name: String },

    #[error("Field '{field}' of type {type_name} is not a timestamp or integer")]
    UnsupportedField { type_name: String, field: String },

    // ============================================================================
    // Request Errors
    // ============================================================================
    #[error("Invalid pagination parameters: limit={limit}, marker={marker}")]
    InvalidPageParams { limit: i64, marker: i64 },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl Error {
    /// Create an unsupported type error
    pub fn unsupported_type(type_name: impl Into<String>) -> Self {
        Self::UnsupportedType {
            type_name: type_name.into(),
        }
    }

    /// Create an unsupported field error
    pub fn unsupported_field(type_name: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnsupportedField {
            type_name: type_name.into(),
            field: field.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Check if this error was caused by the client's request
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::InvalidPageParams { .. })
    }

    /// HTTP status a handler should answer with
    pub fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = json!({ "success": false, "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}

/// Result type alias for http-paging
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::unsupported_type("i32");
        assert_eq!(err.to_string(), "Type i32 is not supported by last");

        let err = Error::InvalidPageParams {
            limit: -1,
            marker: 0,
        };
        assert_eq!(
            err.to_string(),
            "Invalid pagination parameters: limit=-1, marker=0"
        );

        let err = Error::invalid_value("default_limit", "must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid config value for 'default_limit': must be positive"
        );
    }

    #[test]
    fn test_status_code() {
        let err = Error::InvalidPageParams {
            limit: 10,
            marker: -5,
        };
        assert!(err.is_client_error());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        assert_eq!(
            Error::unsupported_field("User", "name").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert!(!Error::config("bad").is_client_error());
    }

    #[test]
    fn test_into_response_status() {
        let response = Error::unsupported_type("u8").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
