//! # http-paging
//!
//! Pagination helpers for HTTP request handlers.
//!
//! ## Features
//!
//! - **Parameter Extraction**: Limit, offset and cursor from any query source
//!   (raw query strings, `http::Uri`, `http::Request`, `url::Url`)
//! - **Lenient Parsing**: Missing or malformed values fall back to defaults
//! - **Type Detection**: Cursor pagination when a positive cursor is present,
//!   offset pagination otherwise
//! - **Next-Page Links**: `?limit=10&offset=20` / `?limit=10&cursor=42`
//! - **Cursor Derivation**: Cursor of the next page from the last record
//! - **Axum Extractor**: `PageRequest` straight from the request parts
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use axum::{routing::get, Json, Router};
//! use http_paging::{Options, PageRequest, Result};
//!
//! async fn list_articles(page: PageRequest) -> Result<Json<serde_json::Value>> {
//!     let articles = db.fetch(page.limit, page.marker()).await;
//!     let next = page.next_uri(&articles, "id", &Options::default())?;
//!     Ok(Json(serde_json::json!({ "data": articles, "next": next })))
//! }
//!
//! let app = Router::new()
//!     .route("/articles", get(list_articles))
//!     .with_state(Options::default());
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Pagination options
pub mod config;

/// Extraction, detection, validation and URI generation
pub mod pagination;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::Options;
pub use error::{Error, Result};
pub use pagination::{CursorRecord, CursorValue, PageRequest, PaginationType};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
