//! Request parameter extraction
//!
//! Reads limit, offset and cursor from a request's query string. Extraction
//! is lenient: missing or malformed values fall back to defaults and
//! negative values pass through. Call [`validate_limit_marker`] to reject
//! them.

use super::types::PaginationType;
use crate::config::Options;
use axum::http::request::Parts;
use axum::http::{Request, Uri};
use std::borrow::Cow;
use std::collections::HashMap;
use url::form_urlencoded;

// ============================================================================
// Query Access
// ============================================================================

/// Read-only view of a request's query parameters
pub trait QueryParams {
    /// First value of the `key` query parameter, percent-decoded
    fn query_param(&self, key: &str) -> Option<Cow<'_, str>>;
}

/// A raw query string, with or without the leading `?`
impl QueryParams for str {
    fn query_param(&self, key: &str) -> Option<Cow<'_, str>> {
        let query = self.strip_prefix('?').unwrap_or(self);
        form_urlencoded::parse(query.as_bytes())
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }
}

impl QueryParams for String {
    fn query_param(&self, key: &str) -> Option<Cow<'_, str>> {
        self.as_str().query_param(key)
    }
}

impl QueryParams for Uri {
    fn query_param(&self, key: &str) -> Option<Cow<'_, str>> {
        self.query().and_then(|query| query.query_param(key))
    }
}

impl<B> QueryParams for Request<B> {
    fn query_param(&self, key: &str) -> Option<Cow<'_, str>> {
        self.uri().query_param(key)
    }
}

impl QueryParams for Parts {
    fn query_param(&self, key: &str) -> Option<Cow<'_, str>> {
        self.uri.query_param(key)
    }
}

impl QueryParams for url::Url {
    fn query_param(&self, key: &str) -> Option<Cow<'_, str>> {
        self.query_pairs()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }
}

impl QueryParams for HashMap<String, String> {
    fn query_param(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|value| Cow::Borrowed(value.as_str()))
    }
}

/// Non-empty value of a query parameter
fn non_empty_param<'a, Q: QueryParams + ?Sized>(
    request: &'a Q,
    key: &str,
) -> Option<Cow<'a, str>> {
    request.query_param(key).filter(|value| !value.is_empty())
}

/// Integer value of a marker parameter, zero when absent or malformed
fn marker_param<Q: QueryParams + ?Sized>(request: &Q, key: &str) -> i64 {
    non_empty_param(request, key)
        .and_then(|value| value.parse::<i64>().ok())
        .unwrap_or(0)
}

// ============================================================================
// Extractors
// ============================================================================

/// Returns true if both the limit and the marker (offset or cursor) are non-negative
pub fn validate_limit_marker(limit: i64, marker: i64) -> bool {
    limit >= 0 && marker >= 0
}

/// Limit requested by the client
///
/// Falls back to `default_limit` when the parameter is missing or not an
/// integer, and is clamped to `max_limit` when the options are bounded.
pub fn get_limit_from_request<Q: QueryParams + ?Sized>(request: &Q, options: &Options) -> i64 {
    match non_empty_param(request, &options.limit_key_name) {
        Some(value) => {
            let limit = value.parse::<i64>().unwrap_or(options.default_limit);
            if options.is_bounded() && limit > options.max_limit {
                options.max_limit
            } else {
                limit
            }
        }
        None => options.default_limit,
    }
}

/// Offset requested by the client, `0` when missing or malformed
pub fn get_offset_from_request<Q: QueryParams + ?Sized>(request: &Q, options: &Options) -> i64 {
    marker_param(request, &options.offset_key_name)
}

/// Cursor requested by the client, `0` when missing or malformed
pub fn get_cursor_from_request<Q: QueryParams + ?Sized>(request: &Q, options: &Options) -> i64 {
    marker_param(request, &options.cursor_key_name)
}

/// Pagination type of the request
///
/// Cursor pagination when a positive cursor is present, offset pagination
/// otherwise. `None` options means the defaults.
pub fn get_pagination_type<Q: QueryParams + ?Sized>(
    request: &Q,
    options: Option<&Options>,
) -> PaginationType {
    let defaults;
    let options = match options {
        Some(options) => options,
        None => {
            defaults = Options::default();
            &defaults
        }
    };

    let cursor = get_cursor_from_request(request, options);
    let pagination_type = if cursor > 0 {
        PaginationType::Cursor
    } else {
        PaginationType::Offset
    };

    tracing::debug!(cursor, pagination_type = %pagination_type, "Detected pagination type");
    pagination_type
}
