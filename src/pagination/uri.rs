//! Next-page URI generation
//!
//! Both generators format their inputs as-is. Validate limit and marker
//! with [`super::validate_limit_marker`] beforehand.

use super::types::CursorValue;
use crate::config::Options;

/// Query string for offset pagination: `?limit=10&offset=20`
pub fn generate_offset_uri(limit: i64, offset: i64, options: &Options) -> String {
    format!(
        "?{}={}&{}={}",
        options.limit_key_name, limit, options.offset_key_name, offset
    )
}

/// Query string for cursor pagination: `?limit=10&cursor=42`
///
/// Timestamp cursors are written as Unix seconds.
pub fn generate_cursor_uri(limit: i64, cursor: impl Into<CursorValue>, options: &Options) -> String {
    format!(
        "?{}={}&{}={}",
        options.limit_key_name,
        limit,
        options.cursor_key_name,
        cursor.into()
    )
}
