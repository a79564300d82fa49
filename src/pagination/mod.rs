//! Pagination module
//!
//! Supports: Offset (`?limit=10&offset=20`) and Cursor (`?limit=10&cursor=42`)
//!
//! # Overview
//!
//! A handler detects the pagination type, extracts limit and marker,
//! validates them, runs its own query, then builds the next-page link from
//! the last record of the result set.
//!
//! ```
//! use http_paging::pagination::{
//!     generate_offset_uri, get_limit_from_request, get_offset_from_request,
//!     get_pagination_type, validate_limit_marker, PaginationType,
//! };
//! use http_paging::Options;
//!
//! let options = Options::default();
//! let query = "limit=10&offset=20";
//!
//! assert_eq!(get_pagination_type(query, Some(&options)), PaginationType::Offset);
//! let limit = get_limit_from_request(query, &options);
//! let offset = get_offset_from_request(query, &options);
//! assert!(validate_limit_marker(limit, offset));
//! assert_eq!(generate_offset_uri(limit, offset + limit, &options), "?limit=10&offset=30");
//! ```

mod extract;
mod last;
mod request;
mod types;
mod uri;

pub use extract::PageRequest;
pub use last::{last, last_value, CursorRecord};
pub use request::{
    get_cursor_from_request, get_limit_from_request, get_offset_from_request,
    get_pagination_type, validate_limit_marker, QueryParams,
};
pub use types::{CursorValue, PaginationType, CURSOR_TYPE, OFFSET_TYPE};
pub use uri::{generate_cursor_uri, generate_offset_uri};
