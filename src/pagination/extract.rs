//! Page request extraction
//!
//! `PageRequest` runs the detector and the extractors in one go and is
//! usable directly as an axum extractor when `Options` is reachable from
//! the router state.

use super::last::{last, CursorRecord};
use super::request::{
    get_cursor_from_request, get_limit_from_request, get_offset_from_request,
    get_pagination_type, validate_limit_marker, QueryParams,
};
use super::types::PaginationType;
use super::uri::{generate_cursor_uri, generate_offset_uri};
use crate::config::Options;
use crate::error::{Error, Result};
use async_trait::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use serde::Serialize;

/// Pagination parameters of a single request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    /// Strategy in effect
    pub pagination_type: PaginationType,
    /// Page size
    pub limit: i64,
    /// Items to skip (offset pagination)
    pub offset: i64,
    /// Position marker (cursor pagination)
    pub cursor: i64,
}

impl PageRequest {
    /// Extract pagination parameters without validating them
    pub fn from_request<Q: QueryParams + ?Sized>(request: &Q, options: &Options) -> Self {
        Self {
            pagination_type: get_pagination_type(request, Some(options)),
            limit: get_limit_from_request(request, options),
            offset: get_offset_from_request(request, options),
            cursor: get_cursor_from_request(request, options),
        }
    }

    /// Offset or cursor, depending on the pagination type
    pub fn marker(&self) -> i64 {
        match self.pagination_type {
            PaginationType::Offset => self.offset,
            PaginationType::Cursor => self.cursor,
        }
    }

    pub fn is_valid(&self) -> bool {
        validate_limit_marker(self.limit, self.marker())
    }

    /// Reject negative limits and markers
    pub fn validate(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(Error::InvalidPageParams {
                limit: self.limit,
                marker: self.marker(),
            })
        }
    }

    /// Offset URI of the page after this one
    pub fn next_offset_uri(&self, options: &Options) -> String {
        generate_offset_uri(self.limit, self.offset.saturating_add(self.limit), options)
    }

    /// URI of the page after this one
    ///
    /// Cursor pagination continues from `field` of the last record.
    pub fn next_uri<R: CursorRecord>(
        &self,
        records: &[R],
        field: &str,
        options: &Options,
    ) -> Result<String> {
        match self.pagination_type {
            PaginationType::Offset => Ok(self.next_offset_uri(options)),
            PaginationType::Cursor => {
                let cursor = last(records, field)?;
                Ok(generate_cursor_uri(self.limit, cursor, options))
            }
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PageRequest
where
    Options: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let options = Options::from_ref(state);
        let page = PageRequest::from_request(&*parts, &options);

        if let Err(e) = page.validate() {
            tracing::debug!(uri = %parts.uri, "Rejected pagination parameters: {e}");
            return Err(e);
        }

        Ok(page)
    }
}
