//! Pagination types
//!
//! The pagination type identifiers and the typed cursor value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of offset-based pagination
pub const OFFSET_TYPE: &str = "offset";

/// Identifier of cursor-based pagination
pub const CURSOR_TYPE: &str = "cursor";

// ============================================================================
// Pagination Type
// ============================================================================

/// Pagination strategy in effect for a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaginationType {
    /// `?limit=..&offset=..`
    #[default]
    Offset,
    /// `?limit=..&cursor=..`
    Cursor,
}

impl PaginationType {
    /// String identifier (`OFFSET_TYPE` or `CURSOR_TYPE`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Offset => OFFSET_TYPE,
            Self::Cursor => CURSOR_TYPE,
        }
    }
}

impl fmt::Display for PaginationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaginationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            OFFSET_TYPE => Ok(Self::Offset),
            CURSOR_TYPE => Ok(Self::Cursor),
            other => Err(format!("Unknown pagination type: {other}")),
        }
    }
}

// ============================================================================
// Cursor Value
// ============================================================================

/// Value of a cursor field taken from a record
///
/// Integer cursors render as-is. Timestamp cursors render as Unix seconds
/// so the next request's cursor parameter parses back as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CursorValue {
    /// Integer field (ids, sequence numbers)
    Int(i64),
    /// Timestamp field (created_at, updated_at)
    ///
    /// Timestamps at or before the Unix epoch render as a cursor `<= 0`,
    /// which the next request detects as offset pagination.
    Time(DateTime<Utc>),
}

impl CursorValue {
    /// Integer representation used in query strings
    pub fn as_i64(&self) -> i64 {
        match self {
            Self::Int(value) => *value,
            Self::Time(time) => time.timestamp(),
        }
    }

    /// Timestamp, if this is a timestamp cursor
    pub fn as_time(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Int(_) => None,
            Self::Time(time) => Some(*time),
        }
    }
}

impl Default for CursorValue {
    fn default() -> Self {
        Self::Int(0)
    }
}

impl fmt::Display for CursorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i64())
    }
}

impl From<i64> for CursorValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for CursorValue {
                fn from(value: $ty) -> Self {
                    Self::Int(value.into())
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, u8, u16, u32);

impl From<DateTime<Utc>> for CursorValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Time(value)
    }
}
