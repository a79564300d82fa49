//! Last-element accessor
//!
//! Reads the cursor field of the last record in a result set, which becomes
//! the cursor of the next page.

use super::types::CursorValue;
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::any::type_name;

/// A record that exposes cursor fields by name
///
/// Implemented by the record types a handler paginates over. Return `None`
/// for fields that do not exist or are neither integers nor timestamps.
///
/// ```
/// use http_paging::pagination::{CursorRecord, CursorValue};
///
/// struct User {
///     id: i64,
/// }
///
/// impl CursorRecord for User {
///     fn cursor_field(&self, field: &str) -> Option<CursorValue> {
///         match field {
///             "id" => Some(self.id.into()),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait CursorRecord {
    fn cursor_field(&self, field: &str) -> Option<CursorValue>;
}

/// JSON objects: integer numbers and RFC 3339 strings
impl CursorRecord for Value {
    fn cursor_field(&self, field: &str) -> Option<CursorValue> {
        match self.get(field)? {
            Value::Number(number) => number.as_i64().map(CursorValue::Int),
            Value::String(text) => DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|time| CursorValue::Time(time.with_timezone(&Utc))),
            _ => None,
        }
    }
}

impl<R: CursorRecord + ?Sized> CursorRecord for &R {
    fn cursor_field(&self, field: &str) -> Option<CursorValue> {
        (**self).cursor_field(field)
    }
}

/// Value of `field` on the last record
///
/// An empty slice yields `CursorValue::Int(0)`.
pub fn last<R: CursorRecord>(records: &[R], field: &str) -> Result<CursorValue> {
    let Some(record) = records.last() else {
        return Ok(CursorValue::default());
    };

    record
        .cursor_field(field)
        .ok_or_else(|| Error::unsupported_field(type_name::<R>(), field))
}

/// Value of `field` on the last element of any serializable sequence
///
/// Works on records that don't implement [`CursorRecord`] by going through
/// their JSON form. Fails with `Error::UnsupportedType` when `records` does
/// not serialize to an array of objects.
pub fn last_value<T: Serialize + ?Sized>(records: &T, field: &str) -> Result<CursorValue> {
    let value = serde_json::to_value(records)
        .map_err(|_| Error::unsupported_type(type_name::<T>()))?;

    let Value::Array(items) = value else {
        return Err(Error::unsupported_type(type_name::<T>()));
    };

    // Tuples serialize to arrays too; only sequences of records qualify
    if items.last().is_some_and(|item| !item.is_object()) {
        return Err(Error::unsupported_type(type_name::<T>()));
    }

    last(&items, field).map_err(|_| Error::unsupported_field(type_name::<T>(), field))
}
