//! Typed access to fields of fetched records.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::application::ports::{CursorError, Record};

/// `key` of `record`, `None` when the row or the column is missing or NULL.
pub fn field<T: DeserializeOwned>(
    record: Option<&Record>,
    key: &str,
) -> Result<Option<T>, CursorError> {
    match record.and_then(|record| record.get(key)) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| CursorError::UnexpectedResult(format!("column {}: {}", key, e))),
    }
}

/// Boolean column; a missing row reads as `false`.
pub fn flag(record: Option<Record>, key: &str) -> Result<bool, CursorError> {
    Ok(field(record.as_ref(), key)?.unwrap_or(false))
}

/// `COUNT(...)` column; a missing row reads as zero.
pub fn count(record: Option<Record>, key: &str) -> Result<i64, CursorError> {
    Ok(field(record.as_ref(), key)?.unwrap_or(0))
}

/// Id from an `INSERT ... RETURNING` row, which must be present.
pub fn returning_id(record: Option<Record>, key: &str) -> Result<i64, CursorError> {
    field(record.as_ref(), key)?
        .ok_or_else(|| CursorError::UnexpectedResult(format!("no {} returned", key)))
}

/// First column named `key` of every row, skipping NULLs.
pub fn column<T: DeserializeOwned>(records: &[Record], key: &str) -> Result<Vec<T>, CursorError> {
    records
        .iter()
        .filter_map(|record| field(Some(record), key).transpose())
        .collect()
}
