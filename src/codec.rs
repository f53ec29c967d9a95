//! Text encodings for values without a native SQL column type.
//!
//! Maps are stored as Base64 of their MessagePack serialization, everything
//! else that is not a primitive as JSON.

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ValueError;
use crate::types::SqlValue;

/// Values serializing to JSON `null` (such as `None`) are written as SQL NULL.
pub fn json_to_sql<T: Serialize + ?Sized>(value: &T) -> Result<SqlValue, ValueError> {
    let json = serde_json::to_value(value).map_err(|e| ValueError::Encode(e.to_string()))?;
    if json.is_null() {
        return Ok(SqlValue::Null);
    }
    serde_json::to_string(&json)
        .map(SqlValue::Text)
        .map_err(|e| ValueError::Encode(e.to_string()))
}

/// SQL NULL is accepted by types that deserialize from JSON `null`, such as `Option`.
pub fn json_from_sql<T: DeserializeOwned>(raw: Option<&str>) -> Result<T, ValueError> {
    match raw {
        Some(raw) => serde_json::from_str(raw).map_err(|e| ValueError::parse("JSON", raw, e)),
        None => serde_json::from_value(serde_json::Value::Null)
            .map_err(|_| ValueError::UnexpectedNull),
    }
}

pub fn blob_to_sql<T: Serialize + ?Sized>(value: &T) -> Result<SqlValue, ValueError> {
    let bytes = rmp_serde::to_vec(value).map_err(|e| ValueError::Encode(e.to_string()))?;
    Ok(SqlValue::Text(STANDARD.encode(bytes)))
}

pub fn blob_from_sql<T: DeserializeOwned>(raw: Option<&str>) -> Result<T, ValueError> {
    let raw = raw.ok_or(ValueError::UnexpectedNull)?;
    let bytes = STANDARD
        .decode(raw.trim())
        .map_err(|e| ValueError::parse("Base64", raw, e))?;
    rmp_serde::from_slice(&bytes).map_err(|e| ValueError::parse("MessagePack", raw, e))
}
