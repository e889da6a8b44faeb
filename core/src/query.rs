//! Flattening typed query structs into ordered query-string pairs.
//!
//! Structs serialize through `serde_json` (with `preserve_order`, so pairs
//! come out in field declaration order). `None` fields are dropped, scalars
//! become their JSON text, and sequences repeat the key once per element.

use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

/// Flatten `value` into `(key, value)` pairs.
///
/// `value` must serialize to a JSON object (or `null`, which yields no
/// pairs). Nested objects are rejected.
pub fn to_query_pairs<T: Serialize + ?Sized>(value: &T) -> Result<Vec<(String, String)>, ApiError> {
    let value = serde_json::to_value(value).map_err(|e| ApiError::Serialization(e.to_string()))?;
    let map = match value {
        Value::Object(map) => map,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(ApiError::Serialization(format!(
                "query must serialize to an object, got {other}"
            )))
        }
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value {
            Value::Array(items) => {
                for item in items {
                    if let Some(text) = scalar_text(&key, item)? {
                        pairs.push((key.clone(), text));
                    }
                }
            }
            other => {
                if let Some(text) = scalar_text(&key, other)? {
                    pairs.push((key, text));
                }
            }
        }
    }
    Ok(pairs)
}

/// Build a parameter set with a fixed leading pair followed by every field
/// of `rest`.
///
/// `key` appears once and stays first. If `rest` also sets it, the last
/// value from `rest` replaces `value`.
pub fn leading_pair_then<T: Serialize>(
    key: &str,
    value: &str,
    rest: Option<&T>,
) -> Result<Vec<(String, String)>, ApiError> {
    let mut pairs = vec![(key.to_string(), value.to_string())];
    if let Some(rest) = rest {
        for (k, v) in to_query_pairs(rest)? {
            if k == key {
                pairs[0].1 = v;
            } else {
                pairs.push((k, v));
            }
        }
    }
    Ok(pairs)
}

fn scalar_text(key: &str, value: Value) -> Result<Option<String>, ApiError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Array(_) | Value::Object(_) => Err(ApiError::Serialization(format!(
            "query field `{key}` is not a scalar"
        ))),
    }
}
