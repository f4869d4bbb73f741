//! Serialization utilities
//!
//! This module provides functions for converting serializable Rust
//! models into SqlValue payloads.

use crate::types::SqlValue;
use serde::Serialize;
use std::collections::HashMap;

/// Convert serializable data to SqlValue::Record
pub fn serialize_to_record<T: Serialize>(data: &T) -> SqlValue {
    let payload = serialize_to_payload(data);
    SqlValue::Record(payload)
}

/// Default implementation using JSON serialization as fallback
pub fn serialize_to_payload<T: Serialize>(data: &T) -> HashMap<String, SqlValue> {
    let mut payload = HashMap::new();

    // Serialize to JSON first, then extract fields
    if let Ok(serde_json::Value::Object(map)) = serde_json::to_value(data) {
        for (key, value) in map {
            let sql_value = match value {
                serde_json::Value::String(s) => {
                    // Try to parse as RFC3339 timestamp first
                    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(&s) {
                        SqlValue::Timestamp(dt.with_timezone(&chrono::Utc))
                    } else {
                        SqlValue::Text(s)
                    }
                }
                serde_json::Value::Number(n) => {
                    if let Some(i) = n.as_i64() {
                        if i >= i32::MIN as i64 && i <= i32::MAX as i64 {
                            SqlValue::Integer(i as i32)
                        } else {
                            SqlValue::BigInt(i)
                        }
                    } else if let Some(f) = n.as_f64() {
                        SqlValue::Decimal(f.to_string())
                    } else {
                        SqlValue::Json(serde_json::Value::Number(n))
                    }
                }
                serde_json::Value::Bool(b) => SqlValue::Boolean(b),
                serde_json::Value::Null => SqlValue::Null,
                other => SqlValue::Json(other),
            };
            payload.insert(key, sql_value);
        }
    }

    payload
}
