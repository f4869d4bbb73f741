//! Pending row operations
//!
//! This module defines the unit of work the adapter pipeline processes.

use event_system::StatementType;
use serde::{Deserialize, Serialize};
use sql_value::SqlValue;
use std::collections::HashMap;

/// One pending row operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowChange {
    /// Statement kind; never `Select`
    pub statement: StatementType,
    /// Record ID (if available)
    pub record_id: Option<String>,
    /// Column values to apply
    pub values: HashMap<String, SqlValue>,
}

impl RowChange {
    pub fn insert() -> Self {
        Self::new(StatementType::Insert)
    }

    pub fn update(record_id: String) -> Self {
        Self {
            record_id: Some(record_id),
            ..Self::new(StatementType::Update)
        }
    }

    pub fn delete(record_id: String) -> Self {
        Self {
            record_id: Some(record_id),
            ..Self::new(StatementType::Delete)
        }
    }

    fn new(statement: StatementType) -> Self {
        Self {
            statement,
            record_id: None,
            values: HashMap::new(),
        }
    }

    pub fn with_value(mut self, key: &str, value: impl Into<SqlValue>) -> Self {
        self.values.insert(key.to_string(), value.into());
        self
    }

    pub fn with_values(mut self, values: HashMap<String, SqlValue>) -> Self {
        self.values.extend(values);
        self
    }
}
