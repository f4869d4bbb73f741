//! Row-update event types and definitions
//!
//! This module defines the event-argument aggregates raised before and
//! after each row operation in the adapter update pipeline.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::types::SqlValue;

/// Kind of SQL statement a row operation represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatementType {
    Select,
    Insert,
    Update,
    Delete,
}

impl StatementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatementType::Select => "SELECT",
            StatementType::Insert => "INSERT",
            StatementType::Update => "UPDATE",
            StatementType::Delete => "DELETE",
        }
    }
}

/// Raised when an integer does not name a member of a closed enumeration
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid update status value: {0}")]
pub struct InvalidUpdateStatus(pub i32);

/// Handler-controlled outcome of a row-update notification
///
/// The numeric values are part of the contract and must survive
/// serialization unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum UpdateStatus {
    #[default]
    Continue,
    ErrorsOccurred,
    SkipCurrentRow,
    SkipAllRemainingRows,
}

impl UpdateStatus {
    pub fn as_i32(&self) -> i32 {
        match self {
            UpdateStatus::Continue => 0,
            UpdateStatus::ErrorsOccurred => 1,
            UpdateStatus::SkipCurrentRow => 2,
            UpdateStatus::SkipAllRemainingRows => 3,
        }
    }
}

impl From<UpdateStatus> for i32 {
    fn from(status: UpdateStatus) -> Self {
        status.as_i32()
    }
}

impl TryFrom<i32> for UpdateStatus {
    type Error = InvalidUpdateStatus;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(UpdateStatus::Continue),
            1 => Ok(UpdateStatus::ErrorsOccurred),
            2 => Ok(UpdateStatus::SkipCurrentRow),
            3 => Ok(UpdateStatus::SkipAllRemainingRows),
            other => Err(InvalidUpdateStatus(other)),
        }
    }
}

/// Event raised before a row operation is handed to the executor
///
/// Handlers receive this mutably: they may rewrite the pending values
/// and set `status` to steer the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowUpdatingEvent {
    /// Statement kind about to run
    pub statement: StatementType,
    /// Table name
    pub table_name: String,
    /// Record ID (if available)
    pub record_id: Option<String>,
    /// Pending column values for the row
    pub values: HashMap<String, SqlValue>,
    /// Handler-controlled disposition of this row
    pub status: UpdateStatus,
    /// Error message set by a handler alongside `ErrorsOccurred`
    pub error: Option<String>,
    /// Event timestamp (UTC)
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl RowUpdatingEvent {
    pub fn new(statement: StatementType, table_name: String) -> Self {
        Self {
            statement,
            table_name,
            record_id: None,
            values: HashMap::new(),
            status: UpdateStatus::Continue,
            error: None,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn with_record_id(mut self, record_id: String) -> Self {
        self.record_id = Some(record_id);
        self
    }

    pub fn with_value(mut self, key: String, value: SqlValue) -> Self {
        self.values.insert(key, value);
        self
    }

    pub fn with_values(mut self, values: HashMap<String, SqlValue>) -> Self {
        self.values.extend(values);
        self
    }

    pub fn add_value(&mut self, key: String, value: SqlValue) {
        self.values.insert(key, value);
    }

    /// Mark this row as failed with a handler-supplied message
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status = UpdateStatus::ErrorsOccurred;
        self.error = Some(message.into());
    }
}

/// Event raised after the executor has processed a row operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowUpdatedEvent {
    /// Statement kind that ran
    pub statement: StatementType,
    /// Table name
    pub table_name: String,
    /// Record ID (if available)
    pub record_id: Option<String>,
    /// Column values the row was applied with
    pub values: HashMap<String, SqlValue>,
    /// Rows affected as reported by the executor
    pub rows_affected: u64,
    /// Disposition of this row; `ErrorsOccurred` when execution failed
    pub status: UpdateStatus,
    /// Execution error text, if any
    pub error: Option<String>,
    /// Event timestamp (UTC)
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl RowUpdatedEvent {
    pub fn new(statement: StatementType, table_name: String) -> Self {
        Self {
            statement,
            table_name,
            record_id: None,
            values: HashMap::new(),
            rows_affected: 0,
            status: UpdateStatus::Continue,
            error: None,
            timestamp: chrono::Utc::now(),
        }
    }

    /// Build the after-action event from the before-action one
    pub fn from_updating(event: &RowUpdatingEvent) -> Self {
        Self {
            statement: event.statement,
            table_name: event.table_name.clone(),
            record_id: event.record_id.clone(),
            values: event.values.clone(),
            rows_affected: 0,
            status: UpdateStatus::Continue,
            error: None,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn with_rows_affected(mut self, rows_affected: u64) -> Self {
        self.rows_affected = rows_affected;
        self
    }

    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.status = UpdateStatus::ErrorsOccurred;
        self.error = Some(message.into());
        self
    }
}
