//! Type definitions for the event system
//!
//! This module contains the handler type contracts and the sender
//! identity passed to every notification.

use crate::event::{RowUpdatedEvent, RowUpdatingEvent};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

// Re-export from sql-value for convenience
pub use sql_value::{serialize_to_payload, serialize_to_record, SqlValue, ToSqlPayload};

pub use crate::event::InvalidUpdateStatus;

/// Opaque identity of the adapter that raised a notification
///
/// Handlers receive this by reference; it promises nothing about the
/// raiser beyond a stable id and the table it manages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sender {
    pub adapter_id: Uuid,
    pub table_name: String,
}

impl Sender {
    pub fn new(table_name: String) -> Self {
        Self {
            adapter_id: Uuid::new_v4(),
            table_name,
        }
    }
}

/// Handler invoked before a row operation runs
///
/// Takes exactly (sender, event-args) and returns nothing; the event is
/// mutable so the handler can rewrite values or set the status.
pub type RowUpdatingHandler =
    Arc<dyn Fn(&Sender, &mut RowUpdatingEvent) + Send + Sync>;

/// Handler invoked after a row operation has run
///
/// The event is mutable so the handler can override the status, e.g.
/// to swallow a failure or cancel the remainder of the batch.
pub type RowUpdatedHandler =
    Arc<dyn Fn(&Sender, &mut RowUpdatedEvent) + Send + Sync>;
