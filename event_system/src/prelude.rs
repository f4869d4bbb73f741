//! Convenience re-exports for common event-system usage

// Core event system components
pub use crate::event::{RowUpdatedEvent, RowUpdatingEvent, StatementType, UpdateStatus};
pub use crate::manager::EventDispatcher;
pub use crate::types::{
    serialize_to_payload, serialize_to_record, RowUpdatedHandler, RowUpdatingHandler, Sender,
    SqlValue, ToSqlPayload,
};

// Common external dependencies
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json;
pub use tokio;
