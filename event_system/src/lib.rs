//! Event system for row-update notifications
//!
//! This crate provides the before/after row-update event aggregates,
//! the handler type contracts, and the dispatcher that raises events
//! to registered subscribers.

pub mod event;
pub mod manager;
pub mod prelude;
pub mod types;

pub use event::{RowUpdatedEvent, RowUpdatingEvent, StatementType, UpdateStatus};
pub use manager::EventDispatcher;
pub use types::{
    serialize_to_payload, serialize_to_record, InvalidUpdateStatus, RowUpdatedHandler,
    RowUpdatingHandler, Sender, SqlValue, ToSqlPayload,
};
