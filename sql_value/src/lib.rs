//! Runtime SQL value representation
//!
//! This crate provides the shared column-value enum and serialization
//! utilities used by the rowhaus event and adapter layers.

pub mod serialize;
pub mod types;

pub use serialize::{serialize_to_payload, serialize_to_record};
pub use types::{SqlValue, ToSqlPayload};
