//! Convenience re-exports for common row-adapter usage

// Core pipeline types
pub use crate::adapter::{RowAdapter, RowError, UpdateOutcome};
pub use crate::errors::AdapterError;
pub use crate::executor::RowExecutor;
pub use crate::row_change::RowChange;

// Query building
pub use crate::query_builder::{QueryBuilder, QueryFilter, QueryOperator, SortOrder};

// Common external dependencies
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use uuid::Uuid;
