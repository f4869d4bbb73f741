//! Row Adapter - update coordination layer for Rowhaus
//!
//! This crate provides the row-update pipeline that raises before/after
//! notifications around each row operation, the executor seam the
//! application implements, and the query clause builder.

pub mod adapter;
pub mod errors;
pub mod executor;
pub mod prelude;
pub mod query_builder;
pub mod row_change;

pub use adapter::{RowAdapter, RowError, UpdateOutcome};
pub use errors::AdapterError;
pub use executor::RowExecutor;
pub use query_builder::{QueryBuilder, QueryFilter, QueryOperator, SortOrder};
pub use row_change::RowChange;
