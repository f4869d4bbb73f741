//! # Rowhaus
//!
//! A provider-independent Rust data-adapter toolkit with row-update events,
//! handler-controlled update pipelines, and sort-order aware query building.
//!
//! Rowhaus never opens a database connection: row application happens behind
//! the [`RowExecutor`](row_adapter::RowExecutor) trait the application
//! implements over its own stack.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rowhaus::prelude::*;
//!
//! struct MyExecutor;
//!
//! #[async_trait]
//! impl RowExecutor for MyExecutor {
//!     async fn apply(&self, table: &str, change: &RowChange) -> anyhow::Result<u64> {
//!         // Run the statement with your own connection stack.
//!         let _ = (table, change);
//!         Ok(1)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut rowhaus = RowHaus::new();
//!
//!     rowhaus.dispatcher().on_row_updating(|sender, event| {
//!         println!("about to {} on {}", event.statement.as_str(), sender.table_name);
//!     });
//!
//!     let users = rowhaus.build_adapter("users");
//!     rowhaus.register_adapter("users".to_string(), users)?;
//!
//!     let adapter = rowhaus.get_adapter("users")?;
//!     let outcome = adapter
//!         .update(&MyExecutor, vec![RowChange::insert().with_value("name", "Ada")])
//!         .await?;
//!
//!     println!("applied {} rows", outcome.applied_rows);
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use crate::core::RowHaus;
pub use crate::errors::RowHausError;

// Re-export centralized config
pub use config::{AdapterConfig, AppConfig, DatabaseConfig, EventConfig};

// Re-export internal crates used in the public API
pub use event_system;
pub use row_adapter;
pub use sql_value;

// Re-export external dependencies used in public API
pub use async_trait;
