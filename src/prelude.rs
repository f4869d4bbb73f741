//! Convenience re-exports for common Rowhaus usage
//!
//! This prelude module re-exports the most commonly used items from the Rowhaus
//! ecosystem, making it easier to import everything you need with a single use
//! statement.
//!
//! # Example
//!
//! ```rust
//! use rowhaus::prelude::*;
//!
//! // Now you have access to all the common Rowhaus types and traits
//! ```

// Core Rowhaus components
pub use crate::core::RowHaus;
pub use crate::errors::RowHausError;

// Re-export centralized config
pub use config::{AdapterConfig, AppConfig, DatabaseConfig, EventConfig};

// Re-export event system for row-update notifications
pub use event_system::prelude::*;

// Re-export row-adapter pipeline and query building
pub use row_adapter::prelude::*;

// Common external dependencies
pub use anyhow;
pub use async_trait;
pub use tokio;
