//! Query builder utilities
//!
//! This module provides SQL clause construction utilities.

pub mod builder;
pub mod filter;
pub mod ordering;
pub mod sql_generation;

#[cfg(test)]
mod tests;

// Re-export main types
pub use builder::QueryBuilder;
pub use filter::{QueryFilter, QueryOperator};
pub use ordering::{InvalidSortOrder, SortOrder};
