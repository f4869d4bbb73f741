//! Executor seam
//!
//! Rowhaus never executes SQL itself; the application implements this
//! trait over its own connection stack and the pipeline drives it.

use crate::row_change::RowChange;
use async_trait::async_trait;

/// Applies a single row change against the backing store
#[async_trait]
pub trait RowExecutor: Send + Sync {
    /// Apply `change` to `table`, returning the number of rows affected
    async fn apply(&self, table: &str, change: &RowChange) -> anyhow::Result<u64>;
}
