//! Sort direction for columns and indexes

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when an integer does not name a sort order
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid sort order value: {0}")]
pub struct InvalidSortOrder(pub i32);

/// Column or index sort direction
///
/// The numeric values are part of the contract and must survive
/// serialization unchanged: `Unspecified = -1`, `Ascending = 0`,
/// `Descending = 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum SortOrder {
    #[default]
    Unspecified,
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn as_i32(&self) -> i32 {
        match self {
            SortOrder::Unspecified => -1,
            SortOrder::Ascending => 0,
            SortOrder::Descending => 1,
        }
    }

    /// SQL direction keyword; `None` for `Unspecified`, leaving the
    /// engine default in effect
    pub fn as_sql(&self) -> Option<&'static str> {
        match self {
            SortOrder::Unspecified => None,
            SortOrder::Ascending => Some("ASC"),
            SortOrder::Descending => Some("DESC"),
        }
    }
}

impl From<SortOrder> for i32 {
    fn from(order: SortOrder) -> Self {
        order.as_i32()
    }
}

impl TryFrom<i32> for SortOrder {
    type Error = InvalidSortOrder;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(SortOrder::Unspecified),
            0 => Ok(SortOrder::Ascending),
            1 => Ok(SortOrder::Descending),
            other => Err(InvalidSortOrder(other)),
        }
    }
}
