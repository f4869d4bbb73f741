//! Error types for the Rowhaus crate
//!
//! This module contains all error types that can be returned by Rowhaus operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RowHausError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Adapter not found: {0}")]
    AdapterNotFound(String),

    #[error("Adapter already registered: {0}")]
    AdapterAlreadyRegistered(String),
}
