//! Error types for the core crate.

use thiserror::Error;

/// Errors that can occur in core type handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Role name not in the fixed principal set.
    #[error("unknown role: {0}")]
    UnknownRole(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
