//! Error types for the domain layer
//!
//! Core errors are contract violations: a caller asked for something that
//! cannot exist (an index past the end of the catalog, a book without a
//! title). Callers at the session boundary turn them into no-ops.

use thiserror::Error;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised by domain value constructors and catalog operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Catalog index outside `0..len`
    #[error("Catalog index {index} out of range (catalog has {len} folders)")]
    IndexOutOfRange { index: usize, len: usize },

    /// A value failed validation
    #[error("Invalid {entity}: {reason}")]
    Invalid { entity: &'static str, reason: String },
}

impl CoreError {
    /// Creates an index error
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Creates a validation error for the named entity
    pub fn invalid(entity: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            entity,
            reason: reason.into(),
        }
    }
}
