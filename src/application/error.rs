//! # Application Errors
//!
//! Error types for comparison requests.
//!
//! The taxonomy is small and terminal: nothing here is retried by the
//! engine and no candidate is silently dropped on error.
//!
//! # Error Hierarchy
//!
//! ```text
//! CompareError
//! ├── Validation(String)          - Malformed query, rejected before any I/O
//! ├── StorageUnavailable(StoreError) - The listing store failed
//! └── DataIntegrity(String)       - A candidate violates the storage contract
//! ```
//!
//! # Examples
//!
//! ```
//! use wash_compare::application::error::CompareError;
//!
//! let err = CompareError::validation("limit must be between 1 and 100");
//! assert!(err.is_validation());
//! ```

use crate::infrastructure::persistence::traits::StoreError;
use thiserror::Error;

/// Error type for the comparison engine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompareError {
    /// The query is malformed or out of range.
    ///
    /// Raised before the store or the cache is touched.
    #[error("validation error: {0}")]
    Validation(String),

    /// The listing store failed.
    ///
    /// Reported as a transient failure; retry policy belongs to the caller.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] StoreError),

    /// A candidate violates an assumed storage invariant.
    ///
    /// Aborts the whole request: a partially-degraded ranking would
    /// mislead users comparing prices.
    #[error("data integrity violation: {0}")]
    DataIntegrity(String),
}

impl CompareError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a data integrity error.
    #[must_use]
    pub fn data_integrity(message: impl Into<String>) -> Self {
        Self::DataIntegrity(message.into())
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is a storage failure.
    #[must_use]
    pub fn is_storage_unavailable(&self) -> bool {
        matches!(self, Self::StorageUnavailable(_))
    }

    /// Returns true if this is a data integrity violation.
    #[must_use]
    pub fn is_data_integrity(&self) -> bool {
        matches!(self, Self::DataIntegrity(_))
    }
}

/// Result type for comparison operations.
pub type CompareResult<T> = Result<T, CompareError>;
