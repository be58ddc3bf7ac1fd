//! # Domain Errors
//!
//! Error types for domain invariant violations.
//!
//! These errors are raised when value objects or entities are constructed
//! with values that violate their invariants (negative prices, out-of-range
//! ratings, malformed coordinates).
//!
//! # Examples
//!
//! ```
//! use wash_compare::domain::errors::DomainError;
//!
//! let err = DomainError::invalid_price("price must be positive");
//! assert!(err.to_string().contains("positive"));
//! ```

use thiserror::Error;

/// Domain layer error.
///
/// Represents a violated invariant on a value object or entity.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    /// Price is not a positive, finite amount.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// Rating is outside the 0..=5 range.
    #[error("invalid rating: {0}")]
    InvalidRating(String),

    /// Latitude/longitude outside the valid ranges.
    #[error("invalid coordinates: {0}")]
    InvalidCoordinates(String),

    /// Service duration is not a positive number of minutes.
    #[error("invalid duration: {0}")]
    InvalidDuration(String),

    /// A listing field violates its invariant.
    #[error("invalid listing: {0}")]
    InvalidListing(String),
}

impl DomainError {
    /// Creates an invalid price error.
    #[must_use]
    pub fn invalid_price(message: impl Into<String>) -> Self {
        Self::InvalidPrice(message.into())
    }

    /// Creates an invalid rating error.
    #[must_use]
    pub fn invalid_rating(message: impl Into<String>) -> Self {
        Self::InvalidRating(message.into())
    }

    /// Creates an invalid coordinates error.
    #[must_use]
    pub fn invalid_coordinates(message: impl Into<String>) -> Self {
        Self::InvalidCoordinates(message.into())
    }

    /// Creates an invalid duration error.
    #[must_use]
    pub fn invalid_duration(message: impl Into<String>) -> Self {
        Self::InvalidDuration(message.into())
    }

    /// Creates an invalid listing error.
    #[must_use]
    pub fn invalid_listing(message: impl Into<String>) -> Self {
        Self::InvalidListing(message.into())
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
