//! # Price Value Object
//!
//! Positive decimal money amount.
//!
//! This module provides the [`Price`] type wrapping a [`Decimal`] with a
//! positivity invariant. Constructors reject zero, negative, and non-finite
//! values; deserialization is transparent, so records loaded from storage
//! are re-checked against the invariant by the normalization step.
//!
//! # Examples
//!
//! ```
//! use wash_compare::domain::value_objects::price::Price;
//!
//! let base = Price::new(150.0).unwrap();
//! let discounted = Price::new(120.0).unwrap();
//!
//! assert!(discounted < base);
//! assert!(Price::new(0.0).is_err());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A positive monetary amount.
///
/// # Invariants
///
/// - Strictly positive when constructed through [`Price::new`] or
///   [`Price::from_decimal`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Creates a price from an `f64` amount.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` if the amount is not finite or
    /// not strictly positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use wash_compare::domain::value_objects::price::Price;
    ///
    /// assert!(Price::new(99.5).is_ok());
    /// assert!(Price::new(-1.0).is_err());
    /// assert!(Price::new(f64::NAN).is_err());
    /// ```
    pub fn new(amount: f64) -> DomainResult<Self> {
        let decimal = Decimal::from_f64(amount)
            .ok_or_else(|| DomainError::invalid_price(format!("{amount} is not representable")))?;
        Self::from_decimal(decimal)
    }

    /// Creates a price from a [`Decimal`] amount.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` if the amount is not strictly positive.
    pub fn from_decimal(amount: Decimal) -> DomainResult<Self> {
        if amount <= Decimal::ZERO {
            return Err(DomainError::invalid_price(format!(
                "{amount} is not strictly positive"
            )));
        }
        Ok(Self(amount))
    }

    /// Returns the underlying decimal amount.
    #[inline]
    #[must_use]
    pub const fn get(&self) -> Decimal {
        self.0
    }

    /// Returns the amount as an `f64`, for scoring arithmetic.
    ///
    /// Amounts outside the `f64` range collapse to `0.0`.
    #[inline]
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(0.0)
    }

    /// Returns true if the amount is strictly positive.
    ///
    /// Always true for validated constructions; deserialized values may
    /// violate the invariant and are re-checked where it matters.
    #[inline]
    #[must_use]
    pub fn is_strictly_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
