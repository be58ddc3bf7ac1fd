//! # Rating Value Object
//!
//! Provider rating on the 0..=5 scale.
//!
//! # Examples
//!
//! ```
//! use wash_compare::domain::value_objects::rating::Rating;
//!
//! let rating = Rating::new(4.5).unwrap();
//! assert!((rating.normalized() - 0.9).abs() < 1e-12);
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum rating value on the marketplace scale.
pub const MAX_RATING: f64 = 5.0;

/// A provider rating between 0 and 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Rating(f64);

impl Rating {
    /// Creates a rating.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRating` if the value is not finite or
    /// falls outside `0..=5`.
    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() || !(0.0..=MAX_RATING).contains(&value) {
            return Err(DomainError::invalid_rating(format!(
                "{value} is outside 0..={MAX_RATING}"
            )));
        }
        Ok(Self(value))
    }

    /// Returns the raw rating value.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Returns the rating scaled to `0..=1` for score blending.
    #[inline]
    #[must_use]
    pub fn normalized(&self) -> f64 {
        self.0 / MAX_RATING
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert!(Rating::new(0.0).is_ok());
        assert!(Rating::new(5.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(
            Rating::new(5.1),
            Err(DomainError::InvalidRating(_))
        ));
        assert!(Rating::new(-0.1).is_err());
    }

    #[test]
    fn rejects_non_finite() {
        assert!(Rating::new(f64::NAN).is_err());
        assert!(Rating::new(f64::INFINITY).is_err());
    }

    #[test]
    fn normalized_scales_to_unit_interval() {
        let rating = Rating::new(4.0).unwrap();
        assert!((rating.normalized() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn display_uses_one_decimal() {
        assert_eq!(Rating::new(4.25).unwrap().to_string(), "4.2");
        assert_eq!(Rating::new(5.0).unwrap().to_string(), "5.0");
    }

    #[test]
    fn serde_roundtrip() {
        let rating = Rating::new(3.5).unwrap();
        let json = serde_json::to_string(&rating).unwrap();
        let back: Rating = serde_json::from_str(&json).unwrap();
        assert_eq!(rating, back);
    }
}
