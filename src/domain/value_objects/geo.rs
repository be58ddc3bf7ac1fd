//! # Geographic Value Objects
//!
//! Validated coordinates and great-circle distance.
//!
//! This module provides the [`GeoPoint`] type and the haversine
//! [`GeoPoint::distance_km`] computation used for radius filtering and
//! distance-based ranking.
//!
//! # Examples
//!
//! ```
//! use wash_compare::domain::value_objects::geo::GeoPoint;
//!
//! let taksim = GeoPoint::new(41.0370, 28.9850).unwrap();
//! let kadikoy = GeoPoint::new(40.9903, 29.0271).unwrap();
//!
//! let d = taksim.distance_km(&kadikoy);
//! assert!(d > 5.0 && d < 8.0);
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mean Earth radius in kilometers, as used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the Earth's surface.
///
/// # Invariants
///
/// - Latitude in `-90..=90` degrees
/// - Longitude in `-180..=180` degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GeoPoint {
    /// Latitude in degrees.
    latitude: f64,
    /// Longitude in degrees.
    longitude: f64,
}

impl GeoPoint {
    /// Creates a point from latitude and longitude in degrees.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if either component is
    /// not finite or outside its valid range.
    pub fn new(latitude: f64, longitude: f64) -> DomainResult<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(DomainError::invalid_coordinates(format!(
                "latitude {latitude} outside -90..=90"
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::invalid_coordinates(format!(
                "longitude {longitude} outside -180..=180"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Returns the latitude in degrees.
    #[inline]
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in degrees.
    #[inline]
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Computes the great-circle distance to another point in kilometers.
    ///
    /// Haversine formula over a sphere of radius [`EARTH_RADIUS_KM`].
    /// Symmetric, and exactly zero for identical points.
    ///
    /// # Examples
    ///
    /// ```
    /// use wash_compare::domain::value_objects::geo::GeoPoint;
    ///
    /// let p = GeoPoint::new(41.0, 29.0).unwrap();
    /// assert_eq!(p.distance_km(&p), 0.0);
    /// ```
    #[must_use]
    pub fn distance_km(&self, other: &Self) -> f64 {
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();

        // Rounding can push `a` past 1, which would NaN the sqrt below.
        let a = ((d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2))
        .clamp(0.0, 1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    mod construction {
        use super::*;

        #[test]
        fn valid_coordinates() {
            assert!(GeoPoint::new(41.0082, 28.9784).is_ok());
            assert!(GeoPoint::new(-90.0, 180.0).is_ok());
            assert!(GeoPoint::new(90.0, -180.0).is_ok());
        }

        #[test]
        fn latitude_out_of_range() {
            assert!(matches!(
                GeoPoint::new(90.1, 0.0),
                Err(DomainError::InvalidCoordinates(_))
            ));
            assert!(GeoPoint::new(-91.0, 0.0).is_err());
        }

        #[test]
        fn longitude_out_of_range() {
            assert!(GeoPoint::new(0.0, 180.5).is_err());
            assert!(GeoPoint::new(0.0, -181.0).is_err());
        }

        #[test]
        fn non_finite_rejected() {
            assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
            assert!(GeoPoint::new(0.0, f64::INFINITY).is_err());
        }
    }

    mod distance {
        use super::*;

        #[test]
        fn identical_points_are_zero() {
            let p = GeoPoint::new(41.0082, 28.9784).unwrap();
            assert_eq!(p.distance_km(&p), 0.0);
        }

        #[test]
        fn known_city_pair() {
            // Istanbul <-> Ankara, roughly 350 km apart.
            let istanbul = GeoPoint::new(41.0082, 28.9784).unwrap();
            let ankara = GeoPoint::new(39.9334, 32.8597).unwrap();

            let d = istanbul.distance_km(&ankara);
            assert!(d > 340.0 && d < 360.0, "got {d}");
        }

        #[test]
        fn one_degree_of_latitude() {
            let a = GeoPoint::new(0.0, 0.0).unwrap();
            let b = GeoPoint::new(1.0, 0.0).unwrap();

            // One degree of latitude is ~111.19 km on a 6371 km sphere.
            let d = a.distance_km(&b);
            assert!((d - 111.19).abs() < 0.05, "got {d}");
        }

        #[test]
        fn antipodal_points() {
            let a = GeoPoint::new(0.0, 0.0).unwrap();
            let b = GeoPoint::new(0.0, 180.0).unwrap();

            // Half the circumference: pi * R.
            let d = a.distance_km(&b);
            assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
        }
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(
            lat1 in -90.0f64..90.0,
            lon1 in -180.0f64..180.0,
            lat2 in -90.0f64..90.0,
            lon2 in -180.0f64..180.0,
        ) {
            let p = GeoPoint::new(lat1, lon1).unwrap();
            let q = GeoPoint::new(lat2, lon2).unwrap();
            prop_assert!((p.distance_km(&q) - q.distance_km(&p)).abs() < 1e-9);
        }

        #[test]
        fn distance_to_self_is_zero(
            lat in -90.0f64..90.0,
            lon in -180.0f64..180.0,
        ) {
            let p = GeoPoint::new(lat, lon).unwrap();
            prop_assert_eq!(p.distance_km(&p), 0.0);
        }

        #[test]
        fn distance_is_non_negative_and_bounded(
            lat1 in -90.0f64..90.0,
            lon1 in -180.0f64..180.0,
            lat2 in -90.0f64..90.0,
            lon2 in -180.0f64..180.0,
        ) {
            let p = GeoPoint::new(lat1, lon1).unwrap();
            let q = GeoPoint::new(lat2, lon2).unwrap();
            let d = p.distance_km(&q);
            // No two points are farther apart than half the circumference.
            prop_assert!(d >= 0.0);
            prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_KM + 1e-9);
        }
    }
}
