//! # Ranked Listing
//!
//! A listing enriched with derived comparison fields.
//!
//! [`RankedListing`] is computed per request and never persisted: the raw
//! [`ServiceListing`] plus effective price, discount percentage, distance
//! from the query origin, and the composite score.

use crate::domain::entities::listing::ServiceListing;
use crate::domain::value_objects::Price;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A listing with its derived ranking fields.
///
/// # Examples
///
/// ```
/// use wash_compare::domain::entities::listing::{ListingBuilder, ProviderSummary};
/// use wash_compare::domain::entities::ranked_listing::RankedListing;
/// use wash_compare::domain::value_objects::{GeoPoint, Price, ProviderId, Rating};
///
/// let provider = ProviderSummary::new(
///     ProviderId::new_v4(),
///     "Sparkle Auto Spa",
///     Rating::new(4.5).unwrap(),
///     GeoPoint::new(41.0, 29.0).unwrap(),
///     "Istanbul",
///     "Marmara",
/// );
/// let listing = ListingBuilder::new(
///     "Exterior Wash", "exterior", "standard",
///     Price::new(150.0).unwrap(), provider,
/// ).build().unwrap();
///
/// let ranked = RankedListing::new(listing, Price::new(150.0).unwrap(), None, None);
/// assert!(ranked.discount_percent.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RankedListing {
    /// The underlying listing.
    #[serde(flatten)]
    pub listing: ServiceListing,
    /// The price actually charged: discounted when present, base otherwise.
    pub effective_price: Price,
    /// Rounded discount percentage, absent when no discount applies.
    pub discount_percent: Option<i64>,
    /// Distance from the query origin in kilometers, absent without an origin.
    pub distance_km: Option<f64>,
    /// Composite weighted score.
    pub score: f64,
}

impl RankedListing {
    /// Creates a ranked listing with a zero score.
    ///
    /// The orchestrator assigns the score after normalization.
    #[must_use]
    pub fn new(
        listing: ServiceListing,
        effective_price: Price,
        discount_percent: Option<i64>,
        distance_km: Option<f64>,
    ) -> Self {
        Self {
            listing,
            effective_price,
            discount_percent,
            distance_km,
            score: 0.0,
        }
    }

    /// Returns true if the listing lies within `max_km` of the origin.
    ///
    /// Listings without a computed distance are never excluded here.
    #[must_use]
    pub fn is_within_radius(&self, max_km: f64) -> bool {
        self.distance_km.is_none_or(|d| d <= max_km)
    }
}

impl fmt::Display for RankedListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RankedListing('{}' effective={} score={:.4})",
            self.listing.name(),
            self.effective_price,
            self.score
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::listing::{ListingBuilder, ProviderSummary};
    use crate::domain::value_objects::{GeoPoint, ProviderId, Rating};

    fn test_listing() -> ServiceListing {
        let provider = ProviderSummary::new(
            ProviderId::new_v4(),
            "Sparkle Auto Spa",
            Rating::new(4.5).unwrap(),
            GeoPoint::new(41.0082, 28.9784).unwrap(),
            "Istanbul",
            "Marmara",
        );
        ListingBuilder::new(
            "Exterior Wash",
            "exterior",
            "standard",
            Price::new(150.0).unwrap(),
            provider,
        )
        .build()
        .unwrap()
    }

    #[test]
    fn new_starts_with_zero_score() {
        let ranked = RankedListing::new(test_listing(), Price::new(150.0).unwrap(), None, None);
        assert_eq!(ranked.score, 0.0);
    }

    #[test]
    fn within_radius() {
        let mut ranked =
            RankedListing::new(test_listing(), Price::new(150.0).unwrap(), None, Some(8.0));
        assert!(ranked.is_within_radius(10.0));
        assert!(ranked.is_within_radius(8.0));
        assert!(!ranked.is_within_radius(7.9));

        ranked.distance_km = None;
        assert!(ranked.is_within_radius(0.1));
    }

    #[test]
    fn serde_flattens_listing_fields() {
        let ranked = RankedListing::new(
            test_listing(),
            Price::new(120.0).unwrap(),
            Some(20),
            Some(2.5),
        );
        let json = serde_json::to_value(&ranked).unwrap();

        // Listing fields sit at the top level next to the derived ones.
        assert!(json.get("name").is_some());
        assert!(json.get("effectivePrice").is_some());
        assert_eq!(json.get("discountPercent").and_then(|v| v.as_i64()), Some(20));
        assert!(json.get("listing").is_none());
    }

    #[test]
    fn display_includes_score() {
        let mut ranked = RankedListing::new(test_listing(), Price::new(150.0).unwrap(), None, None);
        ranked.score = 0.1234;
        assert!(ranked.to_string().contains("0.1234"));
    }
}
