//! # Normalizer
//!
//! Derives the comparable fields for each candidate listing.
//!
//! For every [`ServiceListing`] the normalizer computes the effective
//! price, the rounded discount percentage, and, when the query supplied
//! an origin, the haversine distance to the provider. The result is a
//! [`RankedListing`] awaiting its composite score.
//!
//! # Examples
//!
//! ```
//! use wash_compare::application::services::normalizer::Normalizer;
//! use wash_compare::domain::entities::listing::{ListingBuilder, ProviderSummary};
//! use wash_compare::domain::value_objects::{GeoPoint, Price, ProviderId, Rating};
//!
//! let provider = ProviderSummary::new(
//!     ProviderId::new_v4(),
//!     "Sparkle Auto Spa",
//!     Rating::new(4.5).unwrap(),
//!     GeoPoint::new(41.0, 29.0).unwrap(),
//!     "Istanbul",
//!     "Marmara",
//! );
//! let listing = ListingBuilder::new(
//!     "Exterior Wash", "exterior", "standard",
//!     Price::new(10000.0).unwrap(), provider,
//! )
//! .discounted_price(Price::new(8000.0).unwrap())
//! .build()
//! .unwrap();
//!
//! let ranked = Normalizer::new().normalize(&listing, None).unwrap();
//! assert_eq!(ranked.effective_price, Price::new(8000.0).unwrap());
//! assert_eq!(ranked.discount_percent, Some(20));
//! ```

use crate::application::error::{CompareError, CompareResult};
use crate::domain::entities::listing::ServiceListing;
use crate::domain::entities::ranked_listing::RankedListing;
use crate::domain::value_objects::GeoPoint;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Derives effective price, discount percent, and distance per candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer;

impl Normalizer {
    /// Creates a normalizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Normalizes one candidate.
    ///
    /// Prices coming out of storage are re-checked against the positivity
    /// contract here so the division below can never produce NaN.
    ///
    /// # Errors
    ///
    /// Returns `CompareError::DataIntegrity` if the candidate carries a
    /// non-positive base or discounted price.
    pub fn normalize(
        &self,
        listing: &ServiceListing,
        origin: Option<&GeoPoint>,
    ) -> CompareResult<RankedListing> {
        let base = listing.price();
        if !base.is_strictly_positive() {
            return Err(CompareError::data_integrity(format!(
                "listing {} has non-positive price {}",
                listing.id(),
                base
            )));
        }
        if let Some(discounted) = listing.discounted_price()
            && !discounted.is_strictly_positive()
        {
            return Err(CompareError::data_integrity(format!(
                "listing {} has non-positive discounted price {}",
                listing.id(),
                discounted
            )));
        }

        let effective_price = listing.discounted_price().unwrap_or(base);
        let discount_percent = listing
            .discounted_price()
            .map(|d| discount_percent(base.get(), d.get()))
            .transpose()?;
        let distance_km = origin.map(|o| o.distance_km(listing.provider().location()));

        Ok(RankedListing::new(
            listing.clone(),
            effective_price,
            discount_percent,
            distance_km,
        ))
    }
}

/// Computes `round((base - discounted) / base * 100)`, half away from zero.
///
/// The caller guarantees `base > 0`.
fn discount_percent(base: Decimal, discounted: Decimal) -> CompareResult<i64> {
    let pct = (base - discounted) * Decimal::ONE_HUNDRED / base;
    pct.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(|| {
            CompareError::data_integrity(format!("discount percent {pct} is not representable"))
        })
}
