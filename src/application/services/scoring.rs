//! # Scoring Engine
//!
//! Combines normalized fields into a single composite score.
//!
//! Four sub-scores are blended by a weighted sum:
//!
//! | Sub-score | Shape                         | Weight |
//! |-----------|-------------------------------|--------|
//! | price     | `1 / (1 + effectivePrice)`    | 0.45   |
//! | distance  | `1 / (1 + km)` (0.5 default)  | 0.20   |
//! | rating    | `rating / 5`                  | 0.25   |
//! | discount  | `(pct ?? 0) / 100`            | 0.10   |
//!
//! The composite stays a plain weighted sum; the price term approaches
//! but never reaches 1, so the result is not renormalized. Changing the
//! weights or sub-score shapes changes ranking outcomes observable by
//! callers, so the defaults are part of the contract.

use crate::domain::entities::ranked_listing::RankedListing;

/// Weights for the four scoring dimensions.
///
/// The defaults sum to 1.0 and define the marketplace's ranking contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Weight of the price sub-score.
    pub price: f64,
    /// Weight of the distance sub-score.
    pub distance: f64,
    /// Weight of the rating sub-score.
    pub rating: f64,
    /// Weight of the discount sub-score.
    pub discount: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            price: 0.45,
            distance: 0.20,
            rating: 0.25,
            discount: 0.10,
        }
    }
}

impl ScoreWeights {
    /// Returns the sum of all weights.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.price + self.distance + self.rating + self.discount
    }
}

/// Distance sub-score used when the query carries no origin.
const NEUTRAL_DISTANCE_SCORE: f64 = 0.5;

/// Computes the composite score for ranked listings.
///
/// # Examples
///
/// ```
/// use wash_compare::application::services::scoring::ScoringEngine;
///
/// let engine = ScoringEngine::default();
/// assert!((engine.weights().total() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine {
    weights: ScoreWeights,
}

impl ScoringEngine {
    /// Creates an engine with custom weights.
    #[must_use]
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// Returns the configured weights.
    #[inline]
    #[must_use]
    pub const fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Computes the composite score of a normalized listing.
    ///
    /// Monotonically non-increasing in effective price and distance,
    /// non-decreasing in rating and discount.
    #[must_use]
    pub fn score(&self, ranked: &RankedListing) -> f64 {
        let price_score = 1.0 / (1.0 + ranked.effective_price.to_f64());
        let distance_score = ranked
            .distance_km
            .map_or(NEUTRAL_DISTANCE_SCORE, |km| 1.0 / (1.0 + km));
        let rating_score = ranked.listing.provider().rating().normalized();
        let discount_score = ranked.discount_percent.unwrap_or(0) as f64 / 100.0;

        self.weights.price * price_score
            + self.weights.distance * distance_score
            + self.weights.rating * rating_score
            + self.weights.discount * discount_score
    }
}
