//! # Listing Store Port
//!
//! Port definition for the listing storage collaborator.
//!
//! The comparison engine never talks to a database directly: it consumes
//! the [`ListingStore`] trait, handing it a coarse [`ListingPredicate`]
//! built from the non-geospatial query fields. The store owns pagination
//! and orders candidates by recency as a tiebreak.
//!
//! # Examples
//!
//! ```ignore
//! use wash_compare::infrastructure::persistence::traits::{ListingPredicate, ListingStore};
//!
//! async fn first_page(store: &impl ListingStore) {
//!     let (candidates, total) = store
//!         .query(&ListingPredicate::default(), 0, 10)
//!         .await
//!         .unwrap();
//!     println!("{} of {} candidates", candidates.len(), total);
//! }
//! ```

use crate::domain::entities::listing::ServiceListing;
use crate::domain::value_objects::ListingStatus;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

/// Error type for storage operations.
///
/// The engine does not retry these; retry policy belongs to the
/// collaborator or the caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The backend could not be reached.
    #[error("connection error: {0}")]
    Connection(String),

    /// The query failed at the backend.
    #[error("query error: {0}")]
    Query(String),

    /// The backend did not answer in time.
    #[error("timeout: {0}")]
    Timeout(String),
}

impl StoreError {
    /// Creates a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a query error.
    #[must_use]
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Coarse storage-level filter for listings.
///
/// Carries the non-geospatial fields of a comparison query. All fields are
/// optional; an empty predicate matches everything. [`ListingPredicate::matches`]
/// is the reference semantics any backend must reproduce.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingPredicate {
    /// Case-insensitive substring over name, description, and category.
    pub search: Option<String>,
    /// Exact service type.
    pub service_type: Option<String>,
    /// Exact category.
    pub category: Option<String>,
    /// Exact lifecycle status.
    pub status: Option<ListingStatus>,
    /// Inclusive lower bound on the base price.
    pub min_price: Option<Decimal>,
    /// Inclusive upper bound on the base price.
    pub max_price: Option<Decimal>,
    /// Availability flag.
    pub available: Option<bool>,
    /// Exact provider city.
    pub city: Option<String>,
    /// Exact provider region.
    pub region: Option<String>,
}

impl ListingPredicate {
    /// Returns true if the listing satisfies every set filter.
    #[must_use]
    pub fn matches(&self, listing: &ServiceListing) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let in_name = listing.name().to_lowercase().contains(&needle);
            let in_description = listing
                .description()
                .is_some_and(|d| d.to_lowercase().contains(&needle));
            let in_category = listing.category().to_lowercase().contains(&needle);
            if !in_name && !in_description && !in_category {
                return false;
            }
        }
        if let Some(service_type) = &self.service_type
            && listing.service_type() != service_type
        {
            return false;
        }
        if let Some(category) = &self.category
            && listing.category() != category
        {
            return false;
        }
        if let Some(status) = self.status
            && listing.status() != status
        {
            return false;
        }
        if let Some(min) = self.min_price
            && listing.price().get() < min
        {
            return false;
        }
        if let Some(max) = self.max_price
            && listing.price().get() > max
        {
            return false;
        }
        if let Some(available) = self.available
            && listing.is_available() != available
        {
            return false;
        }
        if let Some(city) = &self.city
            && listing.provider().city() != city
        {
            return false;
        }
        if let Some(region) = &self.region
            && listing.provider().region() != region
        {
            return false;
        }
        true
    }
}

/// Port for the listing storage collaborator.
///
/// Implementations return the page of candidates matching the predicate
/// plus the total match count, ordered newest-first as a tiebreak.
#[async_trait]
pub trait ListingStore: Send + Sync + fmt::Debug {
    /// Returns `(candidates, total)` for the predicate.
    ///
    /// `skip` and `take` paginate at the storage layer; `total` counts all
    /// matches regardless of pagination.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend fails.
    async fn query(
        &self,
        predicate: &ListingPredicate,
        skip: u64,
        take: u64,
    ) -> StoreResult<(Vec<ServiceListing>, u64)>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::listing::{ListingBuilder, ProviderSummary};
    use crate::domain::value_objects::{GeoPoint, Price, ProviderId, Rating};

    fn provider(city: &str, region: &str) -> ProviderSummary {
        ProviderSummary::new(
            ProviderId::new_v4(),
            "Sparkle Auto Spa",
            Rating::new(4.5).unwrap(),
            GeoPoint::new(41.0082, 28.9784).unwrap(),
            city,
            region,
        )
    }

    fn listing(name: &str, price: f64) -> ServiceListing {
        ListingBuilder::new(
            name,
            "exterior",
            "standard",
            Price::new(price).unwrap(),
            provider("Istanbul", "Marmara"),
        )
        .description("Foam wash and dry")
        .build()
        .unwrap()
    }

    mod store_error {
        use super::*;

        #[test]
        fn messages() {
            assert!(
                StoreError::connection("refused")
                    .to_string()
                    .contains("connection")
            );
            assert!(StoreError::query("bad plan").to_string().contains("query"));
            assert!(StoreError::timeout("5s").to_string().contains("timeout"));
        }
    }

    mod predicate {
        use super::*;

        #[test]
        fn empty_matches_everything() {
            let predicate = ListingPredicate::default();
            assert!(predicate.matches(&listing("Exterior Wash", 150.0)));
        }

        #[test]
        fn search_is_case_insensitive() {
            let predicate = ListingPredicate {
                search: Some("EXTERIOR".to_string()),
                ..Default::default()
            };
            assert!(predicate.matches(&listing("Exterior Wash", 150.0)));
        }

        #[test]
        fn search_covers_description_and_category() {
            let by_description = ListingPredicate {
                search: Some("foam".to_string()),
                ..Default::default()
            };
            assert!(by_description.matches(&listing("Quick Wash", 100.0)));

            let by_category = ListingPredicate {
                search: Some("standard".to_string()),
                ..Default::default()
            };
            assert!(by_category.matches(&listing("Quick Wash", 100.0)));

            let no_match = ListingPredicate {
                search: Some("ceramic".to_string()),
                ..Default::default()
            };
            assert!(!no_match.matches(&listing("Quick Wash", 100.0)));
        }

        #[test]
        fn exact_filters() {
            let subject = listing("Exterior Wash", 150.0);

            let wrong_type = ListingPredicate {
                service_type: Some("interior".to_string()),
                ..Default::default()
            };
            assert!(!wrong_type.matches(&subject));

            let wrong_city = ListingPredicate {
                city: Some("Ankara".to_string()),
                ..Default::default()
            };
            assert!(!wrong_city.matches(&subject));

            let right_region = ListingPredicate {
                region: Some("Marmara".to_string()),
                ..Default::default()
            };
            assert!(right_region.matches(&subject));
        }

        #[test]
        fn status_filter() {
            let predicate = ListingPredicate {
                status: Some(ListingStatus::Active),
                ..Default::default()
            };
            assert!(predicate.matches(&listing("Exterior Wash", 150.0)));

            let inactive_only = ListingPredicate {
                status: Some(ListingStatus::Inactive),
                ..Default::default()
            };
            assert!(!inactive_only.matches(&listing("Exterior Wash", 150.0)));
        }

        #[test]
        fn price_bounds_are_inclusive() {
            let subject = listing("Exterior Wash", 150.0);

            let exact = ListingPredicate {
                min_price: Some(Decimal::new(150, 0)),
                max_price: Some(Decimal::new(150, 0)),
                ..Default::default()
            };
            assert!(exact.matches(&subject));

            let below = ListingPredicate {
                max_price: Some(Decimal::new(149, 0)),
                ..Default::default()
            };
            assert!(!below.matches(&subject));

            let above = ListingPredicate {
                min_price: Some(Decimal::new(151, 0)),
                ..Default::default()
            };
            assert!(!above.matches(&subject));
        }

        #[test]
        fn availability_filter() {
            let predicate = ListingPredicate {
                available: Some(false),
                ..Default::default()
            };
            assert!(!predicate.matches(&listing("Exterior Wash", 150.0)));
        }
    }
}
