//! # wash-compare
//!
//! Multi-criteria comparison and ranking engine for car-wash marketplace
//! listings.
//!
//! Given a pool of service listings, the engine applies geospatial
//! filtering, normalizes heterogeneous metrics (price, distance, rating,
//! discount) onto a common scale, computes a weighted composite score,
//! sorts and paginates the result, and memoizes the computed response
//! behind a time-bounded cache.
//!
//! ## Pipeline
//!
//! ```text
//! validate -> cache lookup -> store query -> normalize -> score
//!          -> radius filter -> sort -> envelope -> cache put
//! ```
//!
//! Storage and the result cache are injected ports
//! ([`infrastructure::persistence::ListingStore`],
//! [`infrastructure::cache::ResultCache`]); the engine performs no
//! retries and owns no persistence.
//!
//! ## Examples
//!
//! ```
//! use std::sync::Arc;
//! use wash_compare::application::query::ComparisonQuery;
//! use wash_compare::application::services::comparison::ComparisonEngine;
//! use wash_compare::domain::entities::listing::{ListingBuilder, ProviderSummary};
//! use wash_compare::domain::value_objects::{GeoPoint, Price, ProviderId, Rating, SortKey};
//! use wash_compare::infrastructure::cache::InMemoryResultCache;
//! use wash_compare::infrastructure::persistence::in_memory::InMemoryListingStore;
//!
//! let store = Arc::new(InMemoryListingStore::new());
//! let engine = ComparisonEngine::with_defaults(
//!     store.clone(),
//!     Arc::new(InMemoryResultCache::new()),
//! );
//!
//! let provider = ProviderSummary::new(
//!     ProviderId::new_v4(),
//!     "Sparkle Auto Spa",
//!     Rating::new(4.5).unwrap(),
//!     GeoPoint::new(41.0082, 28.9784).unwrap(),
//!     "Istanbul",
//!     "Marmara",
//! );
//! let listing = ListingBuilder::new(
//!     "Exterior Wash",
//!     "exterior",
//!     "standard",
//!     Price::new(150.0).unwrap(),
//!     provider,
//! )
//! .discounted_price(Price::new(120.0).unwrap())
//! .build()
//! .unwrap();
//!
//! let response = tokio_test::block_on(async {
//!     store.insert(listing).await;
//!     let query = ComparisonQuery::builder()
//!         .origin(41.0082, 28.9784)
//!         .sort_by(SortKey::Score)
//!         .build();
//!     engine.compare(&query).await
//! })
//! .unwrap();
//!
//! assert_eq!(response.total, 1);
//! assert_eq!(response.results[0].discount_percent, Some(20));
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
