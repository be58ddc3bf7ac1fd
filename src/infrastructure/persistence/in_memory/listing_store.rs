//! # In-Memory Listing Store
//!
//! In-memory implementation of [`ListingStore`] for testing and
//! development without database dependencies.
//!
//! Uses a thread-safe `Vec` behind `tokio::sync::RwLock`; queries filter
//! with the reference [`ListingPredicate::matches`] semantics and order by
//! publication time, newest first.

use crate::domain::entities::listing::ServiceListing;
use crate::infrastructure::persistence::traits::{
    ListingPredicate, ListingStore, StoreResult,
};
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// In-memory implementation of [`ListingStore`].
///
/// Suitable for unit tests and local development. Tracks how many times
/// [`ListingStore::query`] ran, which lets tests assert that cached
/// comparisons never reach storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryListingStore {
    listings: Arc<RwLock<Vec<ServiceListing>>>,
    query_count: Arc<AtomicU64>,
}

impl InMemoryListingStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a listing.
    pub async fn insert(&self, listing: ServiceListing) {
        let mut listings = self.listings.write().await;
        listings.push(listing);
    }

    /// Inserts several listings at once.
    pub async fn insert_all(&self, batch: impl IntoIterator<Item = ServiceListing>) {
        let mut listings = self.listings.write().await;
        listings.extend(batch);
    }

    /// Returns the number of stored listings.
    pub async fn len(&self) -> usize {
        self.listings.read().await.len()
    }

    /// Returns true if the store holds no listings.
    pub async fn is_empty(&self) -> bool {
        self.listings.read().await.is_empty()
    }

    /// Removes all listings.
    pub async fn clear(&self) {
        self.listings.write().await.clear();
    }

    /// Returns how many times `query` has run against this store.
    #[must_use]
    pub fn query_count(&self) -> u64 {
        self.query_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ListingStore for InMemoryListingStore {
    async fn query(
        &self,
        predicate: &ListingPredicate,
        skip: u64,
        take: u64,
    ) -> StoreResult<(Vec<ServiceListing>, u64)> {
        self.query_count.fetch_add(1, Ordering::Relaxed);

        let listings = self.listings.read().await;
        let mut matched: Vec<ServiceListing> = listings
            .iter()
            .filter(|l| predicate.matches(l))
            .cloned()
            .collect();

        // Recency tiebreak: newest first.
        matched.sort_by(|a, b| b.created_at().cmp(&a.created_at()));

        let total = matched.len() as u64;
        let page = matched
            .into_iter()
            .skip(usize::try_from(skip).unwrap_or(usize::MAX))
            .take(usize::try_from(take).unwrap_or(usize::MAX))
            .collect();

        Ok((page, total))
    }
}
