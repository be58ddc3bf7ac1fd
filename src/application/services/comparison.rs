//! # Comparison Engine
//!
//! Orchestrates the full comparison pipeline.
//!
//! [`ComparisonEngine::compare`] validates the query, consults the result
//! cache, fetches a page of candidates from the listing store, normalizes
//! and scores each one, applies the radius filter, sorts, and caches the
//! assembled response.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use wash_compare::application::query::ComparisonQuery;
//! use wash_compare::application::services::comparison::ComparisonEngine;
//! use wash_compare::infrastructure::cache::InMemoryResultCache;
//! use wash_compare::infrastructure::persistence::in_memory::InMemoryListingStore;
//!
//! let engine = ComparisonEngine::with_defaults(
//!     Arc::new(InMemoryListingStore::new()),
//!     Arc::new(InMemoryResultCache::new()),
//! );
//!
//! let response = tokio_test::block_on(async {
//!     engine.compare(&ComparisonQuery::default()).await
//! })
//! .unwrap();
//! assert!(response.is_empty());
//! ```

use crate::application::error::CompareResult;
use crate::application::query::{ComparisonQuery, ComparisonResponse};
use crate::application::services::normalizer::Normalizer;
use crate::application::services::ranker;
use crate::application::services::scoring::ScoringEngine;
use crate::infrastructure::cache::ResultCache;
use crate::infrastructure::persistence::traits::ListingStore;
use std::sync::Arc;
use std::time::Duration;

/// Default lifetime of a cached comparison response.
const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(30);

/// Configuration for the comparison engine.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// How long computed responses stay valid in the cache.
    pub cache_ttl: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }
}

impl EngineConfig {
    /// Sets the cache TTL.
    #[must_use]
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }
}

/// The multi-criteria comparison and ranking engine.
///
/// Stateless per request apart from the shared cache; collaborators are
/// injected as ports so tests can substitute deterministic fakes.
#[derive(Debug)]
pub struct ComparisonEngine {
    store: Arc<dyn ListingStore>,
    cache: Arc<dyn ResultCache>,
    normalizer: Normalizer,
    scorer: ScoringEngine,
    config: EngineConfig,
}

impl ComparisonEngine {
    /// Creates an engine.
    #[must_use]
    pub fn new(
        store: Arc<dyn ListingStore>,
        cache: Arc<dyn ResultCache>,
        config: EngineConfig,
    ) -> Self {
        Self {
            store,
            cache,
            normalizer: Normalizer::new(),
            scorer: ScoringEngine::default(),
            config,
        }
    }

    /// Creates an engine with the default configuration.
    #[must_use]
    pub fn with_defaults(store: Arc<dyn ListingStore>, cache: Arc<dyn ResultCache>) -> Self {
        Self::new(store, cache, EngineConfig::default())
    }

    /// Returns the current configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Runs one comparison request end to end.
    ///
    /// Cache hits are returned unchanged; staleness up to the configured
    /// TTL is an accepted trade-off. The radius filter runs after
    /// storage-level pagination, so `total` keeps the pre-filter count
    /// and a page may hold fewer than `limit` results while further
    /// in-radius candidates sit beyond the raw page.
    ///
    /// # Errors
    ///
    /// - `CompareError::Validation` for out-of-bounds pagination or
    ///   malformed numeric fields, before any store or cache access
    /// - `CompareError::StorageUnavailable` when the listing store fails
    /// - `CompareError::DataIntegrity` when a candidate violates the
    ///   storage contract; the whole request aborts
    pub async fn compare(&self, query: &ComparisonQuery) -> CompareResult<ComparisonResponse> {
        query.validate()?;

        let key = query.cache_key();
        if let Some(hit) = self.cache.get(&key) {
            tracing::debug!(results = hit.result_count(), "comparison served from cache");
            return Ok(hit);
        }

        let predicate = query.predicate();
        let (candidates, total) = self
            .store
            .query(&predicate, query.skip(), u64::from(query.limit()))
            .await?;
        tracing::debug!(
            candidates = candidates.len(),
            total,
            page = query.page(),
            "fetched candidate page"
        );

        let origin = query.origin();
        let mut results = Vec::with_capacity(candidates.len());
        for candidate in &candidates {
            let mut ranked = self.normalizer.normalize(candidate, origin.as_ref())?;
            ranked.score = self.scorer.score(&ranked);
            results.push(ranked);
        }

        if let (Some(_), Some(max_km)) = (&origin, query.max_distance_km()) {
            let before = results.len();
            results.retain(|r| r.is_within_radius(max_km));
            tracing::debug!(
                dropped = before - results.len(),
                max_km,
                "applied radius filter"
            );
        }

        ranker::sort(&mut results, query.sort_by(), query.sort_order());

        let response = ComparisonResponse {
            page: query.page(),
            limit: query.limit(),
            total,
            results,
        };
        self.cache.put(key, response.clone(), self.config.cache_ttl);

        Ok(response)
    }
}
