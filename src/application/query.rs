//! # Comparison Query and Response
//!
//! The request/response contract of the comparison engine.
//!
//! [`ComparisonQuery`] is an immutable value describing one comparison
//! request: coarse filters, an optional geographic origin with radius,
//! sort selection, and pagination. It is the sole identity used for cache
//! lookups: [`ComparisonQuery::cache_key`] serializes the effective
//! values in a fixed field order, so two logically identical queries
//! always collide.
//!
//! # Examples
//!
//! ```
//! use wash_compare::application::query::ComparisonQuery;
//! use wash_compare::domain::value_objects::{SortKey, SortOrder};
//!
//! let query = ComparisonQuery::builder()
//!     .search("exterior")
//!     .origin(41.0082, 28.9784)
//!     .max_distance_km(10.0)
//!     .sort_by(SortKey::Distance)
//!     .build();
//!
//! assert!(query.validate().is_ok());
//! assert_eq!(query.sort_order(), SortOrder::Asc);
//! ```

use crate::application::error::{CompareError, CompareResult};
use crate::domain::entities::ranked_listing::RankedListing;
use crate::domain::value_objects::{GeoPoint, ListingStatus, SortKey, SortOrder};
use crate::infrastructure::persistence::traits::ListingPredicate;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Default page number.
pub const DEFAULT_PAGE: u32 = 1;

/// Default page size.
pub const DEFAULT_LIMIT: u32 = 10;

/// Largest accepted page size.
pub const MAX_LIMIT: u32 = 100;

/// An immutable comparison request.
///
/// Construct through [`ComparisonQuery::builder`] or deserialize from the
/// wire shape (camelCase). Missing fields take their documented defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ComparisonQuery {
    /// Case-insensitive search over name, description, and category.
    search: Option<String>,
    /// Exact service type filter.
    service_type: Option<String>,
    /// Exact category filter.
    category: Option<String>,
    /// Exact status filter.
    status: Option<ListingStatus>,
    /// Inclusive lower bound on the base price.
    min_price: Option<f64>,
    /// Inclusive upper bound on the base price.
    max_price: Option<f64>,
    /// Origin latitude; distance computation needs both coordinates.
    latitude: Option<f64>,
    /// Origin longitude; distance computation needs both coordinates.
    longitude: Option<f64>,
    /// Radius filter in kilometers, applied only when an origin is present.
    max_distance_km: Option<f64>,
    /// Availability flag filter.
    available: Option<bool>,
    /// Exact provider city filter.
    city: Option<String>,
    /// Exact provider region filter.
    region: Option<String>,
    /// Sort key.
    sort_by: SortKey,
    /// Sort direction.
    sort_order: SortOrder,
    /// Page number, 1-based.
    page: u32,
    /// Page size.
    limit: u32,
}

impl Default for ComparisonQuery {
    fn default() -> Self {
        Self {
            search: None,
            service_type: None,
            category: None,
            status: None,
            min_price: None,
            max_price: None,
            latitude: None,
            longitude: None,
            max_distance_km: None,
            available: None,
            city: None,
            region: None,
            sort_by: SortKey::default(),
            sort_order: SortOrder::default(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ComparisonQuery {
    /// Starts a builder with all defaults.
    #[must_use]
    pub fn builder() -> ComparisonQueryBuilder {
        ComparisonQueryBuilder::default()
    }

    /// Returns the search term, if any.
    #[inline]
    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Returns the service type filter, if any.
    #[inline]
    #[must_use]
    pub fn service_type(&self) -> Option<&str> {
        self.service_type.as_deref()
    }

    /// Returns the category filter, if any.
    #[inline]
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Returns the status filter, if any.
    #[inline]
    #[must_use]
    pub const fn status(&self) -> Option<ListingStatus> {
        self.status
    }

    /// Returns the radius filter in kilometers, if any.
    #[inline]
    #[must_use]
    pub const fn max_distance_km(&self) -> Option<f64> {
        self.max_distance_km
    }

    /// Returns the sort key.
    #[inline]
    #[must_use]
    pub const fn sort_by(&self) -> SortKey {
        self.sort_by
    }

    /// Returns the sort direction.
    #[inline]
    #[must_use]
    pub const fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Returns the 1-based page number.
    #[inline]
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Returns the page size.
    #[inline]
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Returns the query origin when both coordinates are present and valid.
    #[must_use]
    pub fn origin(&self) -> Option<GeoPoint> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => GeoPoint::new(lat, lon).ok(),
            _ => None,
        }
    }

    /// Returns the number of records to skip at the storage layer.
    #[inline]
    #[must_use]
    pub fn skip(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }

    /// Validates the query.
    ///
    /// Out-of-range values are rejected, never clamped, and the request
    /// aborts before any store or cache access.
    ///
    /// # Errors
    ///
    /// Returns `CompareError::Validation` if pagination is out of bounds,
    /// coordinates are out of range, or numeric filters are not finite.
    pub fn validate(&self) -> CompareResult<()> {
        if self.page < 1 {
            return Err(CompareError::validation("page must be at least 1"));
        }
        if !(1..=MAX_LIMIT).contains(&self.limit) {
            return Err(CompareError::validation(format!(
                "limit must be between 1 and {MAX_LIMIT}"
            )));
        }
        if let Some(lat) = self.latitude
            && (!lat.is_finite() || !(-90.0..=90.0).contains(&lat))
        {
            return Err(CompareError::validation(format!(
                "latitude {lat} outside -90..=90"
            )));
        }
        if let Some(lon) = self.longitude
            && (!lon.is_finite() || !(-180.0..=180.0).contains(&lon))
        {
            return Err(CompareError::validation(format!(
                "longitude {lon} outside -180..=180"
            )));
        }
        if let Some(radius) = self.max_distance_km
            && (!radius.is_finite() || radius < 0.0)
        {
            return Err(CompareError::validation(
                "maxDistanceKm must be a non-negative number",
            ));
        }
        for (name, bound) in [("minPrice", self.min_price), ("maxPrice", self.max_price)] {
            if let Some(value) = bound
                && (!value.is_finite() || value < 0.0)
            {
                return Err(CompareError::validation(format!(
                    "{name} must be a non-negative number"
                )));
            }
        }
        Ok(())
    }

    /// Computes the canonical cache key for this query.
    ///
    /// Fields are serialized in a fixed order, so identical effective
    /// values always produce identical keys.
    #[must_use]
    pub fn cache_key(&self) -> String {
        let mut key = String::with_capacity(160);
        let _ = write!(
            key,
            "search={:?}|type={:?}|category={:?}|status={:?}",
            self.search, self.service_type, self.category, self.status
        );
        let _ = write!(
            key,
            "|minPrice={:?}|maxPrice={:?}|lat={:?}|lon={:?}|radius={:?}",
            self.min_price, self.max_price, self.latitude, self.longitude, self.max_distance_km
        );
        let _ = write!(
            key,
            "|available={:?}|city={:?}|region={:?}",
            self.available, self.city, self.region
        );
        let _ = write!(
            key,
            "|sort={}:{}|page={}|limit={}",
            self.sort_by, self.sort_order, self.page, self.limit
        );
        key
    }

    /// Projects the non-geospatial filters into a storage predicate.
    #[must_use]
    pub fn predicate(&self) -> ListingPredicate {
        ListingPredicate {
            search: self.search.clone(),
            service_type: self.service_type.clone(),
            category: self.category.clone(),
            status: self.status,
            min_price: self.min_price.and_then(Decimal::from_f64),
            max_price: self.max_price.and_then(Decimal::from_f64),
            available: self.available,
            city: self.city.clone(),
            region: self.region.clone(),
        }
    }
}

/// Builder for [`ComparisonQuery`].
///
/// Does not validate; the engine validates on `compare`.
#[derive(Debug, Clone, Default)]
pub struct ComparisonQueryBuilder {
    query: ComparisonQuery,
}

impl ComparisonQueryBuilder {
    /// Sets the search term.
    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.query.search = Some(search.into());
        self
    }

    /// Sets the service type filter.
    #[must_use]
    pub fn service_type(mut self, service_type: impl Into<String>) -> Self {
        self.query.service_type = Some(service_type.into());
        self
    }

    /// Sets the category filter.
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.query.category = Some(category.into());
        self
    }

    /// Sets the status filter.
    #[must_use]
    pub fn status(mut self, status: ListingStatus) -> Self {
        self.query.status = Some(status);
        self
    }

    /// Sets the inclusive price bounds.
    #[must_use]
    pub fn price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.query.min_price = min;
        self.query.max_price = max;
        self
    }

    /// Sets the origin coordinates.
    #[must_use]
    pub fn origin(mut self, latitude: f64, longitude: f64) -> Self {
        self.query.latitude = Some(latitude);
        self.query.longitude = Some(longitude);
        self
    }

    /// Sets the radius filter in kilometers.
    #[must_use]
    pub fn max_distance_km(mut self, radius: f64) -> Self {
        self.query.max_distance_km = Some(radius);
        self
    }

    /// Sets the availability filter.
    #[must_use]
    pub fn available(mut self, available: bool) -> Self {
        self.query.available = Some(available);
        self
    }

    /// Sets the provider city filter.
    #[must_use]
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.query.city = Some(city.into());
        self
    }

    /// Sets the provider region filter.
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.query.region = Some(region.into());
        self
    }

    /// Sets the sort key.
    #[must_use]
    pub fn sort_by(mut self, sort_by: SortKey) -> Self {
        self.query.sort_by = sort_by;
        self
    }

    /// Sets the sort direction.
    #[must_use]
    pub fn sort_order(mut self, sort_order: SortOrder) -> Self {
        self.query.sort_order = sort_order;
        self
    }

    /// Sets the 1-based page number.
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.query.page = page;
        self
    }

    /// Sets the page size.
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.query.limit = limit;
        self
    }

    /// Finishes the builder.
    #[must_use]
    pub fn build(self) -> ComparisonQuery {
        self.query
    }
}

/// The comparison response envelope.
///
/// `total` reflects the storage-level match count, computed before the
/// radius filter; once a radius is active, a page may hold fewer than
/// `limit` results even though more in-radius candidates exist beyond
/// the raw page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResponse {
    /// The requested page number.
    pub page: u32,
    /// The requested page size.
    pub limit: u32,
    /// Total storage-level matches, before radius filtering.
    pub total: u64,
    /// Ranked results for this page.
    pub results: Vec<RankedListing>,
}

impl ComparisonResponse {
    /// Creates an empty response for the given pagination.
    #[must_use]
    pub fn empty(page: u32, limit: u32) -> Self {
        Self {
            page,
            limit,
            total: 0,
            results: Vec::new(),
        }
    }

    /// Returns the number of results on this page.
    #[must_use]
    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    /// Returns true if the page holds no results.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod defaults {
        use super::*;

        #[test]
        fn default_pagination_and_sort() {
            let query = ComparisonQuery::default();
            assert_eq!(query.page(), 1);
            assert_eq!(query.limit(), 10);
            assert_eq!(query.sort_by(), SortKey::EffectivePrice);
            assert_eq!(query.sort_order(), SortOrder::Asc);
            assert!(query.search().is_none());
        }

        #[test]
        fn default_validates() {
            assert!(ComparisonQuery::default().validate().is_ok());
        }
    }

    mod validation {
        use super::*;

        #[test]
        fn page_zero_is_rejected() {
            let query = ComparisonQuery::builder().page(0).build();
            let err = query.validate().unwrap_err();
            assert!(err.is_validation());
            assert!(err.to_string().contains("page"));
        }

        #[test]
        fn limit_zero_is_rejected() {
            let query = ComparisonQuery::builder().limit(0).build();
            assert!(query.validate().unwrap_err().is_validation());
        }

        #[test]
        fn limit_above_cap_is_rejected() {
            let query = ComparisonQuery::builder().limit(101).build();
            let err = query.validate().unwrap_err();
            assert!(err.is_validation());
            assert!(err.to_string().contains("100"));
        }

        #[test]
        fn limit_at_cap_is_accepted() {
            let query = ComparisonQuery::builder().limit(100).build();
            assert!(query.validate().is_ok());
        }

        #[test]
        fn latitude_out_of_range_is_rejected() {
            let query = ComparisonQuery::builder().origin(91.0, 0.0).build();
            assert!(query.validate().unwrap_err().is_validation());
        }

        #[test]
        fn negative_radius_is_rejected() {
            let query = ComparisonQuery::builder()
                .origin(41.0, 29.0)
                .max_distance_km(-1.0)
                .build();
            assert!(query.validate().unwrap_err().is_validation());
        }

        #[test]
        fn nan_price_bound_is_rejected() {
            let query = ComparisonQuery::builder()
                .price_range(Some(f64::NAN), None)
                .build();
            assert!(query.validate().unwrap_err().is_validation());
        }
    }

    mod origin {
        use super::*;

        #[test]
        fn both_coordinates_required() {
            let query = ComparisonQuery::builder().origin(41.0, 29.0).build();
            assert!(query.origin().is_some());

            let none = ComparisonQuery::default();
            assert!(none.origin().is_none());
        }
    }

    mod pagination {
        use super::*;

        #[test]
        fn skip_is_zero_based() {
            let query = ComparisonQuery::builder().page(3).limit(20).build();
            assert_eq!(query.skip(), 40);
        }

        #[test]
        fn first_page_skips_nothing() {
            assert_eq!(ComparisonQuery::default().skip(), 0);
        }
    }

    mod cache_key {
        use super::*;

        #[test]
        fn identical_queries_collide() {
            // Same effective values set in different orders.
            let a = ComparisonQuery::builder()
                .search("wash")
                .city("Istanbul")
                .limit(20)
                .build();
            let b = ComparisonQuery::builder()
                .limit(20)
                .city("Istanbul")
                .search("wash")
                .build();

            assert_eq!(a.cache_key(), b.cache_key());
        }

        #[test]
        fn any_field_change_alters_key() {
            let base = ComparisonQuery::builder().search("wash").build();

            let page = ComparisonQuery::builder().search("wash").page(2).build();
            assert_ne!(base.cache_key(), page.cache_key());

            let sorted = ComparisonQuery::builder()
                .search("wash")
                .sort_by(SortKey::Distance)
                .build();
            assert_ne!(base.cache_key(), sorted.cache_key());

            let radius = ComparisonQuery::builder()
                .search("wash")
                .origin(41.0, 29.0)
                .max_distance_km(10.0)
                .build();
            assert_ne!(base.cache_key(), radius.cache_key());
        }

        #[test]
        fn key_is_stable_across_clones() {
            let query = ComparisonQuery::builder()
                .search("wash")
                .origin(41.0082, 28.9784)
                .build();
            assert_eq!(query.cache_key(), query.clone().cache_key());
        }
    }

    mod predicate {
        use super::*;
        use rust_decimal::Decimal;

        #[test]
        fn projects_non_geo_fields() {
            let query = ComparisonQuery::builder()
                .search("wash")
                .service_type("exterior")
                .status(ListingStatus::Active)
                .price_range(Some(50.0), Some(200.0))
                .origin(41.0, 29.0)
                .max_distance_km(10.0)
                .city("Istanbul")
                .build();

            let predicate = query.predicate();
            assert_eq!(predicate.search.as_deref(), Some("wash"));
            assert_eq!(predicate.service_type.as_deref(), Some("exterior"));
            assert_eq!(predicate.status, Some(ListingStatus::Active));
            assert_eq!(predicate.min_price, Some(Decimal::new(50, 0)));
            assert_eq!(predicate.max_price, Some(Decimal::new(200, 0)));
            assert_eq!(predicate.city.as_deref(), Some("Istanbul"));
        }
    }

    mod wire_shape {
        use super::*;

        #[test]
        fn deserializes_camel_case_with_defaults() {
            let query: ComparisonQuery = serde_json::from_str(
                r#"{"search":"wash","maxDistanceKm":10.0,"sortBy":"distance"}"#,
            )
            .unwrap();

            assert_eq!(query.search(), Some("wash"));
            assert_eq!(query.max_distance_km(), Some(10.0));
            assert_eq!(query.sort_by(), SortKey::Distance);
            assert_eq!(query.page(), 1);
            assert_eq!(query.limit(), 10);
        }

        #[test]
        fn response_serializes_camel_case() {
            let response = ComparisonResponse::empty(2, 25);
            let json = serde_json::to_value(&response).unwrap();

            assert_eq!(json.get("page").and_then(|v| v.as_u64()), Some(2));
            assert_eq!(json.get("limit").and_then(|v| v.as_u64()), Some(25));
            assert_eq!(json.get("total").and_then(|v| v.as_u64()), Some(0));
            assert!(json.get("results").is_some());
        }

        #[test]
        fn query_roundtrip() {
            let query = ComparisonQuery::builder()
                .search("wash")
                .origin(41.0, 29.0)
                .sort_by(SortKey::Score)
                .sort_order(SortOrder::Desc)
                .build();

            let json = serde_json::to_string(&query).unwrap();
            let back: ComparisonQuery = serde_json::from_str(&json).unwrap();
            assert_eq!(query, back);
        }
    }

    mod response {
        use super::*;

        #[test]
        fn empty_response() {
            let response = ComparisonResponse::empty(1, 10);
            assert!(response.is_empty());
            assert_eq!(response.result_count(), 0);
            assert_eq!(response.total, 0);
        }
    }
}
