//! # Service Listing Entity
//!
//! A car-wash service listing offered by a provider.
//!
//! This module provides the [`ServiceListing`] entity (the raw candidate
//! fetched from the storage layer) and the embedded [`ProviderSummary`].
//!
//! # Examples
//!
//! ```
//! use wash_compare::domain::entities::listing::{ListingBuilder, ProviderSummary};
//! use wash_compare::domain::value_objects::{GeoPoint, Price, ProviderId, Rating};
//!
//! let provider = ProviderSummary::new(
//!     ProviderId::new_v4(),
//!     "Sparkle Auto Spa",
//!     Rating::new(4.5).unwrap(),
//!     GeoPoint::new(41.0082, 28.9784).unwrap(),
//!     "Istanbul",
//!     "Marmara",
//! );
//!
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
//! assert!(listing.discounted_price().is_some());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::timestamp::Timestamp;
use crate::domain::value_objects::{GeoPoint, ListingId, ListingStatus, Price, ProviderId, Rating};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default service duration in minutes when none is given.
const DEFAULT_DURATION_MINUTES: u32 = 30;

/// Default currency code for listing prices.
const DEFAULT_CURRENCY: &str = "USD";

/// Summary of the provider behind a listing.
///
/// Carries only the fields the comparison engine reads: identity, display
/// name, rating, location, and the city/region used for exact filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSummary {
    /// Provider identifier.
    id: ProviderId,
    /// Display name of the business.
    business_name: String,
    /// Aggregate customer rating.
    rating: Rating,
    /// Location of the wash bay.
    location: GeoPoint,
    /// City the provider operates in.
    city: String,
    /// Region the provider operates in.
    region: String,
}

impl ProviderSummary {
    /// Creates a provider summary.
    #[must_use]
    pub fn new(
        id: ProviderId,
        business_name: impl Into<String>,
        rating: Rating,
        location: GeoPoint,
        city: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            id,
            business_name: business_name.into(),
            rating,
            location,
            city: city.into(),
            region: region.into(),
        }
    }

    /// Returns the provider identifier.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> ProviderId {
        self.id
    }

    /// Returns the business name.
    #[inline]
    #[must_use]
    pub fn business_name(&self) -> &str {
        &self.business_name
    }

    /// Returns the aggregate rating.
    #[inline]
    #[must_use]
    pub const fn rating(&self) -> Rating {
        self.rating
    }

    /// Returns the provider location.
    #[inline]
    #[must_use]
    pub const fn location(&self) -> &GeoPoint {
        &self.location
    }

    /// Returns the city.
    #[inline]
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Returns the region.
    #[inline]
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }
}

/// A car-wash service listing.
///
/// The raw candidate the storage layer hands to the comparison engine.
/// Derived ranking fields live on `RankedListing`, never here.
///
/// # Invariants
///
/// - `name` is non-empty
/// - `duration_minutes` is positive
/// - Prices are strictly positive when constructed through the builder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceListing {
    /// Unique identifier.
    id: ListingId,
    /// Display name.
    name: String,
    /// Optional long-form description.
    description: Option<String>,
    /// Service type (e.g. "exterior", "full-detail").
    service_type: String,
    /// Marketplace category.
    category: String,
    /// Lifecycle status.
    status: ListingStatus,
    /// Base price.
    price: Price,
    /// Optional promotional price.
    discounted_price: Option<Price>,
    /// ISO 4217 currency code.
    currency: String,
    /// Expected duration in minutes.
    duration_minutes: u32,
    /// Whether the service is currently bookable.
    available: bool,
    /// The provider offering the service.
    provider: ProviderSummary,
    /// When the listing was published.
    created_at: Timestamp,
}

impl ServiceListing {
    /// Returns the listing identifier.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> ListingId {
        self.id
    }

    /// Returns the display name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description, if any.
    #[inline]
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the service type.
    #[inline]
    #[must_use]
    pub fn service_type(&self) -> &str {
        &self.service_type
    }

    /// Returns the category.
    #[inline]
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the lifecycle status.
    #[inline]
    #[must_use]
    pub const fn status(&self) -> ListingStatus {
        self.status
    }

    /// Returns the base price.
    #[inline]
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Returns the promotional price, if any.
    #[inline]
    #[must_use]
    pub const fn discounted_price(&self) -> Option<Price> {
        self.discounted_price
    }

    /// Returns the currency code.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Returns the expected duration in minutes.
    #[inline]
    #[must_use]
    pub const fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    /// Returns true if the service is currently bookable.
    #[inline]
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.available
    }

    /// Returns the provider summary.
    #[inline]
    #[must_use]
    pub const fn provider(&self) -> &ProviderSummary {
        &self.provider
    }

    /// Returns when the listing was published.
    #[inline]
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

impl fmt::Display for ServiceListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ServiceListing({} '{}' {} {})",
            self.id, self.name, self.price, self.currency
        )
    }
}

/// Builder for [`ServiceListing`].
///
/// Required fields go through [`ListingBuilder::new`]; everything else has
/// a sensible default and a setter.
#[derive(Debug, Clone)]
pub struct ListingBuilder {
    id: ListingId,
    name: String,
    description: Option<String>,
    service_type: String,
    category: String,
    status: ListingStatus,
    price: Price,
    discounted_price: Option<Price>,
    currency: String,
    duration_minutes: u32,
    available: bool,
    provider: ProviderSummary,
    created_at: Timestamp,
}

impl ListingBuilder {
    /// Creates a builder with the required fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        service_type: impl Into<String>,
        category: impl Into<String>,
        price: Price,
        provider: ProviderSummary,
    ) -> Self {
        Self {
            id: ListingId::new_v4(),
            name: name.into(),
            description: None,
            service_type: service_type.into(),
            category: category.into(),
            status: ListingStatus::Active,
            price,
            discounted_price: None,
            currency: DEFAULT_CURRENCY.to_string(),
            duration_minutes: DEFAULT_DURATION_MINUTES,
            available: true,
            provider,
            created_at: Timestamp::now(),
        }
    }

    /// Sets a specific identifier (for reconstruction from storage).
    #[must_use]
    pub fn id(mut self, id: ListingId) -> Self {
        self.id = id;
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the lifecycle status.
    #[must_use]
    pub fn status(mut self, status: ListingStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the promotional price.
    #[must_use]
    pub fn discounted_price(mut self, price: Price) -> Self {
        self.discounted_price = Some(price);
        self
    }

    /// Sets the currency code.
    #[must_use]
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Sets the expected duration in minutes.
    #[must_use]
    pub fn duration_minutes(mut self, minutes: u32) -> Self {
        self.duration_minutes = minutes;
        self
    }

    /// Sets whether the service is currently bookable.
    #[must_use]
    pub fn available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Sets the publication timestamp.
    #[must_use]
    pub fn created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds the listing, validating its invariants.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidListing` if the name is empty and
    /// `DomainError::InvalidDuration` if the duration is zero.
    pub fn build(self) -> DomainResult<ServiceListing> {
        if self.name.trim().is_empty() {
            return Err(DomainError::invalid_listing("name is empty"));
        }
        if self.duration_minutes == 0 {
            return Err(DomainError::invalid_duration("duration must be positive"));
        }

        Ok(ServiceListing {
            id: self.id,
            name: self.name,
            description: self.description,
            service_type: self.service_type,
            category: self.category,
            status: self.status,
            price: self.price,
            discounted_price: self.discounted_price,
            currency: self.currency,
            duration_minutes: self.duration_minutes,
            available: self.available,
            provider: self.provider,
            created_at: self.created_at,
        })
    }
}
