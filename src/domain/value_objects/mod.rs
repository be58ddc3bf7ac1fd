//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`ListingId`], [`ProviderId`]: UUID-based identifiers
//!
//! ## Numeric Types
//!
//! - [`Price`]: Positive decimal money amount
//! - [`Rating`]: Provider rating on the 0..=5 scale
//!
//! ## Geography
//!
//! - [`GeoPoint`]: Validated coordinates with haversine distance
//!
//! ## Domain Enums
//!
//! - `ListingStatus`: Listing lifecycle states
//! - `SortKey` / `SortOrder`: Ranking sort selection

pub mod enums;
pub mod geo;
pub mod ids;
pub mod price;
pub mod rating;
pub mod timestamp;

pub use enums::{ListingStatus, ParseEnumError, SortKey, SortOrder};
pub use geo::GeoPoint;
pub use ids::{ListingId, ProviderId};
pub use price::Price;
pub use rating::Rating;
pub use timestamp::Timestamp;
