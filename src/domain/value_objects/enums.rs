//! # Domain Enums
//!
//! Enumeration types for domain concepts.
//!
//! This module provides the core enumerations of the comparison engine:
//!
//! - [`ListingStatus`] - Lifecycle state of a listing
//! - [`SortKey`] - The closed set of ranking sort keys
//! - [`SortOrder`] - Ascending or descending direction
//!
//! All enums implement `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
//! `Display`, `FromStr`, and Serde traits.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a service listing.
///
/// # Examples
///
/// ```
/// use wash_compare::domain::value_objects::enums::ListingStatus;
///
/// let status: ListingStatus = "ACTIVE".parse().unwrap();
/// assert!(status.is_active());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum ListingStatus {
    /// Visible and bookable.
    Active = 0,
    /// Hidden by the provider.
    Inactive = 1,
    /// Created but not yet published.
    Draft = 2,
}

impl ListingStatus {
    /// Returns true if the listing is active.
    #[inline]
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "ACTIVE"),
            Self::Inactive => write!(f, "INACTIVE"),
            Self::Draft => write!(f, "DRAFT"),
        }
    }
}

impl FromStr for ListingStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ACTIVE" => Ok(Self::Active),
            "INACTIVE" => Ok(Self::Inactive),
            "DRAFT" => Ok(Self::Draft),
            _ => Err(ParseEnumError::InvalidValue("ListingStatus", s.to_string())),
        }
    }
}

/// Sort key selecting the ranking comparator.
///
/// The key set is fixed; each variant dispatches to a named comparator.
///
/// # Examples
///
/// ```
/// use wash_compare::domain::value_objects::enums::SortKey;
///
/// assert_eq!(SortKey::default(), SortKey::EffectivePrice);
/// assert_eq!("distance".parse::<SortKey>().unwrap(), SortKey::Distance);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[repr(u8)]
pub enum SortKey {
    /// Effective price (discounted when present, base otherwise).
    #[default]
    EffectivePrice = 0,
    /// Distance from the query origin.
    Distance = 1,
    /// Provider rating.
    Rating = 2,
    /// Discount percentage.
    Discount = 3,
    /// Service duration in minutes.
    Duration = 4,
    /// Composite weighted score.
    Score = 5,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EffectivePrice => write!(f, "effectivePrice"),
            Self::Distance => write!(f, "distance"),
            Self::Rating => write!(f, "rating"),
            Self::Discount => write!(f, "discount"),
            Self::Duration => write!(f, "duration"),
            Self::Score => write!(f, "score"),
        }
    }
}

impl FromStr for SortKey {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "effectiveprice" | "effective_price" => Ok(Self::EffectivePrice),
            "distance" => Ok(Self::Distance),
            "rating" => Ok(Self::Rating),
            "discount" => Ok(Self::Discount),
            "duration" => Ok(Self::Duration),
            "score" => Ok(Self::Score),
            _ => Err(ParseEnumError::InvalidValue("SortKey", s.to_string())),
        }
    }
}

/// Sort direction.
///
/// # Examples
///
/// ```
/// use wash_compare::domain::value_objects::enums::SortOrder;
///
/// assert_eq!(SortOrder::default(), SortOrder::Asc);
/// assert_eq!(SortOrder::Asc.reversed(), SortOrder::Desc);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum SortOrder {
    /// Ascending.
    #[default]
    Asc = 0,
    /// Descending.
    Desc = 1,
}

impl SortOrder {
    /// Returns the opposite direction.
    #[inline]
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Returns true for ascending order.
    #[inline]
    #[must_use]
    pub const fn is_asc(self) -> bool {
        matches!(self, Self::Asc)
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(ParseEnumError::InvalidValue("SortOrder", s.to_string())),
        }
    }
}

/// Error type for parsing enum values from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEnumError {
    /// The provided string value is not valid for the enum.
    InvalidValue(&'static str, String),
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue(enum_name, value) => {
                write!(f, "invalid {} value: '{}'", enum_name, value)
            }
        }
    }
}

impl std::error::Error for ParseEnumError {}
