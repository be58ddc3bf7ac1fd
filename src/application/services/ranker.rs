//! # Ranker
//!
//! Stable sorting of ranked listings by a caller-selected key.
//!
//! Each [`SortKey`] dispatches to a named comparator. The sort is stable:
//! candidates that compare equal keep their input order, which downstream
//! is the storage layer's recency order.
//!
//! Missing values have fixed conventions: an absent distance sorts as
//! positive infinity (undistanced listings land last ascending), and an
//! absent discount counts as zero.

use crate::domain::entities::ranked_listing::RankedListing;
use crate::domain::value_objects::{SortKey, SortOrder};
use std::cmp::Ordering;

/// Sorts listings in place by the given key and direction.
///
/// # Examples
///
/// ```no_run
/// use wash_compare::application::services::ranker;
/// use wash_compare::domain::value_objects::{SortKey, SortOrder};
/// # let mut results = Vec::new();
///
/// ranker::sort(&mut results, SortKey::Distance, SortOrder::Asc);
/// ```
pub fn sort(results: &mut [RankedListing], key: SortKey, order: SortOrder) {
    results.sort_by(|a, b| compare(a, b, key, order));
}

/// Compares two listings under the key, then applies the direction.
fn compare(a: &RankedListing, b: &RankedListing, key: SortKey, order: SortOrder) -> Ordering {
    let ordering = match key {
        SortKey::EffectivePrice => by_effective_price(a, b),
        SortKey::Distance => by_distance(a, b),
        SortKey::Rating => by_rating(a, b),
        SortKey::Discount => by_discount(a, b),
        SortKey::Duration => by_duration(a, b),
        SortKey::Score => by_score(a, b),
    };
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

fn by_effective_price(a: &RankedListing, b: &RankedListing) -> Ordering {
    a.effective_price.get().cmp(&b.effective_price.get())
}

fn by_distance(a: &RankedListing, b: &RankedListing) -> Ordering {
    let da = a.distance_km.unwrap_or(f64::INFINITY);
    let db = b.distance_km.unwrap_or(f64::INFINITY);
    da.partial_cmp(&db).unwrap_or(Ordering::Equal)
}

fn by_rating(a: &RankedListing, b: &RankedListing) -> Ordering {
    let ra = a.listing.provider().rating().value();
    let rb = b.listing.provider().rating().value();
    ra.partial_cmp(&rb).unwrap_or(Ordering::Equal)
}

/// Compares `(b, a)` where every other comparator compares `(a, b)`:
/// ascending requests come back ordered by decreasing discount. Callers
/// depend on this direction.
fn by_discount(a: &RankedListing, b: &RankedListing) -> Ordering {
    let da = a.discount_percent.unwrap_or(0);
    let db = b.discount_percent.unwrap_or(0);
    db.cmp(&da)
}

fn by_duration(a: &RankedListing, b: &RankedListing) -> Ordering {
    a.listing
        .duration_minutes()
        .cmp(&b.listing.duration_minutes())
}

fn by_score(a: &RankedListing, b: &RankedListing) -> Ordering {
    a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal)
}
