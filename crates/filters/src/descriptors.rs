//! Per-field filter descriptors.
//!
//! Each descriptor is a predicate over one field of a record:
//! - `MatchFilter`: substring containment on text
//! - `RangeFilter`: inclusive numeric interval
//! - `ValueSearchFilter`: every required value is present in a list
//!
//! Field names serialize in camelCase (`filter`, `filterTo`, `values`) so a
//! filter set can be passed around as JSON.

use catalog::Movie;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Substring match on a text field.
///
/// Matching is case-sensitive and literal. An empty pattern matches any text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchFilter {
    pub filter: String,
}

impl MatchFilter {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            filter: pattern.into(),
        }
    }

    /// Returns true if `text` contains the pattern
    pub fn contains(&self, text: &str) -> bool {
        text.contains(self.filter.as_str())
    }
}

/// Inclusive range `filter <= value <= filter_to`.
///
/// A range with `filter_to < filter` is empty and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeFilter<N> {
    pub filter: N,
    pub filter_to: N,
}

impl<N: PartialOrd + Copy> RangeFilter<N> {
    pub fn new(filter: N, filter_to: N) -> Self {
        Self { filter, filter_to }
    }

    /// Range holding exactly one value
    pub fn exactly(value: N) -> Self {
        Self::new(value, value)
    }

    /// Returns true if both bounds hold. Incomparable values (NaN) fail.
    pub fn contains(&self, value: N) -> bool {
        self.filter <= value && value <= self.filter_to
    }

    /// True when no value can satisfy the range
    pub fn is_empty(&self) -> bool {
        !matches!(
            self.filter.partial_cmp(&self.filter_to),
            Some(Ordering::Less | Ordering::Equal)
        )
    }
}

/// Equality notion used when looking up required values.
pub trait SearchValue {
    fn same_value(&self, other: &Self) -> bool;
}

impl SearchValue for String {
    fn same_value(&self, other: &Self) -> bool {
        self == other
    }
}

/// Movies inside a category are identified by title alone.
impl SearchValue for Movie {
    fn same_value(&self, other: &Self) -> bool {
        self.same_title(other)
    }
}

/// "All of these must be present" over a collection-valued field.
///
/// An empty `values` list matches every record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueSearchFilter<T> {
    pub values: Vec<T>,
}

impl<T: SearchValue> ValueSearchFilter<T> {
    pub fn new(values: Vec<T>) -> Self {
        Self { values }
    }

    /// Returns true if every required value is found in `haystack`
    pub fn matches(&self, haystack: &[T]) -> bool {
        self.values
            .iter()
            .all(|required| haystack.iter().any(|item| item.same_value(required)))
    }
}

impl<T> Default for ValueSearchFilter<T> {
    fn default() -> Self {
        Self { values: Vec::new() }
    }
}

impl<T, S> FromIterator<S> for ValueSearchFilter<T>
where
    S: Into<T>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(Into::into).collect(),
        }
    }
}
