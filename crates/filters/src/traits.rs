//! Core traits for record filtering.
//!
//! A record type opts into filtering by naming its filter table
//! (`Matchable::Filters`). The table is a struct with one `Option` slot per
//! filterable field, which keeps the field set closed and checked at
//! compile time.

use crate::descriptors::MatchFilter;
use std::fmt::Debug;

/// Fixed table of optional per-field filters for records of type `R`.
///
/// ## Semantics
/// - An unset slot (`None`) imposes no constraint
/// - A record matches when every set slot matches (logical AND)
/// - `merge` replaces each slot that is `Some` in the update and leaves
///   the others untouched, so a merge can never clear a slot
pub trait FilterSet<R>: Default + Clone + Debug {
    /// Name of the text field reached by `set_primary`
    const PRIMARY_FIELD: &'static str;

    /// Replace the filter on the primary text field only
    fn set_primary(&mut self, filter: MatchFilter);

    /// Shallow merge: provided slots win, absent slots are kept
    fn merge(&mut self, update: Self);

    /// Evaluate every set slot against `record`
    fn matches(&self, record: &R) -> bool;

    /// Names of the slots currently set (for logging/debugging)
    fn active_fields(&self) -> Vec<&'static str>;

    /// True if no slot is set, i.e. every record matches
    fn is_unconstrained(&self) -> bool {
        self.active_fields().is_empty()
    }
}

/// A record type that can be held in a `MatchableCollection`.
pub trait Matchable: Sized {
    type Filters: FilterSet<Self>;
}

/// Update surface of a filterable collection.
///
/// `F` is the partial filter set accepted by `apply_filters_value`.
pub trait Filterable<F> {
    /// Set the primary text filter, overwriting only that field
    fn apply_search_value(&mut self, filter: MatchFilter);

    /// Shallow-merge a partial filter set into the current state
    fn apply_filters_value(&mut self, filters: F);
}
