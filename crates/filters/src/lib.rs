//! In-memory filtering of movies and categories.
//!
//! This crate provides:
//! - Filter descriptors (`MatchFilter`, `RangeFilter`, `ValueSearchFilter`)
//! - Per-record filter tables (`MovieFilters`, `CategoryFilters`)
//! - `MatchableCollection` holding records plus their filter state
//!
//! ## Architecture
//! A record type implements `Matchable`, which names a `FilterSet`: one
//! optional slot per filterable field. The collection is generic over the
//! record, so movies and categories share the same engine:
//! 1. `apply_search_value` sets the primary text field
//! 2. `apply_filters_value` shallow-merges a partial filter set
//! 3. `get_filtered` keeps records passing every set slot, in order
//!
//! ## Example Usage
//! ```ignore
//! use filters::{Filterable, MatchFilter, MovieFilters, MovieList, RangeFilter};
//!
//! let mut movies = MovieList::new(records);
//! movies.apply_search_value(MatchFilter::new("Dune"));
//! movies.apply_filters_value(MovieFilters::default().with_rating(RangeFilter::new(7.5, 10.0)));
//!
//! let filtered = movies.get_filtered();
//! ```

pub mod traits;
pub mod descriptors;
pub mod movie;
pub mod category;
pub mod collection;

// Re-export main types
pub use traits::{FilterSet, Filterable, Matchable};
pub use descriptors::{MatchFilter, RangeFilter, SearchValue, ValueSearchFilter};
pub use movie::MovieFilters;
pub use category::CategoryFilters;
pub use collection::{CategoryList, MatchableCollection, MovieList};
