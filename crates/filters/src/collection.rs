//! The MatchableCollection holds records plus their filter state.
//!
//! Filtering is not cached: every call to `get_filtered` walks the records
//! again with the current filter table.

use crate::descriptors::MatchFilter;
use crate::traits::{FilterSet, Filterable, Matchable};
use catalog::{Category, Movie};
use tracing;

/// Collection of movies with movie filters
pub type MovieList = MatchableCollection<Movie>;

/// Collection of categories with category filters
pub type CategoryList = MatchableCollection<Category>;

/// A list of records with a mutable set of field filters.
///
/// ## Usage
/// ```ignore
/// let mut movies = MovieList::new(records);
/// movies.apply_search_value(MatchFilter::new("un"));
/// movies.apply_filters_value(MovieFilters::default().with_year(RangeFilter::new(2018, 2025)));
///
/// for movie in movies.get_filtered() {
///     println!("{}", movie.title);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct MatchableCollection<R: Matchable> {
    records: Vec<R>,
    filters: R::Filters,
}

impl<R: Matchable> MatchableCollection<R> {
    /// Create a collection with no filters set. Any list is accepted.
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records,
            filters: R::Filters::default(),
        }
    }

    /// All records, ignoring filters
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Current filter state
    pub fn filters(&self) -> &R::Filters {
        &self.filters
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Lazily yield the records that pass every set filter, in order
    pub fn iter_filtered(&self) -> impl Iterator<Item = &R> + '_ {
        self.records
            .iter()
            .filter(move |record| self.filters.matches(record))
    }

    /// Records that pass every set filter, in their original order.
    ///
    /// ## Algorithm
    /// 1. Log active fields and input count
    /// 2. Keep each record for which every set field filter holds
    /// 3. Log output count
    pub fn get_filtered(&self) -> Vec<&R> {
        tracing::debug!(
            "Filtering records (input count: {}, active fields: {:?})",
            self.records.len(),
            self.filters.active_fields()
        );
        let filtered: Vec<&R> = self.iter_filtered().collect();
        tracing::debug!("Filtering done (output count: {})", filtered.len());
        filtered
    }
}

impl<R: Matchable> Filterable<R::Filters> for MatchableCollection<R> {
    fn apply_search_value(&mut self, filter: MatchFilter) {
        tracing::trace!(
            "Setting {} filter to {:?}",
            <R::Filters as FilterSet<R>>::PRIMARY_FIELD,
            filter.filter
        );
        self.filters.set_primary(filter);
    }

    fn apply_filters_value(&mut self, filters: R::Filters) {
        tracing::trace!("Merging filters for fields {:?}", filters.active_fields());
        self.filters.merge(filters);
    }
}

impl<R: Matchable> From<Vec<R>> for MatchableCollection<R> {
    fn from(records: Vec<R>) -> Self {
        Self::new(records)
    }
}

impl MatchableCollection<Movie> {
    /// Same as `get_filtered`
    pub fn get_filtered_movies(&self) -> Vec<&Movie> {
        self.get_filtered()
    }
}

impl MatchableCollection<Category> {
    /// Same as `get_filtered`
    pub fn get_filtered_categories(&self) -> Vec<&Category> {
        self.get_filtered()
    }
}
