//! Filter table for movie records.
//!
//! | Field  | Kind                          |
//! |--------|-------------------------------|
//! | title  | `MatchFilter` (primary)       |
//! | year   | `RangeFilter<Year>`           |
//! | rating | `RangeFilter<Score>`          |
//! | awards | `ValueSearchFilter<Award>`    |

use crate::descriptors::{MatchFilter, RangeFilter, ValueSearchFilter};
use crate::traits::{FilterSet, Matchable};
use catalog::{Award, Movie, Score, Year};
use serde::{Deserialize, Serialize};

/// Optional filters over movie fields.
///
/// Built up with the `with_*` helpers and handed to
/// `apply_filters_value`:
/// ```ignore
/// list.apply_filters_value(
///     MovieFilters::default()
///         .with_year(RangeFilter::new(2018, 2025))
///         .with_awards(["Oscar"]),
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<MatchFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<RangeFilter<Year>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<RangeFilter<Score>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub awards: Option<ValueSearchFilter<Award>>,
}

impl MovieFilters {
    pub fn with_title(mut self, filter: MatchFilter) -> Self {
        self.title = Some(filter);
        self
    }

    pub fn with_year(mut self, range: RangeFilter<Year>) -> Self {
        self.year = Some(range);
        self
    }

    pub fn with_rating(mut self, range: RangeFilter<Score>) -> Self {
        self.rating = Some(range);
        self
    }

    pub fn with_awards<I, S>(mut self, awards: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Award>,
    {
        self.awards = Some(awards.into_iter().collect());
        self
    }
}

impl FilterSet<Movie> for MovieFilters {
    const PRIMARY_FIELD: &'static str = "title";

    fn set_primary(&mut self, filter: MatchFilter) {
        self.title = Some(filter);
    }

    fn merge(&mut self, update: Self) {
        if update.title.is_some() {
            self.title = update.title;
        }
        if update.year.is_some() {
            self.year = update.year;
        }
        if update.rating.is_some() {
            self.rating = update.rating;
        }
        if update.awards.is_some() {
            self.awards = update.awards;
        }
    }

    fn matches(&self, movie: &Movie) -> bool {
        self.title.as_ref().is_none_or(|f| f.contains(&movie.title))
            && self.year.is_none_or(|range| range.contains(movie.year))
            && self.rating.is_none_or(|range| range.contains(movie.rating))
            && self.awards.as_ref().is_none_or(|f| f.matches(&movie.awards))
    }

    fn active_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.title.is_some() {
            fields.push("title");
        }
        if self.year.is_some() {
            fields.push("year");
        }
        if self.rating.is_some() {
            fields.push("rating");
        }
        if self.awards.is_some() {
            fields.push("awards");
        }
        fields
    }
}

impl Matchable for Movie {
    type Filters = MovieFilters;
}
