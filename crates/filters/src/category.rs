//! Filter table for category records.
//!
//! | Field  | Kind                                     |
//! |--------|------------------------------------------|
//! | name   | `MatchFilter` (primary)                  |
//! | movies | `ValueSearchFilter<Movie>` by title      |

use crate::descriptors::{MatchFilter, ValueSearchFilter};
use crate::traits::{FilterSet, Matchable};
use catalog::{Category, Movie};
use serde::{Deserialize, Serialize};

/// Optional filters over category fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<MatchFilter>,
    /// Required representative movies, compared by title only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movies: Option<ValueSearchFilter<Movie>>,
}

impl CategoryFilters {
    pub fn with_name(mut self, filter: MatchFilter) -> Self {
        self.name = Some(filter);
        self
    }

    pub fn with_movies(mut self, movies: Vec<Movie>) -> Self {
        self.movies = Some(ValueSearchFilter::new(movies));
        self
    }

    /// Same as `with_movies` when only the titles are known
    pub fn with_titles<I, S>(self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let movies = titles
            .into_iter()
            .map(|title| Movie::new(title, 0, 0.0))
            .collect();
        self.with_movies(movies)
    }
}

impl FilterSet<Category> for CategoryFilters {
    const PRIMARY_FIELD: &'static str = "name";

    fn set_primary(&mut self, filter: MatchFilter) {
        self.name = Some(filter);
    }

    fn merge(&mut self, update: Self) {
        if update.name.is_some() {
            self.name = update.name;
        }
        if update.movies.is_some() {
            self.movies = update.movies;
        }
    }

    fn matches(&self, category: &Category) -> bool {
        self.name.as_ref().is_none_or(|f| f.contains(&category.name))
            && self.movies.as_ref().is_none_or(|f| f.matches(&category.movies))
    }

    fn active_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.name.is_some() {
            fields.push("name");
        }
        if self.movies.is_some() {
            fields.push("movies");
        }
        fields
    }
}

impl Matchable for Category {
    type Filters = CategoryFilters;
}
