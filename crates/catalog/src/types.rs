//! Core record types for the movie catalog.
//!
//! Both records are plain owned data. Filtering never mutates them, so
//! everything here is `Clone` and compared by value.

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================

/// Release year of a movie
pub type Year = i32;

/// Rating on a 0-10 scale
pub type Score = f64;

/// Label of an award a movie has won (e.g. "Oscar")
pub type Award = String;

// =============================================================================
// Movie
// =============================================================================

/// A single movie record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub year: Year,
    pub rating: Score,
    /// Order carries no meaning but is kept as given.
    #[serde(default)]
    pub awards: Vec<Award>,
}

impl Movie {
    /// Creates a movie without awards
    pub fn new(title: impl Into<String>, year: Year, rating: Score) -> Self {
        Self {
            title: title.into(),
            year,
            rating,
            awards: Vec::new(),
        }
    }

    /// Replaces the award list (builder style)
    pub fn with_awards<I, S>(mut self, awards: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Award>,
    {
        self.awards = awards.into_iter().map(Into::into).collect();
        self
    }

    /// Two movies are the same title when their titles are byte-equal.
    /// Year, rating and awards are ignored.
    pub fn same_title(&self, other: &Movie) -> bool {
        self.title == other.title
    }
}

// =============================================================================
// Category
// =============================================================================

/// A named group of representative movies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub movies: Vec<Movie>,
}

impl Category {
    pub fn new(name: impl Into<String>, movies: Vec<Movie>) -> Self {
        Self {
            name: name.into(),
            movies,
        }
    }

    /// Returns true if any representative movie carries this exact title
    pub fn contains_title(&self, title: &str) -> bool {
        self.movies.iter().any(|movie| movie.title == title)
    }
}
