//! # Catalog Crate
//!
//! Record shapes for the movie catalog and their JSON codec.
//!
//! ## Main Components
//!
//! - **types**: `Movie` and `Category` records
//! - **parser**: decode/encode JSON arrays of records
//! - **error**: error type for the codec
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{parse_movies, Movie};
//!
//! let movies = parse_movies(r#"[{"title": "Dune", "year": 2021, "rating": 8.0}]"#)?;
//! assert_eq!(movies[0], Movie::new("Dune", 2021, 8.0));
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use parser::{parse_categories, parse_movies, to_json};
pub use types::{
    // Type aliases
    Award,
    Score,
    Year,
    // Records
    Category,
    Movie,
};
