//! Error types for the catalog crate.
//!
//! Only the JSON codec can fail. Building records in memory and filtering
//! them never produces an error.

use thiserror::Error;

/// Errors that can occur while decoding a catalog document
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The document is not valid JSON or a record is missing a field
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level value has the wrong JSON type
    #[error("Expected a JSON {expected} but found {found}")]
    UnexpectedShape {
        expected: &'static str,
        found: &'static str,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
