//! JSON codec for catalog documents.
//!
//! A document is a JSON array of records:
//! - movies: `[{"title": "Dune", "year": 2021, "rating": 8.0, "awards": []}]`
//! - categories: `[{"name": "Sci-Fi", "movies": [ ...movies... ]}]`
//!
//! Parsing works on text already in memory. Where that text comes from
//! (file, network, fixture) is up to the caller.

use crate::error::{CatalogError, Result};
use crate::types::{Category, Movie};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Name of the JSON type of `value`, for error messages
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Decode a top-level JSON array into records of type `T`
fn parse_array<T: DeserializeOwned>(json: &str) -> Result<Vec<T>> {
    let value: Value = serde_json::from_str(json)?;
    if !value.is_array() {
        return Err(CatalogError::UnexpectedShape {
            expected: "array",
            found: json_type_name(&value),
        });
    }
    Ok(serde_json::from_value(value)?)
}

/// Parse a JSON array of movies
pub fn parse_movies(json: &str) -> Result<Vec<Movie>> {
    parse_array(json)
}

/// Parse a JSON array of categories
pub fn parse_categories(json: &str) -> Result<Vec<Category>> {
    parse_array(json)
}

/// Encode any catalog value as pretty-printed JSON
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
