//! Structural response validation
//!
//! Each documented response shape is enforced by decoding into the typed
//! structs from [`crate::types`]. Every field in those structs is required and
//! typed, so a missing field, a string where an integer belongs, or a float
//! integer all fail decoding. Unknown extra fields are accepted.
//!
//! This is stricter than a JSON Schema `"type": "integer"` check, which also
//! accepts floats with a zero fraction such as `2500.0`. Those are rejected
//! here.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{ListingClientError, Result};
use crate::types::{Item, Statistics};

/// Name of the single-item object schema
pub const ITEM_SCHEMA: &str = "item";
/// Name of the array-of-items schema
pub const ITEM_ARRAY_SCHEMA: &str = "item array";
/// Name of the array-of-statistics schema
pub const STATISTICS_ARRAY_SCHEMA: &str = "statistics array";

/// Validate a single item object (create response)
pub fn validate_item(body: &[u8]) -> Result<Item> {
    decode(ITEM_SCHEMA, body)
}

/// Validate an array of item objects (get-by-id and seller listing responses)
pub fn validate_item_array(body: &[u8]) -> Result<Vec<Item>> {
    decode(ITEM_ARRAY_SCHEMA, body)
}

/// Validate an array of statistics objects (statistics response)
pub fn validate_statistics_array(body: &[u8]) -> Result<Vec<Statistics>> {
    decode(STATISTICS_ARRAY_SCHEMA, body)
}

/// Validate an already parsed JSON value against the single-item schema
pub fn validate_item_value(value: &serde_json::Value) -> Result<Item> {
    Item::deserialize(value)
        .map_err(|e| ListingClientError::schema_violation(ITEM_SCHEMA, e.to_string()))
}

fn decode<T: DeserializeOwned>(schema: &'static str, body: &[u8]) -> Result<T> {
    serde_json::from_slice(body)
        .map_err(|e| ListingClientError::schema_violation(schema, e.to_string()))
}
