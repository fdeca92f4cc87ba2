//! Maps a `{"items": [...]}` document into `Item` records.

use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::types::Item;

/// Parse the top-level `items` array of a search response.
///
/// A document without an `items` array is an error, never an empty list.
/// Missing `mallName` fields default to an empty string.
pub fn from_json_to_items(body: &str) -> Result<Vec<Item>, ApiError> {
    let document: Value =
        serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))?;

    let object = document
        .as_object()
        .ok_or_else(|| ApiError::UnexpectedShape("top-level value is not an object".to_string()))?;
    let items = object
        .get("items")
        .ok_or_else(|| ApiError::UnexpectedShape("missing `items` key".to_string()))?
        .as_array()
        .ok_or_else(|| ApiError::UnexpectedShape("`items` is not an array".to_string()))?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            Item::deserialize(item)
                .map_err(|e| ApiError::Deserialization(format!("items[{i}]: {e}")))
        })
        .collect()
}
