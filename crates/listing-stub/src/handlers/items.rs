//! Listing handlers

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::{AppState, NewItem, StoredItem, StoredStatistics};

/// POST /item
/// Create a listing
pub async fn create_item(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<StoredItem>, ApiError> {
    let document: Value = serde_json::from_slice(&body)
        .map_err(|e| ApiError::BadRequest(format!("invalid JSON body: {}", e)))?;
    let new_item = parse_new_item(&document)?;

    let item = state.insert(new_item);
    tracing::info!(id = %item.id, seller_id = item.seller_id, "Item created");

    Ok(Json(item))
}

/// GET /item/{id}
/// Get a listing by id, wrapped in a one-element array
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<StoredItem>>, ApiError> {
    let id = parse_id(&id)?;
    let item = state
        .get(&id)
        .ok_or_else(|| ApiError::NotFound(format!("item {} not found", id)))?;

    Ok(Json(vec![item]))
}

/// GET /{seller_id}/item
/// List all listings of a seller
pub async fn list_seller_items(
    State(state): State<AppState>,
    Path(seller_id): Path<String>,
) -> Result<Json<Vec<StoredItem>>, ApiError> {
    let seller_id: i64 = seller_id
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("invalid sellerID: {}", seller_id)))?;

    Ok(Json(state.by_seller(seller_id)))
}

/// Parse a listing id; malformed ids are a client error, not a miss
pub(crate) fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::BadRequest(format!("invalid id: {}", raw)))
}

/// Validate a create document field by field
fn parse_new_item(document: &Value) -> Result<NewItem, ApiError> {
    let object = document
        .as_object()
        .ok_or_else(|| ApiError::BadRequest("body must be a JSON object".to_string()))?;

    let seller_id = required_integer(object.get("sellerID"), "sellerID")?;
    let price = required_integer(object.get("price"), "price")?;

    let name = match object.get("name") {
        None | Some(Value::Null) => {
            return Err(ApiError::BadRequest("field name is required".to_string()))
        }
        Some(Value::String(name)) if name.trim().is_empty() => {
            return Err(ApiError::BadRequest("field name must not be empty".to_string()))
        }
        Some(Value::String(name)) => name.clone(),
        Some(_) => return Err(ApiError::BadRequest("field name must be a string".to_string())),
    };

    let statistics = match object.get("statistics") {
        None | Some(Value::Null) => {
            return Err(ApiError::BadRequest(
                "field statistics is required".to_string(),
            ))
        }
        Some(Value::Object(stats)) => StoredStatistics {
            likes: required_integer(stats.get("likes"), "statistics.likes")?,
            view_count: required_integer(stats.get("viewCount"), "statistics.viewCount")?,
            contacts: required_integer(stats.get("contacts"), "statistics.contacts")?,
        },
        Some(_) => {
            return Err(ApiError::BadRequest(
                "field statistics must be an object".to_string(),
            ))
        }
    };

    Ok(NewItem {
        seller_id,
        name,
        price,
        statistics,
    })
}

fn required_integer(value: Option<&Value>, field: &str) -> Result<i64, ApiError> {
    match value {
        None | Some(Value::Null) => Err(ApiError::BadRequest(format!(
            "field {} is required",
            field
        ))),
        Some(value) => match value.as_i64() {
            Some(n) if n >= 0 => Ok(n),
            Some(_) => Err(ApiError::BadRequest(format!(
                "field {} must not be negative",
                field
            ))),
            None => Err(ApiError::BadRequest(format!(
                "field {} must be an integer",
                field
            ))),
        },
    }
}
