//! Statistics handlers

use axum::extract::{Path, State};
use axum::Json;

use crate::error::ApiError;
use crate::handlers::items::parse_id;
use crate::state::{AppState, StoredStatistics};

/// GET /statistic/{id}
/// Get the engagement counters of a listing
pub async fn get_statistics(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<StoredStatistics>>, ApiError> {
    let id = parse_id(&id)?;
    let item = state
        .get(&id)
        .ok_or_else(|| ApiError::NotFound(format!("statistics for item {} not found", id)))?;

    Ok(Json(vec![item.statistics]))
}
