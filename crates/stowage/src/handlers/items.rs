use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use stowage_core::item::{generate_item_id, item_from_payload, Item};

use crate::{
    handlers::{ApiError, JsonPayload},
    state::AppState,
};

/// List all items (GET /items).
///
/// Returns the whole collection; an empty table yields `[]`.
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = state
        .items
        .scan_items()
        .await
        .map_err(ApiError::backend("Failed to fetch items"))?;

    tracing::debug!(count = items.len(), "Scanned items");

    Ok(Json(items))
}

/// Create a new item (POST /items).
///
/// Merges a generated `id` with the caller's fields and stores the result.
pub async fn create_item(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let item = item_from_payload(generate_item_id(), payload)?;

    state
        .items
        .put_item(&item)
        .await
        .map_err(ApiError::backend("Failed to create item"))?;

    tracing::info!(item_id = ?item.id(), "Created new item");

    Ok((StatusCode::CREATED, Json(item)))
}

/// Write a key-only record (POST /items/{id}).
pub async fn put_item_key(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state
        .items
        .put_key(&id)
        .await
        .map_err(ApiError::backend("Failed to write item"))?;

    tracing::info!(item_id = %id, "Wrote item key");

    Ok(Json(json!({ "ok": true, "id": id })))
}
