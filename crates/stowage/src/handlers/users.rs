use axum::{extract::State, http::StatusCode, Json};

use stowage_core::user::{validate_new_user, User};

use crate::{
    handlers::{ApiError, JsonPayload},
    state::AppState,
};

/// List all users (GET /users), ordered by ascending id.
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state
        .users
        .list_users()
        .await
        .map_err(ApiError::backend("Failed to fetch users"))?;

    Ok(Json(users))
}

/// Create a new user (POST /users).
///
/// Rejects the request before touching the store when `name` or `email`
/// is missing.
pub async fn create_user(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let new_user = validate_new_user(&payload)?;

    let user = state
        .users
        .insert_user(&new_user)
        .await
        .map_err(ApiError::backend("Failed to create user"))?;

    tracing::info!(user_id = user.id, "Created new user");

    Ok((StatusCode::CREATED, Json(user)))
}
