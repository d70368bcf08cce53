use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{
        health::{health, healthz, hello, welcome},
        items::{create_item, list_items, put_item_key},
        users::{create_user, list_users},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        // Health and diagnostics
        .route("/", get(welcome))
        .route("/healthz", get(healthz))
        .route("/health", get(health))
        .route("/api/hello", get(hello))
        // Document store
        .route("/items", get(list_items).post(create_item))
        .route("/items/{id}", post(put_item_key))
        // Relational store
        .route("/users", get(list_users).post(create_user))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
