//! Health and diagnostic endpoints.
//!
//! None of these touch a store, so they keep answering while the
//! backends are down.

use axum::Json;
use serde_json::{json, Value};

/// GET /healthz - Load balancer target group check.
pub async fn healthz() -> Json<Value> {
    Json(json!({ "ok": true }))
}

/// GET /health - Secondary health check.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// GET / - Plain text greeting.
pub async fn welcome() -> &'static str {
    "welcome"
}

/// GET /api/hello
pub async fn hello() -> Json<Value> {
    Json(json!({ "hello": "world" }))
}
