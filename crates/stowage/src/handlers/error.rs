use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use stowage_core::item::ItemError;
use stowage_core::storage::RepositoryError;
use stowage_core::user::UserError;

/// Errors returned by request handlers.
///
/// Validation errors carry their message to the client. Backend errors
/// expose only a generic message; the underlying cause is logged.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{message}: {source}")]
    Backend {
        message: &'static str,
        #[source]
        source: RepositoryError,
    },
}

impl ApiError {
    /// Wraps a storage failure with the message shown to the client.
    pub fn backend(message: &'static str) -> impl FnOnce(RepositoryError) -> Self {
        move |source| Self::Backend { message, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            Self::Backend { message, source } => {
                tracing::error!(error = %source, "{message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": message })),
                )
                    .into_response()
            }
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<ItemError> for ApiError {
    fn from(err: ItemError) -> Self {
        Self::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_validation_maps_to_400() {
        let response = ApiError::from(UserError::MissingFields).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "name and email are required"})
        );
    }

    #[tokio::test]
    async fn test_backend_hides_cause() {
        let err = ApiError::backend("Failed to fetch users")(RepositoryError::ConnectionFailed(
            "password authentication failed".to_string(),
        ));
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Failed to fetch users"})
        );
    }
}
