use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sahayak_types::ClassifiedError;
use serde_json::json;

/// Failure body: `{"error": "<message>", "kind": "<kind>"}`.
///
/// The single place a classified failure is logged.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed JSON or a missing/blank field. Never reaches the provider.
    InvalidRequest(String),
    Classified(ClassifiedError),
}

impl From<ClassifiedError> for ApiError {
    fn from(err: ClassifiedError) -> Self {
        Self::Classified(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": message, "kind": "invalid_request"})),
            )
                .into_response(),
            Self::Classified(err) => {
                tracing::error!(kind = ?err.kind(), "Request failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": err.to_string(), "kind": err.kind()})),
                )
                    .into_response()
            },
        }
    }
}
