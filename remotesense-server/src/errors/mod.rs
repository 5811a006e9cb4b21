pub mod actuator;
pub mod api;

pub use actuator::ActuatorError;
pub use api::ApiError;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use remotesense_api::restful::ErrorResponse;
use uuid::Uuid;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, detail, error_id) = match self {
            ApiError::ActuatorError(e) => (e.status_code(), e.code(), e.detail(), None),
            ApiError::NotFound(endpoint) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                Some(format!("Unknown endpoint: {endpoint}")),
                None,
            ),
            ApiError::BodyError(e) => {
                tracing::debug!("Unreadable request body: {}", e);
                (
                    StatusCode::PAYLOAD_TOO_LARGE,
                    "PAYLOAD_TOO_LARGE",
                    Some("Request body too large or unreadable".to_string()),
                    None,
                )
            }
            ApiError::DatabaseError(e) => {
                let error_id = Uuid::new_v4();
                tracing::error!(error_id = ?error_id, "Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    Some("Internal server error".to_string()),
                    Some(error_id.to_string()),
                )
            }
            ApiError::FormatError(e) => {
                let error_id = Uuid::new_v4();
                tracing::error!(error_id = ?error_id, "Timestamp format error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    Some("Internal server error".to_string()),
                    Some(error_id.to_string()),
                )
            }
        };

        let body = Json(ErrorResponse {
            ok: false,
            error: code.to_string(),
            detail,
            error_id,
        });

        (status, body).into_response()
    }
}
