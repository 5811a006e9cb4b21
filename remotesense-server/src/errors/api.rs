use super::ActuatorError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Actuator error: {0}")]
    ActuatorError(#[from] ActuatorError),

    #[error("Unknown endpoint: {0}")]
    NotFound(String),

    #[error("Request body error: {0}")]
    BodyError(#[from] axum::Error),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Timestamp format error: {0}")]
    FormatError(#[from] time::error::Format),
}
