use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ActuatorError {
    #[error("Required parameters: {0}")]
    MissingParameters(&'static str),

    #[error("{0}")]
    OutOfRange(&'static str),

    #[error("Missing JSON body")]
    MissingBody,

    #[error("Invalid JSON body")]
    InvalidBody,

    #[error("Required field: melody (array)")]
    MissingMelody,

    #[error("gapMs and duty must be integers")]
    InvalidSongSetting,

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl ActuatorError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ActuatorError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// The 405 body carries no detail.
    pub fn detail(&self) -> Option<String> {
        match self {
            ActuatorError::MethodNotAllowed => None,
            _ => Some(self.to_string()),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ActuatorError::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            _ => "BAD_REQUEST",
        }
    }
}
