use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;

use crate::errors::ApiError;
use crate::repositories::RequestLogRepository;
use crate::services::{LOG_VIEW_LIMIT, render_log};

#[derive(Clone)]
pub struct LogState {
    pub request_log_repository: Arc<RequestLogRepository>,
}

pub fn log_router(log_state: LogState) -> Router {
    Router::new()
        .route("/log", get(get_log))
        .with_state(log_state)
}

#[utoipa::path(
    get,
    path = "/log",
    tag = "log",
    responses(
        (status = 200, description = "HTML fragment with the latest audited requests", body = String, content_type = "text/html"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_log(State(state): State<LogState>) -> Result<Html<String>, ApiError> {
    let logs = state
        .request_log_repository
        .find_recent_visible(LOG_VIEW_LIMIT)
        .await?;

    Ok(Html(render_log(&logs)?))
}
