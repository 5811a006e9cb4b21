use axum::Router;
use axum::http::Uri;
use axum::response::Html;
use axum::routing::get;

use crate::errors::ApiError;
use crate::services::endpoint_name;

const DASHBOARD: &str = include_str!("../../assets/dashboard.html");

pub fn dashboard_router() -> Router {
    Router::new().route("/", get(get_dashboard))
}

pub async fn get_dashboard() -> Html<&'static str> {
    Html(DASHBOARD)
}

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(endpoint_name(uri.path()))
}
