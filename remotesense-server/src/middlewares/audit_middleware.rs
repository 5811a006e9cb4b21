use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::{ConnectInfo, State};
use axum::http::{Method, Request};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::headers::{HeaderMapExt, UserAgent};

use crate::errors::ApiError;
use crate::services::{AuditEntry, AuditService, client_ip, endpoint_name, should_record};

/// Largest POST body accepted, equal to axum's default extractor limit so the
/// audit layer never rejects what a handler would take.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

#[derive(Clone)]
pub struct AuditState {
    pub audit_service: Arc<AuditService>,
}

pub async fn audit(
    State(state): State<AuditState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let endpoint = endpoint_name(req.uri().path());
    let query = req.uri().query().map(str::to_owned);

    if !should_record(&endpoint, query.as_deref()) {
        return Ok(next.run(req).await);
    }

    let peer = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let ip = client_ip(req.headers(), peer);
    let user_agent = req
        .headers()
        .typed_get::<UserAgent>()
        .map(|agent| agent.as_str().to_owned())
        .unwrap_or_default();
    let method = req.method().clone();

    let mut entry = AuditEntry {
        ip,
        method: method.to_string(),
        endpoint,
        query_string: query.unwrap_or_default(),
        user_agent,
        body: None,
    };

    if method != Method::POST {
        record(&state, entry).await;
        return Ok(next.run(req).await);
    }

    // The body stream can only be read once, so it is put back for the handler.
    let (parts, body) = req.into_parts();
    match axum::body::to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => {
            entry.body = Some(String::from_utf8_lossy(&bytes).into_owned());
            record(&state, entry).await;

            Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
        }
        Err(e) => {
            record(&state, entry).await;

            Err(e.into())
        }
    }
}

async fn record(state: &AuditState, entry: AuditEntry) {
    if let Err(e) = state.audit_service.record(entry).await {
        tracing::error!("Failed to record request: {}", e);
    }
}
