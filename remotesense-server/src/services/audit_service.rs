use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderMap;
use remotesense_mock::clock::Clock;

use crate::models::RequestLog;
use crate::repositories::RequestLogRepository;

pub const MAX_USER_AGENT_CHARS: usize = 255;
pub const MAX_BODY_CHARS: usize = 2000;

const FORWARDED_FOR: &str = "x-forwarded-for";
const UNKNOWN_IP: &str = "0.0.0.0";

/// What the audit trail keeps about one request, before truncation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditEntry {
    pub ip: String,
    pub method: String,
    pub endpoint: String,
    pub query_string: String,
    pub user_agent: String,
    pub body: Option<String>,
}

pub struct AuditService {
    request_log_repository: Arc<RequestLogRepository>,
    clock: Arc<dyn Clock>,
}

impl AuditService {
    pub fn new(request_log_repository: Arc<RequestLogRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            request_log_repository,
            clock,
        }
    }

    pub async fn record(&self, entry: AuditEntry) -> Result<i32, sqlx::Error> {
        let log = RequestLog {
            id: 0,
            ts: self.clock.now(),
            ip: entry.ip,
            method: entry.method.to_uppercase(),
            endpoint: entry.endpoint,
            query_string: entry.query_string,
            user_agent: truncate_chars(&entry.user_agent, MAX_USER_AGENT_CHARS),
            body_trunc: entry.body.map(|body| truncate_chars(&body, MAX_BODY_CHARS)),
        };

        self.request_log_repository.create(&log).await
    }
}

/// Last non-empty path segment; the bare root counts as `state`.
pub fn endpoint_name(path: &str) -> String {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .next_back()
        .unwrap_or("state")
        .to_string()
}

/// Requests flagged with `internal=1` come from the dashboard's own polling.
pub fn is_internal(query: Option<&str>) -> bool {
    query.is_some_and(|query| {
        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .any(|(key, value)| key == "internal" && value == "1")
    })
}

pub fn should_record(endpoint: &str, query: Option<&str>) -> bool {
    !is_internal(query) && endpoint != "log"
}

/// First `X-Forwarded-For` hop, else the socket peer, else `0.0.0.0`.
pub fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    let forwarded = headers
        .get(FORWARDED_FOR)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|first| !first.is_empty());

    match (forwarded, peer) {
        (Some(first), _) => first.to_string(),
        (None, Some(peer)) => peer.ip().to_string(),
        (None, None) => UNKNOWN_IP.to_string(),
    }
}

pub fn truncate_chars(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}
