use std::sync::Arc;

use sqlx::Error;

use crate::configs::Storage;
use crate::models::RequestLog;

/// Endpoints the activity view never shows.
pub const HIDDEN_ENDPOINTS: [&str; 2] = ["log", "state"];

#[derive(Clone)]
pub struct RequestLogRepository {
    storage: Arc<Storage>,
}

impl RequestLogRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }
}

impl RequestLogRepository {
    pub async fn create(&self, item: &RequestLog) -> Result<i32, Error> {
        let id = sqlx::query(
            r#"
            INSERT INTO request_log (ts, ip, method, endpoint, query_string, user_agent, body_trunc)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(item.ts)
        .bind(&item.ip)
        .bind(&item.method)
        .bind(&item.endpoint)
        .bind(&item.query_string)
        .bind(&item.user_agent)
        .bind(&item.body_trunc)
        .execute(self.storage.get_pool())
        .await?
        .last_insert_rowid();

        Ok(id as i32)
    }

    /// Newest first, without the dashboard's own polling endpoints.
    pub async fn find_recent_visible(&self, limit: i64) -> Result<Vec<RequestLog>, Error> {
        let logs: Vec<RequestLog> = sqlx::query_as(
            r#"
            SELECT * FROM request_log
            WHERE endpoint <> $1 AND endpoint <> $2
            ORDER BY ts DESC, id DESC
            LIMIT $3
            "#,
        )
        .bind(HIDDEN_ENDPOINTS[0])
        .bind(HIDDEN_ENDPOINTS[1])
        .bind(limit)
        .fetch_all(self.storage.get_pool())
        .await?;

        Ok(logs)
    }

    pub async fn find_all(&self) -> Result<Vec<RequestLog>, Error> {
        let logs: Vec<RequestLog> = sqlx::query_as("SELECT * FROM request_log ORDER BY id")
            .fetch_all(self.storage.get_pool())
            .await?;

        Ok(logs)
    }
}
