use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::Table;

/// One audited request.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct RequestLog {
    pub id: i32,
    pub ts: OffsetDateTime,
    pub ip: String,
    pub method: String,
    pub endpoint: String,
    pub query_string: String,
    /// At most 255 characters
    pub user_agent: String,
    /// POST bodies only, at most 2000 characters
    pub body_trunc: Option<String>,
}

#[derive(Clone)]
pub struct RequestLogTable;

impl Table for RequestLogTable {
    fn name(&self) -> &'static str {
        "request_log"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS request_log (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                ts TIMESTAMP NOT NULL,
                ip TEXT NOT NULL,
                method TEXT NOT NULL,
                endpoint TEXT NOT NULL,
                query_string TEXT NOT NULL DEFAULT '',
                user_agent TEXT NOT NULL DEFAULT '',
                body_trunc TEXT
            );
            CREATE INDEX IF NOT EXISTS idx_request_log_ts ON request_log (ts);
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS request_log;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec![]
    }
}
