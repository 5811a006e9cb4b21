mod control;
mod sensor;

pub use control::*;
pub use sensor::*;

use alloc::string::String;

use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always false
    pub ok: bool,
    /// Machine readable error code, e.g. `BAD_REQUEST`
    pub error: String,
    /// Human readable explanation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Correlation id for internal errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_id: Option<String>,
}
