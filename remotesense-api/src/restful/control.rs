use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::models::{BeepSetting, LedColor};

pub const DEFAULT_SONG_GAP_MS: i64 = 20;
pub const DEFAULT_SONG_DUTY: i64 = 110;

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaySongRequest {
    /// Notes to play, passed through untouched
    pub melody: Vec<serde_json::Value>,
    /// Silence between notes in milliseconds
    #[serde(rename = "gapMs", default, skip_serializing_if = "Option::is_none")]
    pub gap_ms: Option<i64>,
    /// PWM duty, 0..=255
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duty: Option<i64>,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedResponse {
    pub ok: bool,
    pub endpoint: String,
    pub assigned: LedColor,
    pub timestamp_utc: String,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeepResponse {
    pub ok: bool,
    pub endpoint: String,
    pub assigned: BeepSetting,
    pub timestamp_utc: String,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongAccepted {
    #[serde(rename = "gapMs")]
    pub gap_ms: i64,
    pub duty: i64,
    pub notes: String,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongResponse {
    pub ok: bool,
    pub endpoint: String,
    pub accepted: SongAccepted,
    pub timestamp_utc: String,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointResponse {
    pub ok: bool,
    pub endpoint: String,
    pub timestamp_utc: String,
}
