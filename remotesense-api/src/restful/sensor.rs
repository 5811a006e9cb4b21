use alloc::string::String;

use serde::{Deserialize, Serialize};

use crate::models::{Actuators, EnvironmentReading, LightReading, WifiInfo};

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorsResponse {
    pub ok: bool,
    /// `YYYY-MM-DDTHH:MM:SSZ`
    pub timestamp_utc: String,
    pub sensors: EnvironmentReading,
    pub light: LightReading,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateResponse {
    pub ok: bool,
    /// `YYYY-MM-DDTHH:MM:SSZ`
    pub timestamp_utc: String,
    pub wifi: WifiInfo,
    pub sensors: EnvironmentReading,
    pub light: LightReading,
    pub actuators: Actuators,
}
