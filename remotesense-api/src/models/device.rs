use alloc::string::String;

use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeepSetting {
    /// Beep duration in milliseconds, 0..=10000
    pub ms: u32,
    /// PWM duty, 0..=255
    pub duty: u8,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuzzerStatus {
    /// Duration of the last beep in milliseconds
    pub last_beep_ms: u32,
    /// Duty of the last beep
    pub last_beep_duty: u8,
    /// 1 while a song is playing, otherwise 0
    pub song_is_playing: u8,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actuators {
    pub led: LedColor,
    pub buzzer: BuzzerStatus,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiInfo {
    /// Network name reported by the simulated device
    pub ssid: String,
    /// Address reported by the simulated device
    pub ip: String,
}
