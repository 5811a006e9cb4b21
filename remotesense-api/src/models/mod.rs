mod device;

pub use device::*;

use serde::{Deserialize, Serialize};

/// A synthesized snapshot of every simulated sensor.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Temperature in Celsius, 18.0..=30.0, two decimals
    pub temperature: f64,
    /// Relative humidity percentage, 25.0..=75.0, two decimals
    pub humidity: f64,
    /// Light intensity derivations
    pub light: LightReading,
}

impl Reading {
    pub fn environment(&self) -> EnvironmentReading {
        EnvironmentReading {
            temperature: self.temperature,
            humidity: self.humidity,
        }
    }
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentReading {
    /// Temperature in Celsius
    pub temperature: f64,
    /// Relative humidity percentage
    pub humidity: f64,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightReading {
    /// 12-bit converter counts, 0..=4095
    pub adc: u16,
    /// Brightness percentage, 0..=100
    pub percent: u8,
}
