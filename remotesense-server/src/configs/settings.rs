use std::env;

use config::{Config, ConfigError, Environment, File};
use remotesense_api::models::WifiInfo;
use remotesense_mock::GeneratorKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Database {
    pub clean_start: bool,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simulation {
    pub slot_seconds: i64,
    pub generator: GeneratorKind,
}

impl Default for Simulation {
    fn default() -> Self {
        Self {
            slot_seconds: remotesense_mock::simulate::SLOT_SECONDS,
            generator: GeneratorKind::default(),
        }
    }
}

/// Identity the simulated device reports in `/state`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub wifi_ssid: String,
    pub wifi_ip: String,
}

impl Device {
    pub fn wifi(&self) -> WifiInfo {
        WifiInfo {
            ssid: self.wifi_ssid.clone(),
            ip: self.wifi_ip.clone(),
        }
    }
}

impl Default for Device {
    fn default() -> Self {
        Self {
            wifi_ssid: String::from("SIM_NET"),
            wifi_ip: String::from("0.0.0.0"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: Server,
    pub logger: Logger,
    pub database: Database,
    #[serde(default)]
    pub simulation: Simulation,
    #[serde(default)]
    pub device: Device,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or("development".into());

        let settings: Settings = Config::builder()
            .add_source(File::with_name("configs/default"))
            .add_source(File::with_name(&format!("configs/{run_mode}")).required(false))
            .add_source(Environment::default().separator("__"))
            .build()?
            .try_deserialize()?;

        settings.validate()?;

        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.simulation.slot_seconds < 1 {
            return Err(ConfigError::Message(
                "simulation.slot_seconds must be at least 1".into(),
            ));
        }

        Ok(())
    }
}
