use std::error::Error;

use serde::{Deserialize, Serialize};

use crate::signal::GeneratorKind;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Emitter {
    pub interval_seconds: u64,
    #[serde(default)]
    pub generator: GeneratorKind,
    #[serde(default = "default_slot_seconds")]
    pub slot_seconds: i64,
}

fn default_slot_seconds() -> i64 {
    crate::simulate::SLOT_SECONDS
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub logger: Logger,
    pub emitter: Emitter,
}

impl Settings {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        Self::parse(include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../",
            "configs/mock.toml"
        )))
    }

    pub fn parse(source: &str) -> Result<Self, Box<dyn Error>> {
        let settings: Settings = toml::from_str(source)?;

        if settings.emitter.interval_seconds == 0 {
            return Err("emitter.interval_seconds must be positive".into());
        }

        Ok(settings)
    }
}
