use remotesense_api::models::{Actuators, BuzzerStatus, LedColor};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::Table;

/// The simulated device owns exactly one state row.
pub const DEVICE_STATE_ID: i32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DeviceState {
    pub id: i32,
    pub led_r: i32,
    pub led_g: i32,
    pub led_b: i32,
    pub last_beep_ms: i32,
    pub last_beep_duty: i32,
    /// Raw body of the last accepted song
    pub song_json: Option<String>,
    pub song_gap_ms: i32,
    pub song_duty: i32,
    pub song_is_playing: bool,
    pub updated_at: OffsetDateTime,
}

fn to_u8(value: i32) -> u8 {
    value.clamp(0, u8::MAX as i32) as u8
}

impl DeviceState {
    pub fn actuators(&self) -> Actuators {
        Actuators {
            led: LedColor {
                r: to_u8(self.led_r),
                g: to_u8(self.led_g),
                b: to_u8(self.led_b),
            },
            buzzer: BuzzerStatus {
                last_beep_ms: self.last_beep_ms.max(0) as u32,
                last_beep_duty: to_u8(self.last_beep_duty),
                song_is_playing: u8::from(self.song_is_playing),
            },
        }
    }
}

#[derive(Clone)]
pub struct DeviceStateTable;

impl Table for DeviceStateTable {
    fn name(&self) -> &'static str {
        "device_state"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS device_state (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                led_r INTEGER NOT NULL DEFAULT 0 CHECK (led_r BETWEEN 0 AND 255),
                led_g INTEGER NOT NULL DEFAULT 0 CHECK (led_g BETWEEN 0 AND 255),
                led_b INTEGER NOT NULL DEFAULT 0 CHECK (led_b BETWEEN 0 AND 255),
                last_beep_ms INTEGER NOT NULL DEFAULT 0,
                last_beep_duty INTEGER NOT NULL DEFAULT 0 CHECK (last_beep_duty BETWEEN 0 AND 255),
                song_json TEXT,
                song_gap_ms INTEGER NOT NULL DEFAULT 20,
                song_duty INTEGER NOT NULL DEFAULT 110,
                song_is_playing BOOLEAN NOT NULL DEFAULT FALSE,
                updated_at TIMESTAMP NOT NULL
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS device_state;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec![]
    }
}
