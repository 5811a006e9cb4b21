use std::sync::Arc;

use remotesense_api::models::{BeepSetting, LedColor};
use sqlx::{Error, Pool, Sqlite, Transaction};
use time::OffsetDateTime;

use crate::configs::Storage;
use crate::models::{DEVICE_STATE_ID, DeviceState};

#[derive(Clone)]
pub struct DeviceStateRepository {
    storage: Arc<Storage>,
}

impl DeviceStateRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub fn get_pool(&self) -> &Pool<Sqlite> {
        self.storage.get_pool()
    }
}

impl DeviceStateRepository {
    /// Creates the state row with defaults unless it already exists.
    pub async fn ensure(
        &self,
        now: OffsetDateTime,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<(), Error> {
        sqlx::query("INSERT OR IGNORE INTO device_state (id, updated_at) VALUES ($1, $2)")
            .bind(DEVICE_STATE_ID)
            .bind(now)
            .execute(&mut **transaction)
            .await?;

        Ok(())
    }

    pub async fn find(&self) -> Result<Option<DeviceState>, Error> {
        let state: Option<DeviceState> =
            sqlx::query_as("SELECT * FROM device_state WHERE id = $1")
                .bind(DEVICE_STATE_ID)
                .fetch_optional(self.storage.get_pool())
                .await?;

        Ok(state)
    }

    pub async fn get_or_create(&self, now: OffsetDateTime) -> Result<DeviceState, Error> {
        let mut tx = self.storage.get_pool().begin().await?;
        self.ensure(now, &mut tx).await?;

        let state: DeviceState = sqlx::query_as("SELECT * FROM device_state WHERE id = $1")
            .bind(DEVICE_STATE_ID)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(state)
    }

    pub async fn update_led(
        &self,
        led: &LedColor,
        now: OffsetDateTime,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<(), Error> {
        sqlx::query(
            r#"
            UPDATE device_state
            SET led_r = $1, led_g = $2, led_b = $3, updated_at = $4
            WHERE id = $5
            "#,
        )
        .bind(led.r)
        .bind(led.g)
        .bind(led.b)
        .bind(now)
        .bind(DEVICE_STATE_ID)
        .execute(&mut **transaction)
        .await?;

        Ok(())
    }

    pub async fn update_beep(
        &self,
        beep: &BeepSetting,
        now: OffsetDateTime,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<(), Error> {
        sqlx::query(
            r#"
            UPDATE device_state
            SET last_beep_ms = $1, last_beep_duty = $2, updated_at = $3
            WHERE id = $4
            "#,
        )
        .bind(beep.ms)
        .bind(beep.duty)
        .bind(now)
        .bind(DEVICE_STATE_ID)
        .execute(&mut **transaction)
        .await?;

        Ok(())
    }

    pub async fn start_song(
        &self,
        song_json: &str,
        gap_ms: i64,
        duty: i64,
        now: OffsetDateTime,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<(), Error> {
        sqlx::query(
            r#"
            UPDATE device_state
            SET song_json = $1, song_gap_ms = $2, song_duty = $3, song_is_playing = TRUE, updated_at = $4
            WHERE id = $5
            "#,
        )
        .bind(song_json)
        .bind(gap_ms)
        .bind(duty)
        .bind(now)
        .bind(DEVICE_STATE_ID)
        .execute(&mut **transaction)
        .await?;

        Ok(())
    }

    pub async fn stop_song(
        &self,
        now: OffsetDateTime,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<(), Error> {
        sqlx::query(
            r#"
            UPDATE device_state
            SET song_is_playing = FALSE, updated_at = $1
            WHERE id = $2
            "#,
        )
        .bind(now)
        .bind(DEVICE_STATE_ID)
        .execute(&mut **transaction)
        .await?;

        Ok(())
    }
}
