use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use remotesense_api::models::WifiInfo;
use remotesense_api::restful::{SensorsResponse, StateResponse};
use remotesense_mock::clock::{Clock, format_utc};
use remotesense_mock::{GeneratorKind, Synthesizer};

use crate::errors::ApiError;
use crate::repositories::DeviceStateRepository;

#[derive(Clone)]
pub struct SensorState {
    pub device_state_repository: Arc<DeviceStateRepository>,
    pub synthesizer: Arc<Synthesizer<GeneratorKind>>,
    pub clock: Arc<dyn Clock>,
    pub wifi: WifiInfo,
}

pub fn sensor_router(sensor_state: SensorState) -> Router {
    Router::new()
        .route("/sensors", get(get_sensors))
        .route("/state", get(get_state))
        .with_state(sensor_state)
}

#[utoipa::path(
    get,
    path = "/sensors",
    tag = "sensor",
    responses(
        (status = 200, description = "Simulated readings for the current time slot", body = SensorsResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_sensors(
    State(state): State<SensorState>,
) -> Result<Json<SensorsResponse>, ApiError> {
    let now = state.clock.now();
    let reading = state.synthesizer.read(now.unix_timestamp());

    Ok(Json(SensorsResponse {
        ok: true,
        timestamp_utc: format_utc(now)?,
        sensors: reading.environment(),
        light: reading.light,
    }))
}

#[utoipa::path(
    get,
    path = "/state",
    tag = "sensor",
    params(
        ("internal" = Option<u8>, Query, description = "1 skips the audit log")
    ),
    responses(
        (status = 200, description = "Readings, network identity and actuator state", body = StateResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_state(State(state): State<SensorState>) -> Result<Json<StateResponse>, ApiError> {
    let now = state.clock.now();
    let reading = state.synthesizer.read(now.unix_timestamp());
    let device_state = state.device_state_repository.get_or_create(now).await?;

    Ok(Json(StateResponse {
        ok: true,
        timestamp_utc: format_utc(now)?,
        wifi: state.wifi.clone(),
        sensors: reading.environment(),
        light: reading.light,
        actuators: device_state.actuators(),
    }))
}
