use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::routing::{get, post};
use remotesense_api::models::{BeepSetting, LedColor};
use remotesense_api::restful::{
    BeepResponse, DEFAULT_SONG_DUTY, DEFAULT_SONG_GAP_MS, EndpointResponse, LedResponse,
    PlaySongRequest, SongAccepted, SongResponse,
};
use remotesense_mock::clock::{Clock, format_utc};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::{ActuatorError, ApiError};
use crate::repositories::DeviceStateRepository;

pub const MAX_BEEP_MS: u32 = 10_000;
pub const MAX_SONG_GAP_MS: i64 = 10_000;

const SONG_NOTES: &str = "Simulation: state saved to database (no real playback)";

#[derive(Clone)]
pub struct ActuatorState {
    pub device_state_repository: Arc<DeviceStateRepository>,
    pub clock: Arc<dyn Clock>,
}

/// Raw query values; parsed by hand so a bad value yields the API's own 400.
#[derive(Debug, Default, Deserialize)]
pub struct LedQuery {
    pub r: Option<String>,
    pub g: Option<String>,
    pub b: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BeepQuery {
    pub ms: Option<String>,
    pub duty: Option<String>,
}

pub fn actuator_router(actuator_state: ActuatorState) -> Router {
    Router::new()
        .route("/setLed", get(set_led))
        .route("/beep", get(beep))
        .route("/playSong", post(play_song).fallback(method_not_allowed))
        .route("/stopSong", get(stop_song))
        .with_state(actuator_state)
}

fn parse_in_range<T: TryFrom<i64>>(raw: &str, max: i64) -> Option<T> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|value| (0..=max).contains(value))
        .and_then(|value| T::try_from(value).ok())
}

#[utoipa::path(
    get,
    path = "/setLed",
    tag = "actuator",
    params(
        ("r" = u8, Query, description = "Red, 0..255"),
        ("g" = u8, Query, description = "Green, 0..255"),
        ("b" = u8, Query, description = "Blue, 0..255")
    ),
    responses(
        (status = 200, description = "Colour stored", body = LedResponse),
        (status = 400, description = "Missing or out of range parameters")
    )
)]
pub async fn set_led(
    State(state): State<ActuatorState>,
    Query(query): Query<LedQuery>,
) -> Result<Json<LedResponse>, ApiError> {
    let (Some(r), Some(g), Some(b)) = (query.r, query.g, query.b) else {
        return Err(ActuatorError::MissingParameters("r, g, b (0..255)").into());
    };

    let out_of_range = || ActuatorError::OutOfRange("Values out of range: r, g, b must be 0..255");
    let led = LedColor {
        r: parse_in_range(&r, 255).ok_or_else(out_of_range)?,
        g: parse_in_range(&g, 255).ok_or_else(out_of_range)?,
        b: parse_in_range(&b, 255).ok_or_else(out_of_range)?,
    };

    let now = state.clock.now();
    let mut tx = state.device_state_repository.get_pool().begin().await?;
    state.device_state_repository.ensure(now, &mut tx).await?;
    state
        .device_state_repository
        .update_led(&led, now, &mut tx)
        .await?;
    tx.commit().await?;

    tracing::debug!(r = led.r, g = led.g, b = led.b, "led colour updated");

    Ok(Json(LedResponse {
        ok: true,
        endpoint: "setLed".to_string(),
        assigned: led,
        timestamp_utc: format_utc(now)?,
    }))
}

#[utoipa::path(
    get,
    path = "/beep",
    tag = "actuator",
    params(
        ("ms" = u32, Query, description = "Duration, 0..10000"),
        ("duty" = u8, Query, description = "PWM duty, 0..255")
    ),
    responses(
        (status = 200, description = "Beep stored", body = BeepResponse),
        (status = 400, description = "Missing or out of range parameters")
    )
)]
pub async fn beep(
    State(state): State<ActuatorState>,
    Query(query): Query<BeepQuery>,
) -> Result<Json<BeepResponse>, ApiError> {
    let (Some(ms), Some(duty)) = (query.ms, query.duty) else {
        return Err(ActuatorError::MissingParameters("ms, duty").into());
    };

    let setting = BeepSetting {
        ms: parse_in_range(&ms, MAX_BEEP_MS as i64)
            .ok_or(ActuatorError::OutOfRange("ms out of range (0..10000)"))?,
        duty: parse_in_range(&duty, 255)
            .ok_or(ActuatorError::OutOfRange("duty out of range (0..255)"))?,
    };

    let now = state.clock.now();
    let mut tx = state.device_state_repository.get_pool().begin().await?;
    state.device_state_repository.ensure(now, &mut tx).await?;
    state
        .device_state_repository
        .update_beep(&setting, now, &mut tx)
        .await?;
    tx.commit().await?;

    tracing::debug!(ms = setting.ms, duty = setting.duty, "beep recorded");

    Ok(Json(BeepResponse {
        ok: true,
        endpoint: "beep".to_string(),
        assigned: setting,
        timestamp_utc: format_utc(now)?,
    }))
}

/// Checks the raw body and resolves defaults. The body itself is stored verbatim.
pub fn parse_song(body: &[u8]) -> Result<PlaySongRequest, ActuatorError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ActuatorError::MissingBody);
    }

    let value: Value = serde_json::from_slice(body).map_err(|_| ActuatorError::InvalidBody)?;
    let Some(object) = value.as_object() else {
        return Err(ActuatorError::InvalidBody);
    };

    if !object.get("melody").is_some_and(Value::is_array) {
        return Err(ActuatorError::MissingMelody);
    }

    let request: PlaySongRequest =
        serde_json::from_value(value).map_err(|_| ActuatorError::InvalidSongSetting)?;

    if !(0..=MAX_SONG_GAP_MS).contains(&request.gap_ms.unwrap_or(DEFAULT_SONG_GAP_MS)) {
        return Err(ActuatorError::OutOfRange("gapMs out of range (0..10000)"));
    }

    if !(0..=255).contains(&request.duty.unwrap_or(DEFAULT_SONG_DUTY)) {
        return Err(ActuatorError::OutOfRange("duty out of range (0..255)"));
    }

    Ok(request)
}

#[utoipa::path(
    post,
    path = "/playSong",
    tag = "actuator",
    request_body = PlaySongRequest,
    responses(
        (status = 200, description = "Song accepted", body = SongResponse),
        (status = 400, description = "Missing or malformed body"),
        (status = 405, description = "Only POST is accepted")
    )
)]
pub async fn play_song(
    State(state): State<ActuatorState>,
    body: Bytes,
) -> Result<Json<SongResponse>, ApiError> {
    let request = parse_song(&body)?;
    let gap_ms = request.gap_ms.unwrap_or(DEFAULT_SONG_GAP_MS);
    let duty = request.duty.unwrap_or(DEFAULT_SONG_DUTY);
    let raw = String::from_utf8_lossy(&body);

    let now = state.clock.now();
    let mut tx = state.device_state_repository.get_pool().begin().await?;
    state.device_state_repository.ensure(now, &mut tx).await?;
    state
        .device_state_repository
        .start_song(&raw, gap_ms, duty, now, &mut tx)
        .await?;
    tx.commit().await?;

    tracing::debug!(notes = request.melody.len(), gap_ms, duty, "song started");

    Ok(Json(SongResponse {
        ok: true,
        endpoint: "playSong".to_string(),
        accepted: SongAccepted {
            gap_ms,
            duty,
            notes: SONG_NOTES.to_string(),
        },
        timestamp_utc: format_utc(now)?,
    }))
}

pub async fn method_not_allowed() -> ApiError {
    ActuatorError::MethodNotAllowed.into()
}

#[utoipa::path(
    get,
    path = "/stopSong",
    tag = "actuator",
    responses(
        (status = 200, description = "Playback flag cleared", body = EndpointResponse)
    )
)]
pub async fn stop_song(
    State(state): State<ActuatorState>,
) -> Result<Json<EndpointResponse>, ApiError> {
    let now = state.clock.now();
    let mut tx = state.device_state_repository.get_pool().begin().await?;
    state.device_state_repository.ensure(now, &mut tx).await?;
    state.device_state_repository.stop_song(now, &mut tx).await?;
    tx.commit().await?;

    tracing::debug!("song stopped");

    Ok(Json(EndpointResponse {
        ok: true,
        endpoint: "stopSong".to_string(),
        timestamp_utc: format_utc(now)?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_in_range() {
        assert_eq!(parse_in_range::<u8>("255", 255), Some(255));
        assert_eq!(parse_in_range::<u8>(" 7 ", 255), Some(7));
        assert_eq!(parse_in_range::<u8>("256", 255), None);
        assert_eq!(parse_in_range::<u8>("-1", 255), None);
        assert_eq!(parse_in_range::<u8>("12abc", 255), None);
        assert_eq!(parse_in_range::<u32>("10000", 10_000), Some(10_000));
    }

    #[test]
    fn test_parse_song_defaults() {
        let request = parse_song(br#"{"melody":[{"f":440,"ms":100}]}"#).unwrap();

        assert_eq!(request.gap_ms, None);
        assert_eq!(request.duty, None);
        assert_eq!(request.melody.len(), 1);
    }

    #[test]
    fn test_parse_song_null_setting_falls_back() {
        let request = parse_song(br#"{"melody":[],"gapMs":null,"duty":90}"#).unwrap();

        assert_eq!(request.gap_ms, None);
        assert_eq!(request.duty, Some(90));
    }

    #[test]
    fn test_parse_song_rejections() {
        assert!(matches!(parse_song(b""), Err(ActuatorError::MissingBody)));
        assert!(matches!(parse_song(b"  \n"), Err(ActuatorError::MissingBody)));
        assert!(matches!(parse_song(b"{not json"), Err(ActuatorError::InvalidBody)));
        assert!(matches!(parse_song(b"[1,2]"), Err(ActuatorError::InvalidBody)));
        assert!(matches!(parse_song(b"{}"), Err(ActuatorError::MissingMelody)));
        assert!(matches!(
            parse_song(br#"{"melody":"abc"}"#),
            Err(ActuatorError::MissingMelody)
        ));
        assert!(matches!(
            parse_song(br#"{"melody":[],"gapMs":"fast"}"#),
            Err(ActuatorError::InvalidSongSetting)
        ));
        assert!(matches!(
            parse_song(br#"{"melody":[],"duty":300}"#),
            Err(ActuatorError::OutOfRange(_))
        ));
        assert!(matches!(
            parse_song(br#"{"melody":[],"gapMs":-5}"#),
            Err(ActuatorError::OutOfRange(_))
        ));
    }
}
