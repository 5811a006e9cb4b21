use std::sync::Arc;

use axum::http::{HeaderValue, header};
use axum::{Router, middleware};
use remotesense_api::models::WifiInfo;
use remotesense_mock::clock::{Clock, SystemClock};
use remotesense_mock::{GeneratorKind, Synthesizer};
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::configs::{SchemaManager, Settings, Storage};
use crate::handles::*;
use crate::middlewares::{AuditState, audit};
use crate::repositories::{DeviceStateRepository, RequestLogRepository};
use crate::services::AuditService;

const NO_CACHE: &str = "no-store, no-cache, must-revalidate, max-age=0";

pub async fn create_app(settings: &Arc<Settings>) -> Result<Router, sqlx::Error> {
    let storage = Arc::new(
        Storage::new(settings.database.clone(), SchemaManager::default()).await?,
    );

    let synthesizer = Arc::new(
        Synthesizer::new(settings.simulation.generator)
            .with_slot_seconds(settings.simulation.slot_seconds),
    );

    Ok(build_router(
        storage,
        synthesizer,
        Arc::new(SystemClock),
        settings.device.wifi(),
    ))
}

pub fn build_router(
    storage: Arc<Storage>,
    synthesizer: Arc<Synthesizer<GeneratorKind>>,
    clock: Arc<dyn Clock>,
    wifi: WifiInfo,
) -> Router {
    let device_state_repository = Arc::new(DeviceStateRepository::new(storage.clone()));
    let request_log_repository = Arc::new(RequestLogRepository::new(storage.clone()));

    let audit_state = AuditState {
        audit_service: Arc::new(AuditService::new(
            request_log_repository.clone(),
            clock.clone(),
        )),
    };

    let api = Router::new()
        .merge(sensor_router(SensorState {
            device_state_repository: device_state_repository.clone(),
            synthesizer,
            clock: clock.clone(),
            wifi,
        }))
        .merge(actuator_router(ActuatorState {
            device_state_repository: device_state_repository.clone(),
            clock: clock.clone(),
        }))
        .merge(log_router(LogState {
            request_log_repository: request_log_repository.clone(),
        }))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(audit_state, audit));

    Router::new()
        .merge(dashboard_router())
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static(NO_CACHE),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::PRAGMA,
            HeaderValue::from_static("no-cache"),
        ))
}
