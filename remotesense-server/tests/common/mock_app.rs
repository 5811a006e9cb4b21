use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use remotesense_api::models::WifiInfo;
use remotesense_mock::{FixedClock, GeneratorKind, Synthesizer};
use remotesense_server::app::build_router;
use remotesense_server::configs::Storage;
use remotesense_server::models::RequestLog;
use remotesense_server::repositories::RequestLogRepository;
use remotesense_server::tests::{TEST_UNIX_TIME, create_test_storage};
use serde_json::Value;
use tower::ServiceExt;

pub struct MockApp {
    pub storage: Arc<Storage>,
    pub router: Router,
}

impl MockApp {
    pub async fn new() -> Self {
        Self::with_generator(GeneratorKind::Mt19937).await
    }

    pub async fn with_generator(generator: GeneratorKind) -> Self {
        let storage = create_test_storage().await;

        let router = build_router(
            storage.clone(),
            Arc::new(Synthesizer::new(generator)),
            Arc::new(FixedClock::at(TEST_UNIX_TIME).unwrap()),
            WifiInfo {
                ssid: String::from("TEST_NET"),
                ip: String::from("10.0.0.2"),
            },
        );

        Self { storage, router }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(
            Request::builder()
                .uri(uri)
                .method(Method::GET)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn post(&self, uri: &str, body: impl Into<Body>) -> Response<Body> {
        self.send(
            Request::builder()
                .uri(uri)
                .method(Method::POST)
                .header("Content-Type", "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
    }

    pub async fn request_logs(&self) -> Vec<RequestLog> {
        RequestLogRepository::new(self.storage.clone())
            .find_all()
            .await
            .unwrap()
    }
}

pub async fn read_text(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    String::from_utf8(body.to_vec()).unwrap()
}

pub async fn read_json(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&body).unwrap()
}
