use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use remotesense_mock::GeneratorKind;
use serde_json::json;

mod common;
use common::mock_app::{MockApp, read_json, read_text};

#[tokio::test]
async fn test_get_sensors() {
    let app = MockApp::new().await;

    let response = app.get("/sensors").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;

    assert_eq!(body["ok"], json!(true));
    assert_eq!(body["timestamp_utc"], json!("2023-11-14T22:13:20Z"));
    assert_eq!(body["sensors"]["temperature"], json!(23.22));
    assert_eq!(body["sensors"]["humidity"], json!(39.54));
    assert_eq!(body["light"], json!({ "adc": 1090, "percent": 26 }));
}

#[tokio::test]
async fn test_get_sensors_with_std_generator() {
    let app = MockApp::with_generator(GeneratorKind::StdRng).await;

    let body = read_json(app.get("/sensors").await).await;

    let temperature = body["sensors"]["temperature"].as_f64().unwrap();
    let humidity = body["sensors"]["humidity"].as_f64().unwrap();
    let adc = body["light"]["adc"].as_u64().unwrap();
    let percent = body["light"]["percent"].as_u64().unwrap();

    assert!((18.0..=30.0).contains(&temperature));
    assert!((25.0..=75.0).contains(&humidity));
    assert!(adc <= 4095);
    assert!(percent <= 100);
}

#[tokio::test]
async fn test_get_state_defaults() {
    let app = MockApp::new().await;

    let response = app.get("/state").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;

    assert_eq!(body["ok"], json!(true));
    assert_eq!(body["timestamp_utc"], json!("2023-11-14T22:13:20Z"));
    assert_eq!(body["wifi"], json!({ "ssid": "TEST_NET", "ip": "10.0.0.2" }));
    assert_eq!(body["sensors"]["temperature"], json!(23.22));
    assert_eq!(body["light"]["adc"], json!(1090));
    assert_eq!(
        body["actuators"],
        json!({
            "led": { "r": 0, "g": 0, "b": 0 },
            "buzzer": { "last_beep_ms": 0, "last_beep_duty": 0, "song_is_playing": 0 }
        })
    );
}

#[tokio::test]
async fn test_sensors_and_state_agree() {
    let app = MockApp::new().await;

    let sensors = read_json(app.get("/sensors").await).await;
    let state = read_json(app.get("/state").await).await;

    assert_eq!(sensors["sensors"], state["sensors"]);
    assert_eq!(sensors["light"], state["light"]);
}

#[tokio::test]
async fn test_response_headers() {
    let app = MockApp::new().await;

    let response = app
        .send(
            Request::builder()
                .uri("/sensors")
                .method(Method::GET)
                .header(header::ORIGIN, "http://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

    let headers = response.headers();

    assert_eq!(
        headers[header::CACHE_CONTROL],
        "no-store, no-cache, must-revalidate, max-age=0"
    );
    assert_eq!(headers[header::PRAGMA], "no-cache");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert!(
        headers[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("application/json")
    );
}

#[tokio::test]
async fn test_dashboard() {
    let app = MockApp::new().await;

    let response = app.get("/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = read_text(response).await;

    assert!(html.contains("/state?internal=1"));
    assert!(html.contains("/log?internal=1"));
    assert!(app.request_logs().await.is_empty());
}
