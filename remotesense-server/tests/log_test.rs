use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use remotesense_server::middlewares::MAX_BODY_BYTES;
use remotesense_server::tests::{TEST_UNIX_TIME, create_test_request_log};
use serde_json::json;
use time::{Duration, OffsetDateTime};

mod common;
use common::mock_app::{MockApp, read_json, read_text};

#[tokio::test]
async fn test_empty_log() {
    let app = MockApp::new().await;

    let response = app.get("/log").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );

    let html = read_text(response).await;
    assert!(html.contains("No requests recorded."));
}

#[tokio::test]
async fn test_audit_records_request() {
    let app = MockApp::new().await;

    app.send(
        Request::builder()
            .uri("/setLed?r=1&g=2&b=3")
            .method(Method::GET)
            .header("X-Forwarded-For", "203.0.113.9, 10.0.0.1")
            .header(header::USER_AGENT, "curl/8.0")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    let logs = app.request_logs().await;
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].ip, "203.0.113.9");
    assert_eq!(logs[0].method, "GET");
    assert_eq!(logs[0].endpoint, "setLed");
    assert_eq!(logs[0].query_string, "r=1&g=2&b=3");
    assert_eq!(logs[0].user_agent, "curl/8.0");
    assert_eq!(logs[0].body_trunc, None);
    assert_eq!(logs[0].ts.unix_timestamp(), TEST_UNIX_TIME);

    let html = read_text(app.get("/log").await).await;
    assert!(html.contains("[2023-11-14 22:13:20] xxx.yyy.113.9 GET /setLed ?r=1&amp;g=2&amp;b=3"));
}

#[tokio::test]
async fn test_audit_without_peer_address() {
    let app = MockApp::new().await;

    app.get("/sensors").await;

    let logs = app.request_logs().await;
    assert_eq!(logs[0].ip, "0.0.0.0");
    assert_eq!(logs[0].user_agent, "");
}

#[tokio::test]
async fn test_audit_skip_rules() {
    let app = MockApp::new().await;

    app.get("/state?internal=1").await;
    app.get("/log?internal=1").await;
    app.get("/log").await;
    app.get("/sensors?internal=1").await;
    assert!(app.request_logs().await.is_empty());

    app.get("/state").await;
    app.get("/state?internal=0").await;
    assert_eq!(app.request_logs().await.len(), 2);
}

#[tokio::test]
async fn test_log_hides_state_requests() {
    let app = MockApp::new().await;

    app.get("/state").await;
    app.get("/stopSong").await;

    let html = read_text(app.get("/log").await).await;

    assert!(html.contains("/stopSong"));
    assert!(!html.contains("/state"));
}

#[tokio::test]
async fn test_audit_truncates_post_body_and_user_agent() {
    let app = MockApp::new().await;
    let padding = "x".repeat(3000);
    let song = format!(r#"{{"melody":[],"comment":"{padding}"}}"#);

    let response = app
        .send(
            Request::builder()
                .uri("/playSong")
                .method(Method::POST)
                .header(header::USER_AGENT, "a".repeat(400))
                .body(Body::from(song.clone()))
                .unwrap(),
        )
        .await;

    // The handler still sees the whole body.
    assert_eq!(response.status(), StatusCode::OK);

    let logs = app.request_logs().await;
    let body_trunc = logs[0].body_trunc.clone().unwrap();

    assert_eq!(logs[0].method, "POST");
    assert_eq!(logs[0].user_agent.chars().count(), 255);
    assert_eq!(body_trunc.chars().count(), 2000);
    assert!(song.starts_with(&body_trunc));
}

#[tokio::test]
async fn test_unknown_endpoints_are_audited() {
    let app = MockApp::new().await;

    app.get("/whatever").await;

    let logs = app.request_logs().await;
    assert_eq!(logs[0].endpoint, "whatever");
}

#[tokio::test]
async fn test_log_newest_first_and_limited() {
    let app = MockApp::new().await;
    let start = OffsetDateTime::from_unix_timestamp(TEST_UNIX_TIME).unwrap();

    for i in 0..60 {
        create_test_request_log(
            app.storage.clone(),
            start + Duration::seconds(i),
            "setLed",
            &format!("r={i}&g=0&b=0"),
        )
        .await;
    }
    create_test_request_log(app.storage.clone(), start + Duration::hours(1), "state", "").await;

    let html = read_text(app.get("/log").await).await;
    let lines: Vec<&str> = html.matches("<div>[").collect();

    assert_eq!(lines.len(), 50);

    let newest = html.find("?r=59&amp;").unwrap();
    let older = html.find("?r=10&amp;").unwrap();
    assert!(newest < older);
    assert!(!html.contains("?r=9&amp;"));
    assert!(!html.contains("/state"));
}

#[tokio::test]
async fn test_log_escapes_fields() {
    let app = MockApp::new().await;
    let start = OffsetDateTime::from_unix_timestamp(TEST_UNIX_TIME).unwrap();

    create_test_request_log(app.storage.clone(), start, "<script>", "a=<b>&c='d'").await;

    let html = read_text(app.get("/log").await).await;

    assert!(html.contains("/&lt;script&gt; ?a=&lt;b&gt;&amp;c=&#039;d&#039;"));
    assert!(!html.contains("<script>"));
}

#[tokio::test]
async fn test_audit_large_song_body() {
    let app = MockApp::new().await;

    let notes = vec!["440"; 280_000].join(",");
    let song = format!(r#"{{"melody":[{notes}]}}"#);
    assert!(song.len() > 1024 * 1024);

    let response = app.post("/playSong", song).await;
    assert_eq!(response.status(), StatusCode::OK);

    let logs = app.request_logs().await;
    assert_eq!(logs.len(), 1);
    let body = logs[0].body_trunc.as_deref().unwrap();
    assert_eq!(body.chars().count(), 2000);
    assert!(body.starts_with(r#"{"melody":[440,440"#));
}

#[tokio::test]
async fn test_audit_oversized_body_still_recorded() {
    let app = MockApp::new().await;

    let song = format!(r#"{{"melody":[],"pad":"{}"}}"#, "x".repeat(MAX_BODY_BYTES));

    let response = app.post("/playSong", song).await;
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let logs = app.request_logs().await;
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].method, "POST");
    assert_eq!(logs[0].endpoint, "playSong");
    assert_eq!(logs[0].body_trunc, None);

    let state = read_json(app.get("/state").await).await;
    assert_eq!(state["actuators"]["buzzer"]["song_is_playing"], json!(0));
}
