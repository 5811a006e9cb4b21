//! Sets the LED colour of a running server.
//!
//! `requester <r> <g> <b> [base_url]`, base url defaults to `http://127.0.0.1:3000`.

use std::time::Duration;

use anyhow::{Context, bail};
use remotesense_api::restful::{ErrorResponse, LedResponse};

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "requester=info".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 3 {
        bail!("usage: requester <r> <g> <b> [base_url]");
    }

    let mut channels = [0u8; 3];
    for (channel, raw) in channels.iter_mut().zip(&args[..3]) {
        *channel = raw
            .parse()
            .with_context(|| format!("colour channel must be 0..255, got {raw}"))?;
    }
    let [r, g, b] = channels;
    let base_url = args.get(3).map(String::as_str).unwrap_or(DEFAULT_BASE_URL);

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .connect_timeout(Duration::from_secs(5))
        .build()?;

    let response = client
        .get(format!("{}/setLed", base_url.trim_end_matches('/')))
        .query(&[("r", r), ("g", g), ("b", b)])
        .send()
        .await
        .context("request failed")?;

    if response.status().is_success() {
        let body: LedResponse = response.json().await?;
        tracing::info!(
            "LED colour set to R:{} G:{} B:{} at {}",
            body.assigned.r,
            body.assigned.g,
            body.assigned.b,
            body.timestamp_utc
        );
        Ok(())
    } else {
        let status = response.status();
        let error: Option<ErrorResponse> = response.json().await.ok();
        let detail = error
            .and_then(|error| error.detail)
            .unwrap_or_else(|| status.to_string());
        bail!("unable to set LED colour: {detail}")
    }
}
