use std::sync::Arc;
use std::time::Duration;

use tokio::time;

use crate::clock::{Clock, SystemClock, format_utc};
use crate::settings::Settings;

pub mod clock;
pub mod settings;
pub mod signal;
pub mod simulate;
pub mod waveform;

pub use clock::FixedClock;
pub use signal::{GeneratorKind, Mt19937, SignalSource, StdSource};
pub use simulate::Synthesizer;

/// Logs a fresh reading every `emitter.interval_seconds` until Ctrl-C.
pub async fn run(settings: &Arc<Settings>) {
    let synthesizer = Synthesizer::new(settings.emitter.generator)
        .with_slot_seconds(settings.emitter.slot_seconds);
    let clock = SystemClock;

    tracing::info!(
        generator = ?synthesizer.source(),
        slot_seconds = synthesizer.slot_seconds(),
        "emitting simulated readings every {}s",
        settings.emitter.interval_seconds
    );

    let mut interval = time::interval(Duration::from_secs(settings.emitter.interval_seconds));
    loop {
        tokio::select! {
            _ = interval.tick() => emit(&synthesizer, &clock),
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutting down emitter");
                break;
            }
        }
    }
}

fn emit<S: SignalSource>(synthesizer: &Synthesizer<S>, clock: &impl Clock) {
    let now = clock.now();
    let reading = synthesizer.read(now.unix_timestamp());

    match (format_utc(now), serde_json::to_string(&reading)) {
        (Ok(timestamp), Ok(payload)) => tracing::info!("{timestamp} {payload}"),
        (Err(e), _) => tracing::error!("Error formatting timestamp: {}", e),
        (_, Err(e)) => tracing::error!("Error serializing reading: {}", e),
    }
}
