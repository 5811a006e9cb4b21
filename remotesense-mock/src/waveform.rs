use std::f64::consts::PI;

/// `amplitude * sin(2π * t / period_seconds)`.
///
/// Continuous in `t`; a negative amplitude inverts the phase.
pub fn wave(t: i64, period_seconds: f64, amplitude: f64) -> f64 {
    let angle = 2.0 * PI * (t as f64 / period_seconds);

    angle.sin() * amplitude
}
