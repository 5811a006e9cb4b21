use remotesense_api::models::{LightReading, Reading};

use crate::signal::{Mt19937, SignalSource};
use crate::waveform::wave;

/// Width of a noise slot in seconds. Noise is constant inside a slot.
pub const SLOT_SECONDS: i64 = 5;

const LUX_MAX: f64 = 2000.0;
const ADC_MAX: f64 = 4095.0;

/// Recipe for one slowly drifting quantity: baseline plus a sine trend plus
/// slot-seeded noise, saturated to its physical range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Channel {
    pub baseline: f64,
    pub period_seconds: f64,
    pub amplitude: f64,
    pub seed_offset: i64,
    pub noise: (f64, f64),
    pub range: (f64, f64),
}

impl Channel {
    pub fn sample<S: SignalSource + ?Sized>(&self, source: &S, t: i64, slot: i64) -> f64 {
        let (noise_min, noise_max) = self.noise;
        let (min, max) = self.range;

        let value = self.baseline
            + wave(t, self.period_seconds, self.amplitude)
            + source.noise(slot + self.seed_offset, noise_min, noise_max);

        value.clamp(min, max)
    }
}

pub const TEMPERATURE: Channel = Channel {
    baseline: 22.0,
    period_seconds: 3600.0,
    amplitude: 1.2,
    seed_offset: 10,
    noise: (-0.4, 0.4),
    range: (18.0, 30.0),
};

pub const HUMIDITY: Channel = Channel {
    baseline: 45.0,
    period_seconds: 2700.0,
    amplitude: 6.0,
    seed_offset: 20,
    noise: (-2.0, 2.0),
    range: (25.0, 75.0),
};

// Day/night cycle: the sine is lifted into [0, 1] before scaling so that the
// trend alone never goes below the night floor. Not a `Channel`: the trend is
// `floor + span * day`, not `baseline + amplitude * sin`.
pub const LUX_NIGHT_FLOOR: f64 = 20.0;
pub const LUX_DAY_SPAN: f64 = 1800.0;
pub const LUX_PERIOD_SECONDS: f64 = 86400.0;
pub const LUX_SEED_OFFSET: i64 = 30;
pub const LUX_NOISE: (f64, f64) = (-40.0, 40.0);

/// Index of the slot containing Unix time `t`, i.e. `floor(t / slot_seconds)`.
pub fn slot_seed(t: i64, slot_seconds: i64) -> i64 {
    t.div_euclid(slot_seconds.max(1))
}

fn pow10(power: i32) -> f64 {
    10f64.powi(power)
}

fn scale(value: f64, power: i32) -> f64 {
    if power >= 0 {
        value * pow10(power)
    } else {
        value / pow10(-power)
    }
}

fn round_half_away(value: f64) -> f64 {
    if value >= 0.0 {
        (value + 0.5).floor()
    } else {
        (value - 0.5).ceil()
    }
}

/// Rounds half away from zero to `places` decimals (`places` below 23).
///
/// The value is first pre-rounded to 15 significant digits, so decimal
/// literals that sit just under a half in binary, like `1.005`, still round
/// up to `1.01`. This matches the reference web backend's rounding.
pub fn round_decimal(value: f64, places: i32) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }

    let precision_places = 14 - value.abs().log10().floor() as i32;
    let factor = pow10(places.abs());

    let scaled = if precision_places > places && precision_places - 15 < places {
        let precision = precision_places.max(-60);
        let prerounded = round_half_away(scale(value, precision));

        prerounded / pow10((places - precision).max(-60).abs())
    } else {
        let scaled = scale(value, places);
        if scaled.abs() >= 1e15 {
            return value;
        }
        scaled
    };

    let rounded = round_half_away(scaled);
    if places > 0 {
        rounded / factor
    } else {
        rounded * factor
    }
}

pub fn round2(value: f64) -> f64 {
    round_decimal(value, 2)
}

/// Turns a Unix timestamp into a coherent [`Reading`].
///
/// Holds no mutable state; one instance can serve any number of concurrent
/// callers.
#[derive(Debug, Clone)]
pub struct Synthesizer<S = Mt19937> {
    source: S,
    slot_seconds: i64,
}

impl Default for Synthesizer<Mt19937> {
    fn default() -> Self {
        Self::new(Mt19937)
    }
}

impl<S: SignalSource> Synthesizer<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            slot_seconds: SLOT_SECONDS,
        }
    }

    pub fn with_slot_seconds(mut self, slot_seconds: i64) -> Self {
        self.slot_seconds = slot_seconds.max(1);
        self
    }

    pub fn slot_seconds(&self) -> i64 {
        self.slot_seconds
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Unrounded lux, clamped to `[0, 2000]`.
    pub fn lux(&self, t: i64) -> f64 {
        let slot = slot_seed(t, self.slot_seconds);
        let (noise_min, noise_max) = LUX_NOISE;

        let day_component = (wave(t, LUX_PERIOD_SECONDS, 1.0) + 1.0) / 2.0;
        let lux = LUX_NIGHT_FLOOR
            + day_component * LUX_DAY_SPAN
            + self.source.noise(slot + LUX_SEED_OFFSET, noise_min, noise_max);

        lux.clamp(0.0, LUX_MAX)
    }

    pub fn read(&self, t: i64) -> Reading {
        let slot = slot_seed(t, self.slot_seconds);

        let temperature = TEMPERATURE.sample(&self.source, t, slot);
        let humidity = HUMIDITY.sample(&self.source, t, slot);
        let lux = self.lux(t);

        Reading {
            temperature: round2(temperature),
            humidity: round2(humidity),
            light: light_from_lux(lux),
        }
    }
}

pub fn light_from_lux(lux: f64) -> LightReading {
    let ratio = lux / LUX_MAX;

    LightReading {
        adc: (ratio * ADC_MAX) as u16,
        percent: (ratio * 100.0).clamp(0.0, 100.0) as u8,
    }
}
