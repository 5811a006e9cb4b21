use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_mt::Mt;
use serde::{Deserialize, Serialize};

/// Largest value `mt_rand` style draws can take (`2^31 - 1`).
const MT_RAND_MAX: f64 = 2_147_483_647.0;

/// Seed-addressable source of uniform noise.
///
/// Implementations build a fresh generator for every draw, so the same seed
/// always produces the same sample and concurrent callers never observe each
/// other's state.
pub trait SignalSource: Send + Sync {
    /// One uniform sample in `[0, 1]` from a generator seeded with `seed`.
    fn sample(&self, seed: i64) -> f64;

    /// Maps [`SignalSource::sample`] linearly onto `[min, max]`.
    fn noise(&self, seed: i64, min: f64, max: f64) -> f64 {
        min + (max - min) * self.sample(seed)
    }
}

/// MT19937 seeded with the low 32 bits of the seed, drawing 31-bit integers.
///
/// Matches the reference web backend bit-for-bit.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mt19937;

impl SignalSource for Mt19937 {
    fn sample(&self, seed: i64) -> f64 {
        let mut mt = Mt::new(seed as u32);

        (mt.next_u32() >> 1) as f64 / MT_RAND_MAX
    }
}

/// `rand`'s standard generator. Statistically equivalent to [`Mt19937`] but
/// produces different values for the same seed.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdSource;

impl SignalSource for StdSource {
    fn sample(&self, seed: i64) -> f64 {
        let mut rng = StdRng::seed_from_u64(seed as u64);

        rng.random::<f64>()
    }
}

/// Generator selectable from configuration.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorKind {
    #[default]
    Mt19937,
    StdRng,
}

impl SignalSource for GeneratorKind {
    fn sample(&self, seed: i64) -> f64 {
        match self {
            GeneratorKind::Mt19937 => Mt19937.sample(seed),
            GeneratorKind::StdRng => StdSource.sample(seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_bits() {
        for source in [GeneratorKind::Mt19937, GeneratorKind::StdRng] {
            for seed in [0, 1, 340_000_010, -7, i64::MAX] {
                let first = source.noise(seed, -0.4, 0.4);
                let second = source.noise(seed, -0.4, 0.4);

                assert_eq!(first.to_bits(), second.to_bits());
            }
        }
    }

    #[test]
    fn test_noise_stays_in_range() {
        for source in [GeneratorKind::Mt19937, GeneratorKind::StdRng] {
            for seed in 0..2_000 {
                let value = source.noise(seed, -40.0, 40.0);
                assert!((-40.0..=40.0).contains(&value), "seed {seed} gave {value}");
            }
        }
    }

    #[test]
    fn test_degenerate_range_is_constant() {
        for seed in [3, 99, 123_456] {
            assert_eq!(Mt19937.noise(seed, 2.5, 2.5), 2.5);
            assert_eq!(StdSource.noise(seed, -1.0, -1.0), -1.0);
        }
    }

    #[test]
    fn test_mt19937_reference_draws() {
        // Known first outputs of MT19937 shifted down to 31 bits.
        let mut mt = Mt::new(5489);
        assert_eq!(mt.next_u32(), 3_499_211_612);

        let sample = Mt19937.sample(340_000_010);
        assert_eq!(sample, (2_370_459_549u32 >> 1) as f64 / MT_RAND_MAX);
    }

    #[test]
    fn test_neighbouring_seeds_differ() {
        assert_ne!(Mt19937.sample(340_000_010), Mt19937.sample(340_000_011));
        assert_ne!(StdSource.sample(10), StdSource.sample(11));
    }

    #[test]
    fn test_generator_kind_from_config_name() {
        let kind: GeneratorKind = serde_json::from_str("\"std_rng\"").unwrap();
        assert_eq!(kind, GeneratorKind::StdRng);

        let kind: GeneratorKind = serde_json::from_str("\"mt19937\"").unwrap();
        assert_eq!(kind, GeneratorKind::Mt19937);
    }
}
