//! Uniform sample sources driving the random walks.
//!
//! Randomness is injected rather than ambient: the simulator consumes draws
//! from a [`SampleSource`] so deterministic tests can supply fixed sequences
//! and assert exact post-tick values. Production code uses [`EntropySource`],
//! which is seedable for reproducible runs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Pluggable source of uniform random samples.
pub trait SampleSource: Send {
    /// Next uniform draw in `[0.0, 1.0)`.
    fn sample(&mut self) -> f64;

    /// Next uniform draw in `[-1.0, 1.0)`, derived from [`Self::sample`].
    fn sample_signed(&mut self) -> f64 {
        self.sample() * 2.0 - 1.0
    }
}

/// Production sample source backed by a seedable PRNG.
pub struct EntropySource {
    rng: StdRng,
}

impl EntropySource {
    /// Create a source seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a source with a fixed seed for reproducible runs.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for EntropySource {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleSource for EntropySource {
    fn sample(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed sample sequence, cycling when exhausted.
///
/// Intended for tests that need exact post-tick values.
pub struct ScriptedSource {
    samples: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    /// Create a scripted source from a sample sequence. An empty sequence
    /// falls back to a constant 0.5 so the source stays total.
    pub fn new(samples: Vec<f64>) -> Self {
        let samples = if samples.is_empty() {
            vec![0.5]
        } else {
            samples
        };
        Self { samples, cursor: 0 }
    }

    /// Create a scripted source that always returns the same sample.
    pub fn constant(sample: f64) -> Self {
        Self::new(vec![sample])
    }
}

impl SampleSource for ScriptedSource {
    fn sample(&mut self) -> f64 {
        let value = self.samples[self.cursor % self.samples.len()];
        self.cursor += 1;
        value
    }
}
