//! Declared ranges, step scales, and the clamped walk steps.

use crate::sampling::SampleSource;

/// Declared range and per-tick step scale for a walked metric.
///
/// Metrics with no natural upper bound (disk throughput, network throughput)
/// use `f64::INFINITY` as `max` so the clamp stays unconditional and uniform
/// across all metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Whether `value` lies inside the declared range. NaN is never inside.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Bidirectional walk step: `clamp(old + uniform(-1,1) * step, min, max)`.
    /// The clamp is unconditional and applied last.
    pub fn walk(&self, old: f64, source: &mut dyn SampleSource) -> f64 {
        (old + source.sample_signed() * self.step).clamp(self.min, self.max)
    }

    /// One-directional walk step: `clamp(old + uniform(0,1) * step, min, max)`.
    /// The delta is nonnegative, so the value never decreases.
    pub fn advance(&self, old: f64, source: &mut dyn SampleSource) -> f64 {
        (old + source.sample() * self.step).clamp(self.min, self.max)
    }
}

/// Declared bounds for every walked metric.
pub mod bounds {
    use super::Bounds;

    // Resource group (bidirectional walks).
    pub const CPU_USAGE: Bounds = Bounds::new(5.0, 95.0, 10.0);
    pub const CPU_TEMPERATURE: Bounds = Bounds::new(35.0, 85.0, 5.0);
    pub const MEMORY_USED: Bounds = Bounds::new(1000.0, 7500.0, 200.0);
    pub const DISK_USAGE: Bounds = Bounds::new(45.0, 85.0, 5.0);
    pub const DISK_READ: Bounds = Bounds::new(0.0, f64::INFINITY, 50.0);
    pub const DISK_WRITE: Bounds = Bounds::new(0.0, f64::INFINITY, 30.0);
    pub const NETWORK_DOWNLOAD: Bounds = Bounds::new(0.0, f64::INFINITY, 100.0);
    pub const NETWORK_UPLOAD: Bounds = Bounds::new(0.0, f64::INFINITY, 50.0);
    pub const NETWORK_LATENCY: Bounds = Bounds::new(5.0, 100.0, 10.0);
    pub const AI_RESPONSE_TIME: Bounds = Bounds::new(200.0, 3000.0, 100.0);
    pub const AI_OPTIMIZATION_LEVEL: Bounds = Bounds::new(70.0, 100.0, 2.0);
    pub const NEURAL_PATTERN_RECOGNITION: Bounds = Bounds::new(60.0, 100.0, 3.0);
    pub const NEURAL_COGNITIVE_LOAD: Bounds = Bounds::new(10.0, 90.0, 5.0);
    pub const NEURAL_LEARNING_RATE: Bounds = Bounds::new(0.1, 2.0, 0.1);

    // Cognitive group (one-directional walks).
    pub const COGNITIVE_LOAD: Bounds = Bounds::new(0.0, 100.0, 5.0);
    pub const PROMPT_EFFICIENCY: Bounds = Bounds::new(0.0, 100.0, 3.0);
    pub const TASK_VELOCITY: Bounds = Bounds::new(0.0, 100.0, 4.0);
    pub const INSIGHT_GENERATION: Bounds = Bounds::new(0.0, 100.0, 6.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::ScriptedSource;

    #[test]
    fn walk_applies_clamp_last() {
        let b = Bounds::new(5.0, 95.0, 10.0);
        // Maximum positive delta from just below the ceiling clamps to max.
        let mut up = ScriptedSource::constant(1.0);
        assert_eq!(b.walk(94.0, &mut up), 95.0);
        // Maximum negative delta from just above the floor clamps to min.
        let mut down = ScriptedSource::constant(0.0);
        assert_eq!(b.walk(6.0, &mut down), 5.0);
    }

    #[test]
    fn walk_zero_delta_preserves_value() {
        let b = Bounds::new(5.0, 95.0, 10.0);
        let mut mid = ScriptedSource::constant(0.5);
        assert_eq!(b.walk(40.0, &mut mid), 40.0);
    }

    #[test]
    fn walk_with_infinite_max_only_clamps_below() {
        let b = bounds::DISK_READ;
        let mut down = ScriptedSource::constant(0.0);
        assert_eq!(b.walk(10.0, &mut down), 0.0);
        let mut up = ScriptedSource::constant(1.0);
        assert_eq!(b.walk(10.0, &mut up), 60.0);
    }

    #[test]
    fn advance_never_decreases() {
        let b = bounds::COGNITIVE_LOAD;
        let mut source = ScriptedSource::new(vec![0.0, 0.3, 1.0]);
        let mut value = 10.0;
        for _ in 0..3 {
            let next = b.advance(value, &mut source);
            assert!(next >= value);
            value = next;
        }
    }

    #[test]
    fn advance_saturates_at_max() {
        let b = bounds::INSIGHT_GENERATION;
        let mut source = ScriptedSource::constant(1.0);
        let mut value = 0.0;
        for _ in 0..50 {
            value = b.advance(value, &mut source);
            assert!(value <= 100.0);
        }
        assert_eq!(value, 100.0);
    }

    #[test]
    fn contains_rejects_out_of_range_and_nan() {
        let b = bounds::CPU_USAGE;
        assert!(b.contains(5.0));
        assert!(b.contains(95.0));
        assert!(!b.contains(4.9));
        assert!(!b.contains(95.1));
        assert!(!b.contains(f64::NAN));
    }
}
