//! Cognitive enhancement pattern stream.
//!
//! A bounded window of recently surfaced pattern names, advanced by one
//! random draw per engine tick and exposed to the rendering layer alongside
//! the metric snapshot.

use std::collections::VecDeque;

use crate::sampling::SampleSource;

/// The catalog of cognitive enhancement patterns.
pub const COGNITIVE_PATTERNS: [&str; 8] = [
    "Recursive Intelligence Amplification",
    "Multi-Modal Context Fusion",
    "Adaptive Pattern Recognition",
    "Emergent Insight Generation",
    "Cognitive Load Optimization",
    "Neural Pathway Acceleration",
    "Parallel Processing Synthesis",
    "Real-Time Learning Integration",
];

/// Number of recent patterns retained in the stream.
pub const PATTERN_WINDOW: usize = 5;

/// Bounded window of the most recently surfaced patterns.
#[derive(Debug, Default)]
pub struct PatternStream {
    recent: VecDeque<&'static str>,
}

impl PatternStream {
    pub fn new() -> Self {
        Self {
            recent: VecDeque::with_capacity(PATTERN_WINDOW),
        }
    }

    /// Draw one pattern from the catalog and push it into the window,
    /// evicting the oldest entry once the window is full.
    pub fn advance(&mut self, source: &mut dyn SampleSource) -> &'static str {
        let index = (source.sample() * COGNITIVE_PATTERNS.len() as f64) as usize;
        // A sample at the closed upper bound would index one past the end.
        let pattern = COGNITIVE_PATTERNS[index.min(COGNITIVE_PATTERNS.len() - 1)];
        self.recent.push_back(pattern);
        if self.recent.len() > PATTERN_WINDOW {
            self.recent.pop_front();
        }
        pattern
    }

    /// The retained window, oldest first.
    pub fn recent(&self) -> Vec<&'static str> {
        self.recent.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::{EntropySource, ScriptedSource};

    #[test]
    fn advance_draws_from_the_catalog() {
        let mut stream = PatternStream::new();
        let mut source = EntropySource::from_seed(11);
        for _ in 0..50 {
            let pattern = stream.advance(&mut source);
            assert!(COGNITIVE_PATTERNS.contains(&pattern));
        }
    }

    #[test]
    fn window_never_exceeds_limit() {
        let mut stream = PatternStream::new();
        let mut source = EntropySource::from_seed(3);
        for _ in 0..20 {
            stream.advance(&mut source);
        }
        assert_eq!(stream.recent().len(), PATTERN_WINDOW);
    }

    #[test]
    fn window_evicts_oldest_first() {
        let mut stream = PatternStream::new();
        // Samples 0.0 and ~1.0 map to the first and last catalog entries.
        let mut source = ScriptedSource::new(vec![0.0, 0.99, 0.99, 0.99, 0.99, 0.99]);
        for _ in 0..6 {
            stream.advance(&mut source);
        }
        let recent = stream.recent();
        assert_eq!(recent.len(), PATTERN_WINDOW);
        assert!(recent.iter().all(|p| *p == COGNITIVE_PATTERNS[7]));
    }

    #[test]
    fn upper_bound_sample_stays_in_catalog() {
        let mut stream = PatternStream::new();
        let mut source = ScriptedSource::constant(1.0);
        assert_eq!(stream.advance(&mut source), COGNITIVE_PATTERNS[7]);
    }
}
