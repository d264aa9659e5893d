//! The tick-driven metric simulator.
//!
//! [`Simulator`] owns the full metric set and an injected sample source, and
//! advances everything by exactly one step per [`Simulator::tick`] call.
//! [`SharedSimulator`] wraps it for use from the async engine driver and
//! enforces the single-flight guarantee: overlapping tick triggers coalesce
//! into at most one effective execution.

use std::sync::{Arc, Mutex, PoisonError};

use log::debug;

use crate::alerts::{derive_alerts, derive_optimizations, Alert, OptimizationSuggestion};
use crate::config::EngineConfig;
use crate::error::HyperMindResult;
use crate::metrics::walk::bounds;
use crate::metrics::{CognitiveMetrics, MemoryPressure, SystemMetrics};
use crate::patterns::PatternStream;
use crate::sampling::SampleSource;

/// Everything produced by one completed tick.
#[derive(Debug, Clone)]
pub struct TickOutcome {
    /// Monotonic tick counter, 1 for the first tick
    pub tick_seq: u64,
    /// Resource-group snapshot after the step
    pub system: SystemMetrics,
    /// Cognitive-group snapshot after the step
    pub cognitive: CognitiveMetrics,
    /// Alerts derived from the new snapshot
    pub alerts: Vec<Alert>,
    /// Optimization suggestions derived from the new snapshot
    pub optimizations: Vec<OptimizationSuggestion>,
    /// Recently surfaced cognitive patterns, oldest first
    pub patterns: Vec<&'static str>,
}

/// Bounded random-walk metric simulator.
pub struct Simulator {
    system: SystemMetrics,
    cognitive: CognitiveMetrics,
    patterns: PatternStream,
    source: Box<dyn SampleSource>,
    tick_seq: u64,
}

impl Simulator {
    /// Build a simulator from a validated configuration and a sample source.
    pub fn new(config: &EngineConfig, source: Box<dyn SampleSource>) -> HyperMindResult<Self> {
        config.validate()?;
        let (system, cognitive) = config.initial.apply();
        Ok(Self {
            system,
            cognitive,
            patterns: PatternStream::new(),
            source,
            tick_seq: 0,
        })
    }

    /// Advance every metric by one step and derive the new alert and
    /// suggestion lists.
    ///
    /// Sample consumption order is part of the deterministic contract:
    /// cpu.usage, cpu.temperature, memory.used, disk.usage, disk.read,
    /// disk.write, network.download, network.upload, network.latency,
    /// ai.prompts_processed, ai.average_response_time, ai.optimization_level,
    /// neural.pattern_recognition, neural.cognitive_load,
    /// neural.learning_rate, then the four cognitive metrics
    /// (cognitive_load, prompt_efficiency, task_velocity,
    /// insight_generation), then one pattern draw. One tick consumes exactly
    /// 20 samples. Memory pressure is recomputed last.
    pub fn tick(&mut self) -> TickOutcome {
        let source = self.source.as_mut();

        self.system.cpu.usage = bounds::CPU_USAGE.walk(self.system.cpu.usage, source);
        self.system.cpu.temperature =
            bounds::CPU_TEMPERATURE.walk(self.system.cpu.temperature, source);
        self.system.memory.used = bounds::MEMORY_USED.walk(self.system.memory.used, source);
        self.system.disk.usage = bounds::DISK_USAGE.walk(self.system.disk.usage, source);
        self.system.disk.read = bounds::DISK_READ.walk(self.system.disk.read, source);
        self.system.disk.write = bounds::DISK_WRITE.walk(self.system.disk.write, source);
        self.system.network.download =
            bounds::NETWORK_DOWNLOAD.walk(self.system.network.download, source);
        self.system.network.upload =
            bounds::NETWORK_UPLOAD.walk(self.system.network.upload, source);
        self.system.network.latency =
            bounds::NETWORK_LATENCY.walk(self.system.network.latency, source);

        // Counter semantics: a draw of 0, 1, or 2 per tick, never decreasing.
        // A sample at the closed upper bound still draws at most 2.
        let draw = (source.sample() * 3.0).floor() as u64;
        self.system.ai.prompts_processed += draw.min(2);

        self.system.ai.average_response_time =
            bounds::AI_RESPONSE_TIME.walk(self.system.ai.average_response_time, source);
        self.system.ai.optimization_level =
            bounds::AI_OPTIMIZATION_LEVEL.walk(self.system.ai.optimization_level, source);
        self.system.neural.pattern_recognition =
            bounds::NEURAL_PATTERN_RECOGNITION.walk(self.system.neural.pattern_recognition, source);
        self.system.neural.cognitive_load =
            bounds::NEURAL_COGNITIVE_LOAD.walk(self.system.neural.cognitive_load, source);
        self.system.neural.learning_rate =
            bounds::NEURAL_LEARNING_RATE.walk(self.system.neural.learning_rate, source);

        // Cognitive group only increases.
        self.cognitive.cognitive_load =
            bounds::COGNITIVE_LOAD.advance(self.cognitive.cognitive_load, source);
        self.cognitive.prompt_efficiency =
            bounds::PROMPT_EFFICIENCY.advance(self.cognitive.prompt_efficiency, source);
        self.cognitive.task_velocity =
            bounds::TASK_VELOCITY.advance(self.cognitive.task_velocity, source);
        self.cognitive.insight_generation =
            bounds::INSIGHT_GENERATION.advance(self.cognitive.insight_generation, source);

        self.patterns.advance(source);

        self.system.memory.pressure = MemoryPressure::from_used(self.system.memory.used);

        self.tick_seq += 1;
        debug!(
            "tick {}: cpu {:.1}% mem {:.0}MB ({})",
            self.tick_seq,
            self.system.cpu.usage,
            self.system.memory.used,
            self.system.memory.pressure
        );

        self.outcome()
    }

    /// The outcome for the current state without advancing it. Used for the
    /// initial published snapshot before the first tick.
    pub fn outcome(&self) -> TickOutcome {
        TickOutcome {
            tick_seq: self.tick_seq,
            system: self.system,
            cognitive: self.cognitive,
            alerts: derive_alerts(&self.system),
            optimizations: derive_optimizations(&self.system),
            patterns: self.patterns.recent(),
        }
    }

    /// Current resource-group snapshot.
    pub fn system(&self) -> &SystemMetrics {
        &self.system
    }

    /// Current cognitive-group snapshot.
    pub fn cognitive(&self) -> &CognitiveMetrics {
        &self.cognitive
    }

    /// Number of completed ticks.
    pub fn tick_seq(&self) -> u64 {
        self.tick_seq
    }
}

/// Shared handle around a [`Simulator`] enforcing single-flight ticks.
///
/// A trigger arriving while a previous tick still holds the lock is dropped
/// rather than queued, so concurrent triggers collapse into one effective
/// execution and the state never double-advances.
#[derive(Clone)]
pub struct SharedSimulator {
    inner: Arc<Mutex<Simulator>>,
}

impl SharedSimulator {
    pub fn new(simulator: Simulator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(simulator)),
        }
    }

    /// Attempt one tick. Returns `None` when a previous tick is still in
    /// flight; the trigger is coalesced, not queued.
    pub fn try_tick(&self) -> Option<TickOutcome> {
        match self.inner.try_lock() {
            Ok(mut simulator) => Some(simulator.tick()),
            Err(_) => {
                debug!("tick trigger coalesced: previous tick still in flight");
                None
            }
        }
    }

    /// Read access to the simulator state.
    pub fn with<R>(&self, f: impl FnOnce(&Simulator) -> R) -> R {
        let guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }
}
