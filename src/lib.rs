//! # HyperMind Metrics Simulation Engine
//!
//! This library implements the simulated-telemetry core behind the HyperMind
//! performance dashboard: a bounded random-walk metrics simulator with
//! derived alerting and optimization-suggestion rules, driven by a periodic
//! tick and exposed to a rendering layer through a push-style subscription.
//!
//! ## Core Components
//!
//! * `metrics` - Metric snapshot types, declared ranges, and walk steps
//! * `sampling` - Injectable uniform sample sources (seedable, scriptable)
//! * `simulator` - The tick algorithm and single-flight coalescing wrapper
//! * `alerts` - Threshold-rule derivation of alerts and suggestions
//! * `engine` - Async engine runtime: timer, commands, and subscriptions
//! * `config` - Engine configuration with validation and file loading
//! * `prompts` - Prompt enhancement templates and simulated reports
//! * `patterns` - Cognitive pattern stream
//! * `error` - Error types and handling
//!
//! ## Architecture
//!
//! The engine owns all mutable state. A single driver task advances the
//! simulator once per interval and publishes an [`EngineUpdate`] after each
//! completed tick; consumers hold a watch-channel subscription and re-render
//! from the snapshot. Randomness is injected as a [`SampleSource`], so every
//! post-tick value is a deterministic function of the sample sequence.

pub mod alerts;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod patterns;
pub mod prompts;
pub mod sampling;
pub mod simulator;

// Re-export main types for convenience
pub use alerts::{derive_alerts, derive_optimizations, Alert, AlertSeverity, Impact, OptimizationSuggestion};
pub use config::{load_engine_config, EngineConfig, InitialMetrics};
pub use engine::{EngineUpdate, MetricsEngine};
pub use error::{HyperMindError, HyperMindResult};
pub use metrics::{CognitiveMetrics, MemoryPressure, SystemMetrics};
pub use sampling::{EntropySource, SampleSource, ScriptedSource};
pub use simulator::{SharedSimulator, Simulator, TickOutcome};
