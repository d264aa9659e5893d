//! Metric snapshot types and the bounded random-walk rules that govern them.
//!
//! Two metric groups exist: the resource group ([`SystemMetrics`]) advanced by
//! a bidirectional bounded walk, and the cognitive group ([`CognitiveMetrics`])
//! advanced by a one-directional walk that only increases. Every walked value
//! is clamped into its declared range after every update; `memory.pressure`
//! is derived from `memory.used` and never stored independently.

pub mod types;
pub mod walk;

pub use types::{
    AiMetrics, CognitiveMetrics, CpuMetrics, DiskMetrics, MemoryMetrics, MemoryPressure,
    NetworkMetrics, NeuralMetrics, SystemMetrics,
};
pub use walk::{bounds, Bounds};
