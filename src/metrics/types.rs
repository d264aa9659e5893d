use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{
    CPU_CORES, MEMORY_PRESSURE_HIGH_MB, MEMORY_PRESSURE_MEDIUM_MB, MEMORY_TOTAL_MB,
};

/// Derived memory pressure category.
///
/// Computed purely from `memory.used` via the fixed thresholds; never stored
/// independently of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryPressure {
    Normal,
    Medium,
    High,
}

impl MemoryPressure {
    /// Classify memory usage in megabytes. High iff `used > 6000`,
    /// Medium iff `4000 < used <= 6000`, Normal otherwise.
    pub fn from_used(used_mb: f64) -> Self {
        if used_mb > MEMORY_PRESSURE_HIGH_MB {
            MemoryPressure::High
        } else if used_mb > MEMORY_PRESSURE_MEDIUM_MB {
            MemoryPressure::Medium
        } else {
            MemoryPressure::Normal
        }
    }
}

impl fmt::Display for MemoryPressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "Normal"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

/// CPU usage, temperature, and core count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CpuMetrics {
    /// Usage in percent
    pub usage: f64,
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Number of cores (fixed)
    pub cores: u32,
}

/// Memory usage with derived pressure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MemoryMetrics {
    /// Used memory in megabytes
    pub used: f64,
    /// Total memory in megabytes (fixed)
    pub total: f64,
    /// Pressure category derived from `used`
    pub pressure: MemoryPressure,
}

/// Disk usage and throughput.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiskMetrics {
    /// Usage in percent
    pub usage: f64,
    /// Read throughput in MB/s
    pub read: f64,
    /// Write throughput in MB/s
    pub write: f64,
}

/// Network throughput and latency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkMetrics {
    /// Download throughput in MB/s
    pub download: f64,
    /// Upload throughput in MB/s
    pub upload: f64,
    /// Round-trip latency in milliseconds
    pub latency: f64,
}

/// AI processing metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AiMetrics {
    /// Total prompts processed; counter semantics, never decreases
    pub prompts_processed: u64,
    /// Average response time in milliseconds
    pub average_response_time: f64,
    /// Optimization level in percent
    pub optimization_level: f64,
}

/// Neural processing metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NeuralMetrics {
    /// Pattern recognition level in percent
    pub pattern_recognition: f64,
    /// Cognitive load in percent
    pub cognitive_load: f64,
    /// Learning rate
    pub learning_rate: f64,
}

/// Full resource-group metric snapshot.
///
/// Advanced by a bidirectional bounded random walk on every tick, except
/// `ai.prompts_processed`, which is a nondecreasing counter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SystemMetrics {
    pub cpu: CpuMetrics,
    pub memory: MemoryMetrics,
    pub disk: DiskMetrics,
    pub network: NetworkMetrics,
    pub ai: AiMetrics,
    pub neural: NeuralMetrics,
}

impl Default for SystemMetrics {
    fn default() -> Self {
        let used = 2048.0;
        Self {
            cpu: CpuMetrics {
                usage: 25.0,
                temperature: 45.0,
                cores: CPU_CORES,
            },
            memory: MemoryMetrics {
                used,
                total: MEMORY_TOTAL_MB,
                pressure: MemoryPressure::from_used(used),
            },
            disk: DiskMetrics {
                usage: 55.0,
                read: 0.0,
                write: 0.0,
            },
            network: NetworkMetrics {
                download: 0.0,
                upload: 0.0,
                latency: 20.0,
            },
            ai: AiMetrics {
                prompts_processed: 0,
                average_response_time: 850.0,
                optimization_level: 85.0,
            },
            neural: NeuralMetrics {
                pattern_recognition: 75.0,
                cognitive_load: 30.0,
                learning_rate: 1.0,
            },
        }
    }
}

/// Cognitive-group metric snapshot, each in `[0, 100]`.
///
/// Advanced by a one-directional random walk: these only increase, simulating
/// optimization progress, and start at zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CognitiveMetrics {
    pub cognitive_load: f64,
    pub prompt_efficiency: f64,
    pub task_velocity: f64,
    pub insight_generation: f64,
}
