use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TICK_INTERVAL_MS;
use crate::error::{HyperMindError, HyperMindResult};
use crate::metrics::walk::{bounds, Bounds};
use crate::metrics::{CognitiveMetrics, MemoryPressure, SystemMetrics};

/// Configuration for a [`crate::engine::MetricsEngine`] instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Tick interval in milliseconds; must be a positive integer
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Partial override of the initial metric values
    #[serde(default)]
    pub initial: InitialMetrics,
}

fn default_tick_interval_ms() -> u64 {
    DEFAULT_TICK_INTERVAL_MS
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            initial: InitialMetrics::default(),
        }
    }
}

impl EngineConfig {
    /// Create a configuration with the specified tick interval.
    pub fn new(tick_interval_ms: u64) -> Self {
        Self {
            tick_interval_ms,
            ..Default::default()
        }
    }

    /// Set the initial metric overrides.
    pub fn with_initial(mut self, initial: InitialMetrics) -> Self {
        self.initial = initial;
        self
    }

    /// Validate the configuration.
    ///
    /// Rejects a zero tick interval and any initial value outside its
    /// declared range.
    pub fn validate(&self) -> HyperMindResult<()> {
        if self.tick_interval_ms == 0 {
            return Err(HyperMindError::InvalidConfiguration(
                "tick interval must be a positive number of milliseconds".to_string(),
            ));
        }
        self.initial.validate()
    }
}

/// Partial override of the initial metric set.
///
/// Absent fields keep the engine defaults. Every supplied value is validated
/// against the metric's declared range at construction time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InitialMetrics {
    #[serde(default)]
    pub cpu_usage: Option<f64>,
    #[serde(default)]
    pub cpu_temperature: Option<f64>,
    #[serde(default)]
    pub memory_used: Option<f64>,
    #[serde(default)]
    pub disk_usage: Option<f64>,
    #[serde(default)]
    pub disk_read: Option<f64>,
    #[serde(default)]
    pub disk_write: Option<f64>,
    #[serde(default)]
    pub network_download: Option<f64>,
    #[serde(default)]
    pub network_upload: Option<f64>,
    #[serde(default)]
    pub network_latency: Option<f64>,
    #[serde(default)]
    pub prompts_processed: Option<u64>,
    #[serde(default)]
    pub average_response_time: Option<f64>,
    #[serde(default)]
    pub optimization_level: Option<f64>,
    #[serde(default)]
    pub pattern_recognition: Option<f64>,
    #[serde(default)]
    pub neural_cognitive_load: Option<f64>,
    #[serde(default)]
    pub learning_rate: Option<f64>,
    #[serde(default)]
    pub cognitive_load: Option<f64>,
    #[serde(default)]
    pub prompt_efficiency: Option<f64>,
    #[serde(default)]
    pub task_velocity: Option<f64>,
    #[serde(default)]
    pub insight_generation: Option<f64>,
}

fn check_range(value: Option<f64>, declared: Bounds, name: &str) -> HyperMindResult<()> {
    match value {
        Some(v) if !declared.contains(v) => Err(HyperMindError::InvalidConfiguration(format!(
            "initial value for {} is outside [{}, {}]: {}",
            name, declared.min, declared.max, v
        ))),
        _ => Ok(()),
    }
}

impl InitialMetrics {
    /// Validate every supplied override against its declared range.
    pub fn validate(&self) -> HyperMindResult<()> {
        check_range(self.cpu_usage, bounds::CPU_USAGE, "cpu.usage")?;
        check_range(self.cpu_temperature, bounds::CPU_TEMPERATURE, "cpu.temperature")?;
        check_range(self.memory_used, bounds::MEMORY_USED, "memory.used")?;
        check_range(self.disk_usage, bounds::DISK_USAGE, "disk.usage")?;
        check_range(self.disk_read, bounds::DISK_READ, "disk.read")?;
        check_range(self.disk_write, bounds::DISK_WRITE, "disk.write")?;
        check_range(self.network_download, bounds::NETWORK_DOWNLOAD, "network.download")?;
        check_range(self.network_upload, bounds::NETWORK_UPLOAD, "network.upload")?;
        check_range(self.network_latency, bounds::NETWORK_LATENCY, "network.latency")?;
        check_range(
            self.average_response_time,
            bounds::AI_RESPONSE_TIME,
            "ai.average_response_time",
        )?;
        check_range(
            self.optimization_level,
            bounds::AI_OPTIMIZATION_LEVEL,
            "ai.optimization_level",
        )?;
        check_range(
            self.pattern_recognition,
            bounds::NEURAL_PATTERN_RECOGNITION,
            "neural.pattern_recognition",
        )?;
        check_range(
            self.neural_cognitive_load,
            bounds::NEURAL_COGNITIVE_LOAD,
            "neural.cognitive_load",
        )?;
        check_range(self.learning_rate, bounds::NEURAL_LEARNING_RATE, "neural.learning_rate")?;
        check_range(self.cognitive_load, bounds::COGNITIVE_LOAD, "cognitive_load")?;
        check_range(self.prompt_efficiency, bounds::PROMPT_EFFICIENCY, "prompt_efficiency")?;
        check_range(self.task_velocity, bounds::TASK_VELOCITY, "task_velocity")?;
        check_range(
            self.insight_generation,
            bounds::INSIGHT_GENERATION,
            "insight_generation",
        )?;
        Ok(())
    }

    /// Apply the overrides to default snapshots. Memory pressure is
    /// recomputed from the resulting `memory.used`.
    pub(crate) fn apply(&self) -> (SystemMetrics, CognitiveMetrics) {
        let mut system = SystemMetrics::default();
        let mut cognitive = CognitiveMetrics::default();

        if let Some(v) = self.cpu_usage {
            system.cpu.usage = v;
        }
        if let Some(v) = self.cpu_temperature {
            system.cpu.temperature = v;
        }
        if let Some(v) = self.memory_used {
            system.memory.used = v;
        }
        if let Some(v) = self.disk_usage {
            system.disk.usage = v;
        }
        if let Some(v) = self.disk_read {
            system.disk.read = v;
        }
        if let Some(v) = self.disk_write {
            system.disk.write = v;
        }
        if let Some(v) = self.network_download {
            system.network.download = v;
        }
        if let Some(v) = self.network_upload {
            system.network.upload = v;
        }
        if let Some(v) = self.network_latency {
            system.network.latency = v;
        }
        if let Some(v) = self.prompts_processed {
            system.ai.prompts_processed = v;
        }
        if let Some(v) = self.average_response_time {
            system.ai.average_response_time = v;
        }
        if let Some(v) = self.optimization_level {
            system.ai.optimization_level = v;
        }
        if let Some(v) = self.pattern_recognition {
            system.neural.pattern_recognition = v;
        }
        if let Some(v) = self.neural_cognitive_load {
            system.neural.cognitive_load = v;
        }
        if let Some(v) = self.learning_rate {
            system.neural.learning_rate = v;
        }
        if let Some(v) = self.cognitive_load {
            cognitive.cognitive_load = v;
        }
        if let Some(v) = self.prompt_efficiency {
            cognitive.prompt_efficiency = v;
        }
        if let Some(v) = self.task_velocity {
            cognitive.task_velocity = v;
        }
        if let Some(v) = self.insight_generation {
            cognitive.insight_generation = v;
        }

        system.memory.pressure = MemoryPressure::from_used(system.memory.used);
        (system, cognitive)
    }
}

/// Load an engine configuration from the given path or from the
/// `HYPERMIND_CONFIG` environment variable.
///
/// If the file does not exist, a default [`EngineConfig`] is returned. The
/// loaded configuration is validated before being handed back.
pub fn load_engine_config(path: Option<&str>) -> HyperMindResult<EngineConfig> {
    use std::fs;

    let config_path = path
        .map(|p| p.to_string())
        .or_else(|| std::env::var("HYPERMIND_CONFIG").ok())
        .unwrap_or_else(|| "config/hypermind.json".to_string());

    let config = match fs::read_to_string(&config_path) {
        Ok(config_str) => match serde_json::from_str::<EngineConfig>(&config_str) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::error!("Failed to parse engine configuration: {}", e);
                return Err(e.into());
            }
        },
        Err(_) => EngineConfig::default(),
    };

    config.validate()?;
    Ok(config)
}
