//! Common constants used across the hypermind engine.
//!
//! Threshold values mirror the reference monitoring dashboard; the alert and
//! optimization rules in [`crate::alerts`] compare against these with strict
//! inequality.

/// Default tick interval when none is configured.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 2000;

/// Total physical memory reported in the snapshot, in megabytes.
pub const MEMORY_TOTAL_MB: f64 = 8192.0;

/// Number of CPU cores reported in the snapshot.
pub const CPU_CORES: u32 = 8;

/// Memory usage above this is classified as Medium pressure (megabytes).
pub const MEMORY_PRESSURE_MEDIUM_MB: f64 = 4000.0;

/// Memory usage above this is classified as High pressure (megabytes).
pub const MEMORY_PRESSURE_HIGH_MB: f64 = 6000.0;

/// CPU usage above this raises a warning alert (percent).
pub const CPU_USAGE_WARNING: f64 = 80.0;

/// CPU temperature above this raises a critical alert (degrees Celsius).
pub const CPU_TEMPERATURE_CRITICAL: f64 = 75.0;

/// Network latency above this raises an info alert (milliseconds).
pub const NETWORK_LATENCY_INFO: f64 = 50.0;

/// AI optimization level below this suggests an enhancement run (percent).
pub const AI_OPTIMIZATION_TARGET: f64 = 90.0;

/// Neural cognitive load above this suggests load redistribution (percent).
pub const COGNITIVE_LOAD_LIMIT: f64 = 70.0;

/// Disk usage above this suggests a cleanup (percent).
pub const DISK_USAGE_LIMIT: f64 = 75.0;
