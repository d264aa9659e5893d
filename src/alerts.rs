//! Threshold-rule derivation of alerts and optimization suggestions.
//!
//! Both derivations are pure functions of the current metric snapshot. Every
//! rule is evaluated on every call (no short-circuiting), and triggered rules
//! contribute to the output in fixed declaration order. The previous list is
//! always discarded wholesale; there is no deduplication or debounce across
//! ticks.

use serde::Serialize;

use crate::constants::{
    AI_OPTIMIZATION_TARGET, COGNITIVE_LOAD_LIMIT, CPU_TEMPERATURE_CRITICAL, CPU_USAGE_WARNING,
    DISK_USAGE_LIMIT, NETWORK_LATENCY_INFO,
};
use crate::metrics::{MemoryPressure, SystemMetrics};

/// Alert severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    /// Informational alert
    Info,
    /// Warning alert
    Warning,
    /// Critical alert requiring immediate action
    Critical,
}

/// A derived alert. Recomputed from the current snapshot on every tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    /// Stable identity key for the triggering rule
    pub id: &'static str,
    /// Alert severity
    pub severity: AlertSeverity,
    /// Human-readable message
    pub message: String,
    /// Suggested action
    pub action: &'static str,
}

/// Impact level of an optimization suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Low,
    Medium,
    High,
}

/// A derived optimization suggestion. Same lifecycle discipline as [`Alert`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationSuggestion {
    /// Stable identity key for the triggering rule
    pub id: &'static str,
    /// Suggestion title
    pub title: &'static str,
    /// Suggestion description
    pub description: &'static str,
    /// Impact level
    pub impact: Impact,
    /// Action text
    pub action: &'static str,
}

/// Derive the current alert list from a metric snapshot.
///
/// Rule order is a contract: cpu usage, cpu temperature, memory pressure,
/// network latency.
pub fn derive_alerts(metrics: &SystemMetrics) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if metrics.cpu.usage > CPU_USAGE_WARNING {
        alerts.push(Alert {
            id: "cpu-high",
            severity: AlertSeverity::Warning,
            message: format!("High CPU usage: {:.1}%", metrics.cpu.usage),
            action: "Consider closing unnecessary applications",
        });
    }

    if metrics.cpu.temperature > CPU_TEMPERATURE_CRITICAL {
        alerts.push(Alert {
            id: "temp-high",
            severity: AlertSeverity::Critical,
            message: format!("High CPU temperature: {:.1}°C", metrics.cpu.temperature),
            action: "Check thermal management",
        });
    }

    if metrics.memory.pressure == MemoryPressure::High {
        alerts.push(Alert {
            id: "memory-pressure",
            severity: AlertSeverity::Warning,
            message: "High memory pressure detected".to_string(),
            action: "Run memory optimization",
        });
    }

    if metrics.network.latency > NETWORK_LATENCY_INFO {
        alerts.push(Alert {
            id: "network-latency",
            severity: AlertSeverity::Info,
            message: format!("High network latency: {:.1}ms", metrics.network.latency),
            action: "Check network connection",
        });
    }

    alerts
}

/// Derive the current optimization suggestions from a metric snapshot.
///
/// Rule order is a contract: ai optimization level, neural cognitive load,
/// disk usage.
pub fn derive_optimizations(metrics: &SystemMetrics) -> Vec<OptimizationSuggestion> {
    let mut suggestions = Vec::new();

    if metrics.ai.optimization_level < AI_OPTIMIZATION_TARGET {
        suggestions.push(OptimizationSuggestion {
            id: "ai-optimization",
            title: "AI Performance Enhancement",
            description: "Neural processing can be optimized further",
            impact: Impact::High,
            action: "Run AI optimization protocol",
        });
    }

    if metrics.neural.cognitive_load > COGNITIVE_LOAD_LIMIT {
        suggestions.push(OptimizationSuggestion {
            id: "cognitive-load",
            title: "Cognitive Load Reduction",
            description: "High cognitive load detected",
            impact: Impact::Medium,
            action: "Distribute processing load",
        });
    }

    if metrics.disk.usage > DISK_USAGE_LIMIT {
        suggestions.push(OptimizationSuggestion {
            id: "disk-cleanup",
            title: "Disk Space Optimization",
            description: "Low disk space may impact performance",
            impact: Impact::Medium,
            action: "Clean temporary files and caches",
        });
    }

    suggestions
}
