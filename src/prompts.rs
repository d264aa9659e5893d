//! Prompt enhancement templates and simulated optimization reports.
//!
//! Cosmetic string formatting around the engine: a task description is
//! substituted into one of four enhancement templates, and "processing" it
//! yields a canned report whose numbers come from the injected sample source.
//! No decision logic lives here.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::sampling::SampleSource;

/// Placeholder substituted with the task description.
const TASK_PLACEHOLDER: &str = "{task}";

/// The four prompt enhancement modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptMode {
    Neural,
    Tactical,
    Quantum,
    Synthesis,
}

impl PromptMode {
    pub const ALL: [PromptMode; 4] = [
        PromptMode::Neural,
        PromptMode::Tactical,
        PromptMode::Quantum,
        PromptMode::Synthesis,
    ];

    /// Display name shown by the rendering layer.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Neural => "Neural Domination",
            Self::Tactical => "Tactical Execution",
            Self::Quantum => "Quantum Breakthrough",
            Self::Synthesis => "Meta-Synthesis",
        }
    }

    /// Enhancement template with a `{task}` placeholder.
    pub fn template(&self) -> &'static str {
        match self {
            Self::Neural => {
                "Act as a hyper-intelligent neural architect. Generate a self-optimizing \
                 system that {task}. Include autonomous learning loops, real-time adaptation \
                 mechanisms, and exponential efficiency gains. Design for MacBook M2 8GB RAM \
                 optimization. Provide complete, production-ready implementation."
            }
            Self::Tactical => {
                "Assume the mindset of a ruthless system optimizer. Create a bulletproof, \
                 zero-latency solution for {task}. Eliminate every bottleneck, maximize \
                 throughput, ensure fault tolerance. Build for immediate deployment on macOS. \
                 No compromises on performance."
            }
            Self::Quantum => {
                "Think like a quantum computing pioneer. Design a paradigm-shifting approach \
                 to {task} that operates beyond conventional limitations. Integrate parallel \
                 processing, adaptive algorithms, and breakthrough methodologies. Optimize for \
                 M2 chip architecture."
            }
            Self::Synthesis => {
                "Channel meta-cognitive intelligence. Synthesize multiple approaches to {task} \
                 into a unified, self-evolving system. Include cross-domain pattern \
                 recognition, emergent behavior optimization, and recursive improvement \
                 mechanisms."
            }
        }
    }
}

impl fmt::Display for PromptMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Substitute the task description into the selected template.
pub fn enhance(mode: PromptMode, task: &str) -> String {
    mode.template().replace(TASK_PLACEHOLDER, task)
}

/// Cosmetic per-report metrics, each drawn into a fixed range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportMetrics {
    /// Efficiency in percent, 80..=99
    pub efficiency: u32,
    /// Speed in percent, 70..=99
    pub speed: u32,
    /// Innovation in percent, 75..=99
    pub innovation: u32,
}

/// Simulated result of processing an enhanced prompt.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizationReport {
    /// Mode the prompt was enhanced with
    pub mode: PromptMode,
    /// Original task description
    pub prompt: String,
    /// Template with the task substituted in
    pub enhanced_prompt: String,
    /// Canned response text
    pub response: String,
    /// Cosmetic report metrics
    pub metrics: ReportMetrics,
}

fn draw(source: &mut dyn SampleSource, span: u32, base: u32) -> u32 {
    let value = (source.sample() * span as f64) as u32 + base;
    value.min(base + span - 1)
}

/// Produce a simulated optimization report for the given task.
///
/// Sample consumption order: cognitive load, processing time, optimization
/// level, efficiency, speed, innovation.
pub fn process_prompt(
    mode: PromptMode,
    task: &str,
    source: &mut dyn SampleSource,
) -> OptimizationReport {
    let cognitive_load = draw(source, 20, 80);
    let processing_ms = draw(source, 500, 1500);
    let optimization = draw(source, 15, 85);

    let response = format!(
        "HYPER-OPTIMIZED SOLUTION:\n\n\
         [System Analysis Complete]\n\
         - Cognitive Load: {}%\n\
         - Processing Speed: {}ms\n\
         - Optimization Level: {}%\n\n\
         [Implementation Ready]\n\
         * MacBook M2 Optimized\n\
         * Zero-latency Architecture\n\
         * Self-healing Mechanisms\n\
         * Real-time Adaptation\n\n\
         [Advanced Features Enabled]\n\
         * Neural pattern recognition\n\
         * Cognitive load balancing\n\
         * Recursive optimization\n\
         * Quantum processing simulation\n\n\
         System primed for maximum performance output.",
        cognitive_load, processing_ms, optimization
    );

    OptimizationReport {
        mode,
        prompt: task.to_string(),
        enhanced_prompt: enhance(mode, task),
        response,
        metrics: ReportMetrics {
            efficiency: draw(source, 20, 80),
            speed: draw(source, 30, 70),
            innovation: draw(source, 25, 75),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::{EntropySource, ScriptedSource};

    #[test]
    fn enhance_substitutes_the_task() {
        let enhanced = enhance(PromptMode::Neural, "build a cache");
        assert!(enhanced.contains("build a cache"));
        assert!(!enhanced.contains(TASK_PLACEHOLDER));
    }

    #[test]
    fn every_template_carries_the_placeholder() {
        for mode in PromptMode::ALL {
            assert!(mode.template().contains(TASK_PLACEHOLDER));
        }
    }

    #[test]
    fn report_metrics_stay_in_their_ranges() {
        let mut source = EntropySource::from_seed(5);
        for _ in 0..100 {
            let report = process_prompt(PromptMode::Tactical, "task", &mut source);
            assert!((80..=99).contains(&report.metrics.efficiency));
            assert!((70..=99).contains(&report.metrics.speed));
            assert!((75..=99).contains(&report.metrics.innovation));
        }
    }

    #[test]
    fn report_is_deterministic_for_a_scripted_source() {
        let mut source = ScriptedSource::constant(0.0);
        let report = process_prompt(PromptMode::Quantum, "speed up builds", &mut source);
        assert_eq!(report.metrics.efficiency, 80);
        assert_eq!(report.metrics.speed, 70);
        assert_eq!(report.metrics.innovation, 75);
        assert!(report.response.contains("Cognitive Load: 80%"));
        assert!(report.response.contains("Processing Speed: 1500ms"));
        assert!(report.response.contains("Optimization Level: 85%"));
        assert_eq!(report.prompt, "speed up builds");
        assert!(report.enhanced_prompt.contains("speed up builds"));
    }

    #[test]
    fn upper_bound_sample_stays_in_range() {
        let mut source = ScriptedSource::constant(1.0);
        let report = process_prompt(PromptMode::Synthesis, "task", &mut source);
        assert_eq!(report.metrics.efficiency, 99);
        assert_eq!(report.metrics.speed, 99);
        assert_eq!(report.metrics.innovation, 99);
    }

    #[test]
    fn display_names_match_modes() {
        assert_eq!(PromptMode::Neural.to_string(), "Neural Domination");
        assert_eq!(PromptMode::Synthesis.to_string(), "Meta-Synthesis");
    }
}
