//! The metrics simulation engine runtime.
//!
//! [`MetricsEngine`] owns a [`crate::simulator::Simulator`] and drives it from
//! a single spawned task: a `tokio::select!` loop over the tick timer and a
//! command channel. After each completed tick the engine publishes an
//! [`EngineUpdate`] on a watch channel; the rendering layer subscribes and is
//! notified push-style, never polling the simulator directly.
//!
//! Scheduling contract:
//! - exactly one tick is ever in flight; missed timer ticks are skipped, not
//!   queued, and overlapping triggers coalesce through
//!   [`crate::simulator::SharedSimulator`];
//! - pausing stops all state mutation until resumed; resuming does not replay
//!   missed ticks;
//! - an interval change takes effect on the next scheduled tick;
//! - stopping tears the driver task down deterministically, after which no
//!   further updates are published.

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::Serialize;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};

use crate::alerts::{Alert, OptimizationSuggestion};
use crate::config::EngineConfig;
use crate::error::{HyperMindError, HyperMindResult};
use crate::metrics::{CognitiveMetrics, SystemMetrics};
use crate::sampling::{EntropySource, SampleSource};
use crate::simulator::{SharedSimulator, Simulator, TickOutcome};

/// Snapshot published to subscribers after each completed tick.
#[derive(Debug, Clone, Serialize)]
pub struct EngineUpdate {
    /// Number of completed ticks; 0 for the initial snapshot
    pub tick_seq: u64,
    /// Resource-group metrics
    pub system: SystemMetrics,
    /// Cognitive-group metrics
    pub cognitive: CognitiveMetrics,
    /// Current alert list, fixed rule order
    pub alerts: Vec<Alert>,
    /// Current optimization suggestions, fixed rule order
    pub optimizations: Vec<OptimizationSuggestion>,
    /// Recently surfaced cognitive patterns, oldest first
    pub patterns: Vec<&'static str>,
    /// When this update was produced
    pub updated_at: DateTime<Utc>,
}

impl EngineUpdate {
    fn from_outcome(outcome: TickOutcome) -> Self {
        Self {
            tick_seq: outcome.tick_seq,
            system: outcome.system,
            cognitive: outcome.cognitive,
            alerts: outcome.alerts,
            optimizations: outcome.optimizations,
            patterns: outcome.patterns,
            updated_at: Utc::now(),
        }
    }
}

enum EngineCommand {
    Pause,
    Resume,
    SetInterval(Duration),
    Stop,
}

/// Handle to a metrics simulation engine.
///
/// Meant to be owned and driven by exactly one consumer; read access goes
/// through [`MetricsEngine::subscribe`] or the snapshot accessors, which
/// reflect the most recently published update.
pub struct MetricsEngine {
    commands: mpsc::UnboundedSender<EngineCommand>,
    updates: watch::Receiver<EngineUpdate>,
    // Moved into the driver task on start.
    startup: Option<EngineStartup>,
    driver: Option<JoinHandle<()>>,
}

struct EngineStartup {
    simulator: SharedSimulator,
    commands_rx: mpsc::UnboundedReceiver<EngineCommand>,
    updates_tx: watch::Sender<EngineUpdate>,
    tick_interval: Duration,
}

impl MetricsEngine {
    /// Create an engine with entropy-backed sampling. The configuration is
    /// validated here; ticking begins only on [`MetricsEngine::start`].
    pub fn new(config: EngineConfig) -> HyperMindResult<Self> {
        Self::with_source(config, Box::new(EntropySource::new()))
    }

    /// Create an engine with an injected sample source, for deterministic
    /// runs and tests.
    pub fn with_source(
        config: EngineConfig,
        source: Box<dyn SampleSource>,
    ) -> HyperMindResult<Self> {
        let simulator = Simulator::new(&config, source)?;
        let initial = EngineUpdate::from_outcome(simulator.outcome());

        let (commands, commands_rx) = mpsc::unbounded_channel();
        let (updates_tx, updates) = watch::channel(initial);

        Ok(Self {
            commands,
            updates,
            startup: Some(EngineStartup {
                simulator: SharedSimulator::new(simulator),
                commands_rx,
                updates_tx,
                tick_interval: Duration::from_millis(config.tick_interval_ms),
            }),
            driver: None,
        })
    }

    /// Spawn the driver task and begin ticking. The first tick lands one
    /// interval after start. Calling start on a running engine is a no-op.
    pub fn start(&mut self) -> HyperMindResult<()> {
        if self.driver.is_some() {
            warn!("metrics engine already started");
            return Ok(());
        }
        let startup = self.startup.take().ok_or_else(|| {
            HyperMindError::Driver("engine cannot be restarted after stop".to_string())
        })?;
        info!(
            "starting metrics engine, tick interval {:?}",
            startup.tick_interval
        );
        self.driver = Some(tokio::spawn(run_driver(startup)));
        Ok(())
    }

    /// Suspend state mutation. Timer ticks while paused are dropped.
    pub fn pause(&self) -> HyperMindResult<()> {
        self.send(EngineCommand::Pause)
    }

    /// Resume ticking. Ticks missed while paused are not replayed.
    pub fn resume(&self) -> HyperMindResult<()> {
        self.send(EngineCommand::Resume)
    }

    /// Change the tick interval. Takes effect on the next scheduled tick.
    pub fn set_tick_interval_ms(&self, tick_interval_ms: u64) -> HyperMindResult<()> {
        if tick_interval_ms == 0 {
            return Err(HyperMindError::InvalidConfiguration(
                "tick interval must be a positive number of milliseconds".to_string(),
            ));
        }
        self.send(EngineCommand::SetInterval(Duration::from_millis(
            tick_interval_ms,
        )))
    }

    /// Stop the engine permanently and wait for the driver task to finish.
    /// No updates are published after this returns.
    pub async fn stop(&mut self) -> HyperMindResult<()> {
        // The driver may already be gone; stopping twice is fine.
        let _ = self.commands.send(EngineCommand::Stop);
        if let Some(driver) = self.driver.take() {
            driver
                .await
                .map_err(|e| HyperMindError::Driver(e.to_string()))?;
        }
        Ok(())
    }

    /// Subscribe to updates published after each completed tick.
    pub fn subscribe(&self) -> watch::Receiver<EngineUpdate> {
        self.updates.clone()
    }

    /// Read-only snapshot of the current resource-group metrics.
    pub fn snapshot(&self) -> SystemMetrics {
        self.updates.borrow().system
    }

    /// Read-only snapshot of the current cognitive-group metrics.
    pub fn cognitive(&self) -> CognitiveMetrics {
        self.updates.borrow().cognitive
    }

    /// The current alert list.
    pub fn alerts(&self) -> Vec<Alert> {
        self.updates.borrow().alerts.clone()
    }

    /// The current optimization suggestions.
    pub fn optimizations(&self) -> Vec<OptimizationSuggestion> {
        self.updates.borrow().optimizations.clone()
    }

    fn send(&self, command: EngineCommand) -> HyperMindResult<()> {
        self.commands
            .send(command)
            .map_err(|_| HyperMindError::ChannelClosed("engine driver is not running".to_string()))
    }
}

async fn run_driver(startup: EngineStartup) {
    let EngineStartup {
        simulator,
        mut commands_rx,
        updates_tx,
        tick_interval,
    } = startup;

    let mut running = true;
    let mut timer = new_timer(tick_interval);

    loop {
        tokio::select! {
            command = commands_rx.recv() => match command {
                Some(EngineCommand::Pause) => {
                    if running {
                        info!("metrics engine paused");
                        running = false;
                    }
                }
                Some(EngineCommand::Resume) => {
                    if !running {
                        info!("metrics engine resumed");
                        running = true;
                    }
                }
                Some(EngineCommand::SetInterval(interval)) => {
                    debug!("tick interval changed to {:?}", interval);
                    timer = new_timer(interval);
                }
                // Stop, or every handle dropped: tear down the timer and exit.
                Some(EngineCommand::Stop) | None => break,
            },
            _ = timer.tick() => {
                if !running {
                    continue;
                }
                if let Some(outcome) = simulator.try_tick() {
                    // Send fails only when no subscriber handle remains.
                    let _ = updates_tx.send(EngineUpdate::from_outcome(outcome));
                }
            }
        }
    }

    info!("metrics engine stopped");
}

fn new_timer(period: Duration) -> tokio::time::Interval {
    // First tick one full period from now; missed ticks are skipped so a
    // slow consumer coalesces to at most one pending tick.
    let mut timer = interval_at(Instant::now() + period, period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
    timer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::ScriptedSource;

    fn scripted_engine(tick_interval_ms: u64) -> MetricsEngine {
        MetricsEngine::with_source(
            EngineConfig::new(tick_interval_ms),
            Box::new(ScriptedSource::constant(0.5)),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn construction_rejects_zero_interval() {
        assert!(MetricsEngine::new(EngineConfig::new(0)).is_err());
    }

    #[tokio::test]
    async fn initial_snapshot_is_available_before_start() {
        let engine = scripted_engine(1000);
        let snapshot = engine.snapshot();
        assert_eq!(snapshot, SystemMetrics::default());
        assert_eq!(engine.subscribe().borrow().tick_seq, 0);
    }

    #[tokio::test]
    async fn set_interval_rejects_zero() {
        let engine = scripted_engine(1000);
        assert!(matches!(
            engine.set_tick_interval_ms(0),
            Err(HyperMindError::InvalidConfiguration(_))
        ));
    }

    #[tokio::test]
    async fn start_twice_is_a_noop() {
        let mut engine = scripted_engine(1000);
        engine.start().unwrap();
        assert!(engine.start().is_ok());
        engine.stop().await.unwrap();
    }

    #[tokio::test]
    async fn commands_fail_after_stop() {
        let mut engine = scripted_engine(1000);
        engine.start().unwrap();
        engine.stop().await.unwrap();
        assert!(matches!(
            engine.pause(),
            Err(HyperMindError::ChannelClosed(_))
        ));
    }

    #[tokio::test]
    async fn restart_after_stop_is_rejected() {
        let mut engine = scripted_engine(1000);
        engine.start().unwrap();
        engine.stop().await.unwrap();
        assert!(matches!(engine.start(), Err(HyperMindError::Driver(_))));
    }
}
