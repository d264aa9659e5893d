//! Integration tests for the engine runtime: subscription push, pause and
//! resume, interval changes, and deterministic teardown.

use std::time::Duration;

use hypermind::{EngineConfig, HyperMindError, MetricsEngine, ScriptedSource};
use tokio::time::timeout;

const WAIT: Duration = Duration::from_secs(5);

/// Engine with a deterministic sample source. With every sample at 0.5 the
/// bidirectional walks hold still and `prompts_processed` advances by exactly
/// one per tick, so the counter doubles as a tick odometer.
fn scripted_engine(tick_interval_ms: u64) -> MetricsEngine {
    let _ = env_logger::builder().is_test(true).try_init();
    MetricsEngine::with_source(
        EngineConfig::new(tick_interval_ms),
        Box::new(ScriptedSource::constant(0.5)),
    )
    .unwrap()
}

#[tokio::test]
async fn subscriber_is_notified_after_each_completed_tick() {
    let mut engine = scripted_engine(20);
    let mut updates = engine.subscribe();
    assert_eq!(updates.borrow().tick_seq, 0);

    engine.start().unwrap();

    timeout(WAIT, updates.changed()).await.unwrap().unwrap();
    let first = updates.borrow_and_update().clone();
    assert!(first.tick_seq >= 1);
    assert_eq!(first.system.ai.prompts_processed, first.tick_seq);

    timeout(WAIT, updates.changed()).await.unwrap().unwrap();
    let second = updates.borrow_and_update().clone();
    assert!(second.tick_seq > first.tick_seq);

    engine.stop().await.unwrap();
}

#[tokio::test]
async fn snapshot_accessors_reflect_the_latest_update() {
    let mut engine = scripted_engine(20);
    let mut updates = engine.subscribe();
    engine.start().unwrap();

    timeout(WAIT, updates.changed()).await.unwrap().unwrap();
    let snapshot = engine.snapshot();
    assert!(snapshot.ai.prompts_processed >= 1);
    // Default optimization level is below target, so the enhancement
    // suggestion is always derived.
    assert!(engine
        .optimizations()
        .iter()
        .any(|s| s.id == "ai-optimization"));

    engine.stop().await.unwrap();
}

// The pause and resume tests run on the paused test clock: time only moves
// through explicit `advance` calls or when every task is blocked on a timer,
// so "no change while paused" and "exactly one step after resume" hold
// without real-time grace periods.
#[tokio::test(start_paused = true)]
async fn pause_freezes_state_and_resume_advances_one_step() {
    let mut engine = scripted_engine(20);
    let mut updates = engine.subscribe();
    engine.start().unwrap();

    updates.changed().await.unwrap();
    engine.pause().unwrap();
    // Let the driver consume the pause command before the clock moves.
    tokio::task::yield_now().await;
    let frozen = updates.borrow_and_update().clone();

    // Several intervals elapse on the test clock with no state change.
    tokio::time::advance(Duration::from_millis(200)).await;
    tokio::task::yield_now().await;
    assert!(!updates.has_changed().unwrap());
    assert_eq!(updates.borrow().tick_seq, frozen.tick_seq);
    assert_eq!(updates.borrow().system, frozen.system);

    // Resume: exactly one step of change on the next scheduled tick.
    engine.resume().unwrap();
    updates.changed().await.unwrap();
    let resumed = updates.borrow_and_update().clone();
    assert_eq!(resumed.tick_seq, frozen.tick_seq + 1);
    assert_eq!(
        resumed.system.ai.prompts_processed,
        frozen.system.ai.prompts_processed + 1
    );

    engine.stop().await.unwrap();
}

#[tokio::test]
async fn interval_change_takes_effect_on_the_next_scheduled_tick() {
    // Start with an interval far longer than the test runtime.
    let mut engine = scripted_engine(60_000);
    let mut updates = engine.subscribe();
    engine.start().unwrap();

    // No tick arrives on the long cadence.
    assert!(timeout(Duration::from_millis(150), updates.changed())
        .await
        .is_err());

    // After shortening, the next scheduled tick lands promptly.
    engine.set_tick_interval_ms(20).unwrap();
    timeout(WAIT, updates.changed()).await.unwrap().unwrap();
    assert!(updates.borrow().tick_seq >= 1);

    engine.stop().await.unwrap();
}

#[tokio::test]
async fn stop_is_deterministic_and_final() {
    let mut engine = scripted_engine(20);
    let mut updates = engine.subscribe();
    engine.start().unwrap();

    timeout(WAIT, updates.changed()).await.unwrap().unwrap();
    engine.stop().await.unwrap();

    // No update is published after stop returns.
    let last = updates.borrow_and_update().tick_seq;
    assert!(timeout(Duration::from_millis(150), updates.changed())
        .await
        .is_err());
    assert_eq!(updates.borrow().tick_seq, last);

    // The handle rejects further commands.
    assert!(matches!(
        engine.resume(),
        Err(HyperMindError::ChannelClosed(_))
    ));

    // Stopping again is harmless.
    engine.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn paused_engine_ignores_elapsed_intervals_without_replay() {
    let mut engine = scripted_engine(20);
    let mut updates = engine.subscribe();
    engine.start().unwrap();

    updates.changed().await.unwrap();
    engine.pause().unwrap();
    tokio::task::yield_now().await;
    let frozen = updates.borrow_and_update().tick_seq;

    // Many intervals elapse while paused; every trigger is dropped.
    tokio::time::advance(Duration::from_millis(300)).await;
    tokio::task::yield_now().await;
    assert!(!updates.has_changed().unwrap());

    // Only a single step arrives after resume; the missed ticks were not
    // queued up.
    engine.resume().unwrap();
    updates.changed().await.unwrap();
    assert_eq!(updates.borrow_and_update().tick_seq, frozen + 1);
    tokio::time::advance(Duration::from_millis(10)).await;
    tokio::task::yield_now().await;
    assert!(!updates.has_changed().unwrap());

    engine.stop().await.unwrap();
}
