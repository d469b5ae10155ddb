//! Pacer loop thread — runs the engine at the fixed tick rate and pushes
//! every frame through the render sink.
//!
//! The engine is created inside the thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel; frames go out through
//! the sink and into the shared latest-snapshot cell for synchronous
//! polling. Once the loop returns, no further sink write can occur.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use orrery_core::constants::TICK_RATE;
use orrery_core::events::PacerEvent;
use orrery_core::state::FrameSnapshot;
use orrery_engine::engine::{EngineConfig, PacerEngine};

use crate::sink::{self, RenderSink};
use crate::state::LoopCommand;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the pacer loop in a new thread.
///
/// Returns the command sender for the runtime handle to use.
pub fn spawn_pacer_loop(
    engine_config: EngineConfig,
    sink: Box<dyn RenderSink>,
    latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
) -> mpsc::Sender<LoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    std::thread::Builder::new()
        .name("orrery-pacer-loop".into())
        .spawn(move || {
            run_pacer_loop(engine_config, sink, cmd_rx, &latest_snapshot);
        })
        .expect("Failed to spawn pacer loop thread");

    cmd_tx
}

/// The pacer loop. Runs until Shutdown command or channel disconnect.
fn run_pacer_loop(
    engine_config: EngineConfig,
    mut sink: Box<dyn RenderSink>,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<FrameSnapshot>>,
) {
    let mut engine = PacerEngine::new(engine_config);
    let mut next_tick_time = Instant::now();
    tracing::info!("pacer loop started");

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Pacer(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(LoopCommand::Shutdown) => {
                    tracing::info!("pacer loop shutting down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    tracing::info!("pacer loop channel disconnected");
                    return;
                }
            }
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick();
        for event in &snapshot.events {
            if let PacerEvent::PhaseStarted { phase } = event {
                tracing::debug!(?phase, cycle = snapshot.cycle, "phase started");
            }
        }

        // 3. Push the frame through the sink
        sink::emit_frame(sink.as_mut(), &snapshot);

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until the next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}
