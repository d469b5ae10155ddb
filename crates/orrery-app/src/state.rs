//! Runtime handle shared between the caller and the pacer loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use orrery_core::commands::PacerCommand;
use orrery_core::state::FrameSnapshot;
use orrery_engine::engine::EngineConfig;

use crate::error::{PacerError, PacerResult};
use crate::pacer_loop;
use crate::sink::RenderSink;

/// Commands sent from the runtime handle to the pacer loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// A pacer command to forward to the engine.
    Pacer(PacerCommand),
    /// Shut down the loop thread gracefully.
    Shutdown,
}

/// Handle for one pacer loop thread.
///
/// Send + Sync by construction: the `mpsc::Sender` sits behind a `Mutex`
/// (Sender is Send but not Sync), the latest snapshot behind
/// `Arc<Mutex<…>>` shared with the loop thread.
pub struct PacerRuntime {
    /// Channel to the loop thread. `None` until `start`.
    command_tx: Mutex<Option<mpsc::Sender<LoopCommand>>>,
    /// Latest snapshot, updated by the loop thread after each tick.
    latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
    /// Whether the loop is currently running.
    running: Mutex<bool>,
}

impl Default for PacerRuntime {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl PacerRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the loop thread and start a session.
    pub fn start(
        &self,
        engine_config: EngineConfig,
        sink: Box<dyn RenderSink>,
    ) -> PacerResult<()> {
        let mut running = self.running.lock().map_err(|_| PacerError::StatePoisoned)?;
        if *running {
            return Err(PacerError::AlreadyRunning);
        }

        let tx = pacer_loop::spawn_pacer_loop(
            engine_config,
            sink,
            Arc::clone(&self.latest_snapshot),
        );
        tx.send(LoopCommand::Pacer(PacerCommand::Start))
            .map_err(|_| PacerError::ChannelClosed)?;

        *self
            .command_tx
            .lock()
            .map_err(|_| PacerError::StatePoisoned)? = Some(tx);
        *running = true;
        Ok(())
    }

    /// Forward a command to the running session.
    pub fn send(&self, command: PacerCommand) -> PacerResult<()> {
        let tx = self.command_tx.lock().map_err(|_| PacerError::StatePoisoned)?;
        match tx.as_ref() {
            Some(tx) => tx
                .send(LoopCommand::Pacer(command))
                .map_err(|_| PacerError::ChannelClosed),
            None => Err(PacerError::NotRunning),
        }
    }

    /// Latest frame produced by the loop, if any tick has run yet.
    pub fn snapshot(&self) -> PacerResult<Option<FrameSnapshot>> {
        Ok(self
            .latest_snapshot
            .lock()
            .map_err(|_| PacerError::StatePoisoned)?
            .clone())
    }

    /// Stop the loop thread. After this no further sink writes occur.
    pub fn shutdown(&self) -> PacerResult<()> {
        let mut tx = self.command_tx.lock().map_err(|_| PacerError::StatePoisoned)?;
        match tx.take() {
            Some(tx) => {
                // The loop may already have exited on disconnect; either
                // way it is gone after this.
                let _ = tx.send(LoopCommand::Shutdown);
                *self.running.lock().map_err(|_| PacerError::StatePoisoned)? = false;
                Ok(())
            }
            None => Err(PacerError::NotRunning),
        }
    }
}
