//! Control commands sent from the settings surface to the engine.
//!
//! Commands are queued and processed at the next tick boundary, never
//! mid-tick, so a reset can never interleave with a partially applied
//! animation step.

use serde::{Deserialize, Serialize};

use crate::config::PacerConfig;

/// All possible control actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PacerCommand {
    // --- Session control ---
    /// Begin the session from a fresh inhale.
    Start,
    /// Freeze the animation mid-cycle.
    Pause,
    /// Continue from where Pause left off.
    Resume,

    // --- Configuration ---
    /// Replace the active configuration. A count change rebuilds the
    /// satellite field immediately; other fields take effect at the next
    /// cycle start.
    ApplyConfig { config: PacerConfig },
    /// Re-fit all geometry to a new bounding size. Hard reset: the
    /// in-flight cycle is discarded, never resumed.
    Resize { bounding_size: f64 },
}
