//! Events emitted by the engine for feedback cues and session logging.

use serde::{Deserialize, Serialize};

use crate::enums::BreathPhase;

/// Feedback events surfaced in each frame snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PacerEvent {
    /// A breathing phase began.
    PhaseStarted { phase: BreathPhase },
    /// A full inhale-to-rest cycle finished.
    CycleCompleted { cycle: u64 },
    /// The satellite field was rebuilt after a count change.
    FieldRebuilt { count: u32 },
    /// The engine state was rebuilt from scratch (start or resize).
    EngineReset,
}

/// Summary of one finished session, for external logging.
///
/// This is the only shape the engine exports for persistence; nothing in
/// the workspace depends on a consumer existing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Wall-clock start in Unix milliseconds.
    pub started_unix_ms: u64,
    /// Total session length in milliseconds.
    pub duration_ms: u64,
    /// Phase durations the session ran with (seconds).
    pub inhale_secs: f64,
    pub hold_secs: f64,
    pub exhale_secs: f64,
    pub rest_secs: f64,
    /// Cycles finished before the session ended.
    pub cycles_completed: u64,
}
