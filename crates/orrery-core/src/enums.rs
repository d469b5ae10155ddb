//! Enumeration types used throughout the engine.

use serde::{Deserialize, Serialize};

/// Breathing cycle phase.
///
/// The cycle walks Inhale → Hold → Exhale → Rest and wraps; there is no
/// terminal phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BreathPhase {
    #[default]
    Inhale,
    Hold,
    Exhale,
    Rest,
}

/// Interpolation window half of the breathing cycle.
///
/// Satellites interpolate across phase pairs, not single phases: one
/// trajectory spans inhale+hold, the next spans exhale+rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HalfCycle {
    /// Inhale + hold window (moving toward the inhale targets).
    #[default]
    Rising,
    /// Exhale + rest window (moving toward the exhale targets).
    Falling,
}

/// Top-level session state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Engine created but not started; nothing animates.
    #[default]
    Idle,
    /// Breathing cycle advancing.
    Running,
    /// Frozen mid-cycle; Resume continues where Pause left off.
    Paused,
}

/// Refill behavior for a variance pool when its read cursor wraps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefreshPolicy {
    /// Redraw the whole buffer from the generator on each wrap.
    #[default]
    OnWrap,
    /// Keep the initial draws; the sample sequence repeats exactly.
    Frozen,
}

impl BreathPhase {
    /// The phase that follows this one in the cycle.
    pub fn next(self) -> BreathPhase {
        match self {
            BreathPhase::Inhale => BreathPhase::Hold,
            BreathPhase::Hold => BreathPhase::Exhale,
            BreathPhase::Exhale => BreathPhase::Rest,
            BreathPhase::Rest => BreathPhase::Inhale,
        }
    }

    /// The interpolation window this phase belongs to.
    pub fn half_cycle(self) -> HalfCycle {
        match self {
            BreathPhase::Inhale | BreathPhase::Hold => HalfCycle::Rising,
            BreathPhase::Exhale | BreathPhase::Rest => HalfCycle::Falling,
        }
    }
}
