//! Frame snapshot — the complete drawable state emitted each tick.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::{BreathPhase, SessionPhase};
use crate::events::PacerEvent;
use crate::types::{Rgb, SimTime};

/// Complete animation state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub session: SessionPhase,
    pub phase: BreathPhase,
    /// Progress through the current phase [0, 1].
    pub phase_progress: f64,
    /// Progress through the current interpolation half-cycle [0, 1].
    pub half_cycle_pos: f64,
    /// Completed cycle count.
    pub cycle: u64,
    pub planet: PlanetView,
    pub satellites: Vec<SatelliteView>,
    /// Events raised during this tick (drained into each snapshot).
    pub events: Vec<PacerEvent>,
}

/// Planet state, ready to draw.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanetView {
    /// Scale as a fraction of the bounding size.
    pub scale: f64,
    /// Radius in layout units.
    pub radius: f64,
    pub color: Rgb,
}

/// One satellite, ready to draw.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SatelliteView {
    pub id: u32,
    /// Orbital angle (radians, (-PI, PI]).
    pub angle: f64,
    /// Distance from the layout center (layout units).
    pub distance: f64,
    /// Edge length (layout units).
    pub size: f64,
    pub color: Rgb,
    /// Projected center position relative to the layout center
    /// (y grows downward, matching screen space).
    pub position: DVec2,
}
