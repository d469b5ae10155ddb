//! Snapshot system: builds the complete per-tick FrameSnapshot.
//!
//! Read-only — it never modifies engine state. Satellite views carry
//! both the polar coordinates and the projected Cartesian center so a
//! render sink can use whichever is cheaper for it.

use glam::DVec2;

use orrery_core::components::{PlanetState, Satellite};
use orrery_core::enums::{BreathPhase, SessionPhase};
use orrery_core::events::PacerEvent;
use orrery_core::state::{FrameSnapshot, PlanetView, SatelliteView};
use orrery_core::types::SimTime;

use crate::field::OrbitalField;
use crate::solver::SizeBudget;

/// Scalar inputs the engine hands to the snapshot builder each tick.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    pub time: SimTime,
    pub session: SessionPhase,
    pub phase: BreathPhase,
    pub phase_progress: f64,
    pub half_cycle_pos: f64,
    pub cycle: u64,
}

/// Build a complete FrameSnapshot from the current engine state.
pub fn build_snapshot(
    context: &FrameContext,
    planet: &PlanetState,
    field_state: &OrbitalField,
    budget: &SizeBudget,
    events: Vec<PacerEvent>,
) -> FrameSnapshot {
    FrameSnapshot {
        time: context.time,
        session: context.session,
        phase: context.phase,
        phase_progress: context.phase_progress,
        half_cycle_pos: context.half_cycle_pos,
        cycle: context.cycle,
        planet: build_planet(planet, budget),
        satellites: field_state
            .satellites()
            .iter()
            .map(|satellite| build_satellite(satellite, planet))
            .collect(),
        events,
    }
}

fn build_planet(planet: &PlanetState, budget: &SizeBudget) -> PlanetView {
    PlanetView {
        scale: planet.scale,
        radius: budget.bounding_size * planet.scale / 2.0,
        color: planet.color,
    }
}

/// Satellites wear the planet's current gradient color.
fn build_satellite(satellite: &Satellite, planet: &PlanetState) -> SatelliteView {
    SatelliteView {
        id: satellite.id,
        angle: satellite.current_angle,
        distance: satellite.current_distance,
        size: satellite.current_size,
        color: planet.color,
        position: project(satellite.current_angle, satellite.current_distance),
    }
}

/// Polar to screen-space Cartesian (y grows downward), relative to the
/// layout center.
fn project(angle: f64, distance: f64) -> DVec2 {
    DVec2::new(angle.cos(), angle.sin()) * distance
}
