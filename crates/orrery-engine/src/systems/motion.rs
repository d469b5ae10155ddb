//! Per-tick interpolation system.
//!
//! Satellites interpolate linearly in the half-cycle fraction: angle
//! along the shortest signed arc, distance and size along straight
//! segments toward the half-cycle goal. The planet uses an eased breath
//! level instead so its pulse accelerates out of the turnarounds.

use orrery_core::angles;
use orrery_core::components::PlanetState;
use orrery_core::constants::{BASE_COLOR, PEAK_COLOR};
use orrery_core::enums::{BreathPhase, HalfCycle};

use crate::field::OrbitalField;
use crate::solver::SizeBudget;

/// Step every satellite to `fraction` through the active half-cycle.
pub fn run(
    field_state: &mut OrbitalField,
    half_cycle: HalfCycle,
    fraction: f64,
    dynamic_size: bool,
) {
    let fraction = fraction.clamp(0.0, 1.0);
    for satellite in field_state.iter_mut() {
        satellite.current_angle =
            angles::interpolate(satellite.start_angle, satellite.target_angle, fraction);

        let goal_distance = match half_cycle {
            HalfCycle::Rising => satellite.inhale_distance,
            HalfCycle::Falling => satellite.exhale_distance,
        };
        satellite.current_distance =
            satellite.start_distance + (goal_distance - satellite.start_distance) * fraction;

        if dynamic_size {
            satellite.current_size =
                satellite.start_size + (satellite.target_size - satellite.start_size) * fraction;
        }
    }
}

/// Breath level in [0, 1] for the planet: 0 fully exhaled, 1 fully inhaled.
///
/// Inhale eases up, exhale eases down, the holds pin the endpoints. The
/// hold phases never interpolate, so a zero-length inhale or exhale
/// cannot leave the planet stranded mid-pulse.
pub fn breath_level(phase: BreathPhase, phase_progress: f64) -> f64 {
    match phase {
        BreathPhase::Inhale => smoothstep(phase_progress),
        BreathPhase::Hold => 1.0,
        BreathPhase::Exhale => 1.0 - smoothstep(phase_progress),
        BreathPhase::Rest => 0.0,
    }
}

/// Drive the planet's scale and color from the breath level.
pub fn update_planet(planet: &mut PlanetState, budget: &SizeBudget, level: f64) {
    let level = level.clamp(0.0, 1.0);
    planet.scale = budget.base_scale + (budget.effective_max_scale - budget.base_scale) * level;
    planet.color = BASE_COLOR.lerp(&PEAK_COLOR, level);
}

/// Ease-in-out cubic on [0, 1].
fn smoothstep(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
