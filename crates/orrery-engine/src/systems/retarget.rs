//! Retargeting system — runs at half-cycle boundaries, never per tick.
//!
//! On entry to a half-cycle every satellite's actual current state is
//! snapshotted as the new start (never a stale target field), and fresh
//! goals are drawn. On exit the endpoints are committed exactly, so
//! accumulated interpolation error can never drift across cycles.

use rand_chacha::ChaCha8Rng;

use orrery_core::config::PacerConfig;

use crate::field::{self, OrbitalField};
use crate::solver::SizeBudget;
use crate::variance::VariancePool;

/// Enter the rising (inhale + hold) half of a new cycle.
///
/// Draws the cycle's shared `{inhale, exhale}` distance pair — one draw
/// per satellite, consumed by both halves — plus a lateral walk target
/// and, when dynamic size is on, a fresh size target.
pub fn begin_rising(
    field_state: &mut OrbitalField,
    budget: &SizeBudget,
    config: &PacerConfig,
    pool: &mut VariancePool,
    rng: &mut ChaCha8Rng,
) {
    let dynamic = config.dynamic_size;
    for satellite in field_state.iter_mut() {
        satellite.start_angle = satellite.current_angle;
        satellite.start_distance = satellite.current_distance;

        let (inhale, exhale) =
            field::cycle_positions(budget, config.radial_variance_pct, pool.next(rng));
        satellite.inhale_distance = inhale;
        satellite.exhale_distance = exhale;

        satellite.target_angle = field::next_angle(
            satellite.current_angle,
            satellite.base_angle,
            config.lateral_variance_pct,
            pool.next(rng),
        );

        if dynamic {
            satellite.start_size = satellite.current_size;
            satellite.target_size =
                field::next_size(budget, config.size_variance_pct, pool.next(rng));
        }
    }
}

/// Enter the falling (exhale + rest) half of the cycle.
///
/// The radial goal is the `exhale_distance` already drawn at cycle start;
/// only the angle (and size, when dynamic) gets a fresh draw.
pub fn begin_falling(
    field_state: &mut OrbitalField,
    budget: &SizeBudget,
    config: &PacerConfig,
    pool: &mut VariancePool,
    rng: &mut ChaCha8Rng,
) {
    let dynamic = config.dynamic_size;
    for satellite in field_state.iter_mut() {
        satellite.start_angle = satellite.current_angle;
        satellite.start_distance = satellite.current_distance;

        satellite.target_angle = field::next_angle(
            satellite.current_angle,
            satellite.base_angle,
            config.lateral_variance_pct,
            pool.next(rng),
        );

        if dynamic {
            satellite.start_size = satellite.current_size;
            satellite.target_size =
                field::next_size(budget, config.size_variance_pct, pool.next(rng));
        }
    }
}

/// Commit the rising-half endpoints exactly on exit from HOLD.
pub fn commit_rising(field_state: &mut OrbitalField, dynamic_size: bool) {
    for satellite in field_state.iter_mut() {
        satellite.current_angle = satellite.target_angle;
        satellite.current_distance = satellite.inhale_distance;
        if dynamic_size {
            satellite.current_size = satellite.target_size;
        }
    }
}

/// Commit the falling-half endpoints exactly on exit from REST.
pub fn commit_falling(field_state: &mut OrbitalField, dynamic_size: bool) {
    for satellite in field_state.iter_mut() {
        satellite.current_angle = satellite.target_angle;
        satellite.current_distance = satellite.exhale_distance;
        if dynamic_size {
            satellite.current_size = satellite.target_size;
        }
    }
}
