//! Orbital field layout — the satellite record arena and its randomized
//! target math.
//!
//! Satellites live in a plain Vec indexed by slot. Growing the count
//! appends records at the orbit floor; shrinking truncates from the end;
//! either way every slot angle is recomputed, so base angles are not
//! stable across count changes. The target formulas here are pure — they
//! take the uniform draw as an argument — which keeps them testable
//! without a generator.

use rand_chacha::ChaCha8Rng;

use orrery_core::angles;
use orrery_core::components::Satellite;
use orrery_core::constants::{LATERAL_SPREAD, MAX_LATERAL_STEP, SIZE_VARIANCE_GAIN};

use crate::solver::SizeBudget;
use crate::variance::VariancePool;

/// The satellite record arena.
#[derive(Debug, Clone, Default)]
pub struct OrbitalField {
    satellites: Vec<Satellite>,
}

impl OrbitalField {
    pub fn len(&self) -> usize {
        self.satellites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.satellites.is_empty()
    }

    pub fn satellites(&self) -> &[Satellite] {
        &self.satellites
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Satellite> {
        self.satellites.iter_mut()
    }

    /// Resize the arena to `count` records and reassign every slot.
    ///
    /// Survivors keep their in-flight state (they glide to their new slot
    /// at the next retarget rather than teleporting). New records enter
    /// at their slot on the orbit floor with one initial size draw.
    pub fn rebuild(
        &mut self,
        count: usize,
        budget: &SizeBudget,
        size_pct: f64,
        pool: &mut VariancePool,
        rng: &mut ChaCha8Rng,
    ) {
        self.satellites.truncate(count);

        while self.satellites.len() < count {
            let index = self.satellites.len();
            let angle = angles::slot_angle(index, count);
            let size = if size_pct > 0.0 {
                next_size(budget, size_pct, pool.next(rng))
            } else {
                budget.base_satellite_size
            };
            self.satellites.push(Satellite {
                id: index as u32,
                base_angle: angle,
                start_angle: angle,
                current_angle: angle,
                target_angle: angle,
                start_distance: budget.min_radius,
                current_distance: budget.min_radius,
                inhale_distance: budget.min_radius,
                exhale_distance: budget.min_radius,
                start_size: size,
                current_size: size,
                target_size: size,
            });
        }

        for (index, satellite) in self.satellites.iter_mut().enumerate() {
            satellite.id = index as u32;
            satellite.base_angle = angles::slot_angle(index, count);
        }
    }

    /// Discard all records and rebuild from scratch.
    pub fn reset(
        &mut self,
        count: usize,
        budget: &SizeBudget,
        size_pct: f64,
        pool: &mut VariancePool,
        rng: &mut ChaCha8Rng,
    ) {
        self.satellites.clear();
        self.rebuild(count, budget, size_pct, pool, rng);
    }
}

/// Next angle target: a bounded random walk around `base_angle`.
///
/// The draw offsets the base slot by up to half `LATERAL_SPREAD` in either
/// direction at 100% variance; the step from the current angle toward that
/// raw target is then clamped to `MAX_LATERAL_STEP`, so no satellite moves
/// more than 45 degrees in one half-cycle no matter the variance setting.
/// At zero variance the walk heads straight home to the base slot.
pub fn next_angle(current_angle: f64, base_angle: f64, lateral_pct: f64, p: f64) -> f64 {
    let offset = (p - 0.5) * LATERAL_SPREAD * lateral_pct / 100.0;
    let raw_target = base_angle + offset;
    let step = angles::shortest_arc(current_angle, raw_target)
        .clamp(-MAX_LATERAL_STEP, MAX_LATERAL_STEP);
    angles::normalize(current_angle + step)
}

/// Radial goals for one cycle: `(inhale_distance, exhale_distance)`.
///
/// At zero variance the goals are the orbit ceiling and floor exactly.
/// Otherwise one shared draw pushes both goals outward proportionally, so
/// a satellite drawn further out on inhale sits further out on exhale too.
pub fn cycle_positions(budget: &SizeBudget, radial_pct: f64, p: f64) -> (f64, f64) {
    if radial_pct <= 0.0 {
        return (budget.max_radius, budget.min_radius);
    }
    let factor = radial_pct / 100.0 * p;
    let inhale = (budget.max_radius + budget.max_radius * factor).min(budget.bounding_size);
    let exhale = (budget.min_radius + budget.min_radius * factor).min(budget.bounding_size);
    (inhale, exhale)
}

/// Next size target: the base size grown by the variance draw, capped so
/// it never leaves the layout.
pub fn next_size(budget: &SizeBudget, size_pct: f64, p: f64) -> f64 {
    let grown = budget.base_satellite_size
        + p * budget.base_satellite_size * SIZE_VARIANCE_GAIN * size_pct / 100.0;
    grown.min(budget.bounding_size)
}
