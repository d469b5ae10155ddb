//! Animation configuration snapshot.
//!
//! The configuration is authoritative but untrusted: out-of-range values
//! are clamped by `sanitize`, never rejected. A count of zero (or a
//! negative count) is a legal state in which only the planet animates.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::BreathPhase;

/// Complete animation configuration, as supplied by a settings surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacerConfig {
    /// Requested planet scale as a fraction of the bounding size [0, 1].
    pub planet_scale: f64,
    /// User ceiling on how large the planet may grow [0, 1].
    pub user_max_planet_scale: f64,
    /// Requested satellite scale as a fraction of the bounding size [0, 1].
    pub satellite_size_scale: f64,
    /// Number of satellites. Non-positive values mean none.
    pub satellite_count: i32,
    /// Inhale duration (seconds).
    pub inhale_secs: f64,
    /// Post-inhale hold duration (seconds).
    pub hold_secs: f64,
    /// Exhale duration (seconds).
    pub exhale_secs: f64,
    /// Post-exhale rest duration (seconds).
    pub rest_secs: f64,
    /// Size variance percentage (0 disables; values above 100 are allowed).
    pub size_variance_pct: f64,
    /// Lateral (angular) variance percentage.
    pub lateral_variance_pct: f64,
    /// Radial (distance) variance percentage.
    pub radial_variance_pct: f64,
    /// Animate satellite size toward fresh per-cycle targets.
    pub dynamic_size: bool,
}

impl Default for PacerConfig {
    fn default() -> Self {
        Self {
            planet_scale: DEFAULT_PLANET_SCALE,
            user_max_planet_scale: DEFAULT_USER_MAX_PLANET_SCALE,
            satellite_size_scale: DEFAULT_SATELLITE_SIZE_SCALE,
            satellite_count: DEFAULT_SATELLITE_COUNT,
            inhale_secs: DEFAULT_INHALE_SECS,
            hold_secs: DEFAULT_HOLD_SECS,
            exhale_secs: DEFAULT_EXHALE_SECS,
            rest_secs: DEFAULT_REST_SECS,
            size_variance_pct: 0.0,
            lateral_variance_pct: 0.0,
            radial_variance_pct: 0.0,
            dynamic_size: false,
        }
    }
}

impl PacerConfig {
    /// Clamp out-of-range fields to usable values.
    ///
    /// Scales clamp into [0, 1]; durations and variance percentages floor
    /// at zero (variance above 100% is deliberate over-drive and passes
    /// through); the count floors at zero.
    pub fn sanitize(&self) -> PacerConfig {
        PacerConfig {
            planet_scale: self.planet_scale.clamp(0.0, 1.0),
            user_max_planet_scale: self.user_max_planet_scale.clamp(0.0, 1.0),
            satellite_size_scale: self.satellite_size_scale.clamp(0.0, 1.0),
            satellite_count: self.satellite_count.max(0),
            inhale_secs: self.inhale_secs.max(0.0),
            hold_secs: self.hold_secs.max(0.0),
            exhale_secs: self.exhale_secs.max(0.0),
            rest_secs: self.rest_secs.max(0.0),
            size_variance_pct: self.size_variance_pct.max(0.0),
            lateral_variance_pct: self.lateral_variance_pct.max(0.0),
            radial_variance_pct: self.radial_variance_pct.max(0.0),
            dynamic_size: self.dynamic_size,
        }
    }

    /// Satellite count as a usize. Non-positive counts collapse to zero.
    pub fn count(&self) -> usize {
        self.satellite_count.max(0) as usize
    }

    /// Derive the millisecond cycle timings.
    pub fn timings(&self) -> CycleTimings {
        CycleTimings {
            inhale_ms: self.inhale_secs.max(0.0) * 1000.0,
            hold_ms: self.hold_secs.max(0.0) * 1000.0,
            exhale_ms: self.exhale_secs.max(0.0) * 1000.0,
            rest_ms: self.rest_secs.max(0.0) * 1000.0,
        }
    }
}

/// Millisecond durations of one breathing cycle.
///
/// The half-cycle windows are the interpolation denominators: satellite
/// trajectories span inhale+hold and exhale+rest, not single phases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CycleTimings {
    pub inhale_ms: f64,
    pub hold_ms: f64,
    pub exhale_ms: f64,
    pub rest_ms: f64,
}

impl CycleTimings {
    /// Interpolation window covering inhale + hold.
    pub fn inhale_hold_ms(&self) -> f64 {
        self.inhale_ms + self.hold_ms
    }

    /// Interpolation window covering exhale + rest.
    pub fn exhale_rest_ms(&self) -> f64 {
        self.exhale_ms + self.rest_ms
    }

    /// Full cycle length.
    pub fn cycle_ms(&self) -> f64 {
        self.inhale_hold_ms() + self.exhale_rest_ms()
    }

    /// Duration of a single phase.
    pub fn phase_ms(&self, phase: BreathPhase) -> f64 {
        match phase {
            BreathPhase::Inhale => self.inhale_ms,
            BreathPhase::Hold => self.hold_ms,
            BreathPhase::Exhale => self.exhale_ms,
            BreathPhase::Rest => self.rest_ms,
        }
    }
}
