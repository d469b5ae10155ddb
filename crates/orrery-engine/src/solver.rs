//! Size constraint solver — resolves the mutually-dependent planet and
//! satellite size limits for one cycle.
//!
//! The planet's growth ceiling depends on how large satellites can get,
//! and the satellite size ceiling depends on how much room the planet
//! leaves. Every request that exceeds a bound is clamped to it; the
//! solver never errors and never lets the pair overflow the layout.

use serde::{Deserialize, Serialize};

use orrery_core::config::PacerConfig;
use orrery_core::constants::{SATELLITE_BASE_RATIO, SIZE_VARIANCE_GAIN};

/// Resolved size extremes for one breathing cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SizeBudget {
    /// Bounding size the budget was resolved against.
    pub bounding_size: f64,
    /// Planet scale at rest (the request, clamped to the effective max).
    pub base_scale: f64,
    /// Largest planet scale the planet may grow to this cycle.
    pub effective_max_scale: f64,
    /// Planet radius at rest — the orbit floor.
    pub min_radius: f64,
    /// Planet radius at full inhale — the orbit ceiling.
    pub max_radius: f64,
    /// Ungrown satellite size.
    pub base_satellite_size: f64,
    /// Largest size any satellite may reach.
    pub max_satellite_size: f64,
}

/// Resolve the size budget for the given bounding size and configuration.
///
/// Resolution order mirrors the dependency chain: the satellite request is
/// clamped against the requested planet first, the planet ceiling is then
/// derived from the fully-grown satellite, and finally the planet request
/// is clamped against that ceiling. The result always satisfies
/// `effective_max_scale * bounding + grown_satellite <= 2 * bounding`.
pub fn resolve(bounding_size: f64, config: &PacerConfig) -> SizeBudget {
    let config = config.sanitize();
    let bounding_size = bounding_size.max(0.0);

    // Satellite request, clamped by the room the requested planet leaves.
    let requested_planet = bounding_size * config.planet_scale;
    let requested_satellite = bounding_size * config.satellite_size_scale * SATELLITE_BASE_RATIO;
    let base_satellite_size = requested_satellite.min(bounding_size - requested_planet).max(0.0);

    // Planet ceiling derived from the fully-grown satellite size.
    let growth = 1.0 + SIZE_VARIANCE_GAIN * config.size_variance_pct / 100.0;
    let system_max_scale = if bounding_size > 0.0 {
        (2.0 * bounding_size - base_satellite_size * growth) / bounding_size
    } else {
        0.0
    };
    let effective_max_scale = system_max_scale
        .min(config.user_max_planet_scale)
        .max(0.0);

    // The planet request itself honors the ceiling.
    let base_scale = config.planet_scale.min(effective_max_scale);

    // Re-derive the satellite ceiling from the clamped planet. The planet
    // only ever shrinks below its request here, so this never invalidates
    // the satellite clamp above.
    let max_satellite_size = (bounding_size - bounding_size * base_scale).max(0.0);

    SizeBudget {
        bounding_size,
        base_scale,
        effective_max_scale,
        min_radius: bounding_size * base_scale / 2.0,
        max_radius: bounding_size * effective_max_scale / 2.0,
        base_satellite_size,
        max_satellite_size,
    }
}
