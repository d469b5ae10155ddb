//! Plain-data state records for the orbital field.
//!
//! Records hold no logic. Animation stepping lives in the engine's
//! systems, which read the start/target pairs and write the current
//! values.

use serde::{Deserialize, Serialize};

use crate::types::Rgb;

/// Per-satellite animation record.
///
/// Angles are radians in (-PI, PI]. Distances and sizes are layout units,
/// non-negative and bounded by the layout's bounding size. The
/// start/target pairs describe the trajectory for the active half-cycle;
/// the inhale/exhale distances are drawn once per cycle and consumed by
/// the two halves in turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Satellite {
    /// Stable identifier (slot index at creation time).
    pub id: u32,
    /// Fixed slot angle this satellite drifts around.
    pub base_angle: f64,
    /// Angle at the start of the active half-cycle.
    pub start_angle: f64,
    /// Angle being animated right now.
    pub current_angle: f64,
    /// Angle goal for the active half-cycle.
    pub target_angle: f64,
    /// Distance at the start of the active half-cycle.
    pub start_distance: f64,
    /// Distance being animated right now.
    pub current_distance: f64,
    /// Distance goal for the rising (inhale+hold) half of the cycle.
    pub inhale_distance: f64,
    /// Distance goal for the falling (exhale+rest) half of the cycle.
    pub exhale_distance: f64,
    /// Size at the start of the active half-cycle.
    pub start_size: f64,
    /// Size being animated right now.
    pub current_size: f64,
    /// Size goal for the active half-cycle.
    pub target_size: f64,
}

/// Singleton planet record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetState {
    /// Current scale as a fraction of the bounding size.
    pub scale: f64,
    /// Current fill color.
    pub color: Rgb,
}
