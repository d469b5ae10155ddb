//! Angle helpers for orbital positioning.
//!
//! All angles are radians. Every function returns values normalized into
//! the half-open interval (-PI, PI], and interpolation always follows the
//! shortest signed arc, so a satellite near the wrap-around never swings
//! the long way around the circle.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Normalize an angle into (-PI, PI].
///
/// Total over all finite inputs and idempotent.
pub fn normalize(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

/// Shortest signed arc from `from` to `to`, in (-PI, PI].
pub fn shortest_arc(from: f64, to: f64) -> f64 {
    normalize(to - from)
}

/// Position along the shortest arc from `start` toward `target`.
///
/// `fraction` 0 yields `start` (normalized), 1 yields `target`.
pub fn interpolate(start: f64, target: f64, fraction: f64) -> f64 {
    normalize(start + shortest_arc(start, target) * fraction)
}

/// Evenly spaced slot angle for satellite `index` out of `count`.
///
/// Slot 0 sits at -PI/2 (twelve o'clock in y-down screen space) and slots
/// proceed clockwise on screen. A count of zero collapses to the slot-0
/// angle.
pub fn slot_angle(index: usize, count: usize) -> f64 {
    if count == 0 {
        return -FRAC_PI_2;
    }
    normalize(index as f64 * TAU / count as f64 - FRAC_PI_2)
}
