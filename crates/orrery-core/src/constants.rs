//! Animation constants and tuning parameters.

use crate::types::Rgb;

/// Animation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Milliseconds per tick.
pub const DT_MS: f64 = 1000.0 / TICK_RATE as f64;

// --- Layout ---

/// Default bounding size of the square layout viewport (layout units).
pub const DEFAULT_BOUNDING_SIZE: f64 = 400.0;

/// Base satellite size as a fraction of `bounding_size * satellite_size_scale`.
pub const SATELLITE_BASE_RATIO: f64 = 0.25;

// --- Breathing defaults ---

/// Default planet scale (fraction of the bounding size).
pub const DEFAULT_PLANET_SCALE: f64 = 0.4;

/// Default user ceiling on planet growth.
pub const DEFAULT_USER_MAX_PLANET_SCALE: f64 = 1.0;

/// Default satellite size scale.
pub const DEFAULT_SATELLITE_SIZE_SCALE: f64 = 0.2;

/// Default satellite count.
pub const DEFAULT_SATELLITE_COUNT: i32 = 250;

/// Default inhale duration (seconds).
pub const DEFAULT_INHALE_SECS: f64 = 4.0;

/// Default post-inhale hold duration (seconds).
pub const DEFAULT_HOLD_SECS: f64 = 1.0;

/// Default exhale duration (seconds).
pub const DEFAULT_EXHALE_SECS: f64 = 4.0;

/// Default post-exhale rest duration (seconds).
pub const DEFAULT_REST_SECS: f64 = 1.0;

// --- Variance ---

/// Full width of the lateral offset band at 100% variance (radians).
pub const LATERAL_SPREAD: f64 = std::f64::consts::PI;

/// Largest angular step a satellite may take in one half-cycle (radians, 45 degrees).
pub const MAX_LATERAL_STEP: f64 = std::f64::consts::FRAC_PI_4;

/// Growth multiplier applied to the size variance fraction.
/// A satellite may grow up to `base * (1 + SIZE_VARIANCE_GAIN * pct / 100)`.
pub const SIZE_VARIANCE_GAIN: f64 = 4.0;

/// Number of pre-drawn uniform samples held by a variance pool.
pub const VARIANCE_POOL_SIZE: usize = 256;

// --- Scheduling ---

/// Most phase transitions the scheduler takes in a single tick.
/// Bounds the work per tick when every phase duration is zero.
pub const MAX_PHASE_ADVANCES_PER_TICK: u32 = 4;

// --- Color ---

/// Gradient anchor at the exhaled end of the breath (`#667db6`).
pub const BASE_COLOR: Rgb = Rgb::new(102, 125, 182);

/// Gradient anchor at full inhale (`#0082c8`).
pub const PEAK_COLOR: Rgb = Rgb::new(0, 130, 200);
