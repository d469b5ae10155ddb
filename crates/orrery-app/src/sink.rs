//! Render sink boundary — where computed frames leave the engine.
//!
//! Concrete drawing is out of scope; a sink is anything that accepts the
//! per-tick writes. The engine never reads anything back from it.

use orrery_core::state::FrameSnapshot;
use orrery_core::types::Rgb;

/// Consumer of per-frame output.
///
/// Call order within one tick: `apply_planet` first, then
/// `apply_satellite` once per satellite, then `frame_complete` with the
/// full snapshot. All calls are pure writes.
pub trait RenderSink: Send {
    fn apply_planet(&mut self, scale: f64, color: Rgb);
    fn apply_satellite(&mut self, id: u32, angle: f64, distance: f64, size: f64, color: Rgb);
    /// Called after all writes for the tick. Default does nothing.
    fn frame_complete(&mut self, _frame: &FrameSnapshot) {}
}

/// Push one frame through a sink in the contract order.
pub fn emit_frame(sink: &mut dyn RenderSink, frame: &FrameSnapshot) {
    sink.apply_planet(frame.planet.scale, frame.planet.color);
    for satellite in &frame.satellites {
        sink.apply_satellite(
            satellite.id,
            satellite.angle,
            satellite.distance,
            satellite.size,
            satellite.color,
        );
    }
    sink.frame_complete(frame);
}

/// Sink that discards everything. Useful for headless runs and tests.
#[derive(Debug, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn apply_planet(&mut self, _scale: f64, _color: Rgb) {}
    fn apply_satellite(&mut self, _id: u32, _angle: f64, _distance: f64, _size: f64, _color: Rgb) {}
}

/// Sink that logs frames through `tracing`.
///
/// Individual writes go out at trace level; one summary line per second
/// at debug level keeps default output readable.
#[derive(Debug, Default)]
pub struct TraceSink;

impl RenderSink for TraceSink {
    fn apply_planet(&mut self, scale: f64, color: Rgb) {
        tracing::trace!(scale, color = %color.to_hex(), "planet");
    }

    fn apply_satellite(&mut self, id: u32, angle: f64, distance: f64, size: f64, _color: Rgb) {
        tracing::trace!(id, angle, distance, size, "satellite");
    }

    fn frame_complete(&mut self, frame: &FrameSnapshot) {
        if frame.time.tick % 60 == 0 {
            tracing::debug!(
                tick = frame.time.tick,
                phase = ?frame.phase,
                cycle = frame.cycle,
                planet_scale = frame.planet.scale,
                satellites = frame.satellites.len(),
                "frame"
            );
        }
    }
}
