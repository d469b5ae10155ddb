//! Animation engine for the ORRERY breathing pacer.
//!
//! Owns the orbital field, runs the breathing phase machine at a fixed
//! tick rate, and produces FrameSnapshots for a render sink.

pub mod engine;
pub mod field;
pub mod solver;
pub mod systems;
pub mod variance;

pub use engine::PacerEngine;
pub use orrery_core as core;
