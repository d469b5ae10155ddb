//! ORRERY runtime shell.
//!
//! Wires the headless engine to a render sink: a fixed-rate loop thread
//! fed by a command channel, a shared latest-snapshot cell for
//! synchronous polling, and a session clock for the record emitted when
//! a session ends.

pub mod error;
pub mod pacer_loop;
pub mod session;
pub mod sink;
pub mod state;

pub use orrery_core as core;
pub use state::PacerRuntime;
