//! Animation systems run by the engine each tick.
//!
//! Systems are free functions over the orbital field and planet state.
//! They do not own state — all state lives in the records the engine
//! holds, and the engine calls them in a fixed order.

pub mod motion;
pub mod retarget;
pub mod snapshot;
