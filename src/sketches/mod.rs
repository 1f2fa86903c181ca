//! Companion sketches
//!
//! Small standalone animations that share the color helpers but not the
//! orbiting-squares engine.

pub mod box_clock;
pub mod tentacle;

pub use box_clock::{BoxClock, Edge};
pub use tentacle::{Tentacle, TentacleField};
