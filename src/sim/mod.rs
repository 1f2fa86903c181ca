//! Deterministic orbiting-squares engine
//!
//! This module must stay pure and deterministic:
//! - Fixed per-tick increments (optionally scaled by the caller)
//! - Seeded RNG only, owned by the simulation context
//! - Stable iteration order (by square ID)
//! - No rendering or platform dependencies

pub mod clock;
pub mod color;
pub mod motion;
pub mod sampling;
pub mod square;
pub mod state;
pub mod tick;

pub use clock::FrameClock;
pub use color::{Half, Palette, Rgb, blend_fraction, color_for};
pub use motion::{rotate_clockwise, step_orbit, step_spin};
pub use sampling::{OrbitBands, Sampler};
pub use square::Square;
pub use state::{SimState, Snapshot};
pub use tick::{TickInput, tick};
