//! Orbit Squares - generative animation sketches
//!
//! Core modules:
//! - `sim`: Deterministic orbiting-squares engine (sampling, motion, color, tick)
//! - `render`: Plain vertex buffers for an external renderer
//! - `sketches`: Companion sketches (box clock, tentacles)
//! - `settings`: Data-driven sketch configuration

pub mod error;
pub mod render;
pub mod settings;
pub mod sim;
pub mod sketches;

pub use error::{Result, SimError};
pub use settings::{PalettePreset, Settings};

use glam::Vec2;

/// Sketch configuration constants
pub mod consts {
    /// Fixed simulation timestep (display refresh rate of the original sketches)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default population size
    pub const SQUARE_COUNT: usize = 100;
    /// Default viewport width in pixels (unit-relative values are multiplied by this)
    pub const VIEWPORT_WIDTH: f32 = 1280.0;

    /// Square edge length range, relative to viewport width
    pub const SQUARE_SIZE_MIN: f32 = 1.0 / 132.0;
    pub const SQUARE_SIZE_MAX: f32 = 1.0 / 80.0;

    /// Orbit band base radii, relative to viewport width (increasing)
    pub const ORBIT_RADII: [f32; 4] = [1.0 / 40.0, 1.0 / 19.0, 1.0 / 10.0, 1.0 / 7.0];
    /// Probability of each orbit band
    pub const ORBIT_WEIGHTS: [f32; 4] = [0.18, 0.32, 0.28, 0.22];
    /// Radial jitter so squares don't sit on exact circles, relative to viewport width
    pub const ORBIT_JITTER: f32 = 1.0 / 64.0;

    /// Orbit speed (radians/tick): slow collective drift
    pub const ORBIT_SPEED_RANGE: f32 = 0.015;
    pub const ORBIT_SPEED_TOLERANCE: f32 = 0.001;
    /// Spin speed (radians/tick): fast individual rotation
    pub const SPIN_SPEED_RANGE: f32 = 0.1;
    pub const SPIN_SPEED_TOLERANCE: f32 = 0.005;

    /// Per-tick blend jitter (± fraction)
    pub const COLOR_JITTER: f32 = 0.02;

    /// Fill and outline opacity of a square
    pub const FILL_OPACITY: f32 = 0.4;
    pub const OUTLINE_OPACITY: f32 = 0.75;
}

/// Normalized angle to [0, 2π)
#[inline]
pub fn normalize_angle_positive(angle: f32) -> f32 {
    use std::f32::consts::TAU;
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Polar angle of a point in [0, 2π)
#[inline]
pub fn polar_angle(pos: Vec2) -> f32 {
    normalize_angle_positive(pos.y.atan2(pos.x))
}

/// Linearly remap `x` from [a1, a2] onto [b1, b2] (no clamping)
#[inline]
pub fn map_linear(x: f32, a1: f32, a2: f32, b1: f32, b2: f32) -> f32 {
    b1 + (x - a1) * (b2 - b1) / (a2 - a1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{PI, TAU};

    #[test]
    fn test_normalize_angle_positive() {
        assert_eq!(normalize_angle_positive(0.0), 0.0);
        assert!((normalize_angle_positive(-PI / 2.0) - 1.5 * PI).abs() < 1e-5);
        assert!((normalize_angle_positive(TAU + 0.5) - 0.5).abs() < 1e-5);
        assert!(normalize_angle_positive(-1e-9) < TAU);
    }

    #[test]
    fn test_polar_angle_quadrants() {
        assert_eq!(polar_angle(Vec2::new(1.0, 0.0)), 0.0);
        assert!((polar_angle(Vec2::new(0.0, 1.0)) - PI / 2.0).abs() < 1e-6);
        assert!((polar_angle(Vec2::new(-1.0, 0.0)) - PI).abs() < 1e-6);
        assert!((polar_angle(Vec2::new(0.0, -1.0)) - 1.5 * PI).abs() < 1e-6);
    }

    #[test]
    fn test_map_linear() {
        assert_eq!(map_linear(0.0, 0.0, 59.0, 1.0, 12.0), 1.0);
        assert_eq!(map_linear(59.0, 0.0, 59.0, 1.0, 12.0), 12.0);
        assert_eq!(map_linear(45.0, 0.0, 90.0, 0.0, 0.5), 0.25);
        // Reversed source interval
        assert_eq!(map_linear(180.0, 180.0, 90.0, 0.0, 0.5), 0.0);
        assert_eq!(map_linear(90.0, 180.0, 90.0, 0.0, 0.5), 0.5);
    }
}
