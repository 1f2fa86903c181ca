//! Orbit and spin steppers
//!
//! Both steppers are pure given the square's current state: no randomness
//! and no access to other squares.
//!
//! Orbit sign convention: `x' = x cos θ + y sin θ`, `y' = y cos θ − x sin θ`.
//! That is a rotation by −θ, so a positive orbit speed moves a square
//! clockwise while a positive spin speed turns it counter-clockwise.

use glam::Vec2;

use super::square::Square;
use crate::{normalize_angle_positive, polar_angle};

/// Rotate `pos` about the origin by −`theta`
#[inline]
pub fn rotate_clockwise(pos: Vec2, theta: f32) -> Vec2 {
    let (sin, cos) = theta.sin_cos();
    Vec2::new(pos.x * cos + pos.y * sin, pos.y * cos - pos.x * sin)
}

/// Advance a square along its orbit by `orbit_speed * scale` radians.
///
/// After rotating, the position is pulled back onto `orbit_radius` so
/// repeated f32 rotations don't spiral in or out, then the polar angle is
/// recomputed.
pub fn step_orbit(square: &mut Square, scale: f32) {
    let theta = square.orbit_speed * scale;
    if theta == 0.0 {
        return;
    }
    let mut pos = rotate_clockwise(square.pos, theta);

    let len = pos.length();
    if len > 0.0 && square.orbit_radius > 0.0 {
        pos *= square.orbit_radius / len;
    }

    square.pos = pos;
    square.polar_angle = polar_angle(pos);
}

/// Advance a square's own rotation, wrapped into [0, 2π)
pub fn step_spin(square: &mut Square, scale: f32) {
    square.spin = normalize_angle_positive(square.spin + square.spin_speed * scale);
}
