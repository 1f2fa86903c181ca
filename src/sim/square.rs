//! Square entity and its creation
//!
//! A square orbits the shared center on a fixed radius, spins about its own
//! center and carries the color derived from its polar angle.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::color::{Palette, Rgb, color_for};
use super::sampling::Sampler;
use crate::error::{Result, SimError};
use crate::settings::Settings;
use crate::{polar_angle, polar_to_cartesian};

/// One orbiting square
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Square {
    /// Creation index, also the iteration order
    pub id: u32,
    /// Edge length, fixed at creation
    pub size: f32,
    /// Position relative to the shared center
    pub pos: Vec2,
    /// Constant render depth
    pub z: f32,
    /// Distance from the center at creation; `pos` is kept on this circle
    pub orbit_radius: f32,
    /// Local rotation in [0, 2π)
    pub spin: f32,
    /// Orbit increment per tick (radians, signed, never near zero)
    pub orbit_speed: f32,
    /// Spin increment per tick (radians, signed, never near zero)
    pub spin_speed: f32,
    /// `atan2(pos.y, pos.x)` in [0, 2π), refreshed with every move
    pub polar_angle: f32,
    /// Current color
    pub color: Rgb,
}

impl Square {
    /// Build a square from explicit values.
    ///
    /// Rejects non-positive sizes and zero or non-finite speeds. The color is
    /// mapped without jitter.
    pub fn new(
        id: u32,
        pos: Vec2,
        size: f32,
        orbit_speed: f32,
        spin_speed: f32,
        palette: &Palette,
    ) -> Result<Self> {
        if !(size > 0.0 && size.is_finite()) {
            return Err(SimError::InvalidSettings(format!(
                "square size must be positive, got {size}"
            )));
        }
        for (name, speed) in [("orbit", orbit_speed), ("spin", spin_speed)] {
            if speed == 0.0 || !speed.is_finite() {
                return Err(SimError::InvalidSettings(format!(
                    "{name} speed must be non-zero, got {speed}"
                )));
            }
        }

        let polar_angle = polar_angle(pos);
        Ok(Self {
            id,
            size,
            pos,
            z: 0.0,
            orbit_radius: pos.length(),
            spin: 0.0,
            orbit_speed,
            spin_speed,
            polar_angle,
            color: color_for(polar_angle, 0.0, palette),
        })
    }

    /// Spawn a randomly placed square from the sketch settings
    pub fn spawn(id: u32, settings: &Settings, sampler: &mut Sampler) -> Result<Self> {
        let scale = settings.viewport_width;
        let size = sampler.uniform(settings.size_min * scale, settings.size_max * scale)?;

        let radius = sampler.weighted_orbit_radius(&settings.orbit) * scale;
        let angle = sampler.uniform(0.0, TAU)?;
        let pos = polar_to_cartesian(radius, angle);

        let orbit_speed = settings.orbit_speed.sample(sampler)?;
        let spin_speed = settings.spin_speed.sample(sampler)?;
        let spin = sampler.uniform(0.0, TAU)?;

        let polar_angle = polar_angle(pos);
        let jitter = sampler.spread(settings.color_jitter);
        let color = color_for(polar_angle, jitter, &settings.palette());

        Ok(Self {
            id,
            size,
            pos,
            z: settings.z,
            orbit_radius: radius,
            spin,
            orbit_speed,
            spin_speed,
            polar_angle,
            color,
        })
    }

    /// Refresh the color from the current polar angle
    pub fn recolor(&mut self, jitter: f32, palette: &Palette) {
        self.color = color_for(self.polar_angle, jitter, palette);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_computes_derived_state() {
        let palette = Palette::default();
        let sq = Square::new(0, Vec2::new(0.0, -2.0), 4.0, 0.01, 0.05, &palette).unwrap();
        assert!((sq.polar_angle - 1.5 * std::f32::consts::PI).abs() < 1e-5);
        assert!((sq.orbit_radius - 2.0).abs() < 1e-6);
        assert_eq!(sq.color, color_for(sq.polar_angle, 0.0, &palette));
    }

    #[test]
    fn test_new_rejects_zero_speed_and_size() {
        let palette = Palette::default();
        assert!(Square::new(0, Vec2::X, 1.0, 0.0, 0.1, &palette).is_err());
        assert!(Square::new(0, Vec2::X, 1.0, 0.1, 0.0, &palette).is_err());
        assert!(Square::new(0, Vec2::X, 0.0, 0.1, 0.1, &palette).is_err());
        assert!(Square::new(0, Vec2::X, 1.0, f32::NAN, 0.1, &palette).is_err());
    }

    #[test]
    fn test_spawn_respects_settings() {
        let settings = Settings::default();
        let mut sampler = Sampler::new(11);
        let scale = settings.viewport_width;
        for id in 0..500 {
            let sq = Square::spawn(id, &settings, &mut sampler).unwrap();
            assert!(sq.size >= settings.size_min * scale && sq.size < settings.size_max * scale);
            assert!(sq.orbit_speed.abs() >= settings.orbit_speed.tolerance);
            assert!(sq.orbit_speed.abs() < settings.orbit_speed.range);
            assert!(sq.spin_speed.abs() >= settings.spin_speed.tolerance);
            assert!(sq.spin_speed.abs() < settings.spin_speed.range);
            assert!((0.0..TAU).contains(&sq.spin));
            assert!((sq.pos.length() - sq.orbit_radius).abs() < 1e-2);
            assert!((sq.polar_angle - polar_angle(sq.pos)).abs() < 1e-6);
            assert_eq!(sq.z, settings.z);
        }
    }

    #[test]
    fn test_spawn_is_deterministic() {
        let settings = Settings::default();
        let a = Square::spawn(0, &settings, &mut Sampler::new(5)).unwrap();
        let b = Square::spawn(0, &settings, &mut Sampler::new(5)).unwrap();
        assert_eq!(a, b);
    }
}
