//! Wireframe box clock
//!
//! A cube that tumbles slowly while each axis stretches with the time of day:
//! seconds along x, minutes along y, hours along z.

use chrono::Timelike;
use glam::{EulerRot, Quat, Vec3};

use crate::map_linear;
use crate::sim::color::{Rgb, palette};

/// Cube edge length before scaling
pub const BOX_SIZE: f32 = 12.0;
/// Rotation per tick on each axis (radians)
pub const BOX_TICK: f32 = 0.008;
/// Axis scale at the start of each period
pub const SCALE_MIN: f32 = 1.0;
/// Axis scale at the end of each period
pub const SCALE_MAX: f32 = 12.0;

/// One colored edge in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub start: Vec3,
    pub end: Vec3,
    pub color: Rgb,
}

/// Box clock state
#[derive(Debug, Clone)]
pub struct BoxClock {
    /// Edge length before scaling
    pub size: f32,
    /// Rotation per tick on each axis
    pub tick: f32,
    /// Euler rotation (XYZ order)
    pub rotation: Vec3,
    /// Per-axis scale from the time of day
    pub scale: Vec3,
}

impl Default for BoxClock {
    fn default() -> Self {
        Self {
            size: BOX_SIZE,
            tick: BOX_TICK,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl BoxClock {
    /// Create a clock already scaled to `time`
    pub fn new(time: &impl Timelike) -> Self {
        let mut clock = Self::default();
        clock.set_time(time);
        clock
    }

    /// Per-axis scale for a time of day
    pub fn scale_for(time: &impl Timelike) -> Vec3 {
        Vec3::new(
            map_linear(time.second() as f32, 0.0, 59.0, SCALE_MIN, SCALE_MAX),
            map_linear(time.minute() as f32, 0.0, 59.0, SCALE_MIN, SCALE_MAX),
            map_linear(time.hour() as f32, 0.0, 23.0, SCALE_MIN, SCALE_MAX),
        )
    }

    pub fn set_time(&mut self, time: &impl Timelike) {
        self.scale = Self::scale_for(time);
    }

    /// Tumble by one tick on every axis
    pub fn rotate(&mut self) {
        self.rotation += Vec3::splat(self.tick);
    }

    /// One frame: rotate, then rescale to `time`
    pub fn update(&mut self, time: &impl Timelike) {
        self.rotate();
        self.set_time(time);
    }

    /// The twelve edges in world space.
    ///
    /// Edges along local x are red (seconds), along y green (minutes) and
    /// along z blue (hours).
    pub fn edges(&self) -> Vec<Edge> {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        let half = self.size / 2.0;
        let to_world = |corner: Vec3| rotation * (corner * half * self.scale);

        let axes = [
            (Vec3::X, palette::clock_red()),
            (Vec3::Y, palette::clock_green()),
            (Vec3::Z, palette::clock_blue()),
        ];

        let mut edges = Vec::with_capacity(12);
        for (axis, color) in axes {
            // The two axes perpendicular to this edge direction
            let (u, v) = match axis {
                a if a == Vec3::X => (Vec3::Y, Vec3::Z),
                a if a == Vec3::Y => (Vec3::X, Vec3::Z),
                _ => (Vec3::X, Vec3::Y),
            };
            for (su, sv) in [(-1.0, -1.0), (-1.0, 1.0), (1.0, -1.0), (1.0, 1.0)] {
                let offset = u * su + v * sv;
                edges.push(Edge {
                    start: to_world(offset - axis),
                    end: to_world(offset + axis),
                    color,
                });
            }
        }
        edges
    }
}
