//! Tentacles on a sphere
//!
//! Each tentacle is a chain of segments that all follow the same closed-form
//! curve over a sphere, each one a little behind the previous in time. The
//! curve is the lon/lat formula from Steven Wittens' JS1K demo write-up.

use glam::Vec3;

use crate::map_linear;
use crate::sim::color::Rgb;

/// Clock advance per frame
pub const TICK: f32 = 1.0 / 90.0;
/// Radius of the sphere the curve runs over
pub const SPHERE_RADIUS: f32 = 200.0;
/// Segments per tentacle
pub const SEGMENT_COUNT: usize = 15;
/// Time lag between neighbouring segments, in ticks
pub const SEGMENT_SPACING: f32 = 4.0;
/// Height of every segment above the sphere
pub const ALTITUDE: f32 = 1.0;
/// Brightness lost per segment index
pub const DARKEN: f32 = 5.3;
/// Default number of tentacles
pub const TENTACLE_COUNT: usize = 6;
/// Time offset step between tentacles
pub const TENTACLE_TIME_STEP: f32 = -100.0;

/// HSB color, hue in degrees, saturation and brightness in 0-100
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsb {
    pub h: f32,
    pub s: f32,
    pub b: f32,
}

impl Hsb {
    pub const fn new(h: f32, s: f32, b: f32) -> Self {
        Self { h, s, b }
    }

    pub fn to_rgb(self) -> Rgb {
        Rgb::from_hsb(self.h, self.s, self.b)
    }
}

/// Base colors cycled over the tentacles: blue, red, green
pub const BASE_COLORS: [Hsb; 3] = [
    Hsb::new(212.0, 30.0, 94.0),
    Hsb::new(5.0, 20.0, 95.0),
    Hsb::new(69.0, 40.0, 74.0),
];

/// Point on the curve at time `t`, at distance `radius` from the center
pub fn curve_point(t: f32, radius: f32) -> Vec3 {
    let lon = (t + (t * 0.31).sin()).cos() * 2.0 + (t * 0.83).sin() * 3.0 + t * 0.02;
    let lat = (t * 0.7).sin() - (3.0 + t * 0.23).cos() * 3.0;
    Vec3::new(lon.cos() * lat.cos(), lon.sin() * lat.cos(), lat.sin()) * radius
}

/// One link of a tentacle
#[derive(Debug, Clone)]
pub struct Segment {
    pub id: usize,
    /// Lag behind the tentacle head, in ticks
    pub tick_offset: f32,
    pub altitude: f32,
    pub color: Hsb,
    pub loc: Vec3,
}

impl Segment {
    pub fn new(id: usize, altitude: f32, base: Hsb) -> Self {
        Self {
            id,
            tick_offset: id as f32 * SEGMENT_SPACING,
            altitude,
            color: Hsb::new(base.h, base.s, base.b - id as f32 * DARKEN),
            loc: Vec3::ZERO,
        }
    }

    pub fn calc(&mut self, t: f32) {
        self.loc = curve_point(t, SPHERE_RADIUS + self.altitude);
    }

    /// Opacity from depth: far side of the sphere fades out.
    ///
    /// The p5 sketch this comes from ran its stored alpha (always 1) through
    /// the same `[-R, R] -> [0, 1]` map, so every segment sat near 0.5. Here
    /// the segment's `z` is mapped instead, which gives the depth fade the
    /// sketch was reaching for.
    pub fn alpha(&self) -> f32 {
        map_linear(self.loc.z, -SPHERE_RADIUS, SPHERE_RADIUS, 0.0, 1.0).clamp(0.0, 1.0)
    }

    /// RGBA stroke color
    pub fn rgba(&self) -> [f32; 4] {
        self.color.to_rgb().with_alpha(self.alpha())
    }
}

/// A chain of segments sharing one curve
#[derive(Debug, Clone)]
pub struct Tentacle {
    pub time_offset: f32,
    pub base: Hsb,
    pub segments: Vec<Segment>,
}

impl Tentacle {
    pub fn new(time_offset: f32, base: Hsb) -> Self {
        let segments = (0..SEGMENT_COUNT)
            .map(|id| Segment::new(id, ALTITUDE, base))
            .collect();
        Self {
            time_offset,
            base,
            segments,
        }
    }

    /// Place every segment for the given clock value
    pub fn update(&mut self, clock: f32) {
        for seg in &mut self.segments {
            seg.calc(clock - self.time_offset - seg.tick_offset * TICK);
        }
    }

    /// Consecutive segment pairs, head first
    pub fn links(&self) -> impl Iterator<Item = (&Segment, &Segment)> {
        self.segments.windows(2).map(|pair| (&pair[0], &pair[1]))
    }
}

/// All tentacles plus the shared clock
#[derive(Debug, Clone)]
pub struct TentacleField {
    pub clock: f32,
    pub tentacles: Vec<Tentacle>,
}

impl Default for TentacleField {
    fn default() -> Self {
        Self::new(TENTACLE_COUNT)
    }
}

impl TentacleField {
    pub fn new(count: usize) -> Self {
        let tentacles = (0..count)
            .map(|idx| {
                Tentacle::new(
                    idx as f32 * TENTACLE_TIME_STEP,
                    BASE_COLORS[idx % BASE_COLORS.len()],
                )
            })
            .collect();
        Self {
            clock: 0.0,
            tentacles,
        }
    }

    /// Advance the clock one tick and move every tentacle
    pub fn advance(&mut self) {
        self.clock += TICK;
        for tentacle in &mut self.tentacles {
            tentacle.update(self.clock);
        }
    }
}
