//! Angle-driven color blending
//!
//! A square's color depends only on where it sits around the shared center.
//! The right half of the plane starts from hue A, the left half from hue B,
//! and each drifts toward the other color as it approaches the vertical axis,
//! meeting at an even mix at 90° and 270°.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::map_linear;

/// Linear RGB color, channels in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// From 8-bit channels
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Convert HSL (hue in degrees, saturation/lightness in 0-1) to RGB
    pub fn from_hsl(h: f32, s: f32, l: f32) -> Self {
        if s == 0.0 {
            return Self::new(l, l, l);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        let h = h.rem_euclid(360.0) / 360.0;

        Self::new(
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    }

    /// Convert HSB/HSV (hue in degrees, saturation/brightness in 0-100) to RGB
    pub fn from_hsb(h: f32, s: f32, b: f32) -> Self {
        let s = (s / 100.0).clamp(0.0, 1.0);
        let v = (b / 100.0).clamp(0.0, 1.0);
        let h = h.rem_euclid(360.0) / 60.0;
        let c = v * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = v - c;
        Self::new(r + m, g + m, b + m)
    }

    /// Interpolate toward `other` by `t` (0 = self, 1 = other)
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        Rgb::from(Vec3::from(self).lerp(Vec3::from(other), t))
    }

    /// RGBA array for vertex buffers
    pub fn with_alpha(self, alpha: f32) -> [f32; 4] {
        [self.r, self.g, self.b, alpha]
    }

    /// Packed `0xRRGGBB`
    pub fn to_hex(self) -> u32 {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }
}

impl From<Rgb> for Vec3 {
    fn from(c: Rgb) -> Self {
        Vec3::new(c.r, c.g, c.b)
    }
}

impl From<Vec3> for Rgb {
    fn from(v: Vec3) -> Self {
        Rgb::new(v.x, v.y, v.z)
    }
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Colors from the original sketches
pub mod palette {
    use super::Rgb;

    /// Background grey, hsl(226, 0.11, 0.39), roughly 0x595E6E
    pub fn grey() -> Rgb {
        Rgb::from_hsl(226.0, 0.11, 0.39)
    }

    /// hsl(240, 1.0, 0.4)
    pub fn blue() -> Rgb {
        Rgb::from_hsl(240.0, 1.0, 0.4)
    }

    /// hsl(84, 1.0, 0.37)
    pub fn green() -> Rgb {
        Rgb::from_hsl(84.0, 1.0, 0.37)
    }

    /// Box clock seconds edge, rgb(255, 137, 95)
    pub fn clock_red() -> Rgb {
        Rgb::from_u8(255, 137, 95)
    }

    /// Box clock minutes edge, rgb(176, 255, 121)
    pub fn clock_green() -> Rgb {
        Rgb::from_u8(176, 255, 121)
    }

    /// Box clock hours edge, rgb(56, 76, 204)
    pub fn clock_blue() -> Rgb {
        Rgb::from_u8(56, 76, 204)
    }

    /// Box clock background, 0x0a0a0a
    pub fn clock_background() -> Rgb {
        Rgb::from_u8(10, 10, 10)
    }
}

/// The two reference hues blended by angle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Base color of the right half-plane
    pub a: Rgb,
    /// Base color of the left half-plane
    pub b: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            a: palette::blue(),
            b: palette::green(),
        }
    }
}

/// Which half-plane an angle falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Half {
    /// `[0°, 90°) ∪ (270°, 360°)`, base color A
    Right,
    /// `[90°, 270°]`, base color B
    Left,
}

/// Half-plane and blend fraction toward the other hue, before jitter.
///
/// `polar_angle` is in radians, expected in [0, 2π); other values are
/// wrapped first. The fraction is 0 on the horizontal axis and 0.5 on the
/// vertical axis; the two quadrants of each half remap in mirrored
/// directions so the result is continuous everywhere.
pub fn blend_fraction(polar_angle: f32) -> (Half, f32) {
    let deg = crate::normalize_angle_positive(polar_angle).to_degrees();
    // to_degrees can round 2π - ε up to 360
    let deg = if deg >= 360.0 { 0.0 } else { deg };

    if deg < 90.0 {
        (Half::Right, map_linear(deg, 0.0, 90.0, 0.0, 0.5))
    } else if deg <= 180.0 {
        (Half::Left, map_linear(deg, 180.0, 90.0, 0.0, 0.5))
    } else if deg <= 270.0 {
        (Half::Left, map_linear(deg, 180.0, 270.0, 0.0, 0.5))
    } else {
        (Half::Right, map_linear(deg, 360.0, 270.0, 0.0, 0.5))
    }
}

/// Color for a polar angle with an additive blend jitter.
///
/// The jittered fraction is clamped to [0, 1] before blending.
pub fn color_for(polar_angle: f32, jitter: f32, palette: &Palette) -> Rgb {
    let (half, fraction) = blend_fraction(polar_angle);
    let t = (fraction + jitter).clamp(0.0, 1.0);
    match half {
        Half::Right => palette.a.lerp(palette.b, t),
        Half::Left => palette.b.lerp(palette.a, t),
    }
}
