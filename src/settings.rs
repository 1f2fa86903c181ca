//! Sketch settings
//!
//! Everything that distinguished the historical sketch variants (palette,
//! speed ranges, orbit bands) lives here as data. Persisted as JSON.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::consts::*;
use crate::error::{Result, SimError};
use crate::sim::color::{Palette, Rgb, palette};
use crate::sim::sampling::{OrbitBands, Sampler};

/// Named color pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PalettePreset {
    /// Blue on the right, green on the left
    #[default]
    Meadow,
    /// Box clock red and blue
    Ember,
    /// Box clock green and blue
    Tide,
    /// Use `Settings::custom_palette`
    Custom,
}

impl PalettePreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            PalettePreset::Meadow => "Meadow",
            PalettePreset::Ember => "Ember",
            PalettePreset::Tide => "Tide",
            PalettePreset::Custom => "Custom",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "meadow" => Some(PalettePreset::Meadow),
            "ember" => Some(PalettePreset::Ember),
            "tide" => Some(PalettePreset::Tide),
            "custom" => Some(PalettePreset::Custom),
            _ => None,
        }
    }

    /// Reference hues for this preset (`None` for `Custom`)
    pub fn palette(&self) -> Option<Palette> {
        match self {
            PalettePreset::Meadow => Some(Palette::default()),
            PalettePreset::Ember => Some(Palette {
                a: palette::clock_red(),
                b: palette::clock_blue(),
            }),
            PalettePreset::Tide => Some(Palette {
                a: palette::clock_green(),
                b: palette::clock_blue(),
            }),
            PalettePreset::Custom => None,
        }
    }
}

/// Signed speed range that avoids a band around zero
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedRange {
    /// Maximum magnitude (exclusive)
    pub range: f32,
    /// Minimum magnitude
    pub tolerance: f32,
}

impl SpeedRange {
    pub const fn new(range: f32, tolerance: f32) -> Self {
        Self { range, tolerance }
    }

    pub fn sample(&self, sampler: &mut Sampler) -> Result<f32> {
        sampler.zero_avoiding(self.range, self.tolerance)
    }

    fn validate(&self, name: &str) -> Result<()> {
        if !(self.tolerance >= 0.0 && self.tolerance < self.range && self.range.is_finite()) {
            return Err(SimError::InvalidSettings(format!(
                "{name} speed needs 0 <= tolerance < range, got range {} tolerance {}",
                self.range, self.tolerance
            )));
        }
        Ok(())
    }
}

/// Orbiting squares settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Number of squares, fixed for the lifetime of a simulation
    pub population: usize,
    /// Viewport width in pixels; unit-relative sizes and radii scale by this
    pub viewport_width: f32,
    /// Render depth shared by every square
    #[serde(default)]
    pub z: f32,

    // === Shape ===
    /// Smallest edge length, relative to viewport width
    pub size_min: f32,
    /// Largest edge length (exclusive), relative to viewport width
    pub size_max: f32,

    // === Motion ===
    /// Orbit band distribution
    #[serde(default)]
    pub orbit: OrbitBands,
    /// Orbit speed per tick (radians)
    pub orbit_speed: SpeedRange,
    /// Spin speed per tick (radians)
    pub spin_speed: SpeedRange,

    // === Color ===
    pub palette: PalettePreset,
    /// Used when `palette` is `Custom`
    #[serde(default)]
    pub custom_palette: Option<Palette>,
    /// Per-tick blend jitter (± fraction)
    pub color_jitter: f32,
    /// Clear color for the host renderer
    pub background: Rgb,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            population: SQUARE_COUNT,
            viewport_width: VIEWPORT_WIDTH,
            z: 0.0,

            size_min: SQUARE_SIZE_MIN,
            size_max: SQUARE_SIZE_MAX,

            orbit: OrbitBands::default(),
            orbit_speed: SpeedRange::new(ORBIT_SPEED_RANGE, ORBIT_SPEED_TOLERANCE),
            spin_speed: SpeedRange::new(SPIN_SPEED_RANGE, SPIN_SPEED_TOLERANCE),

            palette: PalettePreset::Meadow,
            custom_palette: None,
            color_jitter: COLOR_JITTER,
            background: palette::grey(),
        }
    }
}

impl Settings {
    /// Create settings from a palette preset
    pub fn from_preset(preset: PalettePreset) -> Self {
        Self {
            palette: preset,
            ..Self::default()
        }
    }

    /// Reference hues in effect (custom palette falls back to the default pair)
    pub fn palette(&self) -> Palette {
        self.palette
            .palette()
            .or(self.custom_palette)
            .unwrap_or_default()
    }

    /// Check every sampling precondition up front
    pub fn validate(&self) -> Result<()> {
        if !(self.viewport_width > 0.0 && self.viewport_width.is_finite()) {
            return Err(SimError::InvalidSettings(format!(
                "viewport width must be positive, got {}",
                self.viewport_width
            )));
        }
        if !(self.size_min > 0.0 && self.size_min <= self.size_max && self.size_max.is_finite()) {
            return Err(SimError::InvalidSettings(format!(
                "size range must satisfy 0 < min <= max, got [{}, {})",
                self.size_min, self.size_max
            )));
        }
        self.orbit.validate()?;
        self.orbit_speed.validate("orbit")?;
        self.spin_speed.validate("spin")?;
        if !(self.color_jitter >= 0.0 && self.color_jitter <= 1.0) {
            return Err(SimError::InvalidSettings(format!(
                "color jitter must be within [0, 1], got {}",
                self.color_jitter
            )));
        }
        if self.palette == PalettePreset::Custom && self.custom_palette.is_none() {
            return Err(SimError::InvalidSettings(
                "custom palette selected but none given".to_string(),
            ));
        }
        Ok(())
    }

    /// Load settings from a JSON file and validate them
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("Using default settings ({}): {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate().is_ok());
        for preset in [PalettePreset::Meadow, PalettePreset::Ember, PalettePreset::Tide] {
            assert!(Settings::from_preset(preset).validate().is_ok());
        }
    }

    #[test]
    fn test_preset_names_round_trip() {
        for preset in [
            PalettePreset::Meadow,
            PalettePreset::Ember,
            PalettePreset::Tide,
            PalettePreset::Custom,
        ] {
            assert_eq!(PalettePreset::from_str(preset.as_str()), Some(preset));
        }
        assert_eq!(PalettePreset::from_str("nope"), None);
    }

    #[test]
    fn test_invalid_speed_range_rejected() {
        let mut settings = Settings::default();
        settings.spin_speed = SpeedRange::new(0.005, 0.005);
        assert!(matches!(
            settings.validate(),
            Err(SimError::InvalidSettings(_))
        ));
    }

    #[test]
    fn test_invalid_sizes_rejected() {
        let mut settings = Settings::default();
        settings.size_min = 0.1;
        settings.size_max = 0.05;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.viewport_width = 0.0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_custom_palette() {
        let mut settings = Settings::from_preset(PalettePreset::Custom);
        assert!(settings.validate().is_err());

        let custom = Palette {
            a: Rgb::new(1.0, 0.0, 0.0),
            b: Rgb::new(0.0, 0.0, 1.0),
        };
        settings.custom_palette = Some(custom);
        assert!(settings.validate().is_ok());
        assert_eq!(settings.palette(), custom);
    }

    #[test]
    fn test_save_and_load() {
        let dir = std::env::temp_dir().join(format!("orbit-squares-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.json");

        let mut settings = Settings::from_preset(PalettePreset::Ember);
        settings.population = 12;
        settings.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded, settings);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let settings = Settings::load_or_default("/nonexistent/orbit-squares.json");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_json_uses_defaults_for_optional_fields() {
        let json = r#"{
            "population": 5,
            "viewport_width": 800.0,
            "size_min": 0.01,
            "size_max": 0.02,
            "orbit_speed": { "range": 0.02, "tolerance": 0.001 },
            "spin_speed": { "range": 0.2, "tolerance": 0.01 },
            "palette": "Tide",
            "color_jitter": 0.0,
            "background": { "r": 0.0, "g": 0.0, "b": 0.0 }
        }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.orbit, OrbitBands::default());
        assert_eq!(settings.z, 0.0);
        assert!(settings.validate().is_ok());
    }
}
