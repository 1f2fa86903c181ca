//! Simulation context
//!
//! Owns the population, the sampler and the settings. Nothing is global, so
//! any number of independent simulations can run side by side.

use serde::Serialize;

use super::color::Palette;
use super::sampling::Sampler;
use super::square::Square;
use crate::error::{Result, SimError};
use crate::settings::Settings;

/// Complete simulation state (deterministic for a given seed)
#[derive(Debug, Clone)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    settings: Settings,
    palette: Palette,
    sampler: Sampler,
    /// Population, sorted by id and never resized
    squares: Vec<Square>,
}

/// Serializable view of one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub seed: u64,
    pub time_ticks: u64,
    pub squares: &'a [Square],
}

impl SimState {
    /// Validate settings and spawn the population
    pub fn new(settings: Settings, seed: u64) -> Result<Self> {
        settings.validate()?;

        let mut sampler = Sampler::new(seed);
        let squares = (0..settings.population)
            .map(|id| Square::spawn(id as u32, &settings, &mut sampler))
            .collect::<Result<Vec<_>>>()?;

        log::info!(
            "Simulation created: {} squares, seed {}, palette {}",
            squares.len(),
            seed,
            settings.palette.as_str()
        );

        Ok(Self {
            seed,
            time_ticks: 0,
            palette: settings.palette(),
            settings,
            sampler,
            squares,
        })
    }

    /// Build a simulation around hand-placed squares (no spawning).
    ///
    /// Speeds may exceed the configured ranges but must stay outside the
    /// tolerance band around zero.
    pub fn with_squares(settings: Settings, seed: u64, mut squares: Vec<Square>) -> Result<Self> {
        settings.validate()?;
        for square in &squares {
            let checks = [
                ("orbit", square.orbit_speed, settings.orbit_speed.tolerance),
                ("spin", square.spin_speed, settings.spin_speed.tolerance),
            ];
            for (name, speed, tolerance) in checks {
                if speed.abs() < tolerance {
                    return Err(SimError::InvalidSettings(format!(
                        "square {} {name} speed {speed} is inside (-{tolerance}, {tolerance})",
                        square.id
                    )));
                }
            }
        }
        squares.sort_by_key(|s| s.id);
        Ok(Self {
            seed,
            time_ticks: 0,
            palette: settings.palette(),
            settings,
            sampler: Sampler::new(seed),
            squares,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Current population, in id order
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Frame view for serialization
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            seed: self.seed,
            time_ticks: self.time_ticks,
            squares: &self.squares,
        }
    }

    /// Split borrow used by the tick: population plus the shared sampler
    pub(crate) fn parts_mut(&mut self) -> (&mut [Square], &mut Sampler, &Palette, f32) {
        (
            &mut self.squares,
            &mut self.sampler,
            &self.palette,
            self.settings.color_jitter,
        )
    }
}
