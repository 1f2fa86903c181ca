//! Seeded sampling helpers
//!
//! All randomness in the engine flows through a [`Sampler`] owned by the
//! simulation context, so a seed fully determines a run.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{ORBIT_JITTER, ORBIT_RADII, ORBIT_WEIGHTS};
use crate::error::{Result, SimError};

/// Number of orbit bands
pub const ORBIT_BAND_COUNT: usize = 4;

/// Weighted orbit radius distribution (unit-relative, caller scales)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitBands {
    /// Base radius of each band, strictly increasing
    pub radii: [f32; ORBIT_BAND_COUNT],
    /// Probability of each band, summing to 1
    pub weights: [f32; ORBIT_BAND_COUNT],
    /// Uniform radial jitter added on top of the base radius, in [0, jitter)
    pub jitter: f32,
}

impl Default for OrbitBands {
    fn default() -> Self {
        Self {
            radii: ORBIT_RADII,
            weights: ORBIT_WEIGHTS,
            jitter: ORBIT_JITTER,
        }
    }
}

impl OrbitBands {
    /// Cumulative thresholds, e.g. `[0.18, 0.50, 0.78, 1.0]` for the defaults
    pub fn thresholds(&self) -> [f32; ORBIT_BAND_COUNT] {
        let mut acc = 0.0;
        self.weights.map(|w| {
            acc += w;
            acc
        })
    }

    /// Check the distribution is usable
    pub fn validate(&self) -> Result<()> {
        if self.weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(SimError::InvalidSettings(format!(
                "orbit weights must be finite and non-negative: {:?}",
                self.weights
            )));
        }
        let total: f32 = self.weights.iter().sum();
        if (total - 1.0).abs() > 1e-3 {
            return Err(SimError::InvalidSettings(format!(
                "orbit weights must sum to 1, got {total}"
            )));
        }
        if self.radii.iter().any(|r| !r.is_finite() || *r <= 0.0)
            || self.radii.windows(2).any(|pair| pair[0] >= pair[1])
        {
            return Err(SimError::InvalidSettings(format!(
                "orbit radii must be positive and increasing: {:?}",
                self.radii
            )));
        }
        if !self.jitter.is_finite() || self.jitter < 0.0 {
            return Err(SimError::InvalidSettings(format!(
                "orbit jitter must be non-negative, got {}",
                self.jitter
            )));
        }
        Ok(())
    }
}

/// Deterministic sampler over a PCG stream
#[derive(Debug, Clone)]
pub struct Sampler {
    rng: Pcg32,
}

impl Sampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Uniform sample in `[low, high)`.
    ///
    /// `low == high` returns `low`. Reversed or non-finite bounds are
    /// rejected rather than swapped, as is a span too wide for f32.
    pub fn uniform(&mut self, low: f32, high: f32) -> Result<f32> {
        if !low.is_finite() || !high.is_finite() || low > high || !(high - low).is_finite() {
            return Err(SimError::InvalidRange { low, high });
        }
        if low == high {
            return Ok(low);
        }
        Ok(self.rng.random_range(low..high))
    }

    /// Sample in `[-range, range)` that never falls inside `(-tolerance, tolerance)`.
    ///
    /// Draws the magnitude from `[tolerance, range)` and flips a fair coin for
    /// the sign, so it never needs to retry.
    pub fn zero_avoiding(&mut self, range: f32, tolerance: f32) -> Result<f32> {
        if !range.is_finite() || !tolerance.is_finite() || tolerance < 0.0 || tolerance >= range
        {
            return Err(SimError::NoValidSample { range, tolerance });
        }
        let magnitude = self.uniform(tolerance, range)?;
        if self.rng.random_bool(0.5) {
            Ok(magnitude)
        } else {
            Ok(-magnitude)
        }
    }

    /// Symmetric sample in `[-amount, amount]`; zero when `amount <= 0`
    pub fn spread(&mut self, amount: f32) -> f32 {
        if amount > 0.0 {
            self.rng.random_range(-amount..=amount)
        } else {
            0.0
        }
    }

    /// Pick an orbit band index according to the band weights
    pub fn choose_orbit_band(&mut self, bands: &OrbitBands) -> usize {
        let chance: f32 = self.rng.random();
        bands
            .thresholds()
            .iter()
            .position(|&threshold| chance < threshold)
            // Rounding can leave the last threshold a hair below 1.0
            .unwrap_or(ORBIT_BAND_COUNT - 1)
    }

    /// Weighted base radius plus jitter
    pub fn weighted_orbit_radius(&mut self, bands: &OrbitBands) -> f32 {
        let band = self.choose_orbit_band(bands);
        bands.radii[band] + self.spread_positive(bands.jitter)
    }

    /// Sample in `[0, amount)`; zero when `amount <= 0`
    fn spread_positive(&mut self, amount: f32) -> f32 {
        if amount > 0.0 {
            self.rng.random_range(0.0..amount)
        } else {
            0.0
        }
    }
}
