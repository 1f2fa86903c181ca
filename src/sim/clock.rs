//! Fixed-step frame clock
//!
//! Converts wall-clock frame deltas into a whole number of simulation ticks.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::error::{Result, SimError};

/// Largest frame delta accepted in one call (seconds)
const MAX_FRAME_DELTA: f32 = 0.1;

/// Accumulator that hands out fixed ticks
#[derive(Debug, Clone)]
pub struct FrameClock {
    step: f32,
    accumulator: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            step: SIM_DT,
            accumulator: 0.0,
        }
    }
}

impl FrameClock {
    /// Clock with a custom tick length; `step` must be positive and finite
    pub fn new(step: f32) -> Result<Self> {
        if !(step > 0.0 && step.is_finite()) {
            return Err(SimError::InvalidSettings(format!(
                "frame clock step must be positive, got {step}"
            )));
        }
        Ok(Self {
            step,
            accumulator: 0.0,
        })
    }

    /// Add elapsed time and return how many ticks to run now.
    ///
    /// Long stalls are clamped and at most `MAX_SUBSTEPS` ticks are
    /// returned; leftover time beyond that is dropped.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        if elapsed.is_finite() {
            self.accumulator += elapsed.clamp(0.0, MAX_FRAME_DELTA);
        }

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < MAX_SUBSTEPS {
            self.accumulator -= self.step;
            ticks += 1;
        }
        if ticks == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(self.step);
        }
        ticks
    }

    /// Fraction of a tick waiting in the accumulator
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_steps() {
        let mut clock = FrameClock::new(0.25).unwrap();
        assert_eq!(clock.advance(0.1), 0);
        assert_eq!(clock.advance(0.1), 0);
        assert_eq!(clock.advance(0.1), 1);
        assert!((clock.alpha() - 0.2).abs() < 1e-4);
    }

    #[test]
    fn test_stall_is_capped() {
        let mut clock = FrameClock::new(0.001).unwrap();
        assert_eq!(clock.advance(10.0), MAX_SUBSTEPS);
        assert!(clock.alpha() <= 1.0);
    }

    #[test]
    fn test_rejects_degenerate_step() {
        for step in [0.0, -0.01, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                FrameClock::new(step),
                Err(SimError::InvalidSettings(_))
            ));
        }
    }

    #[test]
    fn test_negative_delta_ignored() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.advance(f32::NAN), 0);
        assert_eq!(clock.alpha(), 0.0);
    }

    #[test]
    fn test_sixty_hz_frames() {
        let mut clock = FrameClock::default();
        let total: u32 = (0..60).map(|_| clock.advance(SIM_DT)).sum();
        assert!((59..=60).contains(&total));
    }
}
