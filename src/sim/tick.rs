//! Per-frame simulation tick
//!
//! Advances every square once: orbit, then spin, then recolor.

use super::motion::{step_orbit, step_spin};
use super::state::SimState;

/// Input for a single tick
#[derive(Debug, Clone)]
pub struct TickInput {
    /// Multiplier on every angular increment (1.0 = one fixed step)
    pub time_scale: f32,
}

impl Default for TickInput {
    fn default() -> Self {
        Self { time_scale: 1.0 }
    }
}

/// Advance the simulation by one tick.
///
/// A non-finite `time_scale` is treated as zero: squares hold their place
/// and only the color jitter changes.
pub fn tick(state: &mut SimState, input: &TickInput) {
    let scale = if input.time_scale.is_finite() {
        input.time_scale
    } else {
        log::warn!("Ignoring non-finite time scale {}", input.time_scale);
        0.0
    };
    let (squares, sampler, palette, jitter_amount) = state.parts_mut();

    for square in squares.iter_mut() {
        step_orbit(square, scale);
        step_spin(square, scale);
        square.recolor(sampler.spread(jitter_amount), palette);
    }

    state.time_ticks += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::color::{Palette, color_for};
    use crate::sim::square::Square;
    use glam::Vec2;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_single_square_full_revolution() {
        let square = Square::new(0, Vec2::new(1.0, 0.0), 1.0, FRAC_PI_2, 0.1, &Palette::default())
            .unwrap();
        let mut state = SimState::with_squares(Settings::default(), 1, vec![square]).unwrap();

        let input = TickInput::default();
        for _ in 0..4 {
            tick(&mut state, &input);
        }

        let pos = state.squares()[0].pos;
        assert!((pos - Vec2::new(1.0, 0.0)).length() < 1e-5, "{pos:?}");
        assert_eq!(state.time_ticks, 4);
    }

    #[test]
    fn test_thousand_ticks_keep_sizes() {
        let mut state = SimState::new(Settings::default(), 424242).unwrap();
        assert_eq!(state.squares().len(), 100);
        let sizes: Vec<f32> = state.squares().iter().map(|s| s.size).collect();

        let input = TickInput::default();
        for _ in 0..1000 {
            tick(&mut state, &input);
            for (square, size) in state.squares().iter().zip(&sizes) {
                assert_eq!(square.size, *size);
            }
        }
        assert_eq!(state.squares().len(), 100);
    }

    #[test]
    fn test_tick_updates_every_square() {
        let mut settings = Settings::default();
        settings.population = 20;
        let mut state = SimState::new(settings, 3).unwrap();
        let before = state.squares().to_vec();

        tick(&mut state, &TickInput::default());

        for (old, new) in before.iter().zip(state.squares()) {
            assert_ne!(old.pos, new.pos);
            assert_ne!(old.spin, new.spin);
            assert_eq!(new.polar_angle, crate::polar_angle(new.pos));
        }
    }

    #[test]
    fn test_color_stays_within_jitter_of_mapping() {
        let mut state = SimState::new(Settings::default(), 99).unwrap();
        let palette = *state.palette();
        let jitter = state.settings().color_jitter;
        tick(&mut state, &TickInput::default());

        for square in state.squares() {
            let low = color_for(square.polar_angle, -jitter, &palette);
            let high = color_for(square.polar_angle, jitter, &palette);
            for (c, (a, b)) in [
                (square.color.r, (low.r, high.r)),
                (square.color.g, (low.g, high.g)),
                (square.color.b, (low.b, high.b)),
            ] {
                assert!(c >= a.min(b) - 1e-5 && c <= a.max(b) + 1e-5);
            }
        }
    }

    #[test]
    fn test_zero_jitter_is_periodic() {
        let square =
            Square::new(0, Vec2::new(5.0, 0.0), 1.0, FRAC_PI_2, 0.1, &Palette::default()).unwrap();
        let mut settings = Settings::default();
        settings.color_jitter = 0.0;
        let mut state = SimState::with_squares(settings, 1, vec![square]).unwrap();
        let start = state.squares()[0].color;

        for _ in 0..4 {
            tick(&mut state, &TickInput::default());
        }
        let end = state.squares()[0].color;
        assert!((start.r - end.r).abs() < 1e-4);
        assert!((start.g - end.g).abs() < 1e-4);
        assert!((start.b - end.b).abs() < 1e-4);
    }

    #[test]
    fn test_non_finite_time_scale_holds_position() {
        let mut state = SimState::new(Settings::default(), 17).unwrap();
        let before = state.squares().to_vec();

        for time_scale in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            tick(&mut state, &TickInput { time_scale });
        }

        for (old, new) in before.iter().zip(state.squares()) {
            assert_eq!(old.pos, new.pos);
            assert_eq!(old.spin, new.spin);
            assert_eq!(old.polar_angle, new.polar_angle);
            for c in [new.color.r, new.color.g, new.color.b] {
                assert!((0.0..=1.0).contains(&c));
            }
        }
        assert_eq!(state.time_ticks, 3);

        // A finite scale afterwards moves squares again
        tick(&mut state, &TickInput::default());
        assert_ne!(before[0].pos, state.squares()[0].pos);
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = SimState::new(Settings::default(), 5).unwrap();
        let mut b = SimState::new(Settings::default(), 5).unwrap();
        for _ in 0..50 {
            tick(&mut a, &TickInput::default());
            tick(&mut b, &TickInput::default());
        }
        assert_eq!(a.squares(), b.squares());
    }
}
