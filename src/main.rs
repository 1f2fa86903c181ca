//! Orbit Squares entry point
//!
//! Headless host: runs the simulation on a fixed-step clock and prints the
//! final frame as JSON. A real renderer would draw the vertex buffers
//! instead of counting them.
//!
//! Usage: `orbit-squares [SETTINGS] [--seed N] [--frames N]`

use std::path::PathBuf;

use chrono::NaiveTime;
use clap::Parser;
use orbit_squares::consts::SIM_DT;
use orbit_squares::render::{Vertex, shapes};
use orbit_squares::sim::{FrameClock, SimState, TickInput, tick};
use orbit_squares::sketches::{BoxClock, TentacleField};
use orbit_squares::{Result, Settings};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Settings JSON file (defaults when omitted)
    settings: Option<PathBuf>,

    /// RNG seed for the run
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Number of simulated display frames
    #[arg(long, default_value_t = 600)]
    frames: u32,
}

/// Wall-clock time of a simulated frame, starting from `start`
fn frame_time(start: NaiveTime, frame: u32) -> NaiveTime {
    let elapsed_ms = (f64::from(frame) * f64::from(SIM_DT) * 1000.0) as i64;
    start + chrono::Duration::milliseconds(elapsed_ms)
}

fn run(args: Args) -> Result<()> {
    let settings = match &args.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let (seed, frames) = (args.seed, args.frames);

    let mut state = SimState::new(settings, seed)?;
    let mut clock = FrameClock::default();
    let mut tentacles = TentacleField::default();
    let start = chrono::Local::now().time();
    let mut box_clock = BoxClock::new(&start);
    let input = TickInput::default();

    for frame in 0..frames {
        for _ in 0..clock.advance(SIM_DT) {
            tick(&mut state, &input);
        }
        tentacles.advance();
        box_clock.update(&frame_time(start, frame + 1));
    }

    let (fill, outline) = shapes::population(state.squares());
    log::info!(
        "Ran {} frames ({} ticks): {} fill bytes, {} outline bytes",
        frames,
        state.time_ticks,
        Vertex::as_bytes(&fill).len(),
        Vertex::as_bytes(&outline).len()
    );
    let tentacle_vertices: usize = tentacles
        .tentacles
        .iter()
        .map(|t| shapes::tentacle_lines(t).len())
        .sum();
    log::debug!("Tentacle clock {:.3}, {} line vertices", tentacles.clock, tentacle_vertices);
    log::info!(
        "Box clock scale at {}: {:?}, {} edges",
        frame_time(start, frames).format("%H:%M:%S"),
        box_clock.scale,
        box_clock.edges().len()
    );

    println!("{}", serde_json::to_string_pretty(&state.snapshot())?);
    Ok(())
}

fn main() {
    let args = Args::parse();
    env_logger::init();
    log::info!("Orbit Squares (headless) starting...");

    if let Err(err) = run(args) {
        log::error!("{err}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["orbit-squares"]).unwrap();
        assert_eq!(args.settings, None);
        assert_eq!(args.seed, 12345);
        assert_eq!(args.frames, 600);
    }

    #[test]
    fn test_args_explicit() {
        let args =
            Args::try_parse_from(["orbit-squares", "cfg.json", "--seed", "7", "--frames", "30"])
                .unwrap();
        assert_eq!(args.settings, Some(PathBuf::from("cfg.json")));
        assert_eq!(args.seed, 7);
        assert_eq!(args.frames, 30);
    }

    #[test]
    fn test_args_reject_bad_numbers() {
        assert!(Args::try_parse_from(["orbit-squares", "--seed", "abc"]).is_err());
        assert!(Args::try_parse_from(["orbit-squares", "--frames", "-3"]).is_err());
        assert!(Args::try_parse_from(["orbit-squares", "cfg.json", "extra"]).is_err());
    }

    #[test]
    fn test_frame_time_advances() {
        let start = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
        assert_eq!(frame_time(start, 0), start);
        // 60 frames at 60 Hz is one second
        assert_eq!(frame_time(start, 60), NaiveTime::from_hms_opt(10, 0, 1).unwrap());
        // Wraps past midnight
        let late = NaiveTime::from_hms_opt(23, 59, 59).unwrap();
        assert_eq!(frame_time(late, 120), NaiveTime::from_hms_opt(0, 0, 1).unwrap());
    }
}
