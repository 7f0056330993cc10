//! Spingate entry point
//!
//! Headless shell around the simulation core: parses the CLI, builds the
//! config, and drives the fixed-rate tick loop. Rendering is a renderer's
//! job; this binary only logs what a renderer would read.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;

use spingate::consts::TICK_RATE;
use spingate::{SimConfig, SimState, tick};

#[derive(Debug, Parser)]
#[command(name = "spingate", about = "Bouncing balls inside a spinning ring")]
struct Args {
    /// RNG seed for respawn kicks and ball colors
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of ticks to run (0 = run until killed)
    #[arg(long, default_value_t = 0)]
    ticks: u64,

    /// Simulation config as JSON (defaults used when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Target tick rate in Hz
    #[arg(long, default_value_t = TICK_RATE)]
    hz: u32,

    /// Run as fast as possible, skipping the frame limiter
    #[arg(long)]
    no_limit: bool,
}

fn load_config(path: Option<&PathBuf>) -> Result<SimConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            let config: SimConfig = serde_json::from_str(&json)?;
            log::info!("loaded config from {}", path.display());
            Ok(config)
        }
        None => Ok(SimConfig::default()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(args.config.as_ref())?;
    let mut state = SimState::new(config, args.seed)?;

    let tick_duration = Duration::from_secs_f64(1.0 / f64::from(args.hz.max(1)));
    let mut next_deadline = Instant::now() + tick_duration;
    let mut last_report = Instant::now();

    loop {
        tick(&mut state);

        if last_report.elapsed() >= Duration::from_secs(1) {
            let stats = state.stats();
            log::info!(
                "tick {}: {} balls, {} bounces, {} escapes, {} despawns",
                state.time_ticks(),
                state.balls().len(),
                stats.bounces,
                stats.escapes,
                stats.despawns
            );
            last_report = Instant::now();
        }

        if args.ticks > 0 && state.time_ticks() >= args.ticks {
            break;
        }

        // Timing aid only; the simulation itself is tick-counted
        if !args.no_limit {
            let now = Instant::now();
            if next_deadline > now {
                std::thread::sleep(next_deadline - now);
            }
            next_deadline += tick_duration;
        }
    }

    let stats = state.stats();
    log::info!(
        "done after {} ticks: {} balls alive, {} spawned, {} escaped",
        state.time_ticks(),
        state.balls().len(),
        stats.spawns,
        stats.escapes
    );
    Ok(())
}
