//! Run the simulation without a window and print population statistics.
//!
//! Each report line is `generation mean alive live`, where `alive` counts cells
//! at exactly 1.0 and `live` counts cells with any non-zero state.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use continuous_life::application::{seed_gliders, seeded_rng};
use continuous_life::{Algorithm, SimConfig, Simulator};

#[derive(Parser)]
#[command(name = "headless", about = "Run continuous life without a display")]
struct Args {
    /// TOML config file; command-line flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    width: Option<usize>,

    #[arg(long)]
    height: Option<usize>,

    /// RNG seed for glider placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Generations to run.
    #[arg(long, default_value_t = 100)]
    generations: u64,

    /// Step with the rayon thread pool.
    #[arg(long)]
    parallel: bool,

    /// Print statistics every N generations.
    #[arg(long, default_value_t = 10)]
    report_every: u64,
}

fn report(sim: &Simulator) {
    let grid = sim.grid();
    println!(
        "{} {:.6} {} {}",
        sim.generation(),
        grid.mean_state(),
        grid.alive_count(),
        grid.live_count()
    );
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SimConfig::default(),
    };
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if args.parallel {
        config.algorithm = Algorithm::Parallel;
    }
    config.validate().context("invalid configuration")?;

    let mut sim = config.build_simulator()?;
    seed_gliders(&mut sim, config.seed_count(), &mut seeded_rng(config.seed));

    let every = args.report_every.max(1);
    report(&sim);
    for _ in 0..args.generations {
        sim.step_with(config.algorithm);
        if sim.generation() % every == 0 {
            report(&sim);
        }
    }

    Ok(())
}
