//! Performance benchmark comparing serial and parallel stepping

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use continuous_life::Algorithm;
use continuous_life::application::{default_seed_count, seed_gliders, seeded_rng};
use continuous_life::domain::Simulator;

/// Time serial and parallel generations across grid sizes.
#[derive(Parser)]
#[command(name = "benchmark", about = "Compare serial and parallel stepping")]
struct Args {
    /// Generations timed per size and algorithm.
    #[arg(long, default_value_t = 10)]
    iterations: u32,

    /// Square grid sizes to run.
    #[arg(long, value_delimiter = ',', default_values_t = [100, 250, 500, 1000])]
    sizes: Vec<usize>,
}

/// Average milliseconds per generation
fn benchmark(size: usize, iterations: u32, algorithm: Algorithm) -> Result<f64> {
    let mut sim = Simulator::new(size, size)?;
    seed_gliders(&mut sim, default_seed_count(size, size), &mut seeded_rng(444));

    let start = Instant::now();
    sim.run(u64::from(iterations), algorithm);
    Ok(start.elapsed().as_secs_f64() * 1000.0 / f64::from(iterations.max(1)))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("=== Continuous Life Performance Benchmark ===\n");
    println!("{:>12} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<50}", "");

    for &size in &args.sizes {
        let serial_ms = benchmark(size, args.iterations, Algorithm::Serial)?;
        let parallel_ms = benchmark(size, args.iterations, Algorithm::Parallel)?;

        println!(
            "{:>12} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms.max(f64::EPSILON)
        );
    }

    Ok(())
}
