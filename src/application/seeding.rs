use crate::domain::Simulator;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One glider for every hundred cells
pub fn default_seed_count(width: usize, height: usize) -> usize {
    width.saturating_mul(height) / 100
}

/// Reproducible generator for glider placement
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Place `count` gliders at uniformly drawn anchors; overlaps are allowed
pub fn seed_gliders<R: Rng>(sim: &mut Simulator, count: usize, rng: &mut R) {
    let (width, height) = (sim.width(), sim.height());

    for _ in 0..count {
        let x = rng.random_range(0..width) as isize;
        let y = rng.random_range(0..height) as isize;
        sim.place_glider(x, y);
    }

    log::info!("seeded {count} gliders on {width}x{height} grid");
}
