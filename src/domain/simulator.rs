use super::neighborhood::Radii;
use super::patterns::place_glider;
use super::rules::{Rule, default_rule};
use super::{Algorithm, Grid, GridError};
use rayon::prelude::*;
use std::mem;

/// Simulator advances the grid one generation at a time.
///
/// Two buffers are kept: the current generation, which is only read while
/// stepping, and a scratch buffer that receives every next state before the
/// two are swapped.
pub struct Simulator {
    current: Grid,
    next: Grid,
    rule: Box<dyn Rule>,
    radii: Radii,
    generation: u64,
}

impl Simulator {
    /// Create an all-dead simulator with the default rule and radii
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let current = Grid::new(width, height)?;
        log::debug!("created {width}x{height} simulator");
        Ok(Self::from_grid(current))
    }

    /// Start from an existing generation
    pub fn from_grid(current: Grid) -> Self {
        Self {
            next: current.clone(),
            current,
            rule: default_rule(),
            radii: Radii::default(),
            generation: 0,
        }
    }

    /// Replace the transition rule (builder pattern)
    pub fn with_rule(mut self, rule: Box<dyn Rule>) -> Self {
        self.rule = rule;
        self
    }

    /// Replace the aggregation radii (builder pattern)
    pub fn with_radii(mut self, radii: Radii) -> Self {
        self.radii = radii;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.current
    }

    pub fn width(&self) -> usize {
        self.current.width()
    }

    pub fn height(&self) -> usize {
        self.current.height()
    }

    pub fn get(&self, x: isize, y: isize) -> f32 {
        self.current.get(x, y)
    }

    pub fn set(&mut self, x: isize, y: isize, value: f32) {
        self.current.set(x, y, value);
    }

    pub fn rule(&self) -> &dyn Rule {
        self.rule.as_ref()
    }

    pub fn radii(&self) -> Radii {
        self.radii
    }

    /// Number of generations advanced since creation or the last reset
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn place_glider(&mut self, x: isize, y: isize) {
        place_glider(&mut self.current, x, y);
    }

    /// Kill every cell and restart the generation counter
    pub fn reset(&mut self) {
        self.current.clear();
        self.generation = 0;
    }

    /// Advance one generation on the calling thread
    pub fn step(&mut self) {
        let width = self.current.width();
        let (current, rule, radii) = (&self.current, self.rule.as_ref(), self.radii);

        self.next
            .cells_mut()
            .chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| fill_row(current, rule, radii, y, row));

        self.finish_step();
    }

    /// Advance one generation with rows spread over the rayon pool.
    /// Produces exactly the same grid as [`Simulator::step`].
    pub fn step_parallel(&mut self) {
        let width = self.current.width();
        let (current, rule, radii) = (&self.current, self.rule.as_ref(), self.radii);

        self.next
            .cells_mut()
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| fill_row(current, rule, radii, y, row));

        self.finish_step();
    }

    /// Dispatch to the selected algorithm
    pub fn step_with(&mut self, algorithm: Algorithm) {
        match algorithm {
            Algorithm::Serial => self.step(),
            Algorithm::Parallel => self.step_parallel(),
        }
    }

    /// Advance `generations` steps with the selected algorithm
    pub fn run(&mut self, generations: u64, algorithm: Algorithm) {
        for _ in 0..generations {
            self.step_with(algorithm);
        }
    }

    fn finish_step(&mut self) {
        mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
        log::trace!("advanced to generation {}", self.generation);
    }
}

/// Next state of a single cell, reading only the previous generation
fn next_cell_state(current: &Grid, rule: &dyn Rule, radii: Radii, x: isize, y: isize) -> f32 {
    let combined = radii.combined_average(current, x, y);
    rule.next_state(current.get(x, y), combined)
}

fn fill_row(current: &Grid, rule: &dyn Rule, radii: Radii, y: usize, row: &mut [f32]) {
    for (x, cell) in row.iter_mut().enumerate() {
        *cell = next_cell_state(current, rule, radii, x as isize, y as isize);
    }
}
