use super::seeding::{seed_gliders, seeded_rng};
use crate::config::{ConfigError, SimConfig};
use crate::domain::{Algorithm, Simulator};
use std::time::Instant;

/// GameState orchestrates the simulation for the interactive viewer.
/// This is the application layer that coordinates domain logic.
pub struct GameState {
    pub simulator: Simulator,
    pub config: SimConfig,
    pub algorithm: Algorithm,
    pub is_running: bool,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub last_evolution_time_ms: f32, // Evolution performance metric
    pub last_render_time_ms: f32,    // Render performance metric
    reseeds: u64,
}

impl GameState {
    /// Build the simulator from config and seed the initial gliders
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let simulator = config.build_simulator()?;
        let mut state = Self {
            simulator,
            algorithm: config.algorithm,
            updates_per_second: config.updates_per_second.clamp(1.0, 60.0),
            config,
            is_running: false,
            update_timer: 0.0,
            last_evolution_time_ms: 0.0,
            last_render_time_ms: 0.0,
            reseeds: 0,
        };
        state.seed();
        Ok(state)
    }

    /// Current generation number
    pub fn generation(&self) -> u64 {
        self.simulator.generation()
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        log::debug!("simulation {}", if self.is_running { "running" } else { "paused" });
        self
    }

    /// Advance exactly one generation, whether running or paused
    pub fn step_once(mut self) -> Self {
        self.advance();
        self
    }

    /// Clear grid and reset generation counter
    pub fn clear(mut self) -> Self {
        self.simulator.reset();
        self.is_running = false;
        self
    }

    /// Replace the population with freshly seeded gliders.
    /// Each reseed advances the seed so repeated presses differ.
    pub fn reseed(mut self) -> Self {
        self.simulator.reset();
        self.reseeds += 1;
        self.seed();
        self.is_running = false;
        self
    }

    /// Switch between serial and parallel stepping
    pub fn toggle_algorithm(mut self) -> Self {
        self.algorithm = self.algorithm.toggled();
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(1.0, 60.0);
        self
    }

    /// Update simulation by one frame
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self.advance();
            self.update_timer = 0.0;
        }

        self
    }

    fn advance(&mut self) {
        let start = Instant::now();
        self.simulator.step_with(self.algorithm);
        self.last_evolution_time_ms = start.elapsed().as_secs_f32() * 1000.0;
    }

    fn seed(&mut self) {
        let seed = self.config.seed.wrapping_add(self.reseeds);
        log::debug!("seeding with seed {seed}");
        let mut rng = seeded_rng(seed);
        seed_gliders(&mut self.simulator, self.config.seed_count(), &mut rng);
    }
}
