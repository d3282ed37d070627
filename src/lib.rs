// Domain layer - Core simulation engine
pub mod domain;

// Configuration
pub mod config;

// Application layer - Seeding and viewer state
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Algorithm, ContinuousRule, Grid, GridError, Pattern, Rule, Simulator, presets};
pub use config::{ConfigError, SimConfig};
pub use application::GameState;
pub use ui::Button;
