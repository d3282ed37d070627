mod error;
pub mod grid;
pub mod neighborhood;
mod rules;
mod patterns;
mod algorithm;
mod simulator;

pub use error::GridError;
pub use grid::{Grid, ALIVE, DEAD};
pub use neighborhood::{average, Radii, DISTANT_RADIUS, NEAR_RADIUS};
pub use rules::{Rule, ContinuousRule, is_alive, default_rule, BIRTH_MIN, SURVIVAL_MAX};
pub use patterns::{Pattern, place_glider, presets};
pub use algorithm::Algorithm;
pub use simulator::Simulator;
