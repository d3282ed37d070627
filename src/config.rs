//! Simulation configuration loaded from TOML.

use crate::domain::{
    Algorithm, BIRTH_MIN, ContinuousRule, DISTANT_RADIUS, GridError, NEAR_RADIUS, Radii,
    SURVIVAL_MAX, Simulator,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from reading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Parameters for building and driving a simulation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    pub width: usize,
    pub height: usize,
    /// Seed for random glider placement
    pub seed: u64,
    /// Gliders placed per grid cell
    pub seed_density: f64,
    pub survival_max: f64,
    pub birth_min: f64,
    pub near_radius: usize,
    pub distant_radius: usize,
    pub updates_per_second: f32,
    pub algorithm: Algorithm,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            seed: 444,
            seed_density: 0.01,
            survival_max: SURVIVAL_MAX,
            birth_min: BIRTH_MIN,
            near_radius: NEAR_RADIUS,
            distant_radius: DISTANT_RADIUS,
            updates_per_second: 10.0,
            algorithm: Algorithm::Serial,
        }
    }
}

impl SimConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(GridError::InvalidDimension {
                width: self.width,
                height: self.height,
            }
            .into());
        }
        if self.near_radius == 0 {
            return Err(invalid("near_radius", "must be at least 1"));
        }
        if self.distant_radius == 0 {
            return Err(invalid("distant_radius", "must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.seed_density) {
            return Err(invalid("seed_density", "must be within [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.survival_max) {
            return Err(invalid("survival_max", "must be within [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.birth_min) {
            return Err(invalid("birth_min", "must be within [0, 1]"));
        }
        if !(self.updates_per_second > 0.0) {
            return Err(invalid("updates_per_second", "must be positive"));
        }
        Ok(())
    }

    pub fn rule(&self) -> ContinuousRule {
        ContinuousRule::new(self.survival_max, self.birth_min)
    }

    pub fn radii(&self) -> Radii {
        Radii::new(self.near_radius, self.distant_radius)
    }

    /// Number of gliders to seed, floor(cells * density)
    pub fn seed_count(&self) -> usize {
        let cells = self.width.saturating_mul(self.height);
        (cells as f64 * self.seed_density) as usize
    }

    /// Build an all-dead simulator with this rule and these radii
    pub fn build_simulator(&self) -> Result<Simulator, ConfigError> {
        Ok(Simulator::new(self.width, self.height)?
            .with_rule(Box::new(self.rule()))
            .with_radii(self.radii()))
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field,
        reason: reason.to_owned(),
    }
}
