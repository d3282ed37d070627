//! Algorithm enum for selecting how a generation is computed.
//!
//! Both strategies read only the frozen previous generation, so they
//! produce bit-identical grids and differ only in speed.

use serde::{Deserialize, Serialize};

/// Available stepping strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Cell-by-cell on the calling thread
    #[default]
    Serial,
    /// Rows distributed over the rayon thread pool
    Parallel,
}

impl Algorithm {
    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }

    /// Short description for tooltips/info
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Serial => "One cell at a time, single thread",
            Algorithm::Parallel => "Rows in parallel with rayon",
        }
    }

    /// The other strategy, for UI toggling
    pub fn toggled(self) -> Self {
        match self {
            Algorithm::Serial => Algorithm::Parallel,
            Algorithm::Parallel => Algorithm::Serial,
        }
    }
}
