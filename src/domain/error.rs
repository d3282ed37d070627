//! Error types for the simulation core.

use thiserror::Error;

/// Errors raised while building a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Width or height is zero, or the cell count is not addressable.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimension {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
}
