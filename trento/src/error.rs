//! Error types for event construction

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EventError {
    #[error("Invalid grid step: {0} (must be > 0)")]
    InvalidGridStep(f64),

    #[error("Invalid grid max: {0} (must be > 0)")]
    InvalidGridMax(f64),

    #[error("Grid has no cells: grid_max {grid_max} with step {grid_step}")]
    EmptyGrid { grid_max: f64, grid_step: f64 },

    #[error("Grid too large: {nsteps} cells per side exceeds {max}")]
    GridTooLarge { nsteps: f64, max: usize },

    #[error("Invalid nucleon width: {0} (must be > 0)")]
    InvalidNucleonWidth(f64),

    #[error("Invalid nucleon truncation: {0} (must be > 0)")]
    InvalidTruncation(f64),
}

pub type EventResult<T> = Result<T, EventError>;
