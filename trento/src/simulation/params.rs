//! Grid sizing and normalization for an event
//!
//! `Parameters` holds the runtime settings derived from `EventConfig`:
//! - normalization applied to the reduced thickness,
//! - cell width `dxy`, cell count `nsteps` and actual half extent `xymax`

use crate::error::{EventError, EventResult};

/// Largest accepted cells per side; one grid at this size is 2 GiB
pub const MAX_NSTEPS: usize = 1 << 14;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub norm: f64, // normalization of the reduced thickness
    pub dxy: f64, // cell width
    pub nsteps: usize, // cells per side
    pub xymax: f64, // actual half extent
}

impl Parameters {
    /// Derive the grid layout from a step size and a requested half extent
    ///
    /// `nsteps = ceil(2 * grid_max / grid_step)` and `xymax = nsteps * dxy / 2`,
    /// so when the step does not evenly divide the requested extent the grid
    /// is marginally larger, by less than one step.
    pub fn new(norm: f64, grid_step: f64, grid_max: f64) -> EventResult<Self> {
        if !(grid_step > 0.0) || !grid_step.is_finite() {
            return Err(EventError::InvalidGridStep(grid_step));
        }
        if !(grid_max > 0.0) || !grid_max.is_finite() {
            return Err(EventError::InvalidGridMax(grid_max));
        }

        let steps = (2.0 * grid_max / grid_step).ceil();
        if !(steps >= 1.0) {
            return Err(EventError::EmptyGrid { grid_max, grid_step });
        }
        // also catches an infinite quotient
        if steps > MAX_NSTEPS as f64 {
            return Err(EventError::GridTooLarge { nsteps: steps, max: MAX_NSTEPS });
        }
        let nsteps = steps as usize;

        Ok(Self {
            norm,
            dxy: grid_step,
            nsteps,
            xymax: 0.5 * nsteps as f64 * grid_step,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_extent_rounds_up() {
        let p = Parameters::new(1.0, 0.3, 1.0).unwrap();
        // 2 / 0.3 = 6.67 -> 7 cells, extent 1.05 > 1.0
        assert_eq!(p.nsteps, 7);
        assert!((p.xymax - 1.05).abs() < 1e-12);
        assert!(p.xymax - 1.0 < p.dxy);
    }

    #[test]
    fn rejects_non_positive_inputs() {
        assert_eq!(Parameters::new(1.0, 0.0, 1.0), Err(EventError::InvalidGridStep(0.0)));
        assert_eq!(Parameters::new(1.0, -0.1, 1.0), Err(EventError::InvalidGridStep(-0.1)));
        assert_eq!(Parameters::new(1.0, 0.1, -2.0), Err(EventError::InvalidGridMax(-2.0)));
        assert!(Parameters::new(1.0, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn rejects_oversized_grid() {
        assert!(matches!(
            Parameters::new(1.0, 1e-9, 1e3),
            Err(EventError::GridTooLarge { max: MAX_NSTEPS, .. })
        ));
        assert!(matches!(
            Parameters::new(1.0, 1e-300, 1e300),
            Err(EventError::GridTooLarge { .. })
        ));
        let p = Parameters::new(1.0, 1.0, 0.5 * MAX_NSTEPS as f64).unwrap();
        assert_eq!(p.nsteps, MAX_NSTEPS);
    }
}
