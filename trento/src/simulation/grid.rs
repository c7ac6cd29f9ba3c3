//! Dense square grid used for every thickness field of an event
//!
//! A `Grid` is an N×N block of `f64` cells with width `dxy`, centered on the
//! origin. Row index is `iy`, column index is `ix`; the center of cell
//! `(iy, ix)` sits at
//!
//! ```text
//! x = (ix + 0.5) * dxy - xymax
//! y = (iy + 0.5) * dxy - xymax
//! ```
//!
//! with `xymax = N * dxy / 2`. Storage is a `nalgebra::DMatrix` that is
//! allocated once and overwritten in place by every event. `DMatrix` is
//! column-major, so it holds the grid transposed: matrix column `iy` is grid
//! row `iy`, and cells along `ix` are contiguous. Every hot loop runs `ix`
//! innermost.

use nalgebra::DMatrix;
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone)]
pub struct Grid {
    cells: DMatrix<f64>, // matrix (ix, iy) holds grid cell (iy, ix)
    dxy: f64, // cell width
    xymax: f64, // half extent, N * dxy / 2
}

impl Grid {
    /// Allocate a zeroed `nsteps` × `nsteps` grid with cell width `dxy`
    pub fn new(nsteps: usize, dxy: f64) -> Self {
        Self {
            cells: DMatrix::zeros(nsteps, nsteps),
            dxy,
            xymax: 0.5 * nsteps as f64 * dxy,
        }
    }

    /// Number of cells along each side
    pub fn nsteps(&self) -> usize {
        self.cells.nrows()
    }

    pub fn dxy(&self) -> f64 {
        self.dxy
    }

    pub fn xymax(&self) -> f64 {
        self.xymax
    }

    /// Overwrite every cell with `value`
    pub fn fill(&mut self, value: f64) {
        self.cells.fill(value);
    }

    /// Sum over all cells
    pub fn sum(&self) -> f64 {
        self.cells.sum()
    }

    /// Physical (x, y) of the center of cell `(iy, ix)`
    #[inline]
    pub fn cell_center(&self, iy: usize, ix: usize) -> (f64, f64) {
        (
            (ix as f64 + 0.5) * self.dxy - self.xymax,
            (iy as f64 + 0.5) * self.dxy - self.xymax,
        )
    }

    /// Map a physical coordinate interval onto an inclusive index range
    ///
    /// Each edge is shifted by `xymax`, divided by `dxy` and truncated toward
    /// zero, then clipped to `[0, N-1]`. Edges far outside the grid collapse
    /// onto the border cell, so the range is never empty and never out of
    /// bounds.
    #[inline]
    pub fn index_range(&self, lo: f64, hi: f64) -> (usize, usize) {
        (self.clip_index(lo), self.clip_index(hi))
    }

    #[inline]
    fn clip_index(&self, coord: f64) -> usize {
        let last = self.nsteps() as i64 - 1;
        // `as` truncates toward zero and saturates on overflow / NaN -> 0
        let i = ((coord + self.xymax) / self.dxy) as i64;
        i.clamp(0, last.max(0)) as usize
    }

    /// Row-major iterator over `(iy, ix, value)`
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let n = self.nsteps();
        (0..n).flat_map(move |iy| self.row(iy).iter().enumerate().map(move |(ix, &t)| (iy, ix, t)))
    }

    /// Contiguous cells `(iy, 0..N)`
    #[inline]
    pub fn row(&self, iy: usize) -> &[f64] {
        let n = self.nsteps();
        &self.cells.as_slice()[iy * n..(iy + 1) * n]
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = f64;

    #[inline]
    fn index(&self, (iy, ix): (usize, usize)) -> &f64 {
        &self.cells[(ix, iy)]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    #[inline]
    fn index_mut(&mut self, (iy, ix): (usize, usize)) -> &mut f64 {
        &mut self.cells[(ix, iy)]
    }
}
