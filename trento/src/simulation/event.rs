//! Per-event orchestration
//!
//! An `Event` owns every grid of one collision and the results derived from
//! them. It is built once and then reused: each `compute` overwrites the grids
//! in place, so the per-event cost is the participant deposits plus a couple
//! of full-grid sweeps, never an allocation.

use log::{debug, warn};

use crate::configuration::config::EventConfig;
use crate::error::EventResult;
use crate::simulation::engine::{geometric_mean, negative_pmean, positive_pmean, GenMean};
use crate::simulation::grid::Grid;
use crate::simulation::nucleon::NucleonCommon;
use crate::simulation::observables::{compute_observables, Observables, LEGACY_LEN};
use crate::simulation::params::Parameters;
use crate::simulation::states::Nucleus;
use crate::simulation::thickness::{compute_nuclear_thickness, compute_reduced_thickness, Reduction};

#[derive(Debug, Clone)]
pub struct Event {
    params: Parameters,
    gen_mean: GenMean,
    with_ncoll: bool, // accepted for compatibility, no collision accumulation

    ta: Grid, // nuclear thickness of A
    tb: Grid, // nuclear thickness of B
    tr: Grid, // reduced thickness
    ta_det: Grid, // reserved, never written
    tb_det: Grid, // reserved, never written

    npart: usize,
    multiplicity: f64,
    ixcm: f64,
    iycm: f64,
    observables: Observables,
}

impl Event {
    /// Build an event from validated parameters and a chosen mean
    pub fn new(params: Parameters, gen_mean: GenMean, with_ncoll: bool) -> Self {
        let n = params.nsteps;
        let dxy = params.dxy;

        debug!(
            "event grid: {n}x{n} cells, dxy = {dxy}, xymax = {}, mean = {:?}, norm = {}",
            params.xymax, gen_mean, params.norm
        );
        if with_ncoll {
            warn!("ncoll requested but collision accumulation is not available; ignoring");
        }

        Self {
            gen_mean,
            with_ncoll,
            ta: Grid::new(n, dxy),
            tb: Grid::new(n, dxy),
            tr: Grid::new(n, dxy),
            ta_det: Grid::new(n, dxy),
            tb_det: Grid::new(n, dxy),
            npart: 0,
            multiplicity: 0.0,
            ixcm: 0.0,
            iycm: 0.0,
            observables: Observables::default(),
            params,
        }
    }

    /// Build an event from configuration, failing on an unusable grid
    pub fn from_config(cfg: &EventConfig) -> EventResult<Self> {
        let params = Parameters::new(cfg.normalization, cfg.grid_step, cfg.grid_max)?;
        let gen_mean = GenMean::from_exponent(cfg.reduced_thickness);
        Ok(Self::new(params, gen_mean, cfg.ncoll))
    }

    /// Run the full pipeline for one pair of nuclei
    pub fn compute<C>(&mut self, nucleus_a: &Nucleus, nucleus_b: &Nucleus, nucleon_common: &C)
    where
        C: NucleonCommon + ?Sized,
    {
        self.npart = 0;
        self.npart += compute_nuclear_thickness(nucleus_a, nucleon_common, &mut self.ta);
        self.npart += compute_nuclear_thickness(nucleus_b, nucleon_common, &mut self.tb);

        let reduction = self.compute_reduced_thickness();
        self.multiplicity = reduction.multiplicity;
        self.ixcm = reduction.ixcm;
        self.iycm = reduction.iycm;

        if self.is_degenerate() {
            warn!("event has zero reduced thickness (npart = {}); center of mass is undefined", self.npart);
        }

        self.observables = compute_observables(&self.tr, self.ixcm, self.iycm);

        debug!(
            "npart = {}, mult = {:.4}, cm = ({:.3}, {:.3}), e2 = {:.4}, e3 = {:.4}",
            self.npart,
            self.multiplicity,
            self.ixcm,
            self.iycm,
            self.observables.harmonic(2).map_or(f64::NAN, |h| h.magnitude),
            self.observables.harmonic(3).map_or(f64::NAN, |h| h.magnitude),
        );
    }

    // Resolve the mean once so the cell loop is monomorphized per variant
    fn compute_reduced_thickness(&mut self) -> Reduction {
        let norm = self.params.norm;
        let (ta, tb, tr) = (&self.ta, &self.tb, &mut self.tr);
        match self.gen_mean {
            GenMean::Geometric => compute_reduced_thickness(ta, tb, tr, norm, geometric_mean),
            GenMean::Positive(p) => compute_reduced_thickness(ta, tb, tr, norm, |a, b| positive_pmean(p, a, b)),
            GenMean::Negative(p) => compute_reduced_thickness(ta, tb, tr, norm, |a, b| negative_pmean(p, a, b)),
        }
    }

    /// Participants of both nuclei in the last `compute`
    pub fn npart(&self) -> usize {
        self.npart
    }

    /// Integral of the reduced thickness, dxy^2 * sum
    pub fn multiplicity(&self) -> f64 {
        self.multiplicity
    }

    /// Center of mass in grid index units (x, y)
    pub fn center_of_mass(&self) -> (f64, f64) {
        (self.ixcm, self.iycm)
    }

    /// True when the last event had no reduced thickness at all
    pub fn is_degenerate(&self) -> bool {
        self.multiplicity == 0.0
    }

    pub fn observables(&self) -> &Observables {
        &self.observables
    }

    /// Observables in the historical flat layout, see `Observables::legacy_vector`
    pub fn eccentricity(&self) -> [f64; LEGACY_LEN] {
        self.observables.legacy_vector()
    }

    pub fn reduced_thickness(&self) -> &Grid {
        &self.tr
    }

    pub fn nuclear_thickness_a(&self) -> &Grid {
        &self.ta
    }

    pub fn nuclear_thickness_b(&self) -> &Grid {
        &self.tb
    }

    /// Reserved deterministic-thickness grids; allocated, always zero
    pub fn deterministic_thickness(&self) -> (&Grid, &Grid) {
        (&self.ta_det, &self.tb_det)
    }

    pub fn gen_mean(&self) -> GenMean {
        self.gen_mean
    }

    pub fn with_ncoll(&self) -> bool {
        self.with_ncoll
    }

    pub fn dxy(&self) -> f64 {
        self.params.dxy
    }

    pub fn nsteps(&self) -> usize {
        self.params.nsteps
    }

    pub fn xymax(&self) -> f64 {
        self.params.xymax
    }

    pub fn norm(&self) -> f64 {
        self.params.norm
    }
}
