//! Nuclear and reduced thickness on the event grid
//!
//! Nuclear thickness is built by looping over participants and adding each
//! one to the small subgrid inside its boundary. Compared with looping over
//! every cell and every participant this cuts the number of profile
//! evaluations by roughly the ratio of grid area to nucleon area; the naive
//! ordering is kept as `compute_nuclear_thickness_naive` and the two are
//! cross-checked in the tests.

use super::grid::Grid;
use super::nucleon::NucleonCommon;
use super::states::Nucleus;

/// Integral and center of mass of a reduced thickness grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reduction {
    pub multiplicity: f64, // dxy^2 * sum
    pub ixcm: f64, // center of mass, grid index units
    pub iycm: f64,
}

/// Fill `tx` with the summed profiles of all participants of `nucleus`
///
/// The grid is zeroed first. Returns the number of participants deposited.
pub fn compute_nuclear_thickness<C>(nucleus: &Nucleus, nucleon_common: &C, tx: &mut Grid) -> usize
where
    C: NucleonCommon + ?Sized,
{
    tx.fill(0.0);

    let mut npart = 0;
    for nucleon in nucleus {
        if !nucleon.is_participant() {
            continue;
        }
        npart += 1;

        // Subgrid bounds, clipped to the grid
        let b = nucleon_common.boundary(nucleon);
        let (ixmin, ixmax) = tx.index_range(b.xmin, b.xmax);
        let (iymin, iymax) = tx.index_range(b.ymin, b.ymax);

        for iy in iymin..=iymax {
            for ix in ixmin..=ixmax {
                let (x, y) = tx.cell_center(iy, ix);
                tx[(iy, ix)] += nucleon_common.thickness(nucleon, x, y);
            }
        }
    }

    npart
}

/// Reference deposition: every cell visits every participant
///
/// Same result as `compute_nuclear_thickness` up to rounding; used for
/// verification and benchmarking only.
pub fn compute_nuclear_thickness_naive<C>(nucleus: &Nucleus, nucleon_common: &C, tx: &mut Grid) -> usize
where
    C: NucleonCommon + ?Sized,
{
    let n = tx.nsteps();
    for iy in 0..n {
        for ix in 0..n {
            let (x, y) = tx.cell_center(iy, ix);
            tx[(iy, ix)] = nucleus
                .iter()
                .filter(|nucleon| nucleon.is_participant())
                .map(|nucleon| nucleon_common.thickness(nucleon, x, y))
                .sum();
        }
    }
    nucleus.participants()
}

/// Combine `ta` and `tb` cell by cell into `tr = norm * gen_mean(ta, tb)`
///
/// `gen_mean` is resolved by the caller once per event so this loop is
/// monomorphized for each mean. The center of mass is accumulated in index
/// units; the `dxy` factor would cancel in the division anyway. A zero
/// integral leaves the center of mass non-finite.
pub fn compute_reduced_thickness<F>(ta: &Grid, tb: &Grid, tr: &mut Grid, norm: f64, gen_mean: F) -> Reduction
where
    F: Fn(f64, f64) -> f64,
{
    let n = tr.nsteps();
    let dxy = tr.dxy();

    let mut sum = 0.0;
    let mut ixcm = 0.0;
    let mut iycm = 0.0;

    for iy in 0..n {
        for ix in 0..n {
            let t = norm * gen_mean(ta[(iy, ix)], tb[(iy, ix)]);
            tr[(iy, ix)] = t;
            sum += t;
            ixcm += t * ix as f64;
            iycm += t * iy as f64;
        }
    }

    Reduction {
        multiplicity: dxy * dxy * sum,
        ixcm: ixcm / sum,
        iycm: iycm / sum,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::engine::geometric_mean;
    use crate::simulation::nucleon::GaussianNucleon;
    use crate::simulation::states::Nucleon;

    fn max_abs_diff(a: &Grid, b: &Grid) -> f64 {
        a.iter_cells()
            .zip(b.iter_cells())
            .map(|((_, _, x), (_, _, y))| (x - y).abs())
            .fold(0.0, f64::max)
    }

    #[test]
    fn subgrid_matches_naive_loop() {
        let profile = GaussianNucleon::new(0.5, 3.0).unwrap();
        let nucleus: Nucleus = (0..25)
            .map(|i| {
                let f = i as f64;
                // last few sit near and beyond the grid edge
                Nucleon::new((f * 0.37).sin() * 3.0 + f * 0.1, (f * 0.13).cos() * 3.0, i % 4 != 0)
            })
            .collect();

        let mut fast = Grid::new(50, 0.2);
        let mut slow = Grid::new(50, 0.2);
        let n_fast = compute_nuclear_thickness(&nucleus, &profile, &mut fast);
        let n_slow = compute_nuclear_thickness_naive(&nucleus, &profile, &mut slow);

        assert_eq!(n_fast, n_slow);
        assert_eq!(n_fast, nucleus.participants());
        assert!(max_abs_diff(&fast, &slow) < 1e-12);
    }

    #[test]
    fn spectators_are_skipped() {
        let profile = GaussianNucleon::new(0.5, 3.0).unwrap();
        let nucleus = Nucleus::new(vec![Nucleon::new(0.0, 0.0, false)]);
        let mut tx = Grid::new(20, 0.2);
        tx.fill(3.0);
        assert_eq!(compute_nuclear_thickness(&nucleus, &profile, &mut tx), 0);
        assert_eq!(tx.sum(), 0.0);
    }

    #[test]
    fn reduced_thickness_of_uniform_grids() {
        let mut ta = Grid::new(4, 1.0);
        let mut tb = Grid::new(4, 1.0);
        let mut tr = Grid::new(4, 1.0);
        ta.fill(1.0);
        tb.fill(1.0);

        let r = compute_reduced_thickness(&ta, &tb, &mut tr, 1.0, geometric_mean);
        assert!(tr.iter_cells().all(|(_, _, t)| t == 1.0));
        assert_eq!(r.multiplicity, 16.0);
        assert_eq!((r.ixcm, r.iycm), (1.5, 1.5));
    }

    #[test]
    fn empty_event_has_non_finite_center() {
        let ta = Grid::new(4, 1.0);
        let tb = Grid::new(4, 1.0);
        let mut tr = Grid::new(4, 1.0);
        let r = compute_reduced_thickness(&ta, &tb, &mut tr, 1.0, geometric_mean);
        assert_eq!(r.multiplicity, 0.0);
        assert!(!r.ixcm.is_finite() && !r.iycm.is_finite());
    }
}
