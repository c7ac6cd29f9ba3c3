//! Eccentricity harmonics and related observables of the reduced thickness
//!
//! The harmonics are weighted sums of r^n exp(i n phi) over the reduced
//! thickness, taken about the center of mass. The naive evaluation is
//!
//! ```text
//! phi  = atan2(y, x)
//! real = r^n cos(n phi)
//! imag = r^n sin(n phi)
//! ```
//!
//! which costs three transcendental calls per cell. Writing cos(n phi) and
//! sin(n phi) through the multiple angle formulas in terms of x/r and y/r
//! turns each term into a polynomial in x and y, and the r^n weight cancels
//! the denominators exactly. For example
//!
//! ```text
//! r^2 sin(2 phi) = 2 r^2 sin(phi) cos(phi) = 2 x y
//! ```
//!
//! The polynomials below carry their own sign and phase convention (for n = 2
//! the real part is -r^2 cos(2 phi)); the trig cross-check in the integration
//! tests pins down the correspondence for every order.
//!
//! Every harmonic yields three numbers:
//! - magnitude: |sum t r^n e^{i n phi}| / sum t r^n
//! - angle:     (atan2(im, re) + pi) / n, a phase in [0, 2 pi / n]
//! - radius:    dxy^2 * sum t r^n / sum t
//!
//! Cells below `TINY` are skipped so that underflow noise does not feed the
//! harmonics.

use super::engine::TINY;
use super::grid::Grid;

use std::f64::consts::PI;

pub const MIN_ORDER: usize = 2;
pub const MAX_ORDER: usize = 5;

/// Length of the legacy flat observable vector
pub const LEGACY_LEN: usize = 12;

#[derive(Debug, Clone, Copy, Default)]
struct HarmonicAccumulator {
    re: f64, // real part
    im: f64, // imaginary part
    wt: f64, // sum of t * r^n
}

impl HarmonicAccumulator {
    #[inline]
    fn add(&mut self, t: f64, re: f64, im: f64, wt: f64) {
        self.re += t * re;
        self.im += t * im;
        self.wt += t * wt;
    }

    fn magnitude(&self) -> f64 {
        (self.re * self.re + self.im * self.im).sqrt() / self.wt.max(TINY)
    }

    // The angle weight is the constant 1/n once any cell has been seen and 0
    // before that, so an empty grid reports a zero angle.
    fn angle(&self, order: usize, retained: bool) -> f64 {
        let wt = if retained { 1.0 / order as f64 } else { 0.0 };
        wt * (self.im.atan2(self.re) + PI)
    }

    fn radius(&self, dxy: f64, total: f64) -> f64 {
        dxy * dxy * self.wt.max(TINY) / total
    }
}

/// Magnitude, angle and radius of one harmonic order
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Harmonic {
    pub magnitude: f64,
    pub angle: f64,
    pub radius: f64,
}

/// Shape observables of one event
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Observables {
    /// dxy^2 * sum t^(4/3), a total-entropy proxy
    pub entropy: f64,
    harmonics: [Harmonic; MAX_ORDER - MIN_ORDER + 1],
}

impl Observables {
    /// Harmonic of order `n`, for `n` in `MIN_ORDER..=MAX_ORDER`
    pub fn harmonic(&self, n: usize) -> Option<&Harmonic> {
        if (MIN_ORDER..=MAX_ORDER).contains(&n) {
            self.harmonics.get(n - MIN_ORDER)
        } else {
            None
        }
    }

    pub fn harmonics(&self) -> impl Iterator<Item = (usize, &Harmonic)> {
        self.harmonics.iter().enumerate().map(|(i, h)| (i + MIN_ORDER, h))
    }

    /// Flat vector in the historical output layout
    ///
    /// | index | value |
    /// |-------|-------|
    /// | 0, 1  | unused, 0 |
    /// | 2     | entropy |
    /// | 3..=5 | magnitude, n = 2..=4 |
    /// | 6..=8 | angle, n = 2..=4 |
    /// | 9..=11| radius, n = 2..=4 |
    ///
    /// Order 5 is not part of this layout.
    pub fn legacy_vector(&self) -> [f64; LEGACY_LEN] {
        let mut v = [0.0; LEGACY_LEN];
        v[2] = self.entropy;
        for (k, h) in self.harmonics[..3].iter().enumerate() {
            v[3 + k] = h.magnitude;
            v[6 + k] = h.angle;
            v[9 + k] = h.radius;
        }
        v
    }
}

/// Compute all observables of `tr` about the center of mass `(ixcm, iycm)`
///
/// The center of mass is in grid index units, as produced by the reducer.
/// Magnitude, angle and radius read the same accumulators in the same order,
/// so a single sweep serves all three.
pub fn compute_observables(tr: &Grid, ixcm: f64, iycm: f64) -> Observables {
    let n = tr.nsteps();
    let dxy = tr.dxy();

    let mut e2 = HarmonicAccumulator::default();
    let mut e3 = HarmonicAccumulator::default();
    let mut e4 = HarmonicAccumulator::default();
    let mut e5 = HarmonicAccumulator::default();

    let mut entropy = 0.0;
    let mut total = 0.0;
    let mut retained = false;

    for iy in 0..n {
        for (ix, &t) in tr.row(iy).iter().enumerate() {
            if t < TINY {
                continue;
            }
            retained = true;

            // (x, y) relative to the CM, with cached powers
            let x = ix as f64 - ixcm;
            let x2 = x * x;
            let x3 = x2 * x;
            let x4 = x2 * x2;

            let y = iy as f64 - iycm;
            let y2 = y * y;
            let y3 = y2 * y;
            let y4 = y2 * y2;

            let r2 = x2 + y2;
            let r = r2.sqrt();
            let r4 = r2 * r2;

            let xy = x * y;
            let x2y2 = x2 * y2;

            e2.add(t, y2 - x2, 2.0 * xy, r2);
            e3.add(t, y3 - 3.0 * y * x2, 3.0 * x * y2 - x3, r2 * r);
            e4.add(t, x4 + y4 - 6.0 * x2y2, 4.0 * xy * (y2 - x2), r4);
            e5.add(t, y * (5.0 * x4 - 10.0 * x2y2 + y4), x * (x4 - 10.0 * x2y2 + 5.0 * y4), r4 * r);

            entropy += t.powf(4.0 / 3.0);
            total += t;
        }
    }

    let finish = |acc: &HarmonicAccumulator, order: usize| Harmonic {
        magnitude: acc.magnitude(),
        angle: acc.angle(order, retained),
        radius: acc.radius(dxy, total),
    };

    Observables {
        entropy: dxy * dxy * entropy,
        harmonics: [finish(&e2, 2), finish(&e3, 3), finish(&e4, 4), finish(&e5, 5)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_source_has_no_eccentricity() {
        let mut tr = Grid::new(9, 0.5);
        tr[(4, 4)] = 2.0;
        let obs = compute_observables(&tr, 4.0, 4.0);
        for (n, h) in obs.harmonics() {
            assert_eq!(h.magnitude, 0.0, "order {n}");
        }
        let v = obs.legacy_vector();
        assert_eq!(&v[3..6], &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn off_center_cell_radius() {
        let dxy = 0.5;
        let mut tr = Grid::new(9, dxy);
        tr[(6, 6)] = 3.0;
        // CM placed elsewhere on purpose: r = 5 (3-4-5 triangle)
        let obs = compute_observables(&tr, 3.0, 2.0);
        let r: f64 = 5.0;
        for n in 2..=5 {
            let expected = dxy * dxy * r.powi(n as i32);
            let got = obs.harmonic(n).unwrap().radius;
            assert!((got - expected).abs() < 1e-9 * expected, "n = {n}: {got} vs {expected}");
        }
        // single cell is a pure harmonic: magnitude 1
        for n in 2..=5 {
            assert!((obs.harmonic(n).unwrap().magnitude - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn empty_grid_has_zero_angles() {
        let tr = Grid::new(5, 1.0);
        let obs = compute_observables(&tr, 2.0, 2.0);
        for (_, h) in obs.harmonics() {
            assert_eq!(h.angle, 0.0);
            assert_eq!(h.magnitude, 0.0);
        }
        assert_eq!(obs.entropy, 0.0);
    }

    #[test]
    fn legacy_layout() {
        let mut tr = Grid::new(6, 1.0);
        tr[(1, 1)] = 1.0;
        tr[(4, 2)] = 2.0;
        tr[(3, 5)] = 0.5;
        let obs = compute_observables(&tr, 2.5, 2.5);
        let v = obs.legacy_vector();

        assert_eq!(v[0], 0.0);
        assert_eq!(v[1], 0.0);
        assert_eq!(v[2], obs.entropy);
        for n in 2..=4 {
            let h = obs.harmonic(n).unwrap();
            assert_eq!(v[n + 1], h.magnitude);
            assert_eq!(v[n + 4], h.angle);
            assert_eq!(v[n + 7], h.radius);
        }
        assert!(obs.harmonic(1).is_none());
        assert!(obs.harmonic(6).is_none());
    }

    #[test]
    fn angles_lie_in_expected_range() {
        let mut tr = Grid::new(8, 1.0);
        tr[(1, 2)] = 1.0;
        tr[(6, 3)] = 0.7;
        tr[(4, 6)] = 1.3;
        let obs = compute_observables(&tr, 3.5, 3.5);
        for (n, h) in obs.harmonics() {
            assert!(h.angle >= 0.0 && h.angle <= 2.0 * PI / n as f64 + 1e-12, "n = {n}: {}", h.angle);
        }
    }

    #[test]
    fn entropy_proxy() {
        let mut tr = Grid::new(4, 0.5);
        tr[(0, 0)] = 8.0;
        tr[(2, 3)] = 1.0;
        tr[(3, 3)] = 1e-13; // below the floor, ignored
        let obs = compute_observables(&tr, 1.0, 1.0);
        // 8^(4/3) = 16
        assert!((obs.entropy - 0.25 * 17.0).abs() < 1e-12);
    }
}
