//! Per-nucleon thickness profiles
//!
//! A profile answers two questions about a nucleon: how much thickness it
//! deposits at a transverse point, and the axis-aligned box outside which that
//! contribution is zero. The accumulator only ever evaluates the profile inside
//! the box.

use crate::error::{EventError, EventResult};
use crate::simulation::states::Nucleon;

use std::f64::consts::PI;

/// Axis-aligned support of a nucleon profile, physical units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

/// Thickness profile shared by all nucleons of an event
pub trait NucleonCommon {
    /// Nonnegative thickness contributed by `nucleon` at `(x, y)`
    fn thickness(&self, nucleon: &Nucleon, x: f64, y: f64) -> f64;

    /// Box outside which `thickness` is zero for `nucleon`
    fn boundary(&self, nucleon: &Nucleon) -> Boundary;
}

/// Unit-normalized 2D Gaussian truncated at `truncation` widths
///
/// T(d) = exp(-d^2 / 2w^2) / (2 pi w^2) for d <= truncation * w
#[derive(Debug, Clone)]
pub struct GaussianNucleon {
    width: f64, // gaussian width w
    trunc_radius: f64, // truncation * w
    trunc_radius_sq: f64,
    prefactor: f64, // 1 / (2 pi w^2)
    neg_one_div_two_width_sq: f64, // -1 / (2 w^2)
}

impl GaussianNucleon {
    pub fn new(width: f64, truncation: f64) -> EventResult<Self> {
        if !(width > 0.0) || !width.is_finite() {
            return Err(EventError::InvalidNucleonWidth(width));
        }
        if !(truncation > 0.0) || !truncation.is_finite() {
            return Err(EventError::InvalidTruncation(truncation));
        }

        let width_sq = width * width;
        let trunc_radius = truncation * width;
        Ok(Self {
            width,
            trunc_radius,
            trunc_radius_sq: trunc_radius * trunc_radius,
            prefactor: 1.0 / (2.0 * PI * width_sq),
            neg_one_div_two_width_sq: -0.5 / width_sq,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn trunc_radius(&self) -> f64 {
        self.trunc_radius
    }
}

impl NucleonCommon for GaussianNucleon {
    #[inline]
    fn thickness(&self, nucleon: &Nucleon, x: f64, y: f64) -> f64 {
        let dx = x - nucleon.x();
        let dy = y - nucleon.y();
        let d2 = dx * dx + dy * dy;
        if d2 > self.trunc_radius_sq {
            return 0.0;
        }
        self.prefactor * (self.neg_one_div_two_width_sq * d2).exp()
    }

    fn boundary(&self, nucleon: &Nucleon) -> Boundary {
        let r = self.trunc_radius;
        Boundary {
            xmin: nucleon.x() - r,
            xmax: nucleon.x() + r,
            ymin: nucleon.y() - r,
            ymax: nucleon.y() + r,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_is_zero_outside_boundary() {
        let profile = GaussianNucleon::new(0.5, 3.0).unwrap();
        let n = Nucleon::new(1.0, -1.0, true);
        let b = profile.boundary(&n);
        assert_eq!(profile.width(), 0.5);
        assert_eq!(profile.trunc_radius(), 1.5);
        assert_eq!(b, Boundary { xmin: -0.5, xmax: 2.5, ymin: -2.5, ymax: 0.5 });
        assert_eq!(profile.thickness(&n, 2.6, -1.0), 0.0);
        assert_eq!(profile.thickness(&n, 1.0, 0.6), 0.0);
        assert!(profile.thickness(&n, 1.0, -1.0) > 0.0);
    }

    #[test]
    fn profile_integrates_to_one() {
        let profile = GaussianNucleon::new(0.5, 5.0).unwrap();
        let n = Nucleon::new(0.0, 0.0, true);
        let h = 0.02;
        let mut total = 0.0;
        let steps = (6.0 / h) as i32;
        for iy in -steps..steps {
            for ix in -steps..steps {
                let x = (ix as f64 + 0.5) * h;
                let y = (iy as f64 + 0.5) * h;
                total += profile.thickness(&n, x, y) * h * h;
            }
        }
        assert!((total - 1.0).abs() < 1e-4, "integral {total}");
    }

    #[test]
    fn rejects_bad_parameters() {
        assert!(matches!(GaussianNucleon::new(0.0, 3.0), Err(EventError::InvalidNucleonWidth(_))));
        assert!(matches!(GaussianNucleon::new(0.5, -1.0), Err(EventError::InvalidTruncation(_))));
    }
}
