//! Generalized mean used to combine the two nuclear thickness fields
//!
//! The variant is selected once from the `reduced_thickness` exponent `p` and
//! then matched once per event, never per grid cell.

/// Numerical floor below which a value is treated as zero
pub const TINY: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GenMean {
    Geometric, // |p| < TINY: sqrt(a*b)
    Positive(f64), // p > 0: (0.5*(a^p + b^p))^(1/p)
    Negative(f64), // p < 0: as positive, but zero if either input vanishes
}

impl GenMean {
    pub fn from_exponent(p: f64) -> Self {
        if p.abs() < TINY {
            GenMean::Geometric
        } else if p > 0.0 {
            GenMean::Positive(p)
        } else {
            GenMean::Negative(p)
        }
    }

    /// Evaluate the mean for a single pair. Convenience only; the reducer
    /// dispatches once and uses the free functions below directly.
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match *self {
            GenMean::Geometric => geometric_mean(a, b),
            GenMean::Positive(p) => positive_pmean(p, a, b),
            GenMean::Negative(p) => negative_pmean(p, a, b),
        }
    }
}

/// M_p(a, b) = (1/2 (a^p + b^p))^(1/p)
#[inline]
pub fn positive_pmean(p: f64, a: f64, b: f64) -> f64 {
    (0.5 * (a.powf(p) + b.powf(p))).powf(1.0 / p)
}

/// Same as `positive_pmean` but returns 0 if either input is below `TINY`,
/// where a negative power would diverge.
#[inline]
pub fn negative_pmean(p: f64, a: f64, b: f64) -> f64 {
    if a < TINY || b < TINY {
        return 0.0;
    }
    positive_pmean(p, a, b)
}

#[inline]
pub fn geometric_mean(a: f64, b: f64) -> f64 {
    (a * b).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_variant_from_exponent() {
        assert_eq!(GenMean::from_exponent(0.0), GenMean::Geometric);
        assert_eq!(GenMean::from_exponent(1e-13), GenMean::Geometric);
        assert_eq!(GenMean::from_exponent(1.0), GenMean::Positive(1.0));
        assert_eq!(GenMean::from_exponent(-1.0), GenMean::Negative(-1.0));
    }

    #[test]
    fn mean_of_equal_inputs_is_identity() {
        for &p in &[-3.0, -1.0, -0.5, 0.0, 0.5, 1.0, 2.0, 5.0] {
            let mean = GenMean::from_exponent(p);
            for &a in &[1e-6, 0.3, 1.0, 7.5, 120.0] {
                let m = mean.apply(a, a);
                assert!((m - a).abs() < 1e-9 * a.max(1.0), "p = {p}, a = {a}, got {m}");
            }
        }
    }

    #[test]
    fn negative_mean_vanishes_below_floor() {
        for &p in &[-0.1, -1.0, -10.0] {
            assert_eq!(negative_pmean(p, 0.0, 5.0), 0.0);
            assert_eq!(negative_pmean(p, 5.0, 1e-13), 0.0);
            assert_eq!(negative_pmean(p, 0.0, 0.0), 0.0);
        }
    }

    #[test]
    fn known_means() {
        assert!((GenMean::from_exponent(1.0).apply(1.0, 3.0) - 2.0).abs() < 1e-12);
        assert!((GenMean::from_exponent(0.0).apply(2.0, 8.0) - 4.0).abs() < 1e-12);
        // harmonic mean of 1 and 3 is 1.5
        assert!((GenMean::from_exponent(-1.0).apply(1.0, 3.0) - 1.5).abs() < 1e-12);
    }
}
