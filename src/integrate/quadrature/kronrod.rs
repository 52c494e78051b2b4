//! The G7-K15 Gauss-Kronrod rule on a single interval.
//!
//! The 15-point Kronrod rule extends the 7-point Gauss-Legendre rule by
//! adding eight abscissas between the Gauss nodes, so one batch of fifteen
//! function values yields two estimates of different order. Their
//! discrepancy drives the error estimate.

use crate::integrate::error::{IntegrateError, IntegrateResult};
use crate::integrate::traits::{Integrand, RuleEstimate};

/// Number of points evaluated per application of the rule.
pub const KRONROD_POINTS: usize = 15;

/// Number of points shared with the embedded Gauss rule.
pub const GAUSS_POINTS: usize = 7;

/// Abscissas on [-1, 1].
///
/// The first [`GAUSS_POINTS`] entries are the 7-point Gauss nodes, listed in
/// the same order as [`GAUSS_WEIGHTS`]. The remaining entries are the nodes
/// added by the Kronrod extension.
pub const NODES: [f64; KRONROD_POINTS] = [
    // Gauss nodes
    0.9491079123427585,
    -0.9491079123427585,
    0.7415311855993945,
    -0.7415311855993945,
    0.4058451513773972,
    -0.4058451513773972,
    0.0,
    // Kronrod extension
    0.9914553711208126,
    -0.9914553711208126,
    0.8648644233597691,
    -0.8648644233597691,
    0.5860872354676911,
    -0.5860872354676911,
    0.2077849550078985,
    -0.2077849550078985,
];

/// Gauss weights applied to `NODES[..7]`.
pub const GAUSS_WEIGHTS: [f64; GAUSS_POINTS] = [
    0.129_484_966_168_869_7,
    0.129_484_966_168_869_7,
    0.27970539148927664,
    0.27970539148927664,
    0.381_830_050_505_118_9,
    0.381_830_050_505_118_9,
    0.417_959_183_673_469_4,
];

/// Kronrod weights applied to all of `NODES`.
pub const KRONROD_WEIGHTS: [f64; KRONROD_POINTS] = [
    0.063_092_092_629_978_56,
    0.063_092_092_629_978_56,
    0.14065325971552592,
    0.14065325971552592,
    0.190_350_578_064_785_4,
    0.190_350_578_064_785_4,
    0.20948214108472782,
    0.022935322010529224,
    0.022935322010529224,
    0.10479001032225018,
    0.10479001032225018,
    0.169_004_726_639_267_9,
    0.169_004_726_639_267_9,
    0.20443294007529889,
    0.20443294007529889,
];

/// Apply the G7-K15 rule to `f` on `[a, b]`.
///
/// All fifteen points are passed to the integrand in a single batch. The
/// returned integral is the Kronrod estimate. The error estimate is
///
/// ```text
/// (200 * |G7 - K15|)^1.5 * (b - a) / 2
/// ```
///
/// where `G7` and `K15` are the unscaled weighted sums on [-1, 1]. This is an
/// empirical proxy rather than a rigorous bound: it can under- or
/// over-estimate the true error on pathological integrands.
///
/// # Errors
///
/// - [`IntegrateError::InvalidInterval`] unless `a < b` with both bounds and
///   the width `b - a` finite
/// - [`IntegrateError::InvalidInput`] if the integrand returns the wrong
///   number of values
/// - any error returned by the integrand, unchanged
///
/// # Example
///
/// ```
/// use gkquad::integrate::{Pointwise, quadrature_rule};
///
/// let est = quadrature_rule(&Pointwise(|x: f64| x.powi(3)), 0.0, 2.0).unwrap();
/// assert!((est.integral - 4.0).abs() < 1e-13);
/// assert!(est.error < 1e-12);
/// ```
pub fn quadrature_rule<F>(f: &F, a: f64, b: f64) -> IntegrateResult<RuleEstimate>
where
    F: Integrand + ?Sized,
{
    check_interval(a, b, "quadrature_rule")?;
    gauss_kronrod_15(f, a, b)
}

/// Reject intervals that are empty, reversed, or unbounded, including
/// finite bounds whose width overflows.
pub(crate) fn check_interval(a: f64, b: f64, context: &str) -> IntegrateResult<()> {
    if !a.is_finite() || !b.is_finite() || a >= b || !(b - a).is_finite() {
        return Err(IntegrateError::InvalidInterval {
            a,
            b,
            context: context.to_string(),
        });
    }
    Ok(())
}

/// G7-K15 on a checked interval.
pub(crate) fn gauss_kronrod_15<F>(f: &F, a: f64, b: f64) -> IntegrateResult<RuleEstimate>
where
    F: Integrand + ?Sized,
{
    let half_width = (b - a) / 2.0;

    let points: Vec<f64> = NODES.iter().map(|&z| a + (z + 1.0) * half_width).collect();

    let fvals = f.evaluate(&points)?;
    if fvals.len() != KRONROD_POINTS {
        return Err(IntegrateError::InvalidInput {
            context: format!(
                "integrand returned {} values for {} points",
                fvals.len(),
                KRONROD_POINTS
            ),
        });
    }

    let kronrod: f64 = fvals
        .iter()
        .zip(&KRONROD_WEIGHTS)
        .map(|(&fx, &w)| w * fx)
        .sum();
    let gauss: f64 = fvals[..GAUSS_POINTS]
        .iter()
        .zip(&GAUSS_WEIGHTS)
        .map(|(&fx, &w)| w * fx)
        .sum();

    let error = (200.0 * (gauss - kronrod).abs()).powf(1.5);

    Ok(RuleEstimate {
        integral: kronrod * half_width,
        error: error * half_width,
    })
}
