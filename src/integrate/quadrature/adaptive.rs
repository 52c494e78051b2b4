//! Adaptive Gauss-Kronrod quadrature.
//!
//! The integration interval is split into an initial partition, then the
//! interval with the largest error estimate is repeatedly bisected until the
//! relative error of the total meets the tolerance or the interval budget
//! runs out.

use tracing::{debug, trace};

use crate::integrate::error::{IntegrateError, IntegrateResult};
use crate::integrate::quadrature::intervals::{Interval, IntervalSet};
use crate::integrate::quadrature::kronrod::{KRONROD_POINTS, check_interval, gauss_kronrod_15};
use crate::integrate::traits::{Integrand, QuadOptions, QuadResult};

/// Lifecycle of an [`AdaptiveIntegrator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegratorState {
    /// Building the initial partition. This phase runs inside
    /// [`AdaptiveIntegrator::new`], so a constructed integrator never reports it.
    Initializing,
    /// Bisecting the worst interval until a terminal state is reached.
    Refining,
    /// The relative error met the tolerance.
    Converged,
    /// The interval budget ran out first.
    Failed,
}

/// Step-wise driver for adaptive G7-K15 quadrature.
///
/// [`integrate`] runs this to completion; constructing it directly lets a
/// caller inspect the partition between refinement steps.
///
/// # Example
///
/// ```
/// use gkquad::integrate::{AdaptiveIntegrator, IntegratorState, Pointwise, QuadOptions};
///
/// let f = Pointwise(|x: f64| (5.0 * x).sin() + 1.0);
/// let mut integrator = AdaptiveIntegrator::new(&f, 0.0, 3.0, &QuadOptions::default()).unwrap();
///
/// while integrator.step().unwrap().is_none() {
///     assert!((integrator.intervals().total_width() - 3.0).abs() < 1e-12);
/// }
/// assert_eq!(integrator.state(), IntegratorState::Converged);
/// ```
#[derive(Debug)]
pub struct AdaptiveIntegrator<'f, F: ?Sized> {
    f: &'f F,
    options: QuadOptions,
    intervals: IntervalSet,
    neval: usize,
    state: IntegratorState,
}

impl<'f, F> AdaptiveIntegrator<'f, F>
where
    F: Integrand + ?Sized,
{
    /// Validate the arguments and evaluate the initial partition of `[a, b]`
    /// into `options.minintervals` equal-width intervals.
    pub fn new(f: &'f F, a: f64, b: f64, options: &QuadOptions) -> IntegrateResult<Self> {
        check_interval(a, b, "integrate")?;
        options.validate()?;

        let n = options.minintervals;
        let step = (b - a) / n as f64;
        let edges: Vec<f64> = (0..=n)
            .map(|i| match i {
                0 => a,
                i if i == n => b,
                i => a + i as f64 * step,
            })
            .collect();

        if edges.windows(2).any(|w| !(w[0] < w[1])) {
            return Err(IntegrateError::InvalidParameter {
                parameter: "minintervals".to_string(),
                message: format!("{} intervals do not fit in [{}, {}]", n, a, b),
            });
        }

        let mut intervals = IntervalSet::with_capacity(n);
        for w in edges.windows(2) {
            let estimate = gauss_kronrod_15(f, w[0], w[1])?;
            intervals.insert(Interval::new(w[0], w[1], estimate));
        }

        debug!(a, b, minintervals = n, "initial partition evaluated");
        Ok(Self {
            f,
            options: options.clone(),
            intervals,
            neval: n * KRONROD_POINTS,
            state: IntegratorState::Refining,
        })
    }

    /// Perform one pass of the refinement loop.
    ///
    /// Returns `Ok(Some(result))` once converged and `Ok(None)` after a
    /// bisection. When the interval budget is exhausted the error is
    /// [`IntegrateError::DidNotConverge`] carrying the current estimate.
    ///
    /// An integrand error leaves the partition as it was before the call.
    /// Once terminal, further calls report the same outcome again.
    pub fn step(&mut self) -> IntegrateResult<Option<QuadResult>> {
        let (integral, error) = self.intervals.total();

        if (error / integral).abs() < self.options.tol {
            self.state = IntegratorState::Converged;
            debug!(
                integral,
                error,
                intervals = self.intervals.len(),
                neval = self.neval,
                "converged"
            );
            return Ok(Some(QuadResult {
                integral,
                error,
                neval: self.neval,
                intervals: self.intervals.len(),
            }));
        }

        if self.intervals.len() >= self.options.limit {
            return Err(self.fail(integral, error, "integrate"));
        }

        // never empty: `new` inserts at least one interval and each step
        // replaces one with two
        let Some(&worst) = self.intervals.peek_max_error() else {
            return Err(self.fail(integral, error, "integrate: no intervals to refine"));
        };

        let mid = worst.midpoint();
        if mid <= worst.left || mid >= worst.right {
            return Err(self.fail(
                integral,
                error,
                "integrate: interval too narrow to bisect",
            ));
        }

        let lower = gauss_kronrod_15(self.f, worst.left, mid)?;
        let upper = gauss_kronrod_15(self.f, mid, worst.right)?;
        self.neval += 2 * KRONROD_POINTS;

        self.intervals.pop_max_error();
        self.intervals.insert(Interval::new(worst.left, mid, lower));
        self.intervals.insert(Interval::new(mid, worst.right, upper));

        trace!(
            left = worst.left,
            right = worst.right,
            parent_error = worst.error,
            lower_error = lower.error,
            upper_error = upper.error,
            "bisected"
        );

        Ok(None)
    }

    /// Step until a terminal state is reached.
    pub fn run(&mut self) -> IntegrateResult<QuadResult> {
        loop {
            if let Some(result) = self.step()? {
                return Ok(result);
            }
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> IntegratorState {
        self.state
    }

    /// The active partition.
    pub fn intervals(&self) -> &IntervalSet {
        &self.intervals
    }

    /// Integrand evaluations so far.
    pub fn neval(&self) -> usize {
        self.neval
    }

    fn fail(&mut self, integral: f64, error: f64, context: &str) -> IntegrateError {
        self.state = IntegratorState::Failed;
        debug!(
            integral,
            error,
            intervals = self.intervals.len(),
            context,
            "did not converge"
        );
        IntegrateError::DidNotConverge {
            integral,
            error,
            intervals: self.intervals.len(),
            tolerance: self.options.tol,
            context: context.to_string(),
        }
    }
}

/// Adaptive Gauss-Kronrod quadrature.
///
/// Uses the G7-K15 rule with adaptive interval subdivision until
/// `|error / integral| < options.tol`. The reported error is the
/// root-sum-square of the per-interval estimates.
///
/// # Arguments
///
/// * `f` - Batch-evaluated function to integrate
/// * `a` - Lower bound
/// * `b` - Upper bound
/// * `options` - Quadrature options
///
/// # Errors
///
/// - [`IntegrateError::InvalidInterval`] unless `a < b`
/// - [`IntegrateError::InvalidParameter`] for unusable options
/// - [`IntegrateError::DidNotConverge`] when `options.limit` intervals are in
///   use and the tolerance is still not met; the achieved estimate is
///   available through [`IntegrateError::partial_estimate`]
/// - any error returned by the integrand, unchanged
///
/// # Example
///
/// ```
/// use gkquad::integrate::{Pointwise, QuadOptions, integrate};
///
/// // Integrate sin(x) from 0 to pi
/// let f = Pointwise(|x: f64| x.sin());
/// let result = integrate(&f, 0.0, std::f64::consts::PI, &QuadOptions::default()).unwrap();
/// assert!((result.integral - 2.0).abs() < 1e-10);
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(a = a, b = b))]
pub fn integrate<F>(f: &F, a: f64, b: f64, options: &QuadOptions) -> IntegrateResult<QuadResult>
where
    F: Integrand + ?Sized,
{
    AdaptiveIntegrator::new(f, a, b, options)?.run()
}
