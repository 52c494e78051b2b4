//! Option and result types shared by the quadrature routines.

use crate::integrate::error::{IntegrateError, IntegrateResult};

/// Options for adaptive quadrature.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QuadOptions {
    /// Number of equal-width intervals in the initial partition (default: 1)
    pub minintervals: usize,
    /// Maximum number of active intervals before giving up (default: 200)
    pub limit: usize,
    /// Relative tolerance on `|error / integral|` (default: 1e-10)
    pub tol: f64,
}

impl Default for QuadOptions {
    fn default() -> Self {
        Self {
            minintervals: 1,
            limit: 200,
            tol: 1e-10,
        }
    }
}

impl QuadOptions {
    /// Check that every option is usable.
    ///
    /// A `tol` of zero is accepted; it disables convergence so the run always
    /// ends at `limit`.
    pub fn validate(&self) -> IntegrateResult<()> {
        if self.minintervals == 0 {
            return Err(IntegrateError::InvalidParameter {
                parameter: "minintervals".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        if self.limit == 0 {
            return Err(IntegrateError::InvalidParameter {
                parameter: "limit".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        if self.tol.is_nan() || self.tol < 0.0 {
            return Err(IntegrateError::InvalidParameter {
                parameter: "tol".to_string(),
                message: format!("must be a non-negative number (got {})", self.tol),
            });
        }

        Ok(())
    }
}

/// Local estimate produced by one application of the G7-K15 rule.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleEstimate {
    /// 15-point Kronrod estimate of the integral
    pub integral: f64,
    /// Heuristic error estimate
    pub error: f64,
}

/// Result of adaptive quadrature.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadResult {
    /// Computed integral value
    pub integral: f64,
    /// Root-sum-square of the per-interval error estimates
    pub error: f64,
    /// Number of function evaluations
    pub neval: usize,
    /// Number of intervals in the final partition
    pub intervals: usize,
}

impl QuadResult {
    /// Achieved relative error `|error / integral|`.
    pub fn relative_error(&self) -> f64 {
        (self.error / self.integral).abs()
    }
}
