//! # gkquad
//!
//! Adaptive Gauss-Kronrod quadrature for one-dimensional definite integrals.
//!
//! Given an integrand, finite bounds, and a relative tolerance, [`integrate`]
//! returns an estimate of the integral together with an error estimate,
//! bisecting the domain only where the local error estimate is largest.
//!
//! ```
//! use gkquad::{Pointwise, QuadOptions, integrate};
//!
//! let result = integrate(&Pointwise(|x: f64| x.exp()), 0.0, 1.0, &QuadOptions::default()).unwrap();
//! assert!((result.integral - (std::f64::consts::E - 1.0)).abs() < 1e-12);
//! ```
//!
//! Failure to converge is reported as [`IntegrateError::DidNotConverge`],
//! which still carries the estimate reached:
//!
//! ```
//! use gkquad::{IntegrateError, Pointwise, QuadOptions, integrate};
//!
//! let options = QuadOptions { limit: 1, ..Default::default() };
//! let err = integrate(&Pointwise(|x: f64| (1000.0 * x).sin()), 0.0, 3.0, &options).unwrap_err();
//! assert!(matches!(err, IntegrateError::DidNotConverge { .. }));
//! let (value, error) = err.partial_estimate().unwrap();
//! assert!(error > 0.0 && value.is_finite());
//! ```
//!
//! Log output goes through [`tracing`]; install a subscriber to see the
//! refinement steps.

pub mod integrate;

pub use integrate::{
    AdaptiveIntegrator, IntegrateError, IntegrateResult, Integrand, IntegratorState, Interval,
    IntervalSet, Pointwise, QuadOptions, QuadResult, RuleEstimate, integrate, quadrature_rule,
};
