//! Numerical integration for gkquad.
//!
//! This module provides adaptive quadrature of one-dimensional functions
//! over finite intervals:
//! - **Fixed rule**: a single G7-K15 Gauss-Kronrod evaluation with an error
//!   estimate ([`quadrature_rule`])
//! - **Adaptive**: repeated bisection of the worst interval until a relative
//!   tolerance is met ([`integrate`], [`AdaptiveIntegrator`])
//!
//! # Architecture
//!
//! Integrands implement the [`Integrand`] trait and receive every
//! evaluation point of a rule application in one batch, so vectorised
//! implementations can amortise per-call overhead. Scalar closures are
//! adapted with [`Pointwise`].
//!
//! # Example
//!
//! ```
//! use gkquad::integrate::{Pointwise, QuadOptions, integrate};
//!
//! // x * sin(100 x) on [1, 4]
//! let f = Pointwise(|x: f64| x * (100.0 * x).sin());
//! let result = integrate(&f, 1.0, 4.0, &QuadOptions::default()).unwrap();
//!
//! let g = |x: f64| -x / 100.0 * (100.0 * x).cos() + (100.0 * x).sin() / 10000.0;
//! assert!((result.integral - (g(4.0) - g(1.0))).abs() < 1e-8);
//! ```

pub mod error;
pub mod quadrature;
pub mod traits;

// Re-export error types
pub use error::{IntegrateError, IntegrateResult};

// Re-export quadrature entry points
pub use quadrature::{
    AdaptiveIntegrator, IntegratorState, Interval, IntervalSet, integrate, quadrature_rule,
};

// Re-export shared types
pub use traits::{Integrand, Pointwise, QuadOptions, QuadResult, RuleEstimate};
