//! Trait definitions and types for integration algorithms.

mod integrand;
mod types;

pub use integrand::{Integrand, Pointwise};
pub use types::{QuadOptions, QuadResult, RuleEstimate};
