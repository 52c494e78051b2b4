//! Numerical quadrature (integration) methods.
//!
//! # Available Methods
//!
//! | Method | Use Case | Accuracy |
//! |--------|----------|----------|
//! | [`quadrature_rule`] | One smooth piece | Exact for polynomials up to degree 13 (G7), 23 (K15) |
//! | [`integrate`] | General functions | Adaptive to specified relative tolerance |
//!
//! # Choosing a Method
//!
//! - **Smooth, well-resolved functions**: [`quadrature_rule`] gives an answer
//!   from fifteen evaluations
//! - **Oscillatory or sharply peaked functions**: [`integrate`], raising
//!   `minintervals` when the features are spread across the domain
//! - **Inspecting the refinement**: drive an [`AdaptiveIntegrator`] by hand

mod adaptive;
mod intervals;
mod kronrod;
mod proptests;

// Re-export all public items
pub use adaptive::{AdaptiveIntegrator, IntegratorState, integrate};
pub use intervals::{Interval, IntervalSet};
pub use kronrod::{
    GAUSS_POINTS, GAUSS_WEIGHTS, KRONROD_POINTS, KRONROD_WEIGHTS, NODES, quadrature_rule,
};
