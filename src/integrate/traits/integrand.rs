//! Batch-evaluated integrands.
//!
//! The quadrature rule hands all of its evaluation points to the integrand in
//! one call. Implementations must return one value per point, in the order
//! the points were given.

use crate::integrate::error::IntegrateResult;

/// A function that can be evaluated on a batch of points.
///
/// Closures of the form `Fn(&[f64]) -> IntegrateResult<Vec<f64>>` implement
/// this trait directly. Scalar closures can be wrapped in [`Pointwise`].
///
/// Implementations are expected to be deterministic and free of side effects;
/// the same point may be requested more than once.
///
/// # Example
///
/// ```
/// use gkquad::integrate::{Integrand, IntegrateResult};
///
/// let square = |x: &[f64]| -> IntegrateResult<Vec<f64>> {
///     Ok(x.iter().map(|&xi| xi * xi).collect())
/// };
/// assert_eq!(square.evaluate(&[1.0, 2.0, 3.0]).unwrap(), vec![1.0, 4.0, 9.0]);
/// ```
pub trait Integrand {
    /// Evaluate the function at every point in `x`.
    ///
    /// Errors are passed back to the caller of the quadrature routine
    /// unchanged.
    fn evaluate(&self, x: &[f64]) -> IntegrateResult<Vec<f64>>;
}

impl<F> Integrand for F
where
    F: Fn(&[f64]) -> IntegrateResult<Vec<f64>>,
{
    fn evaluate(&self, x: &[f64]) -> IntegrateResult<Vec<f64>> {
        self(x)
    }
}

/// Adapts a scalar function `f64 -> f64` to the batch interface.
///
/// # Example
///
/// ```
/// use gkquad::integrate::{Integrand, Pointwise};
///
/// let f = Pointwise(|x: f64| x * x - 1.0);
/// let values = f.evaluate(&[0.0, 2.0]).unwrap();
/// assert_eq!(values, vec![-1.0, 3.0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Pointwise<F>(pub F);

impl<F> Integrand for Pointwise<F>
where
    F: Fn(f64) -> f64,
{
    fn evaluate(&self, x: &[f64]) -> IntegrateResult<Vec<f64>> {
        Ok(x.iter().map(|&xi| (self.0)(xi)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrate::error::IntegrateError;

    #[test]
    fn test_pointwise_preserves_order() {
        let f = Pointwise(|x: f64| 2.0 * x + 1.0);
        let values = f.evaluate(&[3.0, -1.0, 0.5]).unwrap();
        assert_eq!(values, vec![7.0, -1.0, 2.0]);
    }

    #[test]
    fn test_closure_errors_pass_through() {
        let f = |x: &[f64]| -> IntegrateResult<Vec<f64>> {
            if x.iter().any(|&xi| xi < 0.0) {
                return Err(IntegrateError::Evaluation {
                    message: "negative input".to_string(),
                });
            }
            Ok(x.iter().map(|&xi| xi.sqrt()).collect())
        };

        assert_eq!(f.evaluate(&[4.0]).unwrap(), vec![2.0]);
        assert_eq!(
            f.evaluate(&[-1.0]),
            Err(IntegrateError::Evaluation {
                message: "negative input".to_string()
            })
        );
    }
}
