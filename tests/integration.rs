//! End-to-end integration scenarios.

use approx::assert_relative_eq;

use gkquad::{
    IntegrateError, IntegrateResult, Integrand, Pointwise, QuadOptions, integrate, quadrature_rule,
};

fn antiderivative(x: f64) -> f64 {
    -x / 100.0 * (100.0 * x).cos() + 1.0 / 10000.0 * (100.0 * x).sin()
}

#[test]
fn test_oscillatory_scenario() {
    let f = Pointwise(|x: f64| x * (100.0 * x).sin());
    let options = QuadOptions {
        tol: 1e-10,
        ..Default::default()
    };
    let result = integrate(&f, 1.0, 4.0, &options).unwrap();
    let expected = antiderivative(4.0) - antiderivative(1.0);

    assert!(
        (result.integral - expected).abs() < 1e-8,
        "got {}, expected {}",
        result.integral,
        expected
    );
    assert!(result.intervals <= options.limit);
}

#[test]
fn test_minintervals_spread_features() {
    // two narrow bumps far apart
    let f = Pointwise(|x: f64| {
        (-400.0 * (x - 1.0).powi(2)).exp() + (-400.0 * (x - 9.0).powi(2)).exp()
    });
    let options = QuadOptions {
        minintervals: 10,
        ..Default::default()
    };
    let result = integrate(&f, 0.0, 10.0, &options).unwrap();
    // each bump contributes sqrt(pi / 400) to within double precision
    let expected = 2.0 * (std::f64::consts::PI / 400.0).sqrt();
    assert_relative_eq!(result.integral, expected, max_relative = 1e-9);
}

#[test]
fn test_batch_integrand() {
    let f =
        |x: &[f64]| -> IntegrateResult<Vec<f64>> { Ok(x.iter().map(|&xi| 1.0 / xi).collect()) };
    let result = integrate(&f, 1.0, 2.0, &QuadOptions::default()).unwrap();
    assert_relative_eq!(result.integral, 2.0_f64.ln(), max_relative = 1e-12);
}

#[test]
fn test_dyn_integrand() {
    let f: Box<dyn Integrand> = Box::new(Pointwise(|x: f64| x.cosh()));
    let result = integrate(f.as_ref(), -1.0, 1.0, &QuadOptions::default()).unwrap();
    assert_relative_eq!(result.integral, 2.0 * 1.0_f64.sinh(), max_relative = 1e-12);
}

#[test]
fn test_precondition_boundary() {
    let f = Pointwise(|x: f64| x * x);
    assert!(matches!(
        quadrature_rule(&f, 2.0, 2.0),
        Err(IntegrateError::InvalidInterval { .. })
    ));
    let err = integrate(&f, 5.0, 5.0, &QuadOptions::default()).unwrap_err();
    assert!(err.is_precondition());
}

#[test]
fn test_failure_is_not_zero() {
    let f = Pointwise(|x: f64| (1.0e4 * x).sin() * (3.0e3 * x).cos());
    let options = QuadOptions {
        limit: 1,
        ..Default::default()
    };
    match integrate(&f, 0.0, 10.0, &options) {
        Err(IntegrateError::DidNotConverge { intervals, .. }) => assert_eq!(intervals, 1),
        other => panic!("expected DidNotConverge, got {:?}", other),
    }
}

#[test]
fn test_integrand_error_propagates() {
    let f = |x: &[f64]| -> IntegrateResult<Vec<f64>> {
        x.iter()
            .map(|&xi| {
                if xi > 0.5 {
                    Err(IntegrateError::Evaluation {
                        message: format!("undefined at {}", xi),
                    })
                } else {
                    Ok(xi)
                }
            })
            .collect()
    };
    let err = integrate(&f, 0.0, 1.0, &QuadOptions::default()).unwrap_err();
    assert!(matches!(err, IntegrateError::Evaluation { .. }));
}

#[test]
fn test_concurrent_calls() {
    let f = Pointwise(|x: f64| x * (100.0 * x).sin());
    let expected = antiderivative(4.0) - antiderivative(1.0);

    let results: Vec<f64> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| integrate(&f, 1.0, 4.0, &QuadOptions::default())))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap().integral)
            .collect()
    });

    for value in &results {
        assert!((value - expected).abs() < 1e-8);
        assert_eq!(value.to_bits(), results[0].to_bits());
    }
}
