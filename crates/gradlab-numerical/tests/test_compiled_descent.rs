/// Descent over compiled user expressions
///
/// These tests run the engine on functions with known closed-form derivatives
/// and check the convergence flag and failure handling end to end.

use approx::assert_abs_diff_eq;
use gradlab_eval::{compile_at, EvalError};
use gradlab_numerical::{diagnose, numeric_derivative, run_descent, terrain_samples, DEFAULT_STEP};
use gradlab_types::DescentParameters;

fn params(lr: f64, iterations: usize, x0: f64) -> DescentParameters {
    DescentParameters::new(lr, iterations, x0).unwrap()
}

#[test]
fn test_square_first_step() {
    let f = compile_at("x**2", 2.0).unwrap();
    let t = run_descent(&f, &params(0.1, 1, 2.0)).unwrap();
    let points = t.points();
    assert_abs_diff_eq!(points[0].position, 2.0, epsilon = 1e-2);
    assert_abs_diff_eq!(points[0].value, 4.0, epsilon = 1e-2);
    assert_abs_diff_eq!(points[1].position, 1.6, epsilon = 1e-2);
    assert_abs_diff_eq!(points[1].value, 2.56, epsilon = 1e-2);
}

#[test]
fn test_derivative_of_compiled_square() {
    let f = compile_at("x^2", 2.0).unwrap();
    assert_abs_diff_eq!(numeric_derivative(&f, 2.0, DEFAULT_STEP).unwrap(), 4.0001, epsilon = 1e-3);
}

#[test]
fn test_square_converges_near_zero() {
    let f = compile_at("x^2", 2.0).unwrap();
    let t = run_descent(&f, &params(0.1, 100, 2.0)).unwrap();
    let d = diagnose(&f, &t).unwrap();

    // analytic derivative 2x at the final point
    assert!((2.0 * d.final_position).abs() < 0.01);
    assert!(d.converged);
}

#[test]
fn test_double_well_from_default_start() {
    // f'(x) = 4x^3 - 4x, minima at x = ±1
    let f = compile_at("x**4 - 2*x**2 + 1", 2.0).unwrap();
    let t = run_descent(&f, &params(0.05, 30, 2.0)).unwrap();
    let d = diagnose(&f, &t).unwrap();

    let x = d.final_position;
    assert_abs_diff_eq!(x, 1.0, epsilon = 1e-2);
    assert!((4.0 * x.powi(3) - 4.0 * x).abs() < 0.01);
    assert!(d.converged);
}

#[test]
fn test_too_few_steps_do_not_converge() {
    let f = compile_at("x^2", 2.0).unwrap();
    let t = run_descent(&f, &params(0.1, 1, 2.0)).unwrap();
    let d = diagnose(&f, &t).unwrap();

    // analytic derivative at 1.6 is 3.2
    assert_abs_diff_eq!(d.final_slope, 3.2, epsilon = 1e-3);
    assert!(!d.converged);
}

#[test]
fn test_linear_function_never_converges() {
    let f = compile_at("3*x + 1", 0.0).unwrap();
    let t = run_descent(&f, &params(0.1, 50, 0.0)).unwrap();
    assert_abs_diff_eq!(t.last().position, -15.0, epsilon = 1e-6);
    assert!(!diagnose(&f, &t).unwrap().converged);
}

#[test]
fn test_overflowing_run_is_halted() {
    // first step jumps to about -325, where exp(x^2) overflows
    let f = compile_at("exp(x^2)", 2.0).unwrap();
    let err = run_descent(&f, &params(1.5, 10, 2.0)).unwrap_err();
    assert_eq!(err.step, 1);
    assert_eq!(err.partial.len(), 1);
    assert!(matches!(err.source, EvalError::NonFinite { .. }));
}

#[test]
fn test_domain_error_mid_run() {
    let f = compile_at("ln(x)", 0.5).unwrap();
    let err = run_descent(&f, &params(1.0, 10, 0.5)).unwrap_err();
    assert_eq!(err.step, 1);
    assert!(matches!(err.source, EvalError::Domain { .. }));
}

#[test]
fn test_terrain_around_default_run() {
    let f = compile_at("x**4 - 2*x**2 + 1", 2.0).unwrap();
    let t = run_descent(&f, &params(0.05, 30, 2.0)).unwrap();
    let samples = terrain_samples(&f, &t, 200).unwrap();

    // path stays within [0.8, 2], so the window is [-4, 4]
    assert_eq!(samples.len(), 200);
    assert_abs_diff_eq!(samples[0].x, -4.0, epsilon = 1e-12);
    assert_abs_diff_eq!(samples[199].x, 4.0, epsilon = 1e-12);
    assert_abs_diff_eq!(samples[0].y, 225.0, epsilon = 1e-9);
}
