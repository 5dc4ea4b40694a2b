/// Tests for compiling user expressions
///
/// This module tests:
/// - Successful compilation of the usual teaching examples
/// - The smoke test at x = 0 versus a caller-chosen point
/// - Allow-list rejection of unknown names
/// - Verbatim parser messages


use approx::assert_relative_eq;
use gradlab_eval::{compile, compile_at, EvalError, ScalarFunction};
use test_common::eval_at;

// ============================================================================
// Successful compilation
// ============================================================================

#[test]
fn test_compile_default_polynomial() {
    let f = compile("x**4 - 2*x**2 + 1").unwrap();
    assert_relative_eq!(f.evaluate(0.0).unwrap(), 1.0);
    assert_relative_eq!(f.evaluate(1.0).unwrap(), 0.0);
    assert_relative_eq!(f.evaluate(2.0).unwrap(), 9.0);
    assert_eq!(f.source(), "x**4 - 2*x**2 + 1");
}

#[test]
fn test_compile_numpy_style_calls() {
    assert_relative_eq!(eval_at("np.sin(x)", 0.0).unwrap(), 0.0);
    assert_relative_eq!(eval_at("np.exp(x) - np.e", 1.0).unwrap(), 0.0, epsilon = 1e-12);
    assert_relative_eq!(eval_at("math.cos(np.pi * x)", 1.0).unwrap(), -1.0);
}

#[test]
fn test_compiled_function_is_pure() {
    let f = compile("sin(x) + x^2").unwrap();
    let a = f.evaluate(0.7).unwrap();
    let b = f.evaluate(0.7).unwrap();
    assert_eq!(a.to_bits(), b.to_bits());
}

#[test]
fn test_constant_expression() {
    let f = compile("2 * pi").unwrap();
    assert!(f.is_constant());
    assert!(!compile("x").unwrap().is_constant());
}

// ============================================================================
// Smoke test
// ============================================================================

#[test]
fn test_reciprocal_fails_smoke_test_at_zero() {
    assert_eq!(compile("1/x"), Err(EvalError::DivisionByZero));
}

#[test]
fn test_reciprocal_compiles_away_from_zero() {
    let f = compile_at("1/x", 2.0).unwrap();
    assert_relative_eq!(f.evaluate(2.0).unwrap(), 0.5);
    // The smoke test does not make later calls infallible
    assert_eq!(f.evaluate(0.0), Err(EvalError::DivisionByZero));
}

#[test]
fn test_log_fails_smoke_test_at_zero() {
    assert!(matches!(compile("ln(x)"), Err(EvalError::Domain { .. })));
    assert!(compile_at("ln(x)", 1.0).is_ok());
}

// ============================================================================
// Allow-list
// ============================================================================

#[test]
fn test_unknown_names_are_compile_errors() {
    match compile("y * x") {
        Err(EvalError::Compile(message)) => assert_eq!(message, "name 'y' is not defined"),
        other => panic!("Expected compile error, got {:?}", other),
    }
    assert!(matches!(compile("open(x)"), Err(EvalError::Compile(_))));
    assert!(matches!(
        compile("__import__(x)"),
        Err(EvalError::Compile(_))
    ));
}

#[test]
fn test_syntax_error_message_is_verbatim() {
    let parser_message = gradlab_parser::parse("x +*").unwrap_err().to_string();
    match compile("x +*") {
        Err(EvalError::Compile(message)) => assert_eq!(message, parser_message),
        other => panic!("Expected compile error, got {:?}", other),
    }
}

#[test]
fn test_trait_object_evaluation() {
    let f = compile("x^2").unwrap();
    assert_relative_eq!(f.eval_at(3.0).unwrap(), 9.0);
}
