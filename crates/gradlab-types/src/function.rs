//! Scalar Function Trait
//!
//! Defines the interface for evaluating a real function of one variable.
//! The compiled expression implements it, and the numerical engine only
//! depends on this trait, so tests can drive the engine with plain Rust
//! functions.

use crate::error::EvalError;

/// A fallible real-to-real function
///
/// Implementations must be pure: the same `x` always yields the same result.
/// Every call may fail; callers treat each evaluation as fallible.
pub trait ScalarFunction {
    /// Evaluate the function at a single point
    fn eval_at(&self, x: f64) -> Result<f64, EvalError>;
}

impl<F> ScalarFunction for F
where
    F: Fn(f64) -> Result<f64, EvalError>,
{
    fn eval_at(&self, x: f64) -> Result<f64, EvalError> {
        self(x)
    }
}
