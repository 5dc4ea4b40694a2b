//! Evaluation errors shared by the evaluator and the numerical engine

use serde::Serialize;
use thiserror::Error;

/// Failure to produce a finite real value for `f(x)`
///
/// The display text is what the user sees; messages from the expression
/// parser are carried through unchanged in [`EvalError::Compile`].
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
pub enum EvalError {
    /// Expression was rejected before any evaluation happened
    #[error("{0}")]
    Compile(String),

    #[error("division by zero")]
    DivisionByZero,

    /// Function applied outside its real domain, e.g. `ln(-1)`
    #[error("math domain error: {function}({input}) is undefined")]
    Domain { function: String, input: f64 },

    #[error("math domain error: negative base {base} raised to non-integer power {exponent}")]
    ComplexPower { base: f64, exponent: f64 },

    /// Overflow or NaN produced while evaluating at `x`
    #[error("numerical result out of range at x = {x}")]
    NonFinite { x: f64 },
}

impl EvalError {
    pub fn domain(function: &str, input: f64) -> Self {
        EvalError::Domain {
            function: function.to_string(),
            input,
        }
    }
}
