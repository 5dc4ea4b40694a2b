//! Allow-listed math functions
//!
//! Each function checks its real domain before computing:
//! - Logarithms: ln, log, log10, log2 need a positive argument
//! - sqrt needs a non-negative argument
//! - asin, acos need an argument in [-1, 1]
//!
//! Overflow (exp, sinh, cosh) is caught by the evaluator's finiteness check.

use gradlab_parser::MathFn;
use gradlab_types::EvalError;

fn positive(func: MathFn, v: f64) -> Result<f64, EvalError> {
    if v > 0.0 {
        Ok(v)
    } else {
        Err(EvalError::domain(func.name(), v))
    }
}

fn non_negative(func: MathFn, v: f64) -> Result<f64, EvalError> {
    if v >= 0.0 {
        Ok(v)
    } else {
        Err(EvalError::domain(func.name(), v))
    }
}

fn unit_interval(func: MathFn, v: f64) -> Result<f64, EvalError> {
    if (-1.0..=1.0).contains(&v) {
        Ok(v)
    } else {
        Err(EvalError::domain(func.name(), v))
    }
}

/// Sign with `sign(0) == 0`, unlike `f64::signum`
fn sign(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v.signum()
    }
}

/// Apply `func` to `v`
pub fn apply(func: MathFn, v: f64) -> Result<f64, EvalError> {
    match func {
        MathFn::Sin => Ok(v.sin()),
        MathFn::Cos => Ok(v.cos()),
        MathFn::Tan => Ok(v.tan()),
        MathFn::Asin => unit_interval(func, v).map(f64::asin),
        MathFn::Acos => unit_interval(func, v).map(f64::acos),
        MathFn::Atan => Ok(v.atan()),
        MathFn::Sinh => Ok(v.sinh()),
        MathFn::Cosh => Ok(v.cosh()),
        MathFn::Tanh => Ok(v.tanh()),
        MathFn::Exp => Ok(v.exp()),
        MathFn::Ln | MathFn::Log => positive(func, v).map(f64::ln),
        MathFn::Log10 => positive(func, v).map(f64::log10),
        MathFn::Log2 => positive(func, v).map(f64::log2),
        MathFn::Sqrt => non_negative(func, v).map(f64::sqrt),
        MathFn::Cbrt => Ok(v.cbrt()),
        MathFn::Abs => Ok(v.abs()),
        MathFn::Floor => Ok(v.floor()),
        MathFn::Ceil => Ok(v.ceil()),
        // ties to even, matching the usual numeric-library convention
        MathFn::Round => Ok(v.round_ties_even()),
        MathFn::Sign => Ok(sign(v)),
    }
}
