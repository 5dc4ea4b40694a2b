use gradlab_types::{EvalError, ScalarFunction};

/// Default forward-difference step
pub const DEFAULT_STEP: f64 = 1e-4;

/// Evaluate `f(x)` and insist on a finite result
///
/// Compiled expressions already guarantee this; arbitrary closures do not.
pub(crate) fn checked_eval<F>(f: &F, x: f64) -> Result<f64, EvalError>
where
    F: ScalarFunction + ?Sized,
{
    let value = f.eval_at(x)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite { x })
    }
}

/// numeric_derivative(f, x, h) -> slope
///
/// Forward difference: f'(x) ≈ [f(x+h) - f(x)] / h
///
/// One-sided on purpose: one extra evaluation per derivative, at the price of
/// an O(h) bias (for `x^2` the estimate is `2x + h`).
///
/// # Arguments
/// * `f` - Function to differentiate
/// * `x` - Point at which to evaluate the derivative
/// * `h` - Step size, normally [`DEFAULT_STEP`]
pub fn numeric_derivative<F>(f: &F, x: f64, h: f64) -> Result<f64, EvalError>
where
    F: ScalarFunction + ?Sized,
{
    let fx = checked_eval(f, x)?;
    forward_difference(f, x, fx, h)
}

/// Forward difference when `f(x)` is already known
pub(crate) fn forward_difference<F>(f: &F, x: f64, fx: f64, h: f64) -> Result<f64, EvalError>
where
    F: ScalarFunction + ?Sized,
{
    let f_forward = checked_eval(f, x + h)?;
    let slope = (f_forward - fx) / h;

    if slope.is_finite() {
        Ok(slope)
    } else {
        Err(EvalError::NonFinite { x })
    }
}
