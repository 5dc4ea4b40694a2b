use crate::derivative::{numeric_derivative, DEFAULT_STEP};
use gradlab_types::{EvalError, ScalarFunction, StepDiagnostics, Trajectory};

/// Slope magnitude below which the final point counts as flat
pub const CONVERGENCE_THRESHOLD: f64 = 0.01;

/// diagnose(f, trajectory) -> StepDiagnostics
///
/// Reads the final point and spends one more derivative evaluation there.
/// `converged` is `|final_slope| < CONVERGENCE_THRESHOLD`.
pub fn diagnose<F>(f: &F, trajectory: &Trajectory) -> Result<StepDiagnostics, EvalError>
where
    F: ScalarFunction + ?Sized,
{
    let last = trajectory.last();
    let final_slope = numeric_derivative(f, last.position, DEFAULT_STEP)?;

    Ok(StepDiagnostics {
        final_position: last.position,
        final_value: last.value,
        final_slope,
        converged: final_slope.abs() < CONVERGENCE_THRESHOLD,
    })
}
