use crate::derivative::{checked_eval, forward_difference, DEFAULT_STEP};
use gradlab_types::{DescentParameters, EvalError, ScalarFunction, Trajectory, TrajectoryPoint};
use thiserror::Error;

/// A run stopped because `f` or its slope could not be evaluated
///
/// `step` is 0 when the starting point itself failed, otherwise the index of
/// the update that failed. `partial` holds every point accepted before it.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("evaluation failed at step {step}: {source}")]
pub struct DescentError {
    pub step: usize,
    pub source: EvalError,
    pub partial: Vec<TrajectoryPoint>,
}

/// run_descent(f, params) -> Trajectory
///
/// Starts at `params.initial_position()` and applies exactly
/// `params.iterations()` updates `x <- x - lr * f'(x)`, recording
/// `(x, f(x))` after each one. There is no convergence test: overshooting
/// or oscillating runs still take every step.
///
/// The run halts at the first step whose slope, new position or value is
/// not a finite number.
///
/// # Returns
/// A trajectory of length `iterations + 1`, the starting point first.
pub fn run_descent<F>(f: &F, params: &DescentParameters) -> Result<Trajectory, DescentError>
where
    F: ScalarFunction + ?Sized,
{
    let learning_rate = params.learning_rate();
    let mut x = params.initial_position();
    let mut fx = checked_eval(f, x).map_err(|source| DescentError {
        step: 0,
        source,
        partial: Vec::new(),
    })?;

    log::debug!(
        "descent: x0 = {}, lr = {}, iterations = {}",
        x,
        learning_rate,
        params.iterations()
    );

    let mut trajectory =
        Trajectory::with_capacity(TrajectoryPoint::new(x, fx), params.iterations() + 1);

    for step in 1..=params.iterations() {
        let next = forward_difference(f, x, fx, DEFAULT_STEP).and_then(|slope| {
            let next_x = x - learning_rate * slope;
            if !next_x.is_finite() {
                return Err(EvalError::NonFinite { x });
            }
            Ok((slope, next_x, checked_eval(f, next_x)?))
        });

        match next {
            Ok((slope, next_x, next_fx)) => {
                log::trace!("step {}: slope = {}, x = {}, f(x) = {}", step, slope, next_x, next_fx);
                x = next_x;
                fx = next_fx;
                trajectory.push(TrajectoryPoint::new(x, fx));
            }
            Err(source) => {
                log::warn!("descent halted at step {}: {}", step, source);
                return Err(DescentError {
                    step,
                    source,
                    partial: trajectory.into_points(),
                });
            }
        }
    }

    Ok(trajectory)
}
