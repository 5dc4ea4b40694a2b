use crate::derivative::checked_eval;
use gradlab_types::{
    check_terrain_samples, EvalError, ParameterError, ScalarFunction, TerrainSample, Trajectory,
};
use thiserror::Error;

/// Margin added beyond the furthest visited position
pub const TERRAIN_PADDING: f64 = 2.0;

pub const DEFAULT_TERRAIN_SAMPLES: usize = 200;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TerrainError {
    #[error(transparent)]
    Samples(#[from] ParameterError),

    #[error(transparent)]
    Evaluation(#[from] EvalError),
}

/// Half-width `L` of the symmetric window `[-L, L]` around the path
pub fn terrain_half_width(trajectory: &Trajectory) -> f64 {
    let (lo, hi) = trajectory.position_range();
    lo.abs().max(hi.abs()) + TERRAIN_PADDING
}

/// `n` evenly spaced points from `start` to `end`, both included
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut points: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            points[n - 1] = end;
            points
        }
    }
}

/// terrain_samples(f, trajectory, n) -> [(x, f(x))]
///
/// Samples `f` at `n` evenly spaced points over `[-L, L]` with
/// `L = max(|min position|, |max position|) + TERRAIN_PADDING`.
/// For plotting only; the first failing sample aborts the whole call.
///
/// `n` must lie in `MIN_TERRAIN_SAMPLES..=MAX_TERRAIN_SAMPLES`.
pub fn terrain_samples<F>(
    f: &F,
    trajectory: &Trajectory,
    n: usize,
) -> Result<Vec<TerrainSample>, TerrainError>
where
    F: ScalarFunction + ?Sized,
{
    let n = check_terrain_samples(n)?;
    let half_width = terrain_half_width(trajectory);

    linspace(-half_width, half_width, n)
        .into_iter()
        .map(|x| Ok(TerrainSample { x, y: checked_eval(f, x)? }))
        .collect()
}
