use serde::Serialize;
use thiserror::Error;

/// Upper bound on descent steps; the only guard against long runs
pub const MAX_ITERATIONS: usize = 100;

/// Bounds on the number of terrain samples; a window needs both endpoints
pub const MIN_TERRAIN_SAMPLES: usize = 2;
pub const MAX_TERRAIN_SAMPLES: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("learning rate must be a finite number greater than 0, got {0}")]
    LearningRate(f64),

    #[error("iterations must be between 1 and {max}, got {got}")]
    Iterations { got: usize, max: usize },

    #[error("initial position must be a finite number, got {0}")]
    InitialPosition(f64),

    #[error("terrain samples must be between {min} and {max}, got {got}")]
    TerrainSamples { got: usize, min: usize, max: usize },
}

/// Check a terrain sample count against `MIN_TERRAIN_SAMPLES..=MAX_TERRAIN_SAMPLES`
pub fn check_terrain_samples(n: usize) -> Result<usize, ParameterError> {
    if (MIN_TERRAIN_SAMPLES..=MAX_TERRAIN_SAMPLES).contains(&n) {
        Ok(n)
    } else {
        Err(ParameterError::TerrainSamples {
            got: n,
            min: MIN_TERRAIN_SAMPLES,
            max: MAX_TERRAIN_SAMPLES,
        })
    }
}

/// Validated inputs for one descent run
///
/// Fields are only reachable through [`DescentParameters::new`], so a value of
/// this type always satisfies `learning_rate > 0`,
/// `1 <= iterations <= MAX_ITERATIONS` and a finite initial position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DescentParameters {
    learning_rate: f64,
    iterations: usize,
    initial_position: f64,
}

impl DescentParameters {
    pub fn new(
        learning_rate: f64,
        iterations: usize,
        initial_position: f64,
    ) -> Result<Self, ParameterError> {
        if !(learning_rate.is_finite() && learning_rate > 0.0) {
            return Err(ParameterError::LearningRate(learning_rate));
        }
        if !(1..=MAX_ITERATIONS).contains(&iterations) {
            return Err(ParameterError::Iterations {
                got: iterations,
                max: MAX_ITERATIONS,
            });
        }
        if !initial_position.is_finite() {
            return Err(ParameterError::InitialPosition(initial_position));
        }

        Ok(Self {
            learning_rate,
            iterations,
            initial_position,
        })
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn initial_position(&self) -> f64 {
        self.initial_position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_parameters() {
        let params = DescentParameters::new(0.1, 10, -2.5).unwrap();
        assert_eq!(params.learning_rate(), 0.1);
        assert_eq!(params.iterations(), 10);
        assert_eq!(params.initial_position(), -2.5);
    }

    #[test]
    fn test_rejects_non_positive_learning_rate() {
        assert_eq!(
            DescentParameters::new(0.0, 10, 1.0),
            Err(ParameterError::LearningRate(0.0))
        );
        assert!(DescentParameters::new(-0.1, 10, 1.0).is_err());
        assert!(DescentParameters::new(f64::NAN, 10, 1.0).is_err());
        assert!(DescentParameters::new(f64::INFINITY, 10, 1.0).is_err());
    }

    #[test]
    fn test_iteration_bounds() {
        assert!(DescentParameters::new(0.1, 0, 1.0).is_err());
        assert!(DescentParameters::new(0.1, 1, 1.0).is_ok());
        assert!(DescentParameters::new(0.1, MAX_ITERATIONS, 1.0).is_ok());
        assert_eq!(
            DescentParameters::new(0.1, MAX_ITERATIONS + 1, 1.0),
            Err(ParameterError::Iterations {
                got: MAX_ITERATIONS + 1,
                max: MAX_ITERATIONS
            })
        );
    }

    #[test]
    fn test_rejects_non_finite_start() {
        assert!(DescentParameters::new(0.1, 10, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_terrain_sample_bounds() {
        assert_eq!(check_terrain_samples(200), Ok(200));
        assert_eq!(check_terrain_samples(MIN_TERRAIN_SAMPLES), Ok(2));
        assert_eq!(check_terrain_samples(MAX_TERRAIN_SAMPLES), Ok(10_000));
        for n in [0, 1, MAX_TERRAIN_SAMPLES + 1, usize::MAX / 16] {
            assert_eq!(
                check_terrain_samples(n),
                Err(ParameterError::TerrainSamples {
                    got: n,
                    min: MIN_TERRAIN_SAMPLES,
                    max: MAX_TERRAIN_SAMPLES
                })
            );
        }
    }
}
