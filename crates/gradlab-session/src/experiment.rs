//! One complete experiment: compile, descend, diagnose, sample terrain
//!
//! Each call starts from scratch; nothing is cached between calls, so a host
//! simply calls [`run_experiment`] again whenever any input changes.

use gradlab_eval::{compile_at, CompiledFunction, EvalError};
use gradlab_numerical::{
    diagnose, run_descent, terrain_samples, DescentError, TerrainError, DEFAULT_TERRAIN_SAMPLES,
};
use gradlab_types::{
    check_terrain_samples, DescentParameters, ParameterError, StepDiagnostics, TerrainSample,
    Trajectory, TrajectoryPoint,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_EXPRESSION: &str = "x**4 - 2*x**2 + 1";
pub const DEFAULT_LEARNING_RATE: f64 = 0.05;
pub const DEFAULT_ITERATIONS: usize = 30;
pub const DEFAULT_INITIAL_POSITION: f64 = 2.0;

/// The four raw inputs collected by a host, plus the plot resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentInput {
    pub expression: String,
    pub learning_rate: f64,
    pub iterations: usize,
    pub initial_position: f64,
    pub terrain_samples: usize,
}

impl Default for ExperimentInput {
    fn default() -> Self {
        Self {
            expression: DEFAULT_EXPRESSION.to_string(),
            learning_rate: DEFAULT_LEARNING_RATE,
            iterations: DEFAULT_ITERATIONS,
            initial_position: DEFAULT_INITIAL_POSITION,
            terrain_samples: DEFAULT_TERRAIN_SAMPLES,
        }
    }
}

impl ExperimentInput {
    pub fn parameters(&self) -> Result<DescentParameters, ParameterError> {
        DescentParameters::new(self.learning_rate, self.iterations, self.initial_position)
    }

    pub fn terrain_resolution(&self) -> Result<usize, ParameterError> {
        check_terrain_samples(self.terrain_samples)
    }
}

/// Everything a host needs to render one run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentReport {
    pub expression: String,
    pub parameters: DescentParameters,
    pub trajectory: Trajectory,
    pub diagnostics: StepDiagnostics,
    pub terrain: Vec<TerrainSample>,
}

impl ExperimentReport {
    /// One-line verdict on the final slope
    pub fn summary(&self) -> &'static str {
        if self.diagnostics.converged {
            "Converged to a minimum (flat)"
        } else {
            "Still descending or oscillating"
        }
    }
}

/// Why a run produced nothing to render
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExperimentError {
    #[error("invalid parameters: {0}")]
    Parameters(#[from] ParameterError),

    /// Parse failure or failed smoke test; no descent was attempted
    #[error("error in function: {0}")]
    Compile(#[source] EvalError),

    /// The descent loop stopped early; the partial path is kept for inspection
    #[error("{0}")]
    Evaluation(#[from] DescentError),

    /// The descent finished but the slope at its last point could not be
    /// evaluated; the final position and value are the trajectory's last point
    #[error("could not evaluate the final slope: {source}")]
    Diagnostics {
        #[source]
        source: EvalError,
        trajectory: Trajectory,
    },

    #[error("could not sample the terrain: {source}")]
    Terrain {
        #[source]
        source: TerrainError,
        trajectory: Trajectory,
        diagnostics: StepDiagnostics,
    },
}

impl ExperimentError {
    /// Points visited before the failure, if the descent had started
    pub fn partial_trajectory(&self) -> Option<&[TrajectoryPoint]> {
        match self {
            ExperimentError::Evaluation(err) => Some(&err.partial),
            ExperimentError::Diagnostics { trajectory, .. }
            | ExperimentError::Terrain { trajectory, .. } => Some(trajectory.points()),
            ExperimentError::Parameters(_) | ExperimentError::Compile(_) => None,
        }
    }
}

/// Compile the expression and check it is callable at the starting point
fn load_function(input: &ExperimentInput) -> Result<CompiledFunction, ExperimentError> {
    compile_at(&input.expression, input.initial_position).map_err(ExperimentError::Compile)
}

/// Run one experiment end to end
///
/// Order: validate parameters, compile (smoke test at the initial position),
/// descend, diagnose the final point, sample the terrain. Any failure aborts
/// the whole run.
pub fn run_experiment(input: &ExperimentInput) -> Result<ExperimentReport, ExperimentError> {
    let parameters = input.parameters()?;
    let resolution = input.terrain_resolution()?;
    let function = load_function(input)?;

    log::debug!(
        "experiment '{}' with lr = {}, iterations = {}, x0 = {}",
        function.source(),
        parameters.learning_rate(),
        parameters.iterations(),
        parameters.initial_position()
    );
    if function.is_constant() {
        log::warn!("'{}' does not depend on x; the descent will not move", function.source());
    }

    let trajectory = run_descent(&function, &parameters)?;
    let diagnostics = match diagnose(&function, &trajectory) {
        Ok(diagnostics) => diagnostics,
        Err(source) => return Err(ExperimentError::Diagnostics { source, trajectory }),
    };
    let terrain = match terrain_samples(&function, &trajectory, resolution) {
        Ok(terrain) => terrain,
        Err(source) => {
            return Err(ExperimentError::Terrain {
                source,
                trajectory,
                diagnostics,
            })
        }
    };

    Ok(ExperimentReport {
        expression: function.source().to_string(),
        parameters,
        trajectory,
        diagnostics,
        terrain,
    })
}
