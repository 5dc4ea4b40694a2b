pub mod error;
pub mod function;
pub mod params;
pub mod trajectory;

// Re-exports
pub use error::EvalError;
pub use function::ScalarFunction;
pub use params::{
    check_terrain_samples, DescentParameters, ParameterError, MAX_ITERATIONS,
    MAX_TERRAIN_SAMPLES, MIN_TERRAIN_SAMPLES,
};
pub use trajectory::{StepDiagnostics, TerrainSample, Trajectory, TrajectoryPoint};
