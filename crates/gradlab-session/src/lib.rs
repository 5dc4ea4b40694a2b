pub mod experiment;

pub use experiment::{
    run_experiment, ExperimentError, ExperimentInput, ExperimentReport, DEFAULT_EXPRESSION,
    DEFAULT_INITIAL_POSITION, DEFAULT_ITERATIONS, DEFAULT_LEARNING_RATE,
};
