//! Descent Engine
//!
//! ## Differentiation
//! - numeric_derivative: forward difference `(f(x+h) - f(x)) / h`
//!
//! ## Optimization
//! - run_descent: fixed number of `x <- x - lr * f'(x)` steps, no early exit
//! - diagnose: final position, value, slope and the convergence flag
//!
//! ## Plotting support
//! - terrain_samples: the function sampled on a window framing the path
//!
//! Every function is stateless; identical inputs give bit-identical outputs.

pub mod derivative;
pub mod descent;
pub mod diagnostics;
pub mod terrain;

pub use derivative::{numeric_derivative, DEFAULT_STEP};
pub use descent::{run_descent, DescentError};
pub use diagnostics::{diagnose, CONVERGENCE_THRESHOLD};
pub use terrain::{
    linspace, terrain_half_width, terrain_samples, TerrainError, DEFAULT_TERRAIN_SAMPLES,
    TERRAIN_PADDING,
};
