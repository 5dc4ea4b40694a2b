//! Host-side limits on user inputs
//!
//! The engine only needs `lr > 0`, `1 <= iterations <= 100` and a bounded
//! terrain resolution; the CLI keeps inputs in the ranges the explorer was
//! designed around.

use gradlab_types::{check_terrain_samples, MAX_ITERATIONS};

pub const MAX_LEARNING_RATE: f64 = 1.5;
pub const POSITION_LIMIT: f64 = 5.0;

pub fn parse_learning_rate(s: &str) -> Result<f64, String> {
    let lr: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if lr > 0.0 && lr <= MAX_LEARNING_RATE {
        Ok(lr)
    } else {
        Err(format!(
            "learning rate must be in (0, {}], got {}",
            MAX_LEARNING_RATE, lr
        ))
    }
}

pub fn parse_iterations(s: &str) -> Result<usize, String> {
    let n: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a whole number", s))?;
    if (1..=MAX_ITERATIONS).contains(&n) {
        Ok(n)
    } else {
        Err(format!(
            "iterations must be in [1, {}], got {}",
            MAX_ITERATIONS, n
        ))
    }
}

pub fn parse_initial_position(s: &str) -> Result<f64, String> {
    let x: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if (-POSITION_LIMIT..=POSITION_LIMIT).contains(&x) {
        Ok(x)
    } else {
        Err(format!(
            "initial position must be in [{}, {}], got {}",
            -POSITION_LIMIT, POSITION_LIMIT, x
        ))
    }
}

pub fn parse_terrain_samples(s: &str) -> Result<usize, String> {
    let n: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a whole number", s))?;
    check_terrain_samples(n).map_err(|e| e.to_string())
}
