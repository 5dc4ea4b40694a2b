//! Function Evaluator
//!
//! Turns user text into a [`CompiledFunction`]: parse against the restricted
//! grammar, then run one smoke evaluation to catch gross errors early.
//! Evaluation walks the tree; every call can fail and never yields a
//! non-finite value.

pub mod builtins;
pub mod compile;
pub mod evaluator;

pub use compile::{compile, compile_at, CompiledFunction, SMOKE_TEST_POINT};
pub use evaluator::evaluate_expr;
pub use gradlab_types::{EvalError, ScalarFunction};
