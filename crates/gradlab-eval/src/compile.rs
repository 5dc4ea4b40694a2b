use crate::evaluator::evaluate_expr;
use gradlab_parser::Expr;
use gradlab_types::{EvalError, ScalarFunction};

/// Where [`compile`] runs its smoke evaluation
pub const SMOKE_TEST_POINT: f64 = 0.0;

/// A validated expression, callable as `f(x)`
///
/// Stateless and pure; cloning is cheap enough for one run to own its copy.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledFunction {
    source: String,
    expr: Expr,
}

impl CompiledFunction {
    /// Evaluate at `x`. Any call may fail, not only the first.
    pub fn evaluate(&self, x: f64) -> Result<f64, EvalError> {
        evaluate_expr(&self.expr, x)
    }

    /// The text this function was compiled from
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Whether the function actually depends on `x`
    pub fn is_constant(&self) -> bool {
        !self.expr.contains_variable()
    }
}

impl ScalarFunction for CompiledFunction {
    fn eval_at(&self, x: f64) -> Result<f64, EvalError> {
        self.evaluate(x)
    }
}

/// Compile `source`, smoke-testing it at `x = 0`
pub fn compile(source: &str) -> Result<CompiledFunction, EvalError> {
    compile_at(source, SMOKE_TEST_POINT)
}

/// Compile `source`, smoke-testing it at `x = at`
///
/// The smoke result is discarded; it only proves the expression is callable.
/// Parser messages are preserved verbatim in [`EvalError::Compile`].
pub fn compile_at(source: &str, at: f64) -> Result<CompiledFunction, EvalError> {
    let expr = gradlab_parser::parse(source).map_err(|e| EvalError::Compile(e.to_string()))?;
    let function = CompiledFunction {
        source: source.to_string(),
        expr,
    };

    match function.evaluate(at) {
        Ok(value) => {
            log::debug!("compiled '{}': smoke test f({}) = {}", source, at, value);
            Ok(function)
        }
        Err(err) => {
            log::debug!("smoke test of '{}' at x = {} failed: {}", source, at, err);
            Err(err)
        }
    }
}
