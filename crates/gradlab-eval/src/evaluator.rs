use crate::builtins;
use gradlab_parser::{BinaryOp, Expr};
use gradlab_types::EvalError;

/// Evaluate `expr` with the variable bound to `x`
///
/// Fails on division by zero, on domain errors, and as soon as any
/// intermediate result stops being finite.
pub fn evaluate_expr(expr: &Expr, x: f64) -> Result<f64, EvalError> {
    let value = match expr {
        Expr::Number(n) => *n,
        Expr::Constant(c) => c.value(),
        Expr::Variable => x,
        Expr::Neg(inner) => -evaluate_expr(inner, x)?,
        Expr::Binary { op, left, right } => {
            let l = evaluate_expr(left, x)?;
            let r = evaluate_expr(right, x)?;
            binary(*op, l, r)?
        }
        Expr::Call { func, arg } => builtins::apply(*func, evaluate_expr(arg, x)?)?,
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite { x })
    }
}

fn binary(op: BinaryOp, l: f64, r: f64) -> Result<f64, EvalError> {
    match op {
        BinaryOp::Add => Ok(l + r),
        BinaryOp::Sub => Ok(l - r),
        BinaryOp::Mul => Ok(l * r),
        BinaryOp::Div => {
            if r == 0.0 {
                Err(EvalError::DivisionByZero)
            } else {
                Ok(l / r)
            }
        }
        BinaryOp::Pow => power(l, r),
    }
}

fn power(base: f64, exponent: f64) -> Result<f64, EvalError> {
    if base == 0.0 && exponent < 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    if base < 0.0 && exponent.fract() != 0.0 {
        return Err(EvalError::ComplexPower { base, exponent });
    }
    Ok(base.powf(exponent))
}
