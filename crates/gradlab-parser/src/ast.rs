//! Expression tree for single-variable real functions
//!
//! The node set is closed: literals, named constants, the variable `x`,
//! negation, binary arithmetic and calls to an allow-listed set of
//! one-argument functions. There is no way to express anything else.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Constant(Constant),
    /// The free variable `x`
    Variable,
    Neg(Box<Expr>),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Call {
        func: MathFn,
        arg: Box<Expr>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "^",
        }
    }

    fn precedence(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 1,
            BinaryOp::Mul | BinaryOp::Div => 2,
            BinaryOp::Pow => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    Pi,
    E,
    Tau,
}

impl Constant {
    pub const ALL: [Constant; 3] = [Constant::Pi, Constant::E, Constant::Tau];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Constant::Pi => "pi",
            Constant::E => "e",
            Constant::Tau => "tau",
        }
    }

    pub fn value(self) -> f64 {
        match self {
            Constant::Pi => std::f64::consts::PI,
            Constant::E => std::f64::consts::E,
            Constant::Tau => std::f64::consts::TAU,
        }
    }
}

/// Allow-listed one-argument functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathFn {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    /// Natural logarithm, spelled `ln`
    Ln,
    /// Natural logarithm, spelled `log`
    Log,
    Log10,
    Log2,
    Sqrt,
    Cbrt,
    Abs,
    Floor,
    Ceil,
    Round,
    Sign,
}

impl MathFn {
    pub const ALL: [MathFn; 21] = [
        MathFn::Sin,
        MathFn::Cos,
        MathFn::Tan,
        MathFn::Asin,
        MathFn::Acos,
        MathFn::Atan,
        MathFn::Sinh,
        MathFn::Cosh,
        MathFn::Tanh,
        MathFn::Exp,
        MathFn::Ln,
        MathFn::Log,
        MathFn::Log10,
        MathFn::Log2,
        MathFn::Sqrt,
        MathFn::Cbrt,
        MathFn::Abs,
        MathFn::Floor,
        MathFn::Ceil,
        MathFn::Round,
        MathFn::Sign,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            MathFn::Sin => "sin",
            MathFn::Cos => "cos",
            MathFn::Tan => "tan",
            MathFn::Asin => "asin",
            MathFn::Acos => "acos",
            MathFn::Atan => "atan",
            MathFn::Sinh => "sinh",
            MathFn::Cosh => "cosh",
            MathFn::Tanh => "tanh",
            MathFn::Exp => "exp",
            MathFn::Ln => "ln",
            MathFn::Log => "log",
            MathFn::Log10 => "log10",
            MathFn::Log2 => "log2",
            MathFn::Sqrt => "sqrt",
            MathFn::Cbrt => "cbrt",
            MathFn::Abs => "abs",
            MathFn::Floor => "floor",
            MathFn::Ceil => "ceil",
            MathFn::Round => "round",
            MathFn::Sign => "sign",
        }
    }
}

impl Expr {
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn call(func: MathFn, arg: Expr) -> Self {
        Expr::Call {
            func,
            arg: Box::new(arg),
        }
    }

    pub fn neg(inner: Expr) -> Self {
        Expr::Neg(Box::new(inner))
    }

    /// Whether `x` appears anywhere in the tree
    pub fn contains_variable(&self) -> bool {
        match self {
            Expr::Number(_) | Expr::Constant(_) => false,
            Expr::Variable => true,
            Expr::Neg(inner) => inner.contains_variable(),
            Expr::Binary { left, right, .. } => {
                left.contains_variable() || right.contains_variable()
            }
            Expr::Call { arg, .. } => arg.contains_variable(),
        }
    }

    pub fn node_count(&self) -> usize {
        match self {
            Expr::Number(_) | Expr::Constant(_) | Expr::Variable => 1,
            Expr::Neg(inner) => 1 + inner.node_count(),
            Expr::Binary { left, right, .. } => 1 + left.node_count() + right.node_count(),
            Expr::Call { arg, .. } => 1 + arg.node_count(),
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            Expr::Binary { op, .. } => op.precedence(),
            Expr::Neg(_) => 3,
            _ => 5,
        }
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, expr: &Expr, parens: bool) -> fmt::Result {
    if parens {
        write!(f, "({})", expr)
    } else {
        write!(f, "{}", expr)
    }
}

/// Prints the expression back in the input grammar with minimal parentheses
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{}", n),
            Expr::Constant(c) => write!(f, "{}", c.name()),
            Expr::Variable => write!(f, "x"),
            Expr::Neg(inner) => {
                write!(f, "-")?;
                write_operand(f, inner, inner.precedence() < 3)
            }
            Expr::Binary { op, left, right } => {
                let prec = op.precedence();
                let (left_parens, right_parens) = match op {
                    BinaryOp::Pow => (left.precedence() <= prec, right.precedence() < 3),
                    // left associative: an equal-precedence right operand needs parens
                    _ => (left.precedence() < prec, right.precedence() <= prec),
                };
                write_operand(f, left, left_parens)?;
                if *op == BinaryOp::Pow {
                    write!(f, "{}", op.symbol())?;
                } else {
                    write!(f, " {} ", op.symbol())?;
                }
                write_operand(f, right, right_parens)
            }
            Expr::Call { func, arg } => write!(f, "{}({})", func.name(), arg),
        }
    }
}
