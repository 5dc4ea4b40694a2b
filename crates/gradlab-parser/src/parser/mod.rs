//! Builds [`Expr`] trees from pest pairs

mod primary;

use crate::ast::{BinaryOp, Expr};
use crate::error::ParseError;
use crate::pest_parser::Rule;
use pest::iterators::Pair;

pub(crate) fn internal(msg: impl Into<String>) -> ParseError {
    ParseError::Internal(msg.into())
}

#[derive(Debug, Default)]
pub struct AstParser;

impl AstParser {
    pub fn new() -> Self {
        Self
    }

    pub fn build_expression(&self, pair: Pair<Rule>) -> Result<Expr, ParseError> {
        // Grammar: SOI ~ expr ~ EOI
        let expr = pair
            .into_inner()
            .find(|p| p.as_rule() == Rule::expr)
            .ok_or_else(|| internal("missing top-level expression"))?;
        self.build_expr(expr)
    }

    pub(super) fn build_expr(&self, pair: Pair<Rule>) -> Result<Expr, ParseError> {
        self.fold_left(pair, Self::build_term, |op| match op {
            "+" => Some(BinaryOp::Add),
            "-" => Some(BinaryOp::Sub),
            _ => None,
        })
    }

    fn build_term(&self, pair: Pair<Rule>) -> Result<Expr, ParseError> {
        self.fold_left(pair, Self::build_unary, |op| match op {
            "*" => Some(BinaryOp::Mul),
            "/" => Some(BinaryOp::Div),
            _ => None,
        })
    }

    /// operand ~ (op ~ operand)*, folded left to right
    fn fold_left(
        &self,
        pair: Pair<Rule>,
        build_operand: fn(&Self, Pair<Rule>) -> Result<Expr, ParseError>,
        op_for: fn(&str) -> Option<BinaryOp>,
    ) -> Result<Expr, ParseError> {
        let rule = pair.as_rule();
        let mut inner = pair.into_inner();
        let first = inner
            .next()
            .ok_or_else(|| internal(format!("empty {:?}", rule)))?;
        let mut acc = build_operand(self, first)?;

        while let Some(op_pair) = inner.next() {
            let op = op_for(op_pair.as_str())
                .ok_or_else(|| internal(format!("unexpected operator '{}'", op_pair.as_str())))?;
            let rhs = inner
                .next()
                .ok_or_else(|| internal(format!("operator '{}' without operand", op.symbol())))?;
            acc = Expr::binary(op, acc, build_operand(self, rhs)?);
        }

        Ok(acc)
    }

    fn build_unary(&self, pair: Pair<Rule>) -> Result<Expr, ParseError> {
        let mut negate = false;
        let mut operand = None;

        for part in pair.into_inner() {
            match part.as_rule() {
                Rule::sign => {
                    if part.as_str() == "-" {
                        negate = !negate;
                    }
                }
                Rule::power => operand = Some(self.build_power(part)?),
                other => return Err(internal(format!("unexpected rule in unary: {:?}", other))),
            }
        }

        let operand = operand.ok_or_else(|| internal("sign without operand"))?;
        Ok(if negate { Expr::neg(operand) } else { operand })
    }

    fn build_power(&self, pair: Pair<Rule>) -> Result<Expr, ParseError> {
        // Grammar: primary ~ (pow_op ~ unary)?
        let mut inner = pair.into_inner();
        let base = inner
            .next()
            .ok_or_else(|| internal("missing power base"))?;
        let base = self.build_primary(base)?;

        match (inner.next(), inner.next()) {
            (None, _) => Ok(base),
            (Some(_op), Some(exponent)) => {
                Ok(Expr::binary(BinaryOp::Pow, base, self.build_unary(exponent)?))
            }
            (Some(_), None) => Err(internal("missing exponent")),
        }
    }
}
