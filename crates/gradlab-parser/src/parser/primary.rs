use super::internal;
use crate::ast::{Constant, Expr, MathFn};
use crate::error::ParseError;
use crate::parser::AstParser;
use crate::pest_parser::Rule;
use pest::iterators::Pair;

/// A possibly prefixed identifier, e.g. `np.sin`
struct Name<'i> {
    namespace: Option<&'i str>,
    identifier: &'i str,
    text: &'i str,
}

impl AstParser {
    pub(super) fn build_primary(&self, pair: Pair<Rule>) -> Result<Expr, ParseError> {
        let inner = pair
            .into_inner()
            .next()
            .ok_or_else(|| internal("empty primary expression"))?;

        match inner.as_rule() {
            Rule::number => {
                let text = inner.as_str();
                let value = text
                    .parse::<f64>()
                    .map_err(|_| ParseError::InvalidNumber(text.to_string()))?;
                // 1e999 parses to inf
                if !value.is_finite() {
                    return Err(ParseError::InvalidNumber(text.to_string()));
                }
                Ok(Expr::Number(value))
            }
            Rule::call => self.build_call(inner),
            Rule::reference => self.build_reference(inner),
            Rule::expr => self.build_expr(inner),
            other => Err(internal(format!("unexpected primary rule: {:?}", other))),
        }
    }

    fn build_call(&self, pair: Pair<Rule>) -> Result<Expr, ParseError> {
        // Grammar: name ~ "(" ~ expr ~ ")"
        let mut inner = pair.into_inner();
        let name = inner
            .next()
            .ok_or_else(|| internal("missing function name"))?;
        let name = self.build_name(name)?;
        let arg = inner
            .next()
            .ok_or_else(|| internal("missing function argument"))?;

        let func = MathFn::from_name(name.identifier)
            .ok_or_else(|| ParseError::UnknownFunction(name.text.to_string()))?;
        Ok(Expr::call(func, self.build_expr(arg)?))
    }

    fn build_reference(&self, pair: Pair<Rule>) -> Result<Expr, ParseError> {
        let name = pair
            .into_inner()
            .next()
            .ok_or_else(|| internal("empty reference"))?;
        let name = self.build_name(name)?;

        if name.identifier == "x" {
            return match name.namespace {
                None => Ok(Expr::Variable),
                Some(_) => Err(ParseError::InvalidNamespace(name.text.to_string())),
            };
        }

        Constant::from_name(name.identifier)
            .map(Expr::Constant)
            .ok_or_else(|| ParseError::UnknownSymbol(name.text.to_string()))
    }

    fn build_name<'i>(&self, pair: Pair<'i, Rule>) -> Result<Name<'i>, ParseError> {
        let text = pair.as_str();
        let mut namespace = None;
        let mut identifier = None;

        for part in pair.into_inner() {
            match part.as_rule() {
                Rule::namespace => namespace = Some(part.as_str()),
                Rule::identifier => identifier = Some(part.as_str()),
                other => return Err(internal(format!("unexpected rule in name: {:?}", other))),
            }
        }

        let identifier = identifier.ok_or_else(|| internal("name without identifier"))?;
        Ok(Name {
            namespace,
            identifier,
            text,
        })
    }
}
