use crate::ast::Expr;
use crate::error::ParseError;
use crate::parser::AstParser;
use pest::Parser;
use pest_derive::Parser;

/// Longest accepted source text, in bytes. Bounds nesting depth for both
/// the recursive-descent grammar and tree evaluation.
pub const MAX_EXPRESSION_LEN: usize = 1024;

#[derive(Parser)]
#[grammar = "grammar.pest"]
pub struct ExpressionParser;

/// Parse a single-variable expression into an [`Expr`] tree
///
/// Only the grammar in `grammar.pest` is accepted; names are resolved against
/// the allow-lists in [`crate::ast`] while the tree is built.
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    if source.len() > MAX_EXPRESSION_LEN {
        return Err(ParseError::TooLong {
            len: source.len(),
            limit: MAX_EXPRESSION_LEN,
        });
    }
    if source.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let mut pairs = ExpressionParser::parse(Rule::expression, source)
        .map_err(|e| ParseError::Syntax(e.to_string()))?;
    let root = pairs
        .next()
        .ok_or_else(|| ParseError::Internal("no expression produced".to_string()))?;

    let expr = AstParser::new().build_expression(root)?;
    log::debug!("parsed '{}' into {} nodes", source, expr.node_count());
    Ok(expr)
}
