//! AST evaluator
//!
//! Walks the tree produced by [`Parser`] in `f64`. Any non-finite
//! value, literal or intermediate, aborts the walk with an error.

use super::operations::check_finite;
use crate::core::parser::{Expr, Parser};
use crate::core::CalcResult;

/// Characters that survive [`Evaluator::sanitize`]
const ALLOWED: &str = "0123456789+-*/%.()";

/// Evaluator for AST expressions
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    /// Creates a new evaluator
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Drops every character outside `[0-9+\-*/%.()]`
    #[must_use]
    pub fn sanitize(input: &str) -> String {
        input.chars().filter(|c| ALLOWED.contains(*c)).collect()
    }

    /// Evaluates an expression tree
    pub fn evaluate(&self, expr: &Expr) -> CalcResult<f64> {
        match expr {
            Expr::Literal(n) => check_finite(*n),
            Expr::Neg(inner) => Ok(-self.evaluate(inner)?),
            Expr::Binary(op, lhs, rhs) => {
                let lhs = self.evaluate(lhs)?;
                let rhs = self.evaluate(rhs)?;
                op.apply(lhs, rhs)
            }
        }
    }

    /// Parses and evaluates a sanitized expression
    pub fn evaluate_str(&self, input: &str) -> CalcResult<f64> {
        let expr = Parser::parse_str(input)?;
        self.evaluate(&expr)
    }
}
