//! Core calculator: expression buffer, parser, evaluator and history
//!
//! Everything in here is platform independent. Front-ends (mock DOM,
//! browser bindings) only route events into [`crate::widget::CalculatorWidget`].

pub mod buffer;
pub mod evaluator;
pub mod history;
mod operations;
pub mod parser;

pub use operations::Operation;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// Every variant surfaces to the user as the same flat `Error` marker;
/// the variants exist for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division or remainder by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// Result overflowed to infinity
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
    /// Invalid expression syntax
    #[error("Invalid expression: {0}")]
    ParseError(String),
    /// Empty expression provided
    #[error("Empty expression")]
    EmptyExpression,
    /// Invalid result (NaN)
    #[error("Invalid result: {0}")]
    InvalidResult(String),
}

/// Formats a number the way the result view and the chained buffer show it.
///
/// Uses the shortest representation that round-trips, so `5.0` becomes
/// `"5"` and `0.1 + 0.2` keeps its full tail. Negative zero prints as `"0"`.
#[must_use]
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    format!("{n}")
}
