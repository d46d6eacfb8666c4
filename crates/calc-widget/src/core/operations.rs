//! Binary arithmetic operations

use crate::core::{CalcError, CalcResult};

/// Type-safe operation enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
    /// Remainder (%)
    Modulo,
}

impl Operation {
    /// All operator characters accepted in the expression buffer
    pub const SYMBOLS: &'static str = "+-*/%";

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Modulo => '%',
        }
    }

    /// Maps an operator character to its operation
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '%' => Some(Self::Modulo),
            _ => None,
        }
    }

    /// Returns true if `ch` is one of the five operator characters
    #[must_use]
    pub const fn is_operator_char(ch: char) -> bool {
        Self::from_char(ch).is_some()
    }

    /// Applies the operation to two operands.
    ///
    /// Division and remainder by zero are errors, as is any result that
    /// is not finite.
    pub fn apply(self, a: f64, b: f64) -> CalcResult<f64> {
        let result = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide | Self::Modulo if b == 0.0 => {
                return Err(CalcError::DivisionByZero);
            }
            Self::Divide => a / b,
            Self::Modulo => a % b,
        };
        check_finite(result)
    }
}

/// Rejects NaN and infinity
pub(crate) fn check_finite(result: f64) -> CalcResult<f64> {
    if result.is_nan() {
        Err(CalcError::InvalidResult("NaN".into()))
    } else if result.is_infinite() {
        Err(CalcError::Overflow)
    } else {
        Ok(result)
    }
}
