//! The in-progress expression being edited by the user

use crate::core::evaluator::Evaluator;
use crate::core::Operation;

/// Expression buffer with operator collapsing
///
/// The buffer never ends in two consecutive operator characters after an
/// [`append`](Self::append). Deleting characters can still leave a
/// trailing operator behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpressionBuffer {
    text: String,
}

impl ExpressionBuffer {
    /// Creates an empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a token to the buffer.
    ///
    /// A single operator character replaces a trailing operator instead of
    /// stacking on it. Everything else is concatenated verbatim.
    pub fn append(&mut self, value: &str) {
        let mut chars = value.chars();
        let incoming_op = match (chars.next(), chars.next()) {
            (Some(ch), None) => Operation::is_operator_char(ch),
            _ => false,
        };

        if incoming_op && self.ends_with_operator() {
            self.text.pop();
        }
        self.text.push_str(value);
    }

    /// Removes the final character; no-op when empty
    pub fn delete_last(&mut self) {
        self.text.pop();
    }

    /// Empties the buffer
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Replaces the whole buffer
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Returns the raw buffer text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns true if the buffer is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Text for the expression view: the buffer, or `"0"` when empty
    #[must_use]
    pub fn display(&self) -> &str {
        if self.text.is_empty() {
            "0"
        } else {
            &self.text
        }
    }

    /// Copy of the buffer restricted to the evaluable character set
    #[must_use]
    pub fn sanitized(&self) -> String {
        Evaluator::sanitize(&self.text)
    }

    /// Returns true if the last character is an operator
    #[must_use]
    pub fn ends_with_operator(&self) -> bool {
        self.text.chars().last().is_some_and(Operation::is_operator_char)
    }
}
