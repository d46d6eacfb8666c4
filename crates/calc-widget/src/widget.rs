//! Calculator widget state and its update operations
//!
//! [`CalculatorWidget`] owns everything the widget shows: the expression
//! buffer, the result view, the history and the theme flag. Front-ends
//! call the operations below (or [`CalculatorWidget::dispatch`]) from
//! their event handlers and then re-render from the accessors.

use std::fmt;

use tracing::{debug, trace, warn};

use crate::config::WidgetConfig;
use crate::core::buffer::ExpressionBuffer;
use crate::core::evaluator::Evaluator;
use crate::core::history::{History, HistoryEntry};
use crate::core::{format_number, CalcError, CalcResult};
use crate::input::Action;
use crate::theme::Theme;

/// What the result region shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultDisplay {
    /// A numeric value; `Value(0.0)` is the idle state
    Value(f64),
    /// The flat error marker
    Error,
}

impl Default for ResultDisplay {
    fn default() -> Self {
        Self::Value(0.0)
    }
}

impl fmt::Display for ResultDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => f.write_str(&format_number(*v)),
            Self::Error => f.write_str("Error"),
        }
    }
}

/// Outcome of [`CalculatorWidget::evaluate`]
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    /// Nothing to evaluate; no state changed
    Skipped,
    /// Evaluated and recorded
    Computed(f64),
    /// Evaluation failed; the result view shows `Error`
    Failed(CalcError),
}

/// The expression evaluator widget
#[derive(Debug, Clone)]
pub struct CalculatorWidget {
    buffer: ExpressionBuffer,
    result: ResultDisplay,
    history: History,
    theme: Theme,
    evaluator: Evaluator,
    placeholder: String,
}

impl Default for CalculatorWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorWidget {
    /// Creates a widget with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&WidgetConfig::default())
    }

    /// Creates a widget from a configuration
    #[must_use]
    pub fn with_config(config: &WidgetConfig) -> Self {
        let history = config
            .history_limit
            .map_or_else(History::new, History::with_limit);
        Self {
            buffer: ExpressionBuffer::new(),
            result: ResultDisplay::default(),
            history,
            theme: config.initial_theme,
            evaluator: Evaluator::new(),
            placeholder: config.placeholder.clone(),
        }
    }

    // ===== Buffer editor =====

    /// Appends a token, collapsing consecutive operators
    pub fn append(&mut self, value: &str) {
        self.buffer.append(value);
        trace!(value, buffer = self.buffer.as_str(), "append");
    }

    /// Removes the last buffer character
    pub fn delete_last(&mut self) {
        self.buffer.delete_last();
        trace!(buffer = self.buffer.as_str(), "delete_last");
    }

    /// Empties the buffer and resets the result view to `0`
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.result = ResultDisplay::default();
        debug!("cleared expression");
    }

    // ===== Evaluator =====

    /// Evaluates the buffer.
    ///
    /// On success the result is shown, `(expression, result)` is recorded
    /// and the buffer is primed with the result for chaining. On failure
    /// the result view shows `Error` and the buffer is left for
    /// correction.
    pub fn evaluate(&mut self) -> Evaluation {
        if self.buffer.is_empty() {
            return Evaluation::Skipped;
        }

        let sanitized = self.buffer.sanitized();
        if sanitized.is_empty() {
            debug!(buffer = self.buffer.as_str(), "nothing evaluable in buffer");
            return Evaluation::Skipped;
        }

        match self.evaluator.evaluate_str(&sanitized) {
            Ok(value) => {
                debug!(expression = self.buffer.as_str(), value, "evaluated");
                self.result = ResultDisplay::Value(value);
                self.history.record(self.buffer.as_str(), value);
                self.buffer.set(format_number(value));
                Evaluation::Computed(value)
            }
            Err(err) => {
                warn!(expression = self.buffer.as_str(), error = %err, "evaluation failed");
                self.result = ResultDisplay::Error;
                Evaluation::Failed(err)
            }
        }
    }

    /// Evaluates the buffer and converts the outcome into a `Result`.
    ///
    /// `Skipped` maps to [`CalcError::EmptyExpression`].
    pub fn try_evaluate(&mut self) -> CalcResult<f64> {
        match self.evaluate() {
            Evaluation::Computed(v) => Ok(v),
            Evaluation::Failed(err) => Err(err),
            Evaluation::Skipped => Err(CalcError::EmptyExpression),
        }
    }

    // ===== History manager =====

    /// Loads an expression/result pair without re-evaluating or recording
    pub fn load_entry(&mut self, expression: &str, result: f64) {
        self.buffer.set(expression);
        self.result = ResultDisplay::Value(result);
        debug!(expression, result, "loaded history entry");
    }

    /// Loads the history entry at `index` (0 = newest).
    ///
    /// Returns false when there is no such entry.
    pub fn select_history(&mut self, index: usize) -> bool {
        let Some(HistoryEntry { expression, result }) = self.history.get(index).cloned() else {
            return false;
        };
        self.load_entry(&expression, result);
        true
    }

    /// Removes every history entry
    pub fn clear_history(&mut self) {
        self.history.clear();
        debug!("cleared history");
    }

    // ===== Theme =====

    /// Sets the theme flag
    pub fn set_theme(&mut self, is_light: bool) {
        self.theme = Theme::from_light(is_light);
        debug!(theme = ?self.theme, "theme changed");
    }

    // ===== Dispatch =====

    /// Runs the handler for an action
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Append(value) => self.append(&value),
            Action::Clear => self.clear(),
            Action::Delete => self.delete_last(),
            Action::Evaluate => {
                self.evaluate();
            }
            Action::ClearHistory => self.clear_history(),
            Action::SelectHistory(index) => {
                self.select_history(index);
            }
            Action::SetTheme(is_light) => self.set_theme(is_light),
        }
    }

    // ===== Render accessors =====

    /// The raw expression buffer
    #[must_use]
    pub fn expression(&self) -> &str {
        self.buffer.as_str()
    }

    /// Text for the expression region (`"0"` when empty)
    #[must_use]
    pub fn expression_display(&self) -> &str {
        self.buffer.display()
    }

    /// The result view
    #[must_use]
    pub fn result(&self) -> ResultDisplay {
        self.result
    }

    /// Text for the result region
    #[must_use]
    pub fn result_display(&self) -> String {
        self.result.to_string()
    }

    /// The history, newest first
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Placeholder text shown while the history is empty
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// The current theme
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget_with(expr: &str) -> CalculatorWidget {
        let mut widget = CalculatorWidget::new();
        widget.append(expr);
        widget
    }

    #[test]
    fn test_initial_state() {
        let widget = CalculatorWidget::new();
        assert_eq!(widget.expression(), "");
        assert_eq!(widget.expression_display(), "0");
        assert_eq!(widget.result_display(), "0");
        assert!(widget.history().is_empty());
        assert_eq!(widget.theme(), Theme::Dark);
        assert_eq!(widget.placeholder(), "No history yet");
    }

    #[test]
    fn test_with_config() {
        let config = WidgetConfig::new()
            .with_theme(Theme::Light)
            .with_history_limit(1)
            .with_placeholder("empty");
        let mut widget = CalculatorWidget::with_config(&config);
        assert!(widget.theme().is_light());
        assert_eq!(widget.placeholder(), "empty");

        widget.append("1+1");
        widget.evaluate();
        widget.append("+1");
        widget.evaluate();
        assert_eq!(widget.history().len(), 1);
    }

    #[test]
    fn test_clear_resets_buffer_and_result() {
        let mut widget = widget_with("2+3");
        widget.evaluate();
        widget.clear();
        assert_eq!(widget.expression(), "");
        assert_eq!(widget.result_display(), "0");
    }

    #[test]
    fn test_evaluate_records_and_chains() {
        let mut widget = widget_with("2+3");
        assert_eq!(widget.evaluate(), Evaluation::Computed(5.0));
        assert_eq!(widget.result_display(), "5");
        assert_eq!(widget.expression(), "5");
        assert_eq!(
            widget.history().latest(),
            Some(&HistoryEntry::new("2+3", 5.0))
        );

        widget.append("*4");
        assert_eq!(widget.evaluate(), Evaluation::Computed(20.0));
        assert_eq!(widget.history().len(), 2);
        assert_eq!(widget.history().latest().unwrap().expression, "5*4");
    }

    #[test]
    fn test_evaluate_empty_is_noop() {
        let mut widget = CalculatorWidget::new();
        assert_eq!(widget.evaluate(), Evaluation::Skipped);
        assert_eq!(widget.result_display(), "0");
        assert!(widget.history().is_empty());
    }

    #[test]
    fn test_evaluate_unevaluable_buffer_is_noop() {
        let mut widget = widget_with("abc");
        assert_eq!(widget.evaluate(), Evaluation::Skipped);
        assert_eq!(widget.expression(), "abc");
        assert!(widget.history().is_empty());
    }

    #[test]
    fn test_evaluate_records_unfiltered_expression() {
        let mut widget = widget_with("2 + 3");
        widget.evaluate();
        assert_eq!(widget.history().latest().unwrap().expression, "2 + 3");
    }

    #[test]
    fn test_division_by_zero_shows_error() {
        let mut widget = widget_with("5/0");
        assert_eq!(
            widget.evaluate(),
            Evaluation::Failed(CalcError::DivisionByZero)
        );
        assert_eq!(widget.result_display(), "Error");
        assert_eq!(widget.expression(), "5/0");
        assert!(widget.history().is_empty());
    }

    #[test]
    fn test_oversized_literal_is_overflow_error() {
        let nines = "9".repeat(400);
        let mut widget = widget_with(&nines);
        assert_eq!(widget.evaluate(), Evaluation::Failed(CalcError::Overflow));
        assert_eq!(widget.result_display(), "Error");
        assert_eq!(widget.expression(), nines);
        assert!(widget.history().is_empty());

        // the buffer is still there to correct
        widget.clear();
        widget.append("9*9");
        assert_eq!(widget.evaluate(), Evaluation::Computed(81.0));
    }

    #[test]
    fn test_doubled_sign_is_error() {
        let mut widget = widget_with("2- -3");
        assert!(matches!(
            widget.evaluate(),
            Evaluation::Failed(CalcError::ParseError(_))
        ));
        assert_eq!(widget.result_display(), "Error");
        assert_eq!(widget.expression(), "2- -3");
    }

    #[test]
    fn test_malformed_expression_preserves_buffer() {
        let mut widget = widget_with("(2+3");
        assert!(matches!(widget.evaluate(), Evaluation::Failed(_)));
        assert_eq!(widget.result(), ResultDisplay::Error);
        assert_eq!(widget.expression(), "(2+3");
    }

    #[test]
    fn test_try_evaluate() {
        let mut widget = CalculatorWidget::new();
        assert_eq!(widget.try_evaluate(), Err(CalcError::EmptyExpression));
        widget.append("6*7");
        assert_eq!(widget.try_evaluate(), Ok(42.0));
    }

    #[test]
    fn test_negative_result_chains() {
        let mut widget = widget_with("2-5");
        widget.evaluate();
        assert_eq!(widget.expression(), "-3");
        widget.append("*2");
        assert_eq!(widget.evaluate(), Evaluation::Computed(-6.0));
    }

    #[test]
    fn test_select_history_does_not_duplicate() {
        let mut widget = widget_with("2+3");
        widget.evaluate();
        widget.clear();
        widget.append("9-1");
        widget.evaluate();

        assert!(widget.select_history(1));
        assert_eq!(widget.expression(), "2+3");
        assert_eq!(widget.result_display(), "5");
        assert_eq!(widget.history().len(), 2);
    }

    #[test]
    fn test_select_history_out_of_range() {
        let mut widget = widget_with("7");
        assert!(!widget.select_history(0));
        assert_eq!(widget.expression(), "7");
    }

    #[test]
    fn test_load_entry_replaces_error() {
        let mut widget = widget_with("1/0");
        widget.evaluate();
        widget.load_entry("4*4", 16.0);
        assert_eq!(widget.result(), ResultDisplay::Value(16.0));
        assert_eq!(widget.expression(), "4*4");
    }

    #[test]
    fn test_clear_history_idempotent() {
        let mut widget = widget_with("1+1");
        widget.evaluate();
        widget.clear_history();
        widget.clear_history();
        assert!(widget.history().is_empty());
    }

    #[test]
    fn test_set_theme_does_not_touch_state() {
        let mut widget = widget_with("8");
        widget.set_theme(true);
        assert_eq!(widget.theme(), Theme::Light);
        assert_eq!(widget.expression(), "8");
        widget.set_theme(false);
        assert_eq!(widget.theme(), Theme::Dark);
    }

    #[test]
    fn test_dispatch_table() {
        let mut widget = CalculatorWidget::new();
        for action in [
            Action::Append("3".into()),
            Action::Append("+".into()),
            Action::Append("*".into()),
            Action::Append("4".into()),
        ] {
            widget.dispatch(action);
        }
        assert_eq!(widget.expression(), "3*4");

        widget.dispatch(Action::Evaluate);
        assert_eq!(widget.result_display(), "12");

        widget.dispatch(Action::Delete);
        assert_eq!(widget.expression(), "1");

        widget.dispatch(Action::SetTheme(true));
        assert!(widget.theme().is_light());

        widget.dispatch(Action::SelectHistory(0));
        assert_eq!(widget.expression(), "3*4");

        widget.dispatch(Action::ClearHistory);
        assert!(widget.history().is_empty());

        widget.dispatch(Action::Clear);
        assert_eq!(widget.expression_display(), "0");
    }

    #[test]
    fn test_result_display_formatting() {
        assert_eq!(ResultDisplay::Value(2.5).to_string(), "2.5");
        assert_eq!(ResultDisplay::Error.to_string(), "Error");
        assert_eq!(ResultDisplay::default().to_string(), "0");
    }
}
