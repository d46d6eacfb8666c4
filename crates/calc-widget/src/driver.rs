//! Unified calculator driver
//!
//! Write the behavioral checks once and run them against any front-end:
//! the bare [`CalculatorWidget`] or the mock-DOM [`crate::wasm::WasmDriver`].
//!
//! ```rust
//! use calc_widget::driver::{run_full_suite, CalculatorDriver};
//! use calc_widget::widget::CalculatorWidget;
//!
//! let mut widget = CalculatorWidget::new();
//! run_full_suite(&mut widget).unwrap();
//! ```

use crate::core::{format_number, CalcError, CalcResult};
use crate::widget::CalculatorWidget;

/// A simplified history item for driver results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem {
    /// The expression that was evaluated
    pub expression: String,
    /// The result as displayed
    pub result: String,
}

/// Abstract driver trait for calculator interactions
pub trait CalculatorDriver {
    /// Appends characters to the current expression
    fn append_input(&mut self, input: &str) -> CalcResult<()>;

    /// Evaluates the current expression
    fn evaluate(&mut self) -> CalcResult<()>;

    /// Gets the result region text
    fn get_result(&self) -> String;

    /// Gets the raw expression buffer
    fn get_input(&self) -> String;

    /// Clears the expression and result
    fn clear(&mut self);

    /// Gets history entries (newest first)
    fn get_history(&self) -> Vec<HistoryItem>;

    /// Loads a history entry by position
    fn select_history(&mut self, index: usize);

    /// Clears the history
    fn clear_history(&mut self);

    /// Clears, types `expr` and evaluates it
    fn enter_expression(&mut self, expr: &str) -> CalcResult<()> {
        self.clear();
        self.append_input(expr)?;
        self.evaluate()
    }
}

impl CalculatorDriver for CalculatorWidget {
    fn append_input(&mut self, input: &str) -> CalcResult<()> {
        for ch in input.chars() {
            self.append(ch.encode_utf8(&mut [0u8; 4]));
        }
        Ok(())
    }

    fn evaluate(&mut self) -> CalcResult<()> {
        self.try_evaluate().map(|_| ())
    }

    fn get_result(&self) -> String {
        self.result_display()
    }

    fn get_input(&self) -> String {
        self.expression().to_string()
    }

    fn clear(&mut self) {
        CalculatorWidget::clear(self);
    }

    fn get_history(&self) -> Vec<HistoryItem> {
        self.history()
            .iter()
            .map(|entry| HistoryItem {
                expression: entry.expression.clone(),
                result: format_number(entry.result),
            })
            .collect()
    }

    fn select_history(&mut self, index: usize) {
        CalculatorWidget::select_history(self, index);
    }

    fn clear_history(&mut self) {
        CalculatorWidget::clear_history(self);
    }
}

// ===== Shared behavioral checks =====
// These work with ANY CalculatorDriver implementation

/// Verifies basic arithmetic operations
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    for (expr, expected) in [
        ("2+3", "5"),
        ("10-4", "6"),
        ("6*7", "42"),
        ("20/4", "5"),
        ("17%5", "2"),
        ("7/2", "3.5"),
    ] {
        driver.enter_expression(expr)?;
        assert_eq!(driver.get_result(), expected, "{expr}");
    }
    Ok(())
}

/// Verifies operator precedence and parentheses
pub fn verify_precedence<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    for (expr, expected) in [
        ("2+3*4", "14"),
        ("(2+3)*4", "20"),
        ("10-4-3", "3"),
        ("1+7%4", "4"),
        ("((2+3)*(4+5))", "45"),
    ] {
        driver.enter_expression(expr)?;
        assert_eq!(driver.get_result(), expected, "{expr}");
    }
    Ok(())
}

/// Verifies operator collapsing while typing
pub fn verify_operator_collapse<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    driver.append_input("3+*")?;
    assert_eq!(driver.get_input(), "3*");
    driver.append_input("4")?;
    driver.evaluate()?;
    assert_eq!(driver.get_result(), "12");
    Ok(())
}

/// Verifies chaining from the previous result
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.enter_expression("2+3")?;
    assert_eq!(driver.get_input(), "5");
    driver.append_input("*4")?;
    driver.evaluate()?;
    assert_eq!(driver.get_result(), "20");
    assert_eq!(driver.get_input(), "20");
    Ok(())
}

/// Verifies that failures show `Error` and keep the buffer
pub fn verify_error_handling<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear_history();

    let result = driver.enter_expression("5/0");
    assert_eq!(result, Err(CalcError::DivisionByZero));
    assert_eq!(driver.get_result(), "Error");
    assert_eq!(driver.get_input(), "5/0");

    let result = driver.enter_expression("(1+2");
    assert!(matches!(result, Err(CalcError::ParseError(_))));
    assert_eq!(driver.get_result(), "Error");
    assert_eq!(driver.get_input(), "(1+2");

    driver.clear();
    assert_eq!(driver.evaluate(), Err(CalcError::EmptyExpression));
    assert_eq!(driver.get_result(), "0");

    assert!(driver.get_history().is_empty());
    Ok(())
}

/// Verifies history ordering, selection and clearing
pub fn verify_history<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear_history();

    driver.enter_expression("1+1")?;
    driver.enter_expression("2+2")?;
    driver.enter_expression("3+3")?;

    let history = driver.get_history();
    assert_eq!(history.len(), 3);
    assert_eq!(
        history[0],
        HistoryItem {
            expression: "3+3".into(),
            result: "6".into()
        }
    );
    assert_eq!(history[2].expression, "1+1");

    driver.clear();
    driver.select_history(1);
    assert_eq!(driver.get_input(), "2+2");
    assert_eq!(driver.get_result(), "4");
    assert_eq!(driver.get_history().len(), 3);

    driver.clear_history();
    driver.clear_history();
    assert!(driver.get_history().is_empty());
    Ok(())
}

/// Complete verification suite - runs every check
pub fn run_full_suite<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    verify_basic_arithmetic(driver)?;
    verify_precedence(driver)?;
    verify_operator_collapse(driver)?;
    verify_chaining(driver)?;
    verify_error_handling(driver)?;
    verify_history(driver)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_basic_arithmetic() {
        verify_basic_arithmetic(&mut CalculatorWidget::new()).unwrap();
    }

    #[test]
    fn test_widget_precedence() {
        verify_precedence(&mut CalculatorWidget::new()).unwrap();
    }

    #[test]
    fn test_widget_operator_collapse() {
        verify_operator_collapse(&mut CalculatorWidget::new()).unwrap();
    }

    #[test]
    fn test_widget_chaining() {
        verify_chaining(&mut CalculatorWidget::new()).unwrap();
    }

    #[test]
    fn test_widget_error_handling() {
        verify_error_handling(&mut CalculatorWidget::new()).unwrap();
    }

    #[test]
    fn test_widget_history() {
        verify_history(&mut CalculatorWidget::new()).unwrap();
    }

    #[test]
    fn test_widget_full_suite() {
        run_full_suite(&mut CalculatorWidget::new()).unwrap();
    }

    #[test]
    fn test_enter_expression_starts_fresh() {
        let mut widget = CalculatorWidget::new();
        widget.enter_expression("2+3").unwrap();
        widget.enter_expression("4").unwrap();
        assert_eq!(widget.get_result(), "4");
        assert_eq!(widget.get_history()[0].expression, "4");
    }

    #[test]
    fn test_history_item_equality() {
        let a = HistoryItem {
            expression: "1+1".into(),
            result: "2".into(),
        };
        assert_eq!(a.clone(), a);
    }
}
