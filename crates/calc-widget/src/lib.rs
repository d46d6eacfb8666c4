//! Calculator Widget
//!
//! An interactive arithmetic calculator for the browser: a keypad and
//! keyboard feed an expression buffer, `=` evaluates it with the usual
//! precedence, successful calculations land in a newest-first history,
//! and a checkbox flips between dark and light themes.
//!
//! The widget state lives in [`widget::CalculatorWidget`] and has no
//! DOM dependency. [`wasm::WasmDriver`] renders it into a mock document
//! for headless runs; the `wasm` feature adds the real page bindings.
//!
//! # Example
//!
//! ```rust
//! use calc_widget::prelude::*;
//!
//! let mut widget = CalculatorWidget::new();
//! widget.append("2+3*4");
//! assert_eq!(widget.evaluate(), Evaluation::Computed(14.0));
//! assert_eq!(widget.expression(), "14");
//! assert_eq!(widget.history().latest().unwrap().display(), "2+3*4 = 14");
//!
//! // Division by zero shows the error marker and keeps the input
//! widget.clear();
//! widget.append("5/0");
//! assert_eq!(widget.evaluate(), Evaluation::Failed(CalcError::DivisionByZero));
//! assert_eq!(widget.result_display(), "Error");
//! assert_eq!(widget.expression(), "5/0");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod input;
pub mod theme;
pub mod widget;

/// Document front-ends
/// (the mock DOM runs everywhere; browser bindings need the `wasm` feature)
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::WidgetConfig;
    pub use crate::core::buffer::ExpressionBuffer;
    pub use crate::core::evaluator::Evaluator;
    pub use crate::core::history::{History, HistoryEntry};
    pub use crate::core::parser::{Expr, Lexer, Parser, Token};
    pub use crate::core::{format_number, CalcError, CalcResult, Operation};
    pub use crate::driver::{CalculatorDriver, HistoryItem};
    pub use crate::input::{Action, InputRouter, Routed};
    pub use crate::theme::Theme;
    pub use crate::wasm::{DomElement, DomEvent, Keypad, MockDom, WasmDriver};
    pub use crate::widget::{CalculatorWidget, Evaluation, ResultDisplay};
}
