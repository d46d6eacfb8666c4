//! Document front-ends
//!
//! The mock DOM and [`WasmDriver`] run the widget headlessly against the
//! same element ids and control descriptors the browser page uses. The
//! real bindings live behind the `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::start;
pub use dom::{
    DomElement, DomEvent, MockDom, CLEAR_HISTORY_ID, EXPRESSION_ID, HISTORY_LIST_ID, KEYPAD_ID,
    RESULT_ID, ROOT_ID, THEME_CHECKBOX_ID,
};
pub use driver::{WasmDriver, HISTORY_EMPTY_ID, HISTORY_ITEM_PREFIX};
pub use keypad::{Keypad, KeypadButtonDef, KeypadControl};
