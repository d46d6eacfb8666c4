//! Keypad layout for the calculator document
//!
//! Each button carries the same `data-action` / `data-value` descriptors
//! the browser markup uses, so the mock DOM and the real page route
//! clicks through identical code.

use super::dom::{DomElement, MockDom, KEYPAD_ID};
use crate::input::{CONTROL_CLEAR, CONTROL_DELETE, CONTROL_EQUALS};

/// What a keypad button does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadControl {
    /// Appends its character (digits, operators, `.`, parentheses)
    Value(char),
    /// Clears the expression
    Clear,
    /// Deletes the last character
    Delete,
    /// Evaluates the expression
    Equals,
}

impl KeypadControl {
    /// The `data-action` descriptor, if any
    #[must_use]
    pub const fn data_action(&self) -> Option<&'static str> {
        match self {
            Self::Value(_) => None,
            Self::Clear => Some(CONTROL_CLEAR),
            Self::Delete => Some(CONTROL_DELETE),
            Self::Equals => Some(CONTROL_EQUALS),
        }
    }

    /// The `data-value` descriptor, if any
    #[must_use]
    pub fn data_value(&self) -> Option<String> {
        match self {
            Self::Value(ch) => Some(ch.to_string()),
            _ => None,
        }
    }

    /// Button caption
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Value(ch) => ch.to_string(),
            Self::Clear => "C".to_string(),
            Self::Delete => "DEL".to_string(),
            Self::Equals => "=".to_string(),
        }
    }
}

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The control this button represents
    pub control: KeypadControl,
    /// The DOM element ID for this button
    pub id: String,
}

impl KeypadButtonDef {
    /// Creates a new button definition
    #[must_use]
    pub fn new(control: KeypadControl) -> Self {
        let id = match control {
            KeypadControl::Value(ch) => format!("btn-{}", value_name(ch)),
            KeypadControl::Clear => "btn-clear".to_string(),
            KeypadControl::Delete => "btn-del".to_string(),
            KeypadControl::Equals => "btn-equals".to_string(),
        };
        Self { control, id }
    }

    /// Renders the button element
    #[must_use]
    pub fn to_element(&self) -> DomElement {
        let mut elem = DomElement::new("button")
            .with_id(&self.id)
            .with_text(&self.control.label())
            .with_class("btn");
        if let Some(action) = self.control.data_action() {
            elem.set_attr("data-action", action);
        }
        if let Some(value) = self.control.data_value() {
            elem.set_attr("data-value", &value);
        }
        elem
    }
}

/// Element-id fragment for a value character
fn value_name(ch: char) -> String {
    match ch {
        '+' => "plus".to_string(),
        '-' => "minus".to_string(),
        '*' => "times".to_string(),
        '/' => "divide".to_string(),
        '%' => "mod".to_string(),
        '.' => "decimal".to_string(),
        '(' => "open-paren".to_string(),
        ')' => "close-paren".to_string(),
        other => other.to_string(),
    }
}

/// Keypad layout definition
/// Layout:
/// ```text
/// [ C ] [DEL] [ ( ] [ ) ]
/// [ 7 ] [ 8 ] [ 9 ] [ / ]
/// [ 4 ] [ 5 ] [ 6 ] [ * ]
/// [ 1 ] [ 2 ] [ 3 ] [ - ]
/// [ 0 ] [ . ] [ % ] [ + ]
/// [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButtonDef>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        use KeypadControl::{Clear, Delete, Equals, Value};

        let rows: [&[KeypadControl]; 6] = [
            &[Clear, Delete, Value('('), Value(')')],
            &[Value('7'), Value('8'), Value('9'), Value('/')],
            &[Value('4'), Value('5'), Value('6'), Value('*')],
            &[Value('1'), Value('2'), Value('3'), Value('-')],
            &[Value('0'), Value('.'), Value('%'), Value('+')],
            &[Equals],
        ];

        let buttons = rows
            .iter()
            .flat_map(|row| row.iter().copied().map(KeypadButtonDef::new))
            .collect();

        Self { buttons }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Finds the button that appends `ch`
    #[must_use]
    pub fn find_button_by_value(&self, ch: char) -> Option<&KeypadButtonDef> {
        self.buttons
            .iter()
            .find(|b| b.control == KeypadControl::Value(ch))
    }

    /// Finds the button for a non-value control
    #[must_use]
    pub fn find_button(&self, control: KeypadControl) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.control == control)
    }

    /// Mounts every button under the keypad container
    pub fn mount(&self, dom: &mut MockDom) {
        for btn in &self.buttons {
            dom.append_child(KEYPAD_ID, btn.to_element());
        }
    }
}
