//! Mock DOM for headless testing
//!
//! Models just enough of the document for the widget: elements by id,
//! text content, classes, attributes, child lists and an event log.

use std::collections::HashMap;

/// Root scope carrying the theme class
pub const ROOT_ID: &str = "calculator";
/// Expression region
pub const EXPRESSION_ID: &str = "expression";
/// Result region
pub const RESULT_ID: &str = "result";
/// History list
pub const HISTORY_LIST_ID: &str = "historyList";
/// Clear-history control
pub const CLEAR_HISTORY_ID: &str = "clearHistoryBtn";
/// Theme checkbox
pub const THEME_CHECKBOX_ID: &str = "themeCheckbox";
/// Keypad container
pub const KEYPAD_ID: &str = "keypad";

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Adds a child element
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Adds a class if not already present
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Removes a class
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Adds or removes a class
    pub fn toggle_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Sets an attribute value
    pub fn set_attr(&mut self, key: &str, value: &str) {
        self.attributes.insert(key.to_string(), value.to_string());
    }
}

/// DOM events the widget listens for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Global key-down
    KeyDown {
        /// `KeyboardEvent.key`
        key: String,
        /// Whether Ctrl was held
        ctrl: bool,
        /// Whether Meta was held
        meta: bool,
    },
    /// Checkbox change
    Change {
        /// The ID of the checkbox
        element_id: String,
        /// New checked state
        checked: bool,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a key-down event without modifiers
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::key_down_with_modifiers(key, false, false)
    }

    /// Creates a key-down event with modifiers
    #[must_use]
    pub fn key_down_with_modifiers(key: &str, ctrl: bool, meta: bool) -> Self {
        Self::KeyDown {
            key: key.to_string(),
            ctrl,
            meta,
        }
    }

    /// Creates a checkbox change event
    #[must_use]
    pub fn change(element_id: &str, checked: bool) -> Self {
        Self::Change {
            element_id: element_id.to_string(),
            checked,
        }
    }
}

/// Mock DOM for driving the widget without a browser
#[derive(Debug, Default)]
pub struct MockDom {
    elements: HashMap<String, DomElement>,
    event_history: Vec<DomEvent>,
    prevented: Vec<DomEvent>,
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the calculator document skeleton (without keypad buttons)
    #[must_use]
    pub fn calculator() -> Self {
        let mut dom = Self::new();

        let expression = DomElement::new("div")
            .with_id(EXPRESSION_ID)
            .with_class("expression")
            .with_text("0");
        let result = DomElement::new("div")
            .with_id(RESULT_ID)
            .with_class("result")
            .with_text("0");
        let history = DomElement::new("ul")
            .with_id(HISTORY_LIST_ID)
            .with_class("history-list");
        let clear_history = DomElement::new("button")
            .with_id(CLEAR_HISTORY_ID)
            .with_text("Clear");
        let theme = DomElement::new("input")
            .with_id(THEME_CHECKBOX_ID)
            .with_attr("type", "checkbox");
        let keypad = DomElement::new("div").with_id(KEYPAD_ID).with_class("keys");

        // Regions are registered flat; only list-like containers own children.
        let root = DomElement::new("div")
            .with_id(ROOT_ID)
            .with_class("calculator");

        for element in [root, expression, result, keypad, history, clear_history, theme] {
            dom.register_element(element);
        }
        dom
    }

    /// Registers an element for ID lookup
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Gets a mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Records an event in the log
    pub fn record_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
    }

    /// Marks an event as having had its default behavior suppressed
    pub fn prevent_default(&mut self, event: DomEvent) {
        self.prevented.push(event);
    }

    /// Gets the event log
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Events whose default behavior was suppressed
    #[must_use]
    pub fn prevented_events(&self) -> &[DomEvent] {
        &self.prevented
    }

    /// Clears the event log
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
        self.prevented.clear();
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Appends a child element to a parent
    pub fn append_child(&mut self, parent_id: &str, child: DomElement) {
        if let Some(parent) = self.elements.get_mut(parent_id) {
            parent.children.push(child.clone());
        }
        self.register_element(child);
    }

    /// Returns the children of an element
    #[must_use]
    pub fn children_of(&self, id: &str) -> &[DomElement] {
        self.elements
            .get(id)
            .map_or(&[][..], |elem| elem.children.as_slice())
    }

    /// Removes all children of an element, unregistering them
    pub fn clear_children(&mut self, id: &str) {
        let Some(elem) = self.elements.get_mut(id) else {
            return;
        };
        let removed = std::mem::take(&mut elem.children);
        for child in removed.iter().filter(|c| !c.id.is_empty()) {
            self.elements.remove(&child.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_element_builders() {
        let elem = DomElement::new("button")
            .with_id("btn-7")
            .with_text("7")
            .with_class("btn")
            .with_attr("data-value", "7");
        assert_eq!(elem.tag, "button");
        assert_eq!(elem.id, "btn-7");
        assert_eq!(elem.text_content, "7");
        assert!(elem.has_class("btn"));
        assert_eq!(elem.get_attr("data-value"), Some("7"));
        assert_eq!(elem.get_attr("data-action"), None);
    }

    #[test]
    fn test_dom_element_class_toggling() {
        let mut elem = DomElement::new("div");
        elem.add_class("light");
        elem.add_class("light");
        assert_eq!(elem.classes.len(), 1);
        elem.toggle_class("light", false);
        assert!(!elem.has_class("light"));
        elem.toggle_class("light", true);
        assert!(elem.has_class("light"));
        elem.remove_class("light");
        assert!(elem.classes.is_empty());
    }

    #[test]
    fn test_dom_event_constructors() {
        assert_eq!(
            DomEvent::click("x"),
            DomEvent::Click {
                element_id: "x".into()
            }
        );
        assert_eq!(
            DomEvent::key_down("Enter"),
            DomEvent::KeyDown {
                key: "Enter".into(),
                ctrl: false,
                meta: false
            }
        );
        assert!(matches!(
            DomEvent::change(THEME_CHECKBOX_ID, true),
            DomEvent::Change { checked: true, .. }
        ));
    }

    #[test]
    fn test_calculator_skeleton() {
        let dom = MockDom::calculator();
        for id in [
            ROOT_ID,
            EXPRESSION_ID,
            RESULT_ID,
            HISTORY_LIST_ID,
            CLEAR_HISTORY_ID,
            THEME_CHECKBOX_ID,
            KEYPAD_ID,
        ] {
            assert!(dom.get_element(id).is_some(), "missing #{id}");
        }
        assert_eq!(dom.get_element_text(EXPRESSION_ID), Some("0"));
        assert_eq!(dom.get_element_text(RESULT_ID), Some("0"));
    }

    #[test]
    fn test_root_holds_no_stale_copies() {
        let mut dom = MockDom::calculator();
        dom.set_element_text(EXPRESSION_ID, "12+3");
        dom.append_child(HISTORY_LIST_ID, DomElement::new("li").with_id("history-0"));

        assert!(dom.children_of(ROOT_ID).is_empty());
        assert_eq!(dom.get_element_text(EXPRESSION_ID), Some("12+3"));
        assert_eq!(dom.children_of(HISTORY_LIST_ID).len(), 1);
    }

    #[test]
    fn test_append_and_clear_children() {
        let mut dom = MockDom::calculator();
        dom.append_child(HISTORY_LIST_ID, DomElement::new("li").with_id("history-0"));
        dom.append_child(HISTORY_LIST_ID, DomElement::new("li").with_id("history-1"));
        assert_eq!(dom.children_of(HISTORY_LIST_ID).len(), 2);
        assert!(dom.get_element("history-1").is_some());

        dom.clear_children(HISTORY_LIST_ID);
        assert!(dom.children_of(HISTORY_LIST_ID).is_empty());
        assert!(dom.get_element("history-0").is_none());
    }

    #[test]
    fn test_children_of_missing_element() {
        let dom = MockDom::new();
        assert!(dom.children_of("nope").is_empty());
    }

    #[test]
    fn test_event_log() {
        let mut dom = MockDom::new();
        dom.record_event(DomEvent::key_down("Enter"));
        dom.prevent_default(DomEvent::key_down("Enter"));
        assert_eq!(dom.event_history().len(), 1);
        assert_eq!(dom.prevented_events().len(), 1);
        dom.clear_event_history();
        assert!(dom.event_history().is_empty());
        assert!(dom.prevented_events().is_empty());
    }
}
