//! Mock-DOM front-end
//!
//! Routes [`DomEvent`]s into the widget exactly like the browser
//! bindings do, then re-renders the document from widget state.

use tracing::trace;

use super::dom::{
    DomElement, DomEvent, MockDom, CLEAR_HISTORY_ID, EXPRESSION_ID, HISTORY_LIST_ID, RESULT_ID,
    ROOT_ID, THEME_CHECKBOX_ID,
};
use super::keypad::{Keypad, KeypadControl};
use crate::config::WidgetConfig;
use crate::core::{format_number, CalcError, CalcResult};
use crate::driver::{CalculatorDriver, HistoryItem};
use crate::input::{Action, InputRouter};
use crate::theme::Theme;
use crate::widget::{CalculatorWidget, Evaluation};

/// Prefix of rendered history item ids; the suffix is the position
pub const HISTORY_ITEM_PREFIX: &str = "history-";
/// Id of the placeholder item shown while the history is empty
pub const HISTORY_EMPTY_ID: &str = "history-empty";

/// WASM driver wrapping the widget and a mock DOM
#[derive(Debug)]
pub struct WasmDriver {
    widget: CalculatorWidget,
    dom: MockDom,
    keypad: Keypad,
    router: InputRouter,
    last_evaluation: Option<Evaluation>,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a driver with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&WidgetConfig::default())
    }

    /// Creates a driver from a configuration
    #[must_use]
    pub fn with_config(config: &WidgetConfig) -> Self {
        let keypad = Keypad::new();
        let mut dom = MockDom::calculator();
        keypad.mount(&mut dom);

        let mut driver = Self {
            widget: CalculatorWidget::with_config(config),
            dom,
            keypad,
            router: InputRouter::new(),
            last_evaluation: None,
        };
        driver.render();
        driver
    }

    /// Returns a reference to the widget
    #[must_use]
    pub fn widget(&self) -> &CalculatorWidget {
        &self.widget
    }

    /// Returns a reference to the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Returns a reference to the keypad layout
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Outcome of the most recent evaluate action
    #[must_use]
    pub fn last_evaluation(&self) -> Option<&Evaluation> {
        self.last_evaluation.as_ref()
    }

    /// Dispatches a DOM event and re-renders.
    ///
    /// Returns true if the event mapped onto at least one action.
    pub fn dispatch_event(&mut self, event: DomEvent) -> bool {
        self.dom.record_event(event.clone());

        let (actions, prevent_default) = self.route(&event);
        if prevent_default {
            self.dom.prevent_default(event);
        }

        let handled = !actions.is_empty();
        for action in actions {
            self.apply(action);
        }
        if handled {
            self.render();
        }
        handled
    }

    fn route(&self, event: &DomEvent) -> (Vec<Action>, bool) {
        match event {
            DomEvent::KeyDown { key, ctrl, meta } => self
                .router
                .route_key(key, *ctrl, *meta)
                .map_or((Vec::new(), false), |routed| {
                    (vec![routed.action], routed.prevent_default)
                }),
            DomEvent::Change {
                element_id,
                checked,
            } if element_id == THEME_CHECKBOX_ID => (vec![Action::SetTheme(*checked)], false),
            DomEvent::Change { .. } => (Vec::new(), false),
            DomEvent::Click { element_id } => (self.route_click(element_id), false),
        }
    }

    fn route_click(&self, element_id: &str) -> Vec<Action> {
        if element_id == CLEAR_HISTORY_ID {
            return vec![Action::ClearHistory];
        }

        if let Some(index) = element_id
            .strip_prefix(HISTORY_ITEM_PREFIX)
            .and_then(|rest| rest.parse::<usize>().ok())
        {
            return vec![Action::SelectHistory(index)];
        }

        match self.dom.get_element(element_id) {
            Some(elem) if elem.has_class("btn") => self
                .router
                .route_control(elem.get_attr("data-action"), elem.get_attr("data-value"))
                .into_iter()
                .collect(),
            _ => Vec::new(),
        }
    }

    fn apply(&mut self, action: Action) {
        trace!(?action, "dispatch");
        match action {
            Action::Evaluate => self.last_evaluation = Some(self.widget.evaluate()),
            other => self.widget.dispatch(other),
        }
    }

    /// Synchronizes the document with widget state
    fn render(&mut self) {
        self.dom
            .set_element_text(EXPRESSION_ID, self.widget.expression_display());
        self.dom
            .set_element_text(RESULT_ID, &self.widget.result_display());

        let is_light = self.widget.theme().is_light();
        if let Some(root) = self.dom.get_element_mut(ROOT_ID) {
            root.toggle_class(Theme::LIGHT_CLASS, is_light);
        }
        if let Some(checkbox) = self.dom.get_element_mut(THEME_CHECKBOX_ID) {
            if is_light {
                checkbox.set_attr("checked", "");
            } else {
                checkbox.attributes.remove("checked");
            }
        }

        self.dom.clear_children(HISTORY_LIST_ID);
        if self.widget.history().is_empty() {
            let placeholder = DomElement::new("li")
                .with_id(HISTORY_EMPTY_ID)
                .with_class("empty")
                .with_text(self.widget.placeholder());
            self.dom.append_child(HISTORY_LIST_ID, placeholder);
            return;
        }

        let items: Vec<DomElement> = self
            .widget
            .history()
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                DomElement::new("li")
                    .with_id(&format!("{HISTORY_ITEM_PREFIX}{i}"))
                    .with_attr("data-index", &i.to_string())
                    .with_text(&entry.display())
                    .with_child(
                        DomElement::new("span")
                            .with_class("expr")
                            .with_text(&entry.expression),
                    )
                    .with_child(
                        DomElement::new("span")
                            .with_class("res")
                            .with_text(&entry.result_label()),
                    )
            })
            .collect();
        for item in items {
            self.dom.append_child(HISTORY_LIST_ID, item);
        }
    }

    // ===== User gestures =====

    /// Clicks an element by id
    pub fn click(&mut self, element_id: &str) -> bool {
        self.dispatch_event(DomEvent::click(element_id))
    }

    /// Clicks the keypad button that appends `ch`
    pub fn click_value(&mut self, ch: char) -> CalcResult<()> {
        let id = self
            .keypad
            .find_button_by_value(ch)
            .map(|b| b.id.clone())
            .ok_or_else(|| CalcError::ParseError(format!("No keypad button for '{ch}'")))?;
        self.click(&id);
        Ok(())
    }

    /// Clicks a non-value keypad control
    pub fn click_control(&mut self, control: KeypadControl) -> bool {
        match self.keypad.find_button(control).map(|b| b.id.clone()) {
            Some(id) => self.click(&id),
            None => false,
        }
    }

    /// Presses a key on the page
    pub fn press_key(&mut self, key: &str) -> bool {
        self.dispatch_event(DomEvent::key_down(key))
    }

    /// Types each character of `text` as a key press
    pub fn type_keys(&mut self, text: &str) {
        for ch in text.chars() {
            self.press_key(&ch.to_string());
        }
    }

    /// Flips the theme checkbox
    pub fn set_theme_checkbox(&mut self, checked: bool) -> bool {
        self.dispatch_event(DomEvent::change(THEME_CHECKBOX_ID, checked))
    }

    // ===== Document queries =====

    /// Text of the expression region
    #[must_use]
    pub fn expression_text(&self) -> Option<&str> {
        self.dom.get_element_text(EXPRESSION_ID)
    }

    /// Text of the result region
    #[must_use]
    pub fn result_text(&self) -> Option<&str> {
        self.dom.get_element_text(RESULT_ID)
    }

    /// Texts of the rendered history list items, top to bottom
    #[must_use]
    pub fn history_list_items(&self) -> Vec<String> {
        self.dom
            .children_of(HISTORY_LIST_ID)
            .iter()
            .map(|li| li.text_content.clone())
            .collect()
    }

    /// Whether the placeholder item is showing
    #[must_use]
    pub fn shows_history_placeholder(&self) -> bool {
        self.dom.get_element(HISTORY_EMPTY_ID).is_some()
    }

    /// Whether the root scope carries the light theme class
    #[must_use]
    pub fn is_light_theme(&self) -> bool {
        self.dom
            .get_element(ROOT_ID)
            .is_some_and(|root| root.has_class(Theme::LIGHT_CLASS))
    }
}

impl CalculatorDriver for WasmDriver {
    fn append_input(&mut self, input: &str) -> CalcResult<()> {
        for ch in input.chars() {
            self.click_value(ch)?;
        }
        Ok(())
    }

    fn evaluate(&mut self) -> CalcResult<()> {
        self.last_evaluation = None;
        self.click_control(KeypadControl::Equals);
        match self.last_evaluation.clone() {
            Some(Evaluation::Computed(_)) => Ok(()),
            Some(Evaluation::Failed(err)) => Err(err),
            Some(Evaluation::Skipped) | None => Err(CalcError::EmptyExpression),
        }
    }

    fn get_result(&self) -> String {
        self.result_text().unwrap_or_default().to_string()
    }

    fn get_input(&self) -> String {
        self.widget.expression().to_string()
    }

    fn clear(&mut self) {
        self.click_control(KeypadControl::Clear);
    }

    fn get_history(&self) -> Vec<HistoryItem> {
        self.widget
            .history()
            .iter()
            .map(|entry| HistoryItem {
                expression: entry.expression.clone(),
                result: format_number(entry.result),
            })
            .collect()
    }

    fn select_history(&mut self, index: usize) {
        self.click(&format!("{HISTORY_ITEM_PREFIX}{index}"));
    }

    fn clear_history(&mut self) {
        self.click(CLEAR_HISTORY_ID);
    }
}
