//! Browser bindings
//!
//! Wires the page's elements to a shared [`CalculatorWidget`]. Every
//! handler routes through [`InputRouter`], dispatches, then re-renders,
//! so the page behaves exactly like [`super::WasmDriver`].

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Element, Event, HtmlElement, HtmlInputElement, KeyboardEvent};

use super::dom::{
    CLEAR_HISTORY_ID, EXPRESSION_ID, HISTORY_LIST_ID, RESULT_ID, ROOT_ID, THEME_CHECKBOX_ID,
};
use crate::config::WidgetConfig;
use crate::input::{Action, InputRouter};
use crate::theme::Theme;
use crate::widget::CalculatorWidget;

/// Attribute on the root element holding an optional JSON [`WidgetConfig`]
const CONFIG_ATTR: &str = "data-config";

struct App {
    document: Document,
    widget: RefCell<CalculatorWidget>,
    router: InputRouter,
}

impl App {
    fn dispatch_all(&self, actions: Vec<Action>) -> Result<(), JsValue> {
        if actions.is_empty() {
            return Ok(());
        }
        {
            let mut widget = self.widget.borrow_mut();
            for action in actions {
                widget.dispatch(action);
            }
        }
        self.render()
    }

    fn element(&self, id: &str) -> Result<Element, JsValue> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("missing #{id}")))
    }

    fn render(&self) -> Result<(), JsValue> {
        let widget = self.widget.borrow();

        self.element(EXPRESSION_ID)?
            .set_text_content(Some(widget.expression_display()));
        self.element(RESULT_ID)?
            .set_text_content(Some(&widget.result_display()));

        let is_light = widget.theme().is_light();
        self.element(ROOT_ID)?
            .class_list()
            .toggle_with_force(Theme::LIGHT_CLASS, is_light)?;
        if let Ok(checkbox) = self.element(THEME_CHECKBOX_ID)?.dyn_into::<HtmlInputElement>() {
            checkbox.set_checked(is_light);
        }

        let list = self.element(HISTORY_LIST_ID)?;
        list.set_inner_html("");
        if widget.history().is_empty() {
            let li = self.document.create_element("li")?;
            li.set_class_name("empty");
            li.set_text_content(Some(widget.placeholder()));
            list.append_child(&li)?;
            return Ok(());
        }

        for (index, entry) in widget.history().iter().enumerate() {
            let li = self.document.create_element("li")?;
            li.set_attribute("data-index", &index.to_string())?;

            let expr = self.document.create_element("span")?;
            expr.set_class_name("expr");
            expr.set_text_content(Some(&entry.expression));
            let res = self.document.create_element("span")?;
            res.set_class_name("res");
            res.set_text_content(Some(&entry.result_label()));

            li.append_child(&expr)?;
            li.append_child(&res)?;
            list.append_child(&li)?;
        }
        Ok(())
    }
}

fn report(result: Result<(), JsValue>) {
    if let Err(err) = result {
        console::error_1(&err);
    }
}

fn load_config(root: &Element) -> WidgetConfig {
    let Some(json) = root.get_attribute(CONFIG_ATTR) else {
        return WidgetConfig::default();
    };
    WidgetConfig::from_json(&json).unwrap_or_else(|err| {
        console::warn_1(&format!("ignoring invalid {CONFIG_ATTR}: {err}").into());
        WidgetConfig::default()
    })
}

/// Mounts the widget on the current page
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let root = document
        .get_element_by_id(ROOT_ID)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{ROOT_ID}")))?;

    let config = load_config(&root);
    let app = Rc::new(App {
        document: document.clone(),
        widget: RefCell::new(CalculatorWidget::with_config(&config)),
        router: InputRouter::new(),
    });

    bind_controls(&app)?;
    bind_keyboard(&app, &window)?;
    bind_history(&app)?;
    bind_theme(&app)?;

    app.render()?;
    console::log_1(&"calculator widget mounted".into());
    Ok(())
}

fn bind_controls(app: &Rc<App>) -> Result<(), JsValue> {
    let buttons = app.document.query_selector_all(".btn")?;
    for i in 0..buttons.length() {
        let Some(button) = buttons
            .item(i)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };

        let handler_app = Rc::clone(app);
        let handler_button = button.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            let data = handler_button.dataset();
            let action = handler_app
                .router
                .route_control(data.get("action").as_deref(), data.get("value").as_deref());
            report(handler_app.dispatch_all(action.into_iter().collect()));
        });
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn bind_keyboard(app: &Rc<App>, window: &web_sys::Window) -> Result<(), JsValue> {
    let handler_app = Rc::clone(app);
    let closure = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        let Some(routed) =
            handler_app
                .router
                .route_key(&event.key(), event.ctrl_key(), event.meta_key())
        else {
            return;
        };
        if routed.prevent_default {
            event.prevent_default();
        }
        report(handler_app.dispatch_all(vec![routed.action]));
    });
    window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn bind_history(app: &Rc<App>) -> Result<(), JsValue> {
    let handler_app = Rc::clone(app);
    let clear = Closure::<dyn FnMut()>::new(move || {
        report(handler_app.dispatch_all(vec![Action::ClearHistory]));
    });
    app.element(CLEAR_HISTORY_ID)?
        .add_event_listener_with_callback("click", clear.as_ref().unchecked_ref())?;
    clear.forget();

    // Items are rebuilt on every render, so clicks are delegated to the list.
    let handler_app = Rc::clone(app);
    let select = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let index = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|target| target.closest("li[data-index]").ok().flatten())
            .and_then(|li| li.get_attribute("data-index"))
            .and_then(|raw| raw.parse::<usize>().ok());
        if let Some(index) = index {
            report(handler_app.dispatch_all(vec![Action::SelectHistory(index)]));
        }
    });
    app.element(HISTORY_LIST_ID)?
        .add_event_listener_with_callback("click", select.as_ref().unchecked_ref())?;
    select.forget();
    Ok(())
}

fn bind_theme(app: &Rc<App>) -> Result<(), JsValue> {
    let checkbox = app
        .element(THEME_CHECKBOX_ID)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| JsValue::from_str(&format!("#{THEME_CHECKBOX_ID} is not an input")))?;

    let handler_app = Rc::clone(app);
    let handler_checkbox = checkbox.clone();
    let closure = Closure::<dyn FnMut()>::new(move || {
        let checked = handler_checkbox.checked();
        report(handler_app.dispatch_all(vec![Action::SetTheme(checked)]));
    });
    checkbox.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
