//! End-to-end flows through the mock document

#![allow(clippy::unwrap_used)]

use calc_widget::config::WidgetConfig;
use calc_widget::core::history::History;
use calc_widget::driver::{run_full_suite, CalculatorDriver};
use calc_widget::theme::Theme;
use calc_widget::wasm::{DomEvent, WasmDriver, CLEAR_HISTORY_ID, THEME_CHECKBOX_ID};
use calc_widget::widget::CalculatorWidget;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn full_suite_on_both_front_ends() {
    init_tracing();
    run_full_suite(&mut CalculatorWidget::new()).unwrap();
    run_full_suite(&mut WasmDriver::new()).unwrap();
}

#[test]
fn session_walkthrough() {
    init_tracing();
    let mut driver = WasmDriver::new();

    // 3 + 4 * 2 via the keypad
    for id in ["btn-3", "btn-plus", "btn-4", "btn-times", "btn-2", "btn-equals"] {
        driver.click(id);
    }
    assert_eq!(driver.result_text(), Some("11"));
    assert_eq!(driver.expression_text(), Some("11"));

    // Chain from the result via the keyboard
    driver.type_keys("-1");
    driver.press_key("Enter");
    assert_eq!(driver.result_text(), Some("10"));

    // A failure keeps the buffer and records nothing
    driver.type_keys("/0");
    driver.press_key("=");
    assert_eq!(driver.result_text(), Some("Error"));
    assert_eq!(driver.expression_text(), Some("10/0"));
    driver.press_key("Backspace");
    driver.type_keys("4");
    driver.press_key("Enter");
    assert_eq!(driver.result_text(), Some("2.5"));

    assert_eq!(
        driver.history_list_items(),
        vec!["10/4 = 2.5", "11-1 = 10", "3+4*2 = 11"]
    );

    // Recall the oldest entry without re-evaluating
    driver.click("history-2");
    assert_eq!(driver.expression_text(), Some("3+4*2"));
    assert_eq!(driver.result_text(), Some("11"));
    assert_eq!(driver.history_list_items().len(), 3);

    driver.click(CLEAR_HISTORY_ID);
    assert_eq!(driver.history_list_items(), vec!["No history yet"]);
}

#[test]
fn parentheses_only_from_keypad() {
    let mut driver = WasmDriver::new();
    driver.press_key("(");
    assert_eq!(driver.expression_text(), Some("0"));

    driver.click("btn-open-paren");
    driver.type_keys("2+3");
    driver.click("btn-close-paren");
    driver.type_keys("*4");
    driver.press_key("Enter");
    assert_eq!(driver.result_text(), Some("20"));
}

#[test]
fn theme_does_not_touch_calculation_state() {
    let mut driver = WasmDriver::new();
    driver.enter_expression("6*7").unwrap();
    driver.type_keys("+1");

    driver.dispatch_event(DomEvent::change(THEME_CHECKBOX_ID, true));
    assert!(driver.is_light_theme());
    assert_eq!(driver.widget().theme(), Theme::Light);
    assert_eq!(driver.expression_text(), Some("42+1"));
    assert_eq!(driver.result_text(), Some("42"));
    assert_eq!(driver.history_list_items(), vec!["6*7 = 42"]);

    driver.dispatch_event(DomEvent::change(THEME_CHECKBOX_ID, false));
    assert!(!driver.is_light_theme());
}

#[test]
fn config_from_json_drives_the_document() {
    let config = WidgetConfig::from_json(
        r#"{"placeholder":"Nothing yet","initial_theme":"light","history_limit":2}"#,
    )
    .unwrap();
    let mut driver = WasmDriver::with_config(&config);
    assert!(driver.is_light_theme());
    assert_eq!(driver.history_list_items(), vec!["Nothing yet"]);

    for expr in ["1+1", "2+2", "3+3"] {
        driver.enter_expression(expr).unwrap();
    }
    assert_eq!(driver.history_list_items(), vec!["3+3 = 6", "2+2 = 4"]);
}

#[test]
fn history_survives_json() {
    let mut widget = CalculatorWidget::new();
    widget.enter_expression("7/2").unwrap();
    widget.enter_expression("5%3").unwrap();

    let json = widget.history().to_json().unwrap();
    let restored = History::from_json(&json).unwrap();
    assert_eq!(restored.len(), 2);
    assert_eq!(restored.latest().unwrap().display(), "5%3 = 2");
    assert_eq!(restored.get(1).unwrap().display(), "7/2 = 3.5");
}
