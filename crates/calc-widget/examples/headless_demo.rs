//! Headless Calculator Demo
//!
//! Drives the widget through the mock document: keypad clicks, keyboard
//! input, history recall and the theme toggle, then runs the shared
//! behavioral checks.
//!
//! Run with: RUST_LOG=calc_widget=debug cargo run --example headless_demo

use calc_widget::driver::run_full_suite;
use calc_widget::wasm::{DomEvent, WasmDriver, THEME_CHECKBOX_ID};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn show(driver: &WasmDriver, step: &str) {
    println!(
        "{step:<28} expression={:<10} result={:<8} history={:?}",
        driver.expression_text().unwrap_or_default(),
        driver.result_text().unwrap_or_default(),
        driver.history_list_items(),
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("Calculator widget - mock DOM session");
    println!("------------------------------------");

    let mut driver = WasmDriver::new();
    show(&driver, "initial");

    for id in ["btn-4", "btn-2", "btn-times", "btn-open-paren", "btn-3"] {
        driver.click(id);
    }
    driver.type_keys("+7");
    driver.click("btn-close-paren");
    show(&driver, "typed 42*(3+7)");

    driver.press_key("Enter");
    show(&driver, "pressed Enter");

    driver.type_keys("+-/2");
    show(&driver, "typed +-/2 (collapsed)");
    driver.press_key("=");
    show(&driver, "pressed =");

    driver.type_keys("%0");
    driver.press_key("Enter");
    show(&driver, "typed %0, pressed Enter");

    driver.click("history-1");
    show(&driver, "clicked history-1");

    driver.dispatch_event(DomEvent::change(THEME_CHECKBOX_ID, true));
    info!(light = driver.is_light_theme(), "theme toggled");

    println!();
    println!(
        "events: {} dispatched, {} with default prevented",
        driver.dom().event_history().len(),
        driver.dom().prevented_events().len()
    );

    match run_full_suite(&mut WasmDriver::new()) {
        Ok(()) => info!("all behavioral checks passed"),
        Err(err) => error!(%err, "behavioral checks failed"),
    }
}
