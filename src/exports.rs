//! JavaScript entry points.
//!
//! The page bootstrap calls `initialize()` (or `initializeWithConfig(json)`)
//! once the document has been parsed. Nothing runs at module load.

use wasm_bindgen::prelude::*;

use crate::config::PageConfig;
use crate::format::{self, Amount};
use crate::page;

#[wasm_bindgen]
extern "C" {
    /// The global `String()` conversion.
    #[wasm_bindgen(js_name = String)]
    fn js_string(value: &JsValue) -> String;
}

/// Wire page interactions with the default selectors and timings.
#[wasm_bindgen]
pub fn initialize() {
    initialize_page(&PageConfig::default());
}

/// Wire page interactions with a JSON override of the defaults.
///
/// # Errors
///
/// Throws if the JSON is malformed or names an unknown setting.
#[wasm_bindgen(js_name = initializeWithConfig)]
pub fn initialize_with_config(json: &str) -> Result<(), JsValue> {
    let config = PageConfig::from_json(json).map_err(|err| JsValue::from_str(&err.to_string()))?;
    initialize_page(&config);
    Ok(())
}

fn initialize_page(config: &PageConfig) {
    install_logging();
    let Some(window) = web_sys::window() else {
        log::warn!("no window; page interactions disabled");
        return;
    };
    let Some(document) = window.document() else {
        log::warn!("no document; page interactions disabled");
        return;
    };
    page::initialize(&window, &document, config);
}

fn install_logging() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        log::debug!("console logger already installed: {err}");
    }
}

/// Format a number or numeric string as rupees, e.g. `₹12,34,567.50`.
///
/// Any other value is converted with `String()` first, so `[1500]` and
/// `1500n` format like `"1500"`.
#[wasm_bindgen(js_name = formatCurrency)]
pub fn format_currency_js(amount: &JsValue) -> String {
    if let Some(value) = amount.as_f64() {
        return format::format_amount(Amount::Number(value));
    }
    let text = amount.as_string().unwrap_or_else(|| js_string(amount));
    format::format_amount(Amount::Text(&text))
}

/// Format a date string as `5 Mar 2024`, or `Invalid Date`.
#[wasm_bindgen(js_name = formatDate)]
pub fn format_date_js(text: &str) -> String {
    format::format_date(text)
}
