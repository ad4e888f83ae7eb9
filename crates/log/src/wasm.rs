use web_sys::console;
use web_sys::wasm_bindgen::JsValue;

use crate::{Message, Verbosity};

type ConsoleFn = fn(&JsValue, &JsValue, &JsValue, &JsValue);

/// Console method, label and label color of each verbosity level.
fn style(verbosity: Verbosity) -> (ConsoleFn, &'static str, &'static str) {
    match verbosity {
        Verbosity::Error => (console::error_4, "ERROR", "#f00"),
        Verbosity::Warning => (console::warn_4, "WARNING", "#ff0"),
        Verbosity::Info => (console::info_4, "INFO", "#00f"),
        Verbosity::Trace => (console::log_4, "TRACE", "#222"),
    }
}

/// Sends `msg` to the browser console, styling the label and the source location with `%c`.
pub fn log(msg: Message) {
    let (write, label, color) = style(msg.verbosity);

    let text = format!(
        "%c{label}%c  [{}] {}  %c({}:{})",
        msg.module, msg.message, msg.file, msg.line
    );
    let label_css = format!("color: {color}; font-weight: bold;");

    write(
        &text.into(),
        &label_css.into(),
        &"color: inherit; font-weight: inherit;".into(),
        &"color: #888;".into(),
    );
}
