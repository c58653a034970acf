//! Thin logging macros over `web_sys::console`.
//!
//! Only DOM wiring logs; the pure state machines stay silent so they can run
//! under native `cargo test`.

macro_rules! fx_log {
    ($($arg:tt)*) => {
        web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(&format!($($arg)*)))
    };
}

macro_rules! fx_warn {
    ($($arg:tt)*) => {
        web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(&format!($($arg)*)))
    };
}

macro_rules! fx_debug {
    ($($arg:tt)*) => {
        web_sys::console::debug_1(&wasm_bindgen::JsValue::from_str(&format!($($arg)*)))
    };
}

/// `console.log` with a `%c` CSS style argument.
pub(crate) fn styled(text: &str, css: &str) {
    web_sys::console::log_2(
        &wasm_bindgen::JsValue::from_str(&format!("%c {text}")),
        &wasm_bindgen::JsValue::from_str(css),
    );
}

/// Greeting for developers who open the console.
pub(crate) const DEVELOPER_GREETING: &str = r"
  ___          _    __      _ _
 | _ \___  _ _| |_ / _|___ | (_) ___
 |  _/ _ \| '_|  _|  _/ _ \| | |/ _ \
 |_| \___/|_|  \__|_| \___/|_|_|\___/

 Thanks for checking out my portfolio!
 Feel free to reach out if you'd like to collaborate.
";

pub(crate) fn print_banner() {
    styled(
        "Portfolio Website Loaded! \u{1F680}",
        "color: #6366f1; font-size: 20px; font-weight: bold;",
    );
    styled(
        "Built with \u{2764}\u{FE0F} and Rust + WebAssembly",
        "color: #8b5cf6; font-size: 14px;",
    );
}
