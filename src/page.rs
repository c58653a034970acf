//! Page-level lifecycle: `loaded` marker on `<body>` and the console banner.

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::component::Component;
use crate::console;
use crate::dom;

pub const LOADED_CLASS: &str = "loaded";

pub struct PageLifecycle;

impl Component for PageLifecycle {
    fn name(&self) -> &'static str {
        "page"
    }

    fn mount(&self, _root: &Element) -> Result<(), JsValue> {
        fx_log!("{}", console::DEVELOPER_GREETING);
        let doc = dom::document()?;
        dom::when_loaded(move || {
            if let Some(body) = doc.body() {
                body.class_list().add_1(LOADED_CLASS).ok();
            }
            console::print_banner();
        })
    }
}
