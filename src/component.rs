use wasm_bindgen::JsValue;
use web_sys::Element;

/// A behavior group bound to a page subtree.
///
/// `mount` registers listeners/observers; `attach` guards it with a
/// `data-fx-<name>` marker on the root so repeated start-up calls do not
/// stack duplicate listeners.
pub trait Component {
    fn name(&self) -> &'static str;

    fn mount(&self, root: &Element) -> Result<(), JsValue>;

    /// Returns `Ok(false)` when the component was already attached to `root`.
    fn attach(&self, root: &Element) -> Result<bool, JsValue> {
        let marker = marker_attribute(self.name());
        if root.has_attribute(&marker) {
            return Ok(false);
        }
        self.mount(root)?;
        root.set_attribute(&marker, "")?;
        Ok(true)
    }
}

pub fn marker_attribute(name: &str) -> String {
    format!("data-fx-{name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_uses_data_prefix() {
        assert_eq!(marker_attribute("nav"), "data-fx-nav");
    }
}
