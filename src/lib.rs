//! Portfolio FX core crate.
//!
//! Presentation behaviors for the portfolio page, compiled to WebAssembly:
//! navigation state, the hero typing effect and particles, scroll reveals,
//! stat counters, hover micro-interactions and the contact-button easter
//! egg. Each behavior is a [`Component`] attached to the document element by
//! [`start_portfolio`].
//!
//! The timing and geometry rules live in plain functions and small state
//! machines so they can be tested natively; only the `mount` bodies touch the
//! DOM.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

#[macro_use]
mod console;
mod dom;

pub mod component;
pub mod config;
pub mod counter;
pub mod hover;
pub mod nav;
pub mod page;
pub mod particles;
pub mod reveal;
pub mod speech;
pub mod throttle;
pub mod typing;

pub use component::Component;
pub use config::FxConfig;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Every component, in start-up order.
pub fn components(config: &Rc<FxConfig>) -> Vec<Box<dyn Component>> {
    vec![
        Box::new(nav::NavController::new(config.clone())),
        Box::new(typing::TypingEffect::new(config.clone())),
        Box::new(particles::ParticleField::new(config.clone())),
        Box::new(reveal::RevealAnimator::new(config.clone())),
        Box::new(counter::CounterAnimator::new(config.clone())),
        Box::new(hover::HoverEffects::new(config.clone())),
        Box::new(speech::EasterEgg::new(config.clone())),
        Box::new(page::PageLifecycle),
    ]
}

/// Attach all components to `root`. A component whose elements are missing
/// is skipped with a console warning; the rest still attach. Returns how
/// many components were newly attached.
pub fn attach_all(root: &Element, config: FxConfig) -> usize {
    let config = Rc::new(config);
    let mut attached = 0;
    for component in components(&config) {
        match component.attach(root) {
            Ok(true) => attached += 1,
            Ok(false) => {}
            Err(e) => fx_warn!("portfolio-fx: {} not attached: {e:?}", component.name()),
        }
    }
    attached
}

fn document_root() -> Result<Element, JsValue> {
    dom::document()?
        .document_element()
        .ok_or_else(|| JsValue::from_str("no document element"))
}

/// Start every behavior with the default page contract.
#[wasm_bindgen]
pub fn start_portfolio() -> Result<(), JsValue> {
    attach_all(&document_root()?, FxConfig::default());
    Ok(())
}

/// Start every behavior with a JSON configuration overriding the defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_portfolio_with_config(json: &str) -> Result<(), JsValue> {
    let config =
        FxConfig::from_json(json).map_err(|e| JsValue::from_str(&format!("bad config: {e}")))?;
    attach_all(&document_root()?, config);
    Ok(())
}
