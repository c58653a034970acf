//! Pointer enter/leave micro-interactions for skill tags, project cards and
//! social links. Every enter style has a leave style over the same
//! properties, so leaving restores the resting look exactly.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, SvgElement};

use crate::component::Component;
use crate::config::FxConfig;
use crate::dom;

/// Paired inline styles applied on pointer enter and leave.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverStyle {
    pub enter: Vec<(&'static str, String)>,
    pub leave: Vec<(&'static str, String)>,
}

impl HoverStyle {
    fn transform(enter: &str, leave: &str) -> Self {
        Self {
            enter: vec![("transform", enter.to_string())],
            leave: vec![("transform", leave.to_string())],
        }
    }

    pub fn skill_tag() -> Self {
        Self::transform("scale(1.05) rotate(2deg)", "scale(1) rotate(0deg)")
    }

    pub fn project_card() -> Self {
        Self::transform("translateY(-12px) scale(1.02)", "translateY(0) scale(1)")
    }

    /// Social link tinted with its brand `color`.
    pub fn social_link(color: &str) -> Self {
        Self {
            enter: vec![
                ("background", color.to_string()),
                ("border-color", color.to_string()),
                ("transform", "translateY(-8px) scale(1.1) rotate(5deg)".into()),
                ("color", "white".into()),
            ],
            leave: vec![
                ("background", "var(--glass-bg)".into()),
                ("border-color", "var(--glass-border)".into()),
                ("transform", "translateY(0) scale(1) rotate(0deg)".into()),
                ("color", "var(--color-text-primary)".into()),
            ],
        }
    }
}

pub const ICON_STROKE_HOVER: &str = "white";
pub const ICON_STROKE_REST: &str = "currentColor";

/// Brand color for the social link at `index`, cycling through `palette`.
pub fn palette_color<S: AsRef<str>>(palette: &[S], index: usize) -> Option<&str> {
    if palette.is_empty() {
        return None;
    }
    Some(palette[index % palette.len()].as_ref())
}

fn apply(el: &HtmlElement, styles: &[(&'static str, String)]) {
    for (prop, value) in styles {
        dom::set_style(el, prop, value);
    }
}

fn set_icon_stroke(el: &HtmlElement, stroke: &str) {
    let icon = el
        .query_selector("svg")
        .ok()
        .flatten()
        .and_then(|svg| svg.dyn_into::<SvgElement>().ok());
    if let Some(icon) = icon {
        icon.style().set_property("stroke", stroke).ok();
    }
}

fn bind_hover(el: &HtmlElement, style: HoverStyle, with_icon: bool) -> Result<(), JsValue> {
    let style = Rc::new(style);
    {
        let (target, style) = (el.clone(), style.clone());
        dom::listen(el, "mouseenter", move |_| {
            apply(&target, &style.enter);
            if with_icon {
                set_icon_stroke(&target, ICON_STROKE_HOVER);
            }
        })?;
    }
    let target = el.clone();
    dom::listen(el, "mouseleave", move |_| {
        apply(&target, &style.leave);
        if with_icon {
            set_icon_stroke(&target, ICON_STROKE_REST);
        }
    })
}

pub struct HoverEffects {
    config: Rc<FxConfig>,
}

impl HoverEffects {
    pub fn new(config: Rc<FxConfig>) -> Self {
        Self { config }
    }
}

impl Component for HoverEffects {
    fn name(&self) -> &'static str {
        "hover"
    }

    fn mount(&self, root: &Element) -> Result<(), JsValue> {
        let cfg = &self.config;
        for tag in dom::query_all_html(root, &cfg.skill_tag_selector)? {
            bind_hover(&tag, HoverStyle::skill_tag(), false)?;
        }
        for card in dom::query_all_html(root, &cfg.project_card_selector)? {
            bind_hover(&card, HoverStyle::project_card(), false)?;
        }
        for (index, link) in dom::query_all_html(root, &cfg.social_link_selector)?
            .iter()
            .enumerate()
        {
            let Some(color) = palette_color(cfg.social_palette.as_slice(), index) else {
                break;
            };
            bind_hover(link, HoverStyle::social_link(color), true)?;
        }
        Ok(())
    }
}
