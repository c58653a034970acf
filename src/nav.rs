//! Navigation controller: mobile menu toggle, scrolled navbar styling,
//! active-section highlighting and smooth scrolling to link targets.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::component::Component;
use crate::config::FxConfig;
use crate::dom;
use crate::throttle::LeadingDebounce;

/// Navbar gets `scrolled` once the page is scrolled past this offset.
pub const SCROLLED_OFFSET_PX: f64 = 50.0;
/// A section becomes current this far before its top reaches the viewport top.
pub const SECTION_LEAD_PX: f64 = 200.0;
/// Height reserved for the fixed header when scrolling to a section.
pub const HEADER_CLEARANCE_PX: f64 = 70.0;
/// Quiet window for the active-link recompute.
pub const ACTIVE_LINK_QUIET_MS: f64 = 50.0;

pub const ACTIVE_CLASS: &str = "active";
pub const SCROLLED_CLASS: &str = "scrolled";

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLLED_OFFSET_PX
}

/// Id of the last section (document order) whose lead line has been passed.
///
/// Sections are `(id, top)` pairs; a section without an id can still be the
/// current one, in which case no link matches.
pub fn current_section<'a, I>(sections: I, offset: f64) -> Option<Option<&'a str>>
where
    I: IntoIterator<Item = (Option<&'a str>, f64)>,
{
    sections
        .into_iter()
        .filter(|(_, top)| offset >= top - SECTION_LEAD_PX)
        .last()
        .map(|(id, _)| id)
}

/// Whether a link `href` points at the current section.
pub fn link_is_active(href: Option<&str>, current: Option<&str>) -> bool {
    match (href, current) {
        (Some(href), Some(id)) => href.strip_prefix('#') == Some(id),
        _ => false,
    }
}

/// Scroll position that puts `section_top` just below the fixed header.
pub fn scroll_target(section_top: f64) -> f64 {
    section_top - HEADER_CLEARANCE_PX
}

pub struct NavController {
    config: Rc<FxConfig>,
}

impl NavController {
    pub fn new(config: Rc<FxConfig>) -> Self {
        Self { config }
    }
}

/// Elements and scroll state shared by the nav listeners.
struct NavState {
    navbar: Element,
    links: Vec<Element>,
    sections: Vec<HtmlElement>,
    last_scroll: Cell<f64>,
    debounce: RefCell<LeadingDebounce>,
}

impl NavState {
    fn on_scroll(self: &Rc<Self>, offset: f64) {
        let classes = self.navbar.class_list();
        if is_scrolled(offset) {
            classes.add_1(SCROLLED_CLASS).ok();
        } else {
            classes.remove_1(SCROLLED_CLASS).ok();
        }
        self.last_scroll.set(offset);

        let (leading, ticket, quiet_ms) = {
            let mut debounce = self.debounce.borrow_mut();
            (debounce.fire(dom::now_ms()), debounce.ticket(), debounce.quiet_ms())
        };
        if leading {
            self.update_active_link(offset);
        }

        // Catch up with where the burst ended once scrolling goes quiet.
        let state = Rc::clone(self);
        let armed = dom::set_timeout(quiet_ms as u32, move || {
            if state.debounce.borrow().trailing_due(ticket) {
                state.update_active_link(scroll_offset());
            }
        });
        if let Err(e) = armed {
            fx_debug!("trailing active-link update not scheduled: {e:?}");
        }
    }

    fn update_active_link(&self, offset: f64) {
        let ids: Vec<Option<String>> = self.sections.iter().map(|s| s.get_attribute("id")).collect();
        let current = current_section(
            ids.iter()
                .zip(&self.sections)
                .map(|(id, s)| (id.as_deref(), s.offset_top() as f64)),
            offset,
        )
        .flatten();

        for link in &self.links {
            let classes = link.class_list();
            classes.remove_1(ACTIVE_CLASS).ok();
            if link_is_active(link.get_attribute("href").as_deref(), current) {
                classes.add_1(ACTIVE_CLASS).ok();
            }
        }
    }
}

fn scroll_offset() -> f64 {
    web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

fn smooth_scroll_to(root: &Element, href: &str) -> Result<(), JsValue> {
    // Hrefs that are not valid selectors (e.g. a bare "#") have no target.
    let Some(target) = root.query_selector(href).ok().flatten() else {
        return Ok(());
    };
    let Ok(section) = target.dyn_into::<HtmlElement>() else {
        return Ok(());
    };
    let opts = ScrollToOptions::new();
    opts.set_top(scroll_target(section.offset_top() as f64));
    opts.set_behavior(ScrollBehavior::Smooth);
    dom::window()?.scroll_to_with_scroll_to_options(&opts);
    Ok(())
}

impl Component for NavController {
    fn name(&self) -> &'static str {
        "nav"
    }

    fn mount(&self, root: &Element) -> Result<(), JsValue> {
        let cfg = &self.config;
        let navbar = dom::element_by_id(root, &cfg.navbar_id)?;
        let toggle = dom::element_by_id(root, &cfg.nav_toggle_id)?;
        let menu = dom::element_by_id(root, &cfg.nav_menu_id)?;
        let links = dom::query_all(root, &cfg.nav_link_selector)?;
        let sections = dom::query_all_html(root, &cfg.section_selector)?;

        // Mobile menu toggle
        {
            let (menu, toggle_el) = (menu.clone(), toggle.clone());
            dom::listen(&toggle, "click", move |_| {
                menu.class_list().toggle(ACTIVE_CLASS).ok();
                toggle_el.class_list().toggle(ACTIVE_CLASS).ok();
            })?;
        }

        // Link clicks close the menu and smooth-scroll to the target section
        for link in &links {
            let (menu, toggle, link_el, root) = (menu.clone(), toggle.clone(), link.clone(), root.clone());
            dom::listen(link, "click", move |evt| {
                menu.class_list().remove_1(ACTIVE_CLASS).ok();
                toggle.class_list().remove_1(ACTIVE_CLASS).ok();
                evt.prevent_default();
                if let Some(href) = link_el.get_attribute("href") {
                    if let Err(e) = smooth_scroll_to(&root, &href) {
                        fx_debug!("smooth scroll to {href} failed: {e:?}");
                    }
                }
            })?;
        }

        let state = Rc::new(NavState {
            navbar,
            links,
            sections,
            last_scroll: Cell::new(0.0),
            debounce: RefCell::new(LeadingDebounce::new(ACTIVE_LINK_QUIET_MS)),
        });

        let win = dom::window()?;
        {
            let state = state.clone();
            dom::listen(&win, "scroll", move |_| state.on_scroll(scroll_offset()))?;
        }
        dom::when_loaded(move || state.update_active_link(scroll_offset()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_threshold() {
        for offset in [0.0, 10.0, 49.0, 49.9] {
            assert!(!is_scrolled(offset), "offset {offset}");
        }
        for offset in [50.1, 51.0, 400.0, 10_000.0] {
            assert!(is_scrolled(offset), "offset {offset}");
        }
    }

    #[test]
    fn last_passed_section_wins() {
        let sections = [
            (Some("home"), 0.0),
            (Some("about"), 800.0),
            (Some("projects"), 1600.0),
            (Some("contact"), 2400.0),
        ];
        assert_eq!(current_section(sections, 0.0), Some(Some("home")));
        assert_eq!(current_section(sections, 599.0), Some(Some("home")));
        assert_eq!(current_section(sections, 600.0), Some(Some("about")));
        assert_eq!(current_section(sections, 1500.0), Some(Some("projects")));
        assert_eq!(current_section(sections, 9000.0), Some(Some("contact")));
    }

    #[test]
    fn later_sections_override_even_out_of_order() {
        // document order, not geometric order, decides
        let sections = [(Some("b"), 1000.0), (Some("a"), 100.0)];
        assert_eq!(current_section(sections, 1200.0), Some(Some("a")));
    }

    #[test]
    fn no_section_passed() {
        let sections = [(Some("about"), 800.0)];
        assert_eq!(current_section(sections, 100.0), None);
    }

    #[test]
    fn link_matching() {
        assert!(link_is_active(Some("#about"), Some("about")));
        assert!(!link_is_active(Some("#about"), Some("home")));
        assert!(!link_is_active(Some("about"), Some("about")));
        assert!(!link_is_active(None, Some("about")));
        assert!(!link_is_active(Some("#about"), None));
    }

    #[test]
    fn scroll_target_reserves_header() {
        assert_eq!(scroll_target(1000.0), 930.0);
        assert_eq!(scroll_target(0.0), -70.0);
    }
}
