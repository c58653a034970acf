//! Scroll-into-view reveals: plain fade-in, per-batch staggered reveal and the
//! contact-card entrance cascade.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::component::Component;
use crate::config::FxConfig;
use crate::dom::{self, ObserveOptions};

pub const VISIBLE_CLASS: &str = "visible";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const STAGGER_STEP_MS: u32 = 100;
pub const CARD_CASCADE_STEP_S: f64 = 0.1;

/// Reveal delays for one observer callback batch.
///
/// Positions count every entry in the batch, intersecting or not, so the
/// delay depends on where an element landed in that particular delivery.
/// Returns `(position, delay_ms)` for the intersecting entries only.
pub fn stagger_schedule<I>(intersecting: I) -> Vec<(usize, u32)>
where
    I: IntoIterator<Item = bool>,
{
    intersecting
        .into_iter()
        .enumerate()
        .filter(|(_, hit)| *hit)
        .map(|(i, _)| (i, i as u32 * STAGGER_STEP_MS))
        .collect()
}

/// CSS `animation-delay` for the contact card at `index`.
pub fn cascade_delay(index: usize) -> String {
    format!("{}s", index as f64 * CARD_CASCADE_STEP_S)
}

fn reveal_options() -> ObserveOptions<'static> {
    ObserveOptions {
        threshold: REVEAL_THRESHOLD,
        root_margin: Some(REVEAL_ROOT_MARGIN),
    }
}

pub struct RevealAnimator {
    config: Rc<FxConfig>,
}

impl RevealAnimator {
    pub fn new(config: Rc<FxConfig>) -> Self {
        Self { config }
    }
}

impl Component for RevealAnimator {
    fn name(&self) -> &'static str {
        "reveal"
    }

    fn mount(&self, root: &Element) -> Result<(), JsValue> {
        let fade = dom::query_all(root, &self.config.fade_selector)?;
        dom::observe(&fade, reveal_options(), |batch| {
            for entry in batch.iter().filter(|e| e.is_intersecting()) {
                entry.target().class_list().add_1(VISIBLE_CLASS).ok();
            }
        })?;

        let stagger = dom::query_all(root, &self.config.stagger_selector)?;
        dom::observe(&stagger, reveal_options(), |batch| {
            for (i, delay) in stagger_schedule(batch.iter().map(|e| e.is_intersecting())) {
                let target = batch[i].target();
                let scheduled = dom::set_timeout(delay, move || {
                    target.class_list().add_1(VISIBLE_CLASS).ok();
                });
                if let Err(e) = scheduled {
                    fx_debug!("stagger reveal not scheduled: {e:?}");
                }
            }
        })?;

        for (index, card) in dom::query_all_html(root, &self.config.contact_card_selector)?
            .iter()
            .enumerate()
        {
            dom::set_style(card, "animation-delay", &cascade_delay(index));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_uses_batch_position() {
        assert_eq!(stagger_schedule([true, true, true]), [(0, 0), (1, 100), (2, 200)]);
    }

    #[test]
    fn non_intersecting_entries_still_take_a_slot() {
        assert_eq!(stagger_schedule([false, true, false, true]), [(1, 100), (3, 300)]);
    }

    #[test]
    fn each_batch_restarts_at_zero() {
        let first = stagger_schedule([true, true]);
        let second = stagger_schedule([true]);
        assert_eq!(first.last(), Some(&(1, 100)));
        assert_eq!(second, [(0, 0)]);
    }

    #[test]
    fn cascade_delays() {
        assert_eq!(cascade_delay(0), "0s");
        assert_eq!(cascade_delay(1), "0.1s");
        assert_eq!(cascade_delay(2), "0.2s");
    }
}
