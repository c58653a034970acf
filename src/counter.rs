//! Count-up animation for the highlight statistics ("150+", "20", ...).

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::component::Component;
use crate::config::FxConfig;
use crate::dom::{self, ObserveOptions};

pub const COUNTED_CLASS: &str = "counted";
pub const COUNTER_THRESHOLD: f64 = 0.5;
pub const COUNT_DURATION_MS: f64 = 2000.0;

/// Parsed counter text: the integer to reach and the suffix to keep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterTarget {
    pub value: i64,
    pub suffix: &'static str,
}

/// Parse the displayed text of a counter.
///
/// A `+` anywhere marks the `"+"` suffix; the first one is removed and the
/// remaining text is read as a leading integer (surrounding junk after the
/// digits is ignored). Returns `None` when no digits lead the text.
pub fn parse_counter(text: &str) -> Option<CounterTarget> {
    let suffix = if text.contains('+') { "+" } else { "" };
    let stripped = text.replacen('+', "", 1);
    let value = parse_leading_int(stripped.trim_start())?;
    Some(CounterTarget { value, suffix })
}

fn parse_leading_int(s: &str) -> Option<i64> {
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Frame-driven interpolation from 0 to `target.value`.
#[derive(Clone, Debug)]
pub struct CountUp {
    target: CounterTarget,
    duration_ms: f64,
    start_ms: Option<f64>,
}

impl CountUp {
    pub fn new(target: CounterTarget, duration_ms: f64) -> Self {
        Self { target, duration_ms, start_ms: None }
    }

    /// Progress in `[0, 1]` at animation timestamp `ts`. The first frame seen
    /// becomes the start.
    pub fn progress(&mut self, ts: f64) -> f64 {
        let start = *self.start_ms.get_or_insert(ts);
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((ts - start) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Text for the frame at `ts` and whether the animation is finished.
    pub fn frame(&mut self, ts: f64) -> (String, bool) {
        let progress = self.progress(ts);
        let value = (progress * self.target.value as f64).floor() as i64;
        (format!("{}{}", value, self.target.suffix), progress >= 1.0)
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Drive `anim` on `el` with `requestAnimationFrame` until it completes.
fn animate(el: Element, mut anim: CountUp) -> Result<(), JsValue> {
    let win = dom::window()?;
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        let (text, done) = anim.frame(ts);
        el.set_text_content(Some(&text));
        if done {
            return;
        }
        if let Some(w) = web_sys::window() {
            if let Some(cb) = f.borrow().as_ref() {
                let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(cb) = g.borrow().as_ref() {
        win.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}

pub struct CounterAnimator {
    config: Rc<FxConfig>,
}

impl CounterAnimator {
    pub fn new(config: Rc<FxConfig>) -> Self {
        Self { config }
    }
}

impl Component for CounterAnimator {
    fn name(&self) -> &'static str {
        "counter"
    }

    fn mount(&self, root: &Element) -> Result<(), JsValue> {
        let counters = dom::query_all(root, &self.config.counter_selector)?;
        let opts = ObserveOptions {
            threshold: COUNTER_THRESHOLD,
            root_margin: None,
        };
        dom::observe(&counters, opts, |batch| {
            for entry in batch.into_iter().filter(|e| e.is_intersecting()) {
                let el = entry.target();
                let classes = el.class_list();
                if classes.contains(COUNTED_CLASS) {
                    continue;
                }
                classes.add_1(COUNTED_CLASS).ok();
                let text = el.text_content().unwrap_or_default();
                let Some(target) = parse_counter(&text) else {
                    fx_debug!("counter text {text:?} is not a number");
                    continue;
                };
                if let Err(e) = animate(el, CountUp::new(target, COUNT_DURATION_MS)) {
                    fx_debug!("counter animation failed: {e:?}");
                }
            }
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plus_suffix() {
        assert_eq!(parse_counter("150+"), Some(CounterTarget { value: 150, suffix: "+" }));
        assert_eq!(parse_counter("20"), Some(CounterTarget { value: 20, suffix: "" }));
        assert_eq!(parse_counter("  7 years"), Some(CounterTarget { value: 7, suffix: "" }));
    }

    #[test]
    fn leading_plus_is_still_a_suffix() {
        assert_eq!(parse_counter("+30"), Some(CounterTarget { value: 30, suffix: "+" }));
    }

    #[test]
    fn rejects_non_numeric_text() {
        assert_eq!(parse_counter("many"), None);
        assert_eq!(parse_counter("+"), None);
        assert_eq!(parse_counter(""), None);
    }

    #[test]
    fn count_up_settles_on_target_monotonically() {
        let target = parse_counter("150+").unwrap();
        let mut anim = CountUp::new(target, COUNT_DURATION_MS);
        let mut last = i64::MIN;
        let mut final_text = String::new();
        // ~60fps from an arbitrary rAF origin, past the end
        for frame in 0..=130 {
            let ts = 12_345.0 + frame as f64 * 16.7;
            let (text, done) = anim.frame(ts);
            let value: i64 = text.trim_end_matches('+').parse().unwrap();
            assert!(text.ends_with('+'));
            assert!(value >= last, "{value} < {last}");
            last = value;
            final_text = text;
            if done {
                break;
            }
        }
        assert_eq!(final_text, "150+");
        assert_eq!(last, 150);
    }

    #[test]
    fn first_frame_starts_at_zero() {
        let mut anim = CountUp::new(CounterTarget { value: 99, suffix: "" }, 2000.0);
        assert_eq!(anim.frame(500.0), ("0".to_string(), false));
        assert_eq!(anim.frame(1500.0), ("49".to_string(), false));
        assert_eq!(anim.frame(2500.0), ("99".to_string(), true));
    }

    #[test]
    fn progress_is_clamped() {
        let mut anim = CountUp::new(CounterTarget { value: 10, suffix: "" }, 100.0);
        assert_eq!(anim.progress(50.0), 0.0);
        assert_eq!(anim.progress(10.0), 0.0);
        assert_eq!(anim.progress(1_000.0), 1.0);
    }
}
