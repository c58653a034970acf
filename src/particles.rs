//! Decorative hero background particles, created once and never recycled.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

use crate::component::Component;
use crate::config::FxConfig;
use crate::dom;

pub const PARTICLE_CLASS: &str = "particle";

/// Randomized inline style of a single particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleStyle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay_s: f64,
    pub duration_s: f64,
    pub size_px: f64,
    pub opacity: f64,
}

impl ParticleStyle {
    /// Build a style from a source of uniform samples in `[0, 1)`.
    pub fn from_samples(mut sample: impl FnMut() -> f64) -> Self {
        Self {
            left_pct: sample() * 100.0,
            top_pct: sample() * 100.0,
            delay_s: sample() * 20.0,
            duration_s: 15.0 + sample() * 10.0,
            size_px: 2.0 + sample() * 4.0,
            opacity: 0.2 + sample() * 0.5,
        }
    }

    /// `(property, value)` pairs written to the element's inline style.
    pub fn css(&self) -> [(&'static str, String); 7] {
        [
            ("left", format!("{}%", self.left_pct)),
            ("top", format!("{}%", self.top_pct)),
            ("animation-delay", format!("{}s", self.delay_s)),
            ("animation-duration", format!("{}s", self.duration_s)),
            ("width", format!("{}px", self.size_px)),
            ("height", format!("{}px", self.size_px)),
            ("opacity", format!("{}", self.opacity)),
        ]
    }
}

pub fn generate(count: usize, mut sample: impl FnMut() -> f64) -> Vec<ParticleStyle> {
    (0..count).map(|_| ParticleStyle::from_samples(&mut sample)).collect()
}

/// Uniform sample in `[0, 1)` from the browser.
#[cfg(not(feature = "rng"))]
fn unit_sample() -> f64 {
    js_sys::Math::random()
}

#[cfg(feature = "rng")]
fn unit_sample() -> f64 {
    let mut buf = [0u8; 4];
    match getrandom::getrandom(&mut buf) {
        Ok(()) => u32::from_le_bytes(buf) as f64 / (u32::MAX as f64 + 1.0),
        Err(_) => js_sys::Math::random(),
    }
}

pub struct ParticleField {
    config: Rc<FxConfig>,
}

impl ParticleField {
    pub fn new(config: Rc<FxConfig>) -> Self {
        Self { config }
    }
}

impl Component for ParticleField {
    fn name(&self) -> &'static str {
        "particles"
    }

    fn mount(&self, root: &Element) -> Result<(), JsValue> {
        let container = dom::element_by_id(root, &self.config.particle_container_id)?;
        let doc = dom::document()?;
        for style in generate(self.config.particle_count, unit_sample) {
            let particle: HtmlElement = doc.create_element("div")?.dyn_into()?;
            particle.set_class_name(PARTICLE_CLASS);
            for (prop, value) in style.css() {
                dom::set_style(&particle, prop, &value);
            }
            container.append_child(&particle)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic LCG so the ranges can be checked without a browser.
    fn lcg(seed: u64) -> impl FnMut() -> f64 {
        let mut s = seed;
        move || {
            s = s.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (s >> 11) as f64 / (1u64 << 53) as f64
        }
    }

    #[test]
    fn generates_requested_count_within_ranges() {
        let particles = generate(30, lcg(7));
        assert_eq!(particles.len(), 30);
        for p in &particles {
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!((0.0..100.0).contains(&p.top_pct));
            assert!((0.0..20.0).contains(&p.delay_s));
            assert!((15.0..25.0).contains(&p.duration_s));
            assert!((2.0..=6.0).contains(&p.size_px));
            assert!((0.2..=0.7).contains(&p.opacity));
        }
    }

    #[test]
    fn extreme_samples_hit_range_bounds() {
        let lo = ParticleStyle::from_samples(|| 0.0);
        assert_eq!(lo.size_px, 2.0);
        assert_eq!(lo.opacity, 0.2);
        assert_eq!(lo.duration_s, 15.0);
        let hi = ParticleStyle::from_samples(|| 1.0);
        assert_eq!(hi.size_px, 6.0);
        assert!((hi.opacity - 0.7).abs() < 1e-12);
    }

    #[test]
    fn css_is_square_with_units() {
        let style = ParticleStyle::from_samples(|| 0.5);
        let css = style.css();
        assert_eq!(css[0], ("left", "50%".to_string()));
        assert_eq!(css[2], ("animation-delay", "10s".to_string()));
        assert_eq!(css[4].1, "4px");
        assert_eq!(css[4].1, css[5].1);
    }
}
