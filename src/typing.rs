//! Typing-text effect for the hero subtitle.
//!
//! The timing policy is a pure state machine ([`TypingState::step`]); the
//! component only renders the visible prefix and re-arms a one-shot timer
//! with the delay the machine returns.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::component::Component;
use crate::config::FxConfig;
use crate::dom;

pub const TYPE_DELAY_MS: u32 = 100;
pub const ERASE_DELAY_MS: u32 = 50;
pub const FULL_PAUSE_MS: u32 = 2000;
pub const EMPTY_PAUSE_MS: u32 = 500;
/// Delay between content-loaded and the first tick.
pub const START_DELAY_MS: u32 = 1000;

/// What the most recent tick did; decides what the next one does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Revealed a character, phrase not complete yet.
    Typing,
    /// Revealed the last character; next tick starts erasing.
    PauseFull,
    /// Removed a character, some text remains.
    Deleting,
    /// Erased the last character and moved to the next phrase.
    PauseEmpty,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingState {
    pub phrase: usize,
    pub chars: usize,
    pub phase: Phase,
}

impl Default for TypingState {
    fn default() -> Self {
        Self {
            phrase: 0,
            chars: 0,
            phase: Phase::PauseEmpty,
        }
    }
}

impl TypingState {
    /// Advance one tick. Returns the new state and the delay before the next
    /// tick. `phrases` must be non-empty.
    pub fn step<S: AsRef<str>>(self, phrases: &[S]) -> (TypingState, u32) {
        debug_assert!(!phrases.is_empty());
        let n = phrases.len();
        let phrase = self.phrase % n;
        let len = phrases[phrase].as_ref().chars().count();

        match self.phase {
            Phase::Typing | Phase::PauseEmpty => {
                let chars = (self.chars + 1).min(len);
                if chars == len {
                    (TypingState { phrase, chars, phase: Phase::PauseFull }, FULL_PAUSE_MS)
                } else {
                    (TypingState { phrase, chars, phase: Phase::Typing }, TYPE_DELAY_MS)
                }
            }
            Phase::PauseFull | Phase::Deleting => {
                let chars = self.chars.min(len).saturating_sub(1);
                if chars == 0 {
                    let next = TypingState {
                        phrase: (phrase + 1) % n,
                        chars: 0,
                        phase: Phase::PauseEmpty,
                    };
                    (next, EMPTY_PAUSE_MS)
                } else {
                    (TypingState { phrase, chars, phase: Phase::Deleting }, ERASE_DELAY_MS)
                }
            }
        }
    }

    /// Text currently shown. After the final erase this is empty even though
    /// `phrase` already points at the next entry.
    pub fn visible<'a, S: AsRef<str>>(&self, phrases: &'a [S]) -> &'a str {
        if phrases.is_empty() || self.chars == 0 {
            return "";
        }
        let text = phrases[self.phrase % phrases.len()].as_ref();
        match text.char_indices().nth(self.chars) {
            Some((byte, _)) => &text[..byte],
            None => text,
        }
    }
}

pub struct TypingEffect {
    config: Rc<FxConfig>,
}

impl TypingEffect {
    pub fn new(config: Rc<FxConfig>) -> Self {
        Self { config }
    }
}

type TickCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn schedule(tick: &TickCallback, delay_ms: u32) {
    use wasm_bindgen::JsCast;
    let Some(win) = web_sys::window() else {
        fx_debug!("typing effect stopped: no window");
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        let scheduled = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            delay_ms as i32,
        );
        if let Err(e) = scheduled {
            fx_debug!("typing effect stopped, tick not scheduled: {e:?}");
        }
    }
}

fn start_typing_loop(target: Element, phrases: Rc<Vec<String>>) {
    let state = Rc::new(RefCell::new(TypingState::default()));
    let f: TickCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let (next, delay) = state.borrow().step(phrases.as_slice());
        *state.borrow_mut() = next;
        target.set_text_content(Some(next.visible(phrases.as_slice())));
        schedule(&f, delay);
    }) as Box<dyn FnMut()>));
    schedule(&g, START_DELAY_MS);
}

impl Component for TypingEffect {
    fn name(&self) -> &'static str {
        "typing"
    }

    fn mount(&self, root: &Element) -> Result<(), JsValue> {
        if self.config.phrases.is_empty() {
            return Err(JsValue::from_str("typing effect needs at least one phrase"));
        }
        let target = dom::element_by_id(root, &self.config.typed_text_id)?;
        let phrases = Rc::new(self.config.phrases.clone());
        let doc = dom::document()?;

        if doc.ready_state() == "loading" {
            let mut pending = Some((target, phrases));
            dom::listen(&doc, "DOMContentLoaded", move |_| {
                if let Some((target, phrases)) = pending.take() {
                    start_typing_loop(target, phrases);
                }
            })?;
        } else {
            start_typing_loop(target, phrases);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(phrases: &[&str], ticks: usize) -> Vec<(TypingState, u32)> {
        let mut state = TypingState::default();
        (0..ticks)
            .map(|_| {
                let (next, delay) = state.step(phrases);
                state = next;
                (next, delay)
            })
            .collect()
    }

    #[test]
    fn types_one_char_per_tick() {
        let phrases = ["Rust"];
        let out = run(&phrases, 3);
        let shown: Vec<&str> = out.iter().map(|(s, _)| s.visible(&phrases)).collect();
        assert_eq!(shown, ["R", "Ru", "Rus"]);
        assert!(out.iter().all(|(_, d)| *d == TYPE_DELAY_MS));
    }

    #[test]
    fn full_phrase_pauses_then_erases() {
        let phrases = ["abc", "de"];
        let out = run(&phrases, 6);
        // 3 typing ticks, the last one schedules the long pause
        assert_eq!(out[2].0.phase, Phase::PauseFull);
        assert_eq!(out[2].1, FULL_PAUSE_MS);
        assert_eq!(out[2].0.visible(&phrases), "abc");
        // erasing
        assert_eq!(out[3].0.visible(&phrases), "ab");
        assert_eq!(out[3].1, ERASE_DELAY_MS);
        assert_eq!(out[4].0.visible(&phrases), "a");
        // last erase advances to next phrase
        assert_eq!(out[5].0.phrase, 1);
        assert_eq!(out[5].0.visible(&phrases), "");
        assert_eq!(out[5].1, EMPTY_PAUSE_MS);
    }

    #[test]
    fn cycles_back_to_first_phrase() {
        let phrases = ["ab", "c"];
        // "ab": 2 type + 2 erase, "c": 1 type + 1 erase
        let out = run(&phrases, 6);
        let last = out.last().unwrap().0;
        assert_eq!(last.phrase, 0);
        assert_eq!(last.phase, Phase::PauseEmpty);
        let next = last.step(&phrases).0;
        assert_eq!(next.visible(&phrases), "a");
    }

    #[test]
    fn offsets_stay_in_bounds() {
        let phrases = crate::config::DEFAULT_PHRASES;
        let mut state = TypingState::default();
        for _ in 0..1_000 {
            state = state.step(phrases).0;
            assert!(state.phrase < phrases.len());
            assert!(state.chars <= phrases[state.phrase].chars().count());
        }
    }

    #[test]
    fn multibyte_phrases_slice_on_char_boundaries() {
        let phrases = ["héllo"];
        let out = run(&phrases, 2);
        assert_eq!(out[1].0.visible(&phrases), "hé");
    }

    #[test]
    fn empty_phrase_does_not_stall() {
        let phrases = ["", "x"];
        let out = run(&phrases, 3);
        assert_eq!(out[0].0.phase, Phase::PauseFull);
        assert_eq!(out[1].0.phrase, 1);
        assert_eq!(out[2].0.visible(&phrases), "x");
    }
}
