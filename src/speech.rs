//! Contact-button easter egg: play a sound clip, or say the line with speech
//! synthesis when the clip is missing or playback is refused.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlAudioElement, SpeechSynthesis, SpeechSynthesisUtterance, SpeechSynthesisVoice};

use crate::component::Component;
use crate::config::FxConfig;
use crate::dom;

/// Utterance parameters for the fallback line.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeechRequest {
    pub text: String,
    pub lang: String,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl SpeechRequest {
    pub fn from_config(config: &FxConfig) -> Self {
        Self {
            text: config.speech_text.clone(),
            lang: config.speech_lang.clone(),
            rate: 1.0,
            pitch: 1.0,
            volume: 1.0,
        }
    }
}

/// Text-to-speech backend.
pub trait SpeechSink {
    /// Language tags of the installed voices, in platform order.
    fn voice_langs(&self) -> Vec<String>;

    /// Speak `request` with the voice at `voice` (platform default on `None`).
    fn speak(&mut self, request: &SpeechRequest, voice: Option<usize>);
}

/// How the audio clip attempt ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    Played,
    Rejected,
    Missing,
}

/// Index of the first voice whose language tag mentions `code`.
pub fn pick_voice<S: AsRef<str>>(langs: &[S], code: &str) -> Option<usize> {
    langs.iter().position(|lang| lang.as_ref().contains(code))
}

/// Say the fallback line if `outcome` calls for it. `sink` is `None` when the
/// platform has no speech synthesis. Returns whether anything was spoken.
pub fn fallback<T: SpeechSink>(
    outcome: Playback,
    sink: Option<&mut T>,
    request: &SpeechRequest,
    language_code: &str,
) -> bool {
    if outcome == Playback::Played {
        return false;
    }
    let Some(sink) = sink else {
        return false;
    };
    let langs = sink.voice_langs();
    let voice = pick_voice(langs.as_slice(), language_code);
    sink.speak(request, voice);
    true
}

/// `window.speechSynthesis`.
struct BrowserSpeech {
    synth: SpeechSynthesis,
}

impl BrowserSpeech {
    /// Feature-detected handle; `None` when the platform lacks speech synthesis.
    fn detect() -> Option<Self> {
        let win = web_sys::window()?;
        if !js_sys::Reflect::has(&win, &JsValue::from_str("speechSynthesis")).unwrap_or(false) {
            return None;
        }
        win.speech_synthesis().ok().map(|synth| Self { synth })
    }

    fn voices(&self) -> Vec<SpeechSynthesisVoice> {
        self.synth
            .get_voices()
            .iter()
            .filter_map(|v| v.dyn_into::<SpeechSynthesisVoice>().ok())
            .collect()
    }
}

impl SpeechSink for BrowserSpeech {
    fn voice_langs(&self) -> Vec<String> {
        self.voices().iter().map(|v| v.lang()).collect()
    }

    fn speak(&mut self, request: &SpeechRequest, voice: Option<usize>) {
        let utterance = match SpeechSynthesisUtterance::new_with_text(&request.text) {
            Ok(u) => u,
            Err(e) => {
                fx_debug!("speech fallback unavailable: {e:?}");
                return;
            }
        };
        utterance.set_lang(&request.lang);
        utterance.set_rate(request.rate);
        utterance.set_pitch(request.pitch);
        utterance.set_volume(request.volume);
        if let Some(v) = voice.and_then(|i| self.voices().into_iter().nth(i)) {
            utterance.set_voice(Some(&v));
        }
        self.synth.speak(&utterance);
    }
}

fn speak_fallback(outcome: Playback, config: &FxConfig) {
    let mut speech = BrowserSpeech::detect();
    fallback(
        outcome,
        speech.as_mut(),
        &SpeechRequest::from_config(config),
        config.speech_language_code(),
    );
}

pub struct EasterEgg {
    config: Rc<FxConfig>,
}

impl EasterEgg {
    pub fn new(config: Rc<FxConfig>) -> Self {
        Self { config }
    }
}

impl Component for EasterEgg {
    fn name(&self) -> &'static str {
        "easter-egg"
    }

    fn mount(&self, root: &Element) -> Result<(), JsValue> {
        let button = dom::element_by_id(root, &self.config.contact_button_id)?;
        let audio = dom::find_by_id(root, &self.config.audio_id)?
            .and_then(|el| el.dyn_into::<HtmlAudioElement>().ok());
        let config = self.config.clone();

        dom::listen(&button, "click", move |_| {
            let Some(audio) = audio.as_ref() else {
                speak_fallback(Playback::Missing, &config);
                return;
            };
            audio.set_current_time(0.0);
            match audio.play() {
                Ok(promise) => {
                    let config = config.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let outcome = match JsFuture::from(promise).await {
                            Ok(_) => Playback::Played,
                            Err(_) => Playback::Rejected,
                        };
                        speak_fallback(outcome, &config);
                    });
                }
                Err(_) => speak_fallback(Playback::Rejected, &config),
            }
        })
    }
}
