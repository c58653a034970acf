//! Page contract: element ids, selectors and content the components bind to.
//!
//! `FxConfig::default()` matches the companion portfolio markup. With the
//! `serde` feature any subset of fields can be supplied as JSON; missing
//! fields fall back to the defaults.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default rotating hero subtitles.
pub const DEFAULT_PHRASES: &[&str] = &[
    "Full Stack Developer",
    "Frontend Specialist",
    "Backend Engineer",
    "Problem Solver",
];

// GitHub, LinkedIn, Instagram, CodePen
pub const DEFAULT_SOCIAL_PALETTE: &[&str] = &["#333333", "#0077b5", "#E4405F", "#000000"];

pub const DEFAULT_PARTICLE_COUNT: usize = 30;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FxConfig {
    // --- navigation ---
    pub navbar_id: String,
    pub nav_toggle_id: String,
    pub nav_menu_id: String,
    pub nav_link_selector: String,
    pub section_selector: String,

    // --- hero ---
    pub typed_text_id: String,
    pub phrases: Vec<String>,
    pub particle_container_id: String,
    pub particle_count: usize,

    // --- reveal / counters ---
    pub fade_selector: String,
    pub stagger_selector: String,
    pub counter_selector: String,
    pub contact_card_selector: String,

    // --- hover groups ---
    pub skill_tag_selector: String,
    pub project_card_selector: String,
    pub social_link_selector: String,
    pub social_palette: Vec<String>,

    // --- easter egg ---
    pub contact_button_id: String,
    pub audio_id: String,
    pub speech_text: String,
    pub speech_lang: String,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            navbar_id: "navbar".into(),
            nav_toggle_id: "navToggle".into(),
            nav_menu_id: "navMenu".into(),
            nav_link_selector: ".nav-link".into(),
            section_selector: ".section".into(),
            typed_text_id: "typedText".into(),
            phrases: DEFAULT_PHRASES.iter().map(|s| s.to_string()).collect(),
            particle_container_id: "heroBg".into(),
            particle_count: DEFAULT_PARTICLE_COUNT,
            fade_selector: ".fade-in".into(),
            stagger_selector: ".stagger-in".into(),
            counter_selector: ".highlight-number".into(),
            contact_card_selector: ".contact-card".into(),
            skill_tag_selector: ".skill-tag".into(),
            project_card_selector: ".project-card".into(),
            social_link_selector: ".social-link".into(),
            social_palette: DEFAULT_SOCIAL_PALETTE.iter().map(|s| s.to_string()).collect(),
            contact_button_id: "contactBtn".into(),
            audio_id: "samsungAudio".into(),
            speech_text: "Yeh mera Samsung ka number hai".into(),
            speech_lang: "hi-IN".into(),
        }
    }
}

impl FxConfig {
    /// Parse a (possibly partial) JSON configuration.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Language part of `speech_lang` (`"hi"` for `"hi-IN"`), used for voice lookup.
    pub fn speech_language_code(&self) -> &str {
        self.speech_lang
            .split(['-', '_'])
            .next()
            .unwrap_or(&self.speech_lang)
    }
}
