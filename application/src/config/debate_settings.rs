//! Debate settings — the per-turn configuration snapshot.
//!
//! [`DebateSettings`] is what the settings collaborator hands out. The
//! orchestrator takes a fresh snapshot at every turn, so edits made while a
//! debate is running (provider, delay, mute) apply from the next turn on.

use debate_domain::{GenderPreference, Language, ProviderConfig, Seat};
use std::time::Duration;

/// Default number of turns in a debate.
pub const DEFAULT_MAX_TURNS: usize = 10;

/// Default pause between turns.
pub const DEFAULT_TURN_DELAY: Duration = Duration::from_secs(5);

/// Narration controls.
#[derive(Debug, Clone, PartialEq)]
pub struct NarrationSettings {
    pub muted: bool,
    /// Language used to pick a voice; `None` leaves any voice eligible.
    pub language: Option<Language>,
    pub gender_a: GenderPreference,
    pub gender_b: GenderPreference,
}

impl Default for NarrationSettings {
    fn default() -> Self {
        Self {
            muted: false,
            language: None,
            gender_a: GenderPreference::default_for(Seat::A),
            gender_b: GenderPreference::default_for(Seat::B),
        }
    }
}

impl NarrationSettings {
    pub fn gender_for(&self, seat: Seat) -> GenderPreference {
        match seat {
            Seat::A => self.gender_a,
            Seat::B => self.gender_b,
        }
    }
}

/// Configuration snapshot for one turn.
#[derive(Debug, Clone, PartialEq)]
pub struct DebateSettings {
    pub provider: ProviderConfig,
    pub persona_a: String,
    pub persona_b: String,
    pub max_turns: usize,
    pub turn_delay: Duration,
    /// Reply language appended to every system instruction.
    pub language: Option<Language>,
    pub narration: NarrationSettings,
}

impl Default for DebateSettings {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            persona_a: "optimist".to_string(),
            persona_b: "skeptic".to_string(),
            max_turns: DEFAULT_MAX_TURNS,
            turn_delay: DEFAULT_TURN_DELAY,
            language: None,
            narration: NarrationSettings::default(),
        }
    }
}

impl DebateSettings {
    // ==================== Builder Methods ====================

    pub fn with_provider(mut self, provider: ProviderConfig) -> Self {
        self.provider = provider;
        self
    }

    pub fn with_personas(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.persona_a = a.into();
        self.persona_b = b.into();
        self
    }

    pub fn with_max_turns(mut self, max: usize) -> Self {
        self.max_turns = max;
        self
    }

    pub fn with_turn_delay(mut self, delay: Duration) -> Self {
        self.turn_delay = delay;
        self
    }

    pub fn with_language(mut self, language: Option<Language>) -> Self {
        self.language = language;
        self
    }

    pub fn with_narration(mut self, narration: NarrationSettings) -> Self {
        self.narration = narration;
        self
    }

    // ==================== Accessors ====================

    /// Persona id assigned to a seat
    pub fn persona_for(&self, seat: Seat) -> &str {
        match seat {
            Seat::A => &self.persona_a,
            Seat::B => &self.persona_b,
        }
    }

    /// Language for voice selection: the narration language, else the reply language
    pub fn narration_language(&self) -> Option<&Language> {
        self.narration.language.as_ref().or(self.language.as_ref())
    }

    /// Narration settings with the voice language already resolved
    pub fn resolved_narration(&self) -> NarrationSettings {
        NarrationSettings {
            language: self.narration_language().cloned(),
            ..self.narration.clone()
        }
    }
}
