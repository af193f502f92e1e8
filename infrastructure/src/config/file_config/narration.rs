//! Narration configuration from TOML (`[narration]` section)

use debate_domain::{GenderPreference, Seat};
use serde::{Deserialize, Serialize};

/// Speech engine selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileSpeechEngine {
    /// External espeak-ng compatible command
    #[default]
    Command,
    /// No audio
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileNarrationConfig {
    /// Start muted (default: false)
    pub muted: bool,
    /// Voice language tag; falls back to `debate.language`
    pub language: Option<String>,
    /// Voice gender for seat A: female, male or any (default: "female")
    pub gender_a: String,
    /// Voice gender for seat B: female, male or any (default: "male")
    pub gender_b: String,
    pub engine: FileSpeechEngine,
    /// Program used by the command engine (default: "espeak-ng")
    pub command: String,
}

impl Default for FileNarrationConfig {
    fn default() -> Self {
        Self {
            muted: false,
            language: None,
            gender_a: "female".to_string(),
            gender_b: "male".to_string(),
            engine: FileSpeechEngine::default(),
            command: "espeak-ng".to_string(),
        }
    }
}

impl FileNarrationConfig {
    fn raw_gender(&self, seat: Seat) -> &str {
        match seat {
            Seat::A => &self.gender_a,
            Seat::B => &self.gender_b,
        }
    }

    /// Parsed gender preference, falling back to the seat default
    pub fn gender_for(&self, seat: Seat) -> GenderPreference {
        self.raw_gender(seat)
            .parse()
            .unwrap_or_else(|_| GenderPreference::default_for(seat))
    }

    /// Parse error for a seat's gender setting, if any
    pub fn gender_error(&self, seat: Seat) -> Option<String> {
        self.raw_gender(seat).parse::<GenderPreference>().err()
    }
}
