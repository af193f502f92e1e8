//! Debate configuration from TOML (`[debate]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDebateConfig {
    /// Number of turns before the debate completes (default: 10)
    pub max_turns: usize,
    /// Pause between turns in seconds (default: 5)
    pub turn_delay_secs: u64,
    /// Persona id for seat A (default: "optimist")
    pub persona_a: String,
    /// Persona id for seat B (default: "skeptic")
    pub persona_b: String,
    /// Reply language tag, e.g. "fr-FR"
    pub language: Option<String>,
}

impl Default for FileDebateConfig {
    fn default() -> Self {
        Self {
            max_turns: 10,
            turn_delay_secs: 5,
            persona_a: "optimist".to_string(),
            persona_b: "skeptic".to_string(),
            language: None,
        }
    }
}
