//! Settings port
//!
//! The orchestrator asks for a fresh [`DebateSettings`] snapshot whenever it
//! needs configuration, so live edits apply from the next turn on.

use crate::config::DebateSettings;

/// Source of the current debate settings
pub trait SettingsPort: Send + Sync {
    fn snapshot(&self) -> DebateSettings;
}

/// Runtime edits made while a debate is running
pub trait SettingsControl: SettingsPort {
    fn set_muted(&self, muted: bool);

    fn set_turn_delay(&self, delay: std::time::Duration);
}
