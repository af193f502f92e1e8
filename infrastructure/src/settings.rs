//! Live settings store
//!
//! Implements [`SettingsPort`] over an `RwLock`. The orchestrator takes a
//! snapshot each turn, so edits apply from the next turn on.

use debate_application::{DebateSettings, SettingsControl, SettingsPort};
use std::sync::{PoisonError, RwLock};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Default)]
pub struct LiveSettings {
    inner: RwLock<DebateSettings>,
}

impl LiveSettings {
    pub fn new(settings: DebateSettings) -> Self {
        Self {
            inner: RwLock::new(settings),
        }
    }

    /// Apply an edit to the stored settings
    pub fn update(&self, f: impl FnOnce(&mut DebateSettings)) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard);
    }

    pub fn is_muted(&self) -> bool {
        self.snapshot().narration.muted
    }
}

impl SettingsControl for LiveSettings {
    fn set_muted(&self, muted: bool) {
        debug!(muted, "Narration mute changed");
        self.update(|s| s.narration.muted = muted);
    }

    fn set_turn_delay(&self, delay: Duration) {
        debug!(delay_ms = delay.as_millis() as u64, "Turn delay changed");
        self.update(|s| s.turn_delay = delay);
    }
}

impl SettingsPort for LiveSettings {
    fn snapshot(&self) -> DebateSettings {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
