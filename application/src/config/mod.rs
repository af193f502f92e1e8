//! Application-level configuration.
//!
//! This module provides the settings snapshot that use cases read at the
//! start of every turn:
//!
//! - [`DebateSettings`] — provider, seat personas, turn limit and pacing
//! - [`NarrationSettings`] — mute flag, narration language, per-seat voice gender

pub mod debate_settings;

pub use debate_settings::{DebateSettings, NarrationSettings};
