//! Narration voice model.
//!
//! - [`voice::VoiceInfo`] — a voice offered by the speech engine
//! - [`voice::select_voice`] — pure voice selection for a seat

pub mod voice;
