//! Speech synthesis port
//!
//! The narrator drives an engine through this trait. `speak` resolves when
//! playback has finished (or was cut short by `cancel`).

use async_trait::async_trait;
use debate_domain::VoiceInfo;
use thiserror::Error;

/// Errors raised by a speech engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpeechError {
    #[error("Speech engine unavailable: {0}")]
    Unavailable(String),

    #[error("Playback failed: {0}")]
    Playback(String),
}

/// One utterance to be spoken
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    /// Voice id from [`SpeechSynthesizer::voices`]; `None` uses the engine default
    pub voice_id: Option<String>,
    /// Relative pitch, 1.0 is the engine default
    pub pitch: f32,
    /// Relative rate, 1.0 is the engine default
    pub rate: f32,
}

impl Utterance {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice_id: None,
            pitch: 1.0,
            rate: 1.0,
        }
    }

    pub fn with_voice(mut self, voice_id: Option<String>) -> Self {
        self.voice_id = voice_id;
        self
    }

    pub fn with_prosody(mut self, pitch: f32, rate: f32) -> Self {
        self.pitch = pitch;
        self.rate = rate;
        self
    }
}

/// Port for a text-to-speech engine
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Voices currently offered by the engine
    async fn voices(&self) -> Result<Vec<VoiceInfo>, SpeechError>;

    /// Speak an utterance, resolving when playback ends
    async fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError>;

    /// Stop any in-flight utterance; a no-op when nothing is playing
    fn cancel(&self);
}
