//! Speech synthesis adapters
//!
//! [`CommandSpeechSynthesizer`] drives an espeak-ng compatible program;
//! [`NullSpeechSynthesizer`] accepts every utterance and plays nothing.

mod command;

pub use command::{CommandSpeechSynthesizer, parse_voice_list};

use async_trait::async_trait;
use debate_application::{SpeechError, SpeechSynthesizer, Utterance};
use debate_domain::VoiceInfo;

/// Silent engine for `engine = "none"` and headless runs
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSpeechSynthesizer;

#[async_trait]
impl SpeechSynthesizer for NullSpeechSynthesizer {
    async fn voices(&self) -> Result<Vec<VoiceInfo>, SpeechError> {
        Ok(Vec::new())
    }

    async fn speak(&self, _utterance: &Utterance) -> Result<(), SpeechError> {
        Ok(())
    }

    fn cancel(&self) {}
}
