//! Narrator
//!
//! Speaks each generated turn through the [`SpeechSynthesizer`] port.
//! Narration is best effort: failures are logged and never reach the turn loop.

use crate::config::NarrationSettings;
use crate::ports::speech::{SpeechSynthesizer, Utterance};
use debate_domain::{Seat, prosody_for, select_voice};
use std::sync::Arc;
use tracing::{debug, warn};

/// Sequences speech for debate turns, one utterance at a time
pub struct Narrator {
    synthesizer: Arc<dyn SpeechSynthesizer>,
}

impl Narrator {
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        Self { synthesizer }
    }

    /// Speak `text` with the voice for `seat`.
    ///
    /// Resolves when playback ends, immediately when muted, and on error.
    pub async fn speak(&self, text: &str, seat: Seat, settings: &NarrationSettings) {
        if settings.muted || text.trim().is_empty() {
            return;
        }

        // Only one utterance may play at a time
        self.synthesizer.cancel();

        let voices = match self.synthesizer.voices().await {
            Ok(voices) => voices,
            Err(e) => {
                warn!(error = %e, "Could not list voices, using engine default");
                Vec::new()
            }
        };

        let voice = select_voice(
            &voices,
            settings.language.as_ref(),
            settings.gender_for(seat),
        );
        let (pitch, rate) = prosody_for(seat);
        debug!(
            seat = %seat,
            voice = voice.map(|v| v.id.as_str()).unwrap_or("default"),
            "Narrating turn"
        );

        let utterance = Utterance::new(text)
            .with_voice(voice.map(|v| v.id.clone()))
            .with_prosody(pitch, rate);

        if let Err(e) = self.synthesizer.speak(&utterance).await {
            warn!(error = %e, seat = %seat, "Narration failed");
        }
    }

    /// Stop the in-flight utterance, if any
    pub fn silence(&self) {
        self.synthesizer.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::speech::SpeechError;
    use async_trait::async_trait;
    use debate_domain::{Language, VoiceGender, VoiceInfo};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct RecordingSynth {
        voices: Vec<VoiceInfo>,
        spoken: Mutex<Vec<Utterance>>,
        cancels: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl SpeechSynthesizer for RecordingSynth {
        async fn voices(&self) -> Result<Vec<VoiceInfo>, SpeechError> {
            Ok(self.voices.clone())
        }

        async fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError> {
            self.spoken.lock().unwrap().push(utterance.clone());
            if self.fail {
                Err(SpeechError::Playback("device busy".into()))
            } else {
                Ok(())
            }
        }

        fn cancel(&self) {
            self.cancels.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn voices() -> Vec<VoiceInfo> {
        vec![
            VoiceInfo::new("en-m", "English", "en-US").with_gender(VoiceGender::Male),
            VoiceInfo::new("en-f", "English", "en-US").with_gender(VoiceGender::Female),
        ]
    }

    #[tokio::test]
    async fn test_muted_speaks_nothing() {
        let synth = Arc::new(RecordingSynth::default());
        let narrator = Narrator::new(synth.clone());
        let settings = NarrationSettings {
            muted: true,
            ..Default::default()
        };

        narrator.speak("hello", Seat::A, &settings).await;
        assert!(synth.spoken.lock().unwrap().is_empty());
        assert_eq!(synth.cancels.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_voice_and_prosody_per_seat() {
        let synth = Arc::new(RecordingSynth {
            voices: voices(),
            ..Default::default()
        });
        let narrator = Narrator::new(synth.clone());
        let settings = NarrationSettings {
            language: Some(Language::new("en-US")),
            ..Default::default()
        };

        narrator.speak("first", Seat::A, &settings).await;
        narrator.speak("second", Seat::B, &settings).await;

        let spoken = synth.spoken.lock().unwrap();
        assert_eq!(spoken[0].voice_id.as_deref(), Some("en-f"));
        assert_eq!((spoken[0].pitch, spoken[0].rate), (1.1, 1.0));
        assert_eq!(spoken[1].voice_id.as_deref(), Some("en-m"));
        assert_eq!((spoken[1].pitch, spoken[1].rate), (0.9, 0.95));
        // cancel before every utterance
        assert_eq!(synth.cancels.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_unmatched_language_uses_default_voice() {
        let synth = Arc::new(RecordingSynth {
            voices: voices(),
            ..Default::default()
        });
        let narrator = Narrator::new(synth.clone());
        let settings = NarrationSettings {
            language: Some(Language::new("ja-JP")),
            ..Default::default()
        };

        narrator.speak("konnichiwa", Seat::A, &settings).await;
        assert_eq!(synth.spoken.lock().unwrap()[0].voice_id, None);
    }

    #[tokio::test]
    async fn test_playback_error_is_swallowed() {
        let synth = Arc::new(RecordingSynth {
            fail: true,
            ..Default::default()
        });
        let narrator = Narrator::new(synth.clone());

        narrator
            .speak("hello", Seat::B, &NarrationSettings::default())
            .await;
        assert_eq!(synth.spoken.lock().unwrap().len(), 1);
    }
}
