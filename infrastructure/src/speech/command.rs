//! External command speech engine (espeak-ng and compatibles)

use async_trait::async_trait;
use debate_application::{SpeechError, SpeechSynthesizer, Utterance};
use debate_domain::{VoiceGender, VoiceInfo};
use std::process::Stdio;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::sync::OnceCell;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// espeak-ng pitch range is 0..=99 with 50 as default
const BASE_PITCH: f32 = 50.0;
/// espeak-ng speed in words per minute
const BASE_RATE: f32 = 175.0;
const MIN_RATE: f32 = 80.0;
const MAX_RATE: f32 = 450.0;

/// Speaks through an external program, one process per utterance.
///
/// `cancel` kills the running process; the pending `speak` then resolves `Ok`.
pub struct CommandSpeechSynthesizer {
    program: String,
    voices: OnceCell<Vec<VoiceInfo>>,
    current: Mutex<CancellationToken>,
}

impl CommandSpeechSynthesizer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            voices: OnceCell::new(),
            current: Mutex::new(CancellationToken::new()),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn current(&self) -> MutexGuard<'_, CancellationToken> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn unavailable(&self, e: std::io::Error) -> SpeechError {
        SpeechError::Unavailable(format!("{}: {}", self.program, e))
    }

    async fn list_voices(&self) -> Result<Vec<VoiceInfo>, SpeechError> {
        let output = Command::new(&self.program)
            .arg("--voices")
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| self.unavailable(e))?;

        if !output.status.success() {
            return Err(SpeechError::Unavailable(format!(
                "{} --voices exited with {}",
                self.program, output.status
            )));
        }

        let voices = parse_voice_list(&String::from_utf8_lossy(&output.stdout));
        debug!(program = %self.program, count = voices.len(), "Loaded voice list");
        Ok(voices)
    }
}

/// Command-line arguments for one utterance
fn speak_args(utterance: &Utterance) -> Vec<String> {
    let pitch = (BASE_PITCH * utterance.pitch).round().clamp(0.0, 99.0);
    let rate = (BASE_RATE * utterance.rate).round().clamp(MIN_RATE, MAX_RATE);

    let mut args = vec![
        "-p".to_string(),
        format!("{}", pitch as u32),
        "-s".to_string(),
        format!("{}", rate as u32),
    ];
    if let Some(voice) = &utterance.voice_id {
        args.push("-v".to_string());
        args.push(voice.clone());
    }
    args.push("--stdin".to_string());
    args
}

/// Parse the table printed by `espeak-ng --voices`.
///
/// ```text
/// Pty Language       Age/Gender VoiceName          File                 Other Languages
///  5  en-us           --/M      English_(America)  gmw/en-US            (en 3)
/// ```
pub fn parse_voice_list(output: &str) -> Vec<VoiceInfo> {
    output
        .lines()
        .skip_while(|line| !line.trim_start().starts_with("Pty"))
        .skip(1)
        .filter_map(|line| {
            let mut cols = line.split_whitespace();
            let _priority = cols.next()?;
            let language = cols.next()?;
            let gender = match cols.next()?.rsplit('/').next() {
                Some("F") => VoiceGender::Female,
                Some("M") => VoiceGender::Male,
                _ => VoiceGender::Unknown,
            };
            let name = cols.next()?.replace('_', " ");
            Some(VoiceInfo::new(language, name, language).with_gender(gender))
        })
        .collect()
}

#[async_trait]
impl SpeechSynthesizer for CommandSpeechSynthesizer {
    async fn voices(&self) -> Result<Vec<VoiceInfo>, SpeechError> {
        self.voices
            .get_or_try_init(|| self.list_voices())
            .await
            .cloned()
    }

    async fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError> {
        let token = self.current().clone();
        if token.is_cancelled() {
            return Ok(());
        }

        let mut child = Command::new(&self.program)
            .args(speak_args(utterance))
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| self.unavailable(e))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(utterance.text.as_bytes())
                .await
                .map_err(|e| SpeechError::Playback(e.to_string()))?;
        }

        let finished = tokio::select! {
            status = child.wait() => Some(status),
            _ = token.cancelled() => None,
        };

        match finished {
            Some(status) => {
                let status = status.map_err(|e| SpeechError::Playback(e.to_string()))?;
                if status.success() {
                    Ok(())
                } else {
                    Err(SpeechError::Playback(format!(
                        "{} exited with {}",
                        self.program, status
                    )))
                }
            }
            None => {
                let _ = child.kill().await;
                debug!("Utterance cancelled");
                Ok(())
            }
        }
    }

    fn cancel(&self) {
        let mut current = self.current();
        current.cancel();
        *current = CancellationToken::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VOICES: &str = "\
Pty Language       Age/Gender VoiceName          File                 Other Languages
 5  af              --/M      Afrikaans          gmw/af
 5  en-gb           --/F      English_(Great_Britain) gmw/en           (en 2)
 5  en-us           --/M      English_(America)  gmw/en-US            (en 3)
 5  fr-fr           --/-      French_(France)    roa/fr
";

    #[test]
    fn test_parse_voice_list() {
        let voices = parse_voice_list(VOICES);
        assert_eq!(voices.len(), 4);
        assert_eq!(voices[1].id, "en-gb");
        assert_eq!(voices[1].name, "English (Great Britain)");
        assert_eq!(voices[1].gender, VoiceGender::Female);
        assert_eq!(voices[2].language, "en-us");
        assert_eq!(voices[2].gender, VoiceGender::Male);
        assert_eq!(voices[3].gender, VoiceGender::Unknown);
    }

    #[test]
    fn test_parse_ignores_noise_before_header() {
        let voices = parse_voice_list("warning: no audio device\n\n");
        assert!(voices.is_empty());
    }

    #[test]
    fn test_speak_args_map_prosody() {
        let utterance = Utterance::new("hi")
            .with_voice(Some("en-us".into()))
            .with_prosody(1.1, 0.95);
        assert_eq!(
            speak_args(&utterance),
            vec!["-p", "55", "-s", "166", "-v", "en-us", "--stdin"]
        );

        let args = speak_args(&Utterance::new("hi").with_prosody(3.0, 0.1));
        assert_eq!(args, vec!["-p", "99", "-s", "80", "--stdin"]);
    }

    #[tokio::test]
    async fn test_missing_program_is_unavailable() {
        let synth = CommandSpeechSynthesizer::new("persona-debate-no-such-tts");
        assert!(matches!(
            synth.voices().await,
            Err(SpeechError::Unavailable(_))
        ));
        assert!(matches!(
            synth.speak(&Utterance::new("hello")).await,
            Err(SpeechError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_cancel_without_playback_is_noop() {
        let synth = CommandSpeechSynthesizer::new("persona-debate-no-such-tts");
        synth.cancel();
        synth.cancel();
    }
}
