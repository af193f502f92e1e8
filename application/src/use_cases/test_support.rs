//! Test doubles shared by the use case tests

use crate::config::DebateSettings;
use crate::ports::debate_event::{DebateEvent, DebateEventReceiver};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::settings::SettingsPort;
use crate::ports::speech::{SpeechError, SpeechSynthesizer, Utterance};
use async_trait::async_trait;
use debate_domain::{
    Credential, GenerationRequest, ProviderConfig, ProviderKind, VoiceInfo,
};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

/// Gateway returning queued replies, then `reply N` once the queue is empty
#[derive(Default)]
pub(crate) struct ScriptedGateway {
    replies: Mutex<VecDeque<Result<String, GatewayError>>>,
    pub requests: Mutex<Vec<(GenerationRequest, ProviderConfig)>>,
    /// When set, every call waits for a notification before answering
    pub gate: Option<Arc<Notify>>,
    pub entered: Arc<Notify>,
}

impl ScriptedGateway {
    pub fn with_replies(replies: Vec<Result<String, GatewayError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            ..Default::default()
        }
    }

    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn request(&self, i: usize) -> GenerationRequest {
        self.requests.lock().unwrap()[i].0.clone()
    }

    pub fn config(&self, i: usize) -> ProviderConfig {
        self.requests.lock().unwrap()[i].1.clone()
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn generate(
        &self,
        request: &GenerationRequest,
        config: &ProviderConfig,
    ) -> Result<String, GatewayError> {
        let n = {
            let mut requests = self.requests.lock().unwrap();
            requests.push((request.clone(), config.clone()));
            requests.len()
        };
        self.entered.notify_one();
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(format!("reply {}", n)))
    }
}

/// Synthesizer that records utterances and cancellations
#[derive(Default)]
pub(crate) struct CountingSynth {
    pub spoken: Mutex<Vec<Utterance>>,
    pub cancels: AtomicUsize,
}

impl CountingSynth {
    pub fn spoken_count(&self) -> usize {
        self.spoken.lock().unwrap().len()
    }

    pub fn cancel_count(&self) -> usize {
        self.cancels.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SpeechSynthesizer for CountingSynth {
    async fn voices(&self) -> Result<Vec<VoiceInfo>, SpeechError> {
        Ok(Vec::new())
    }

    async fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError> {
        self.spoken.lock().unwrap().push(utterance.clone());
        Ok(())
    }

    fn cancel(&self) {
        self.cancels.fetch_add(1, Ordering::SeqCst);
    }
}

/// Synthesizer that holds one utterance open until `gate` is notified
pub(crate) struct GatedSynth {
    /// Index of the utterance to hold
    hold_at: usize,
    pub spoken: Mutex<Vec<Utterance>>,
    pub cancels: AtomicUsize,
    pub gate: Notify,
    pub entered: Notify,
}

impl GatedSynth {
    pub fn holding(hold_at: usize) -> Self {
        Self {
            hold_at,
            spoken: Mutex::new(Vec::new()),
            cancels: AtomicUsize::new(0),
            gate: Notify::new(),
            entered: Notify::new(),
        }
    }

    pub fn spoken_count(&self) -> usize {
        self.spoken.lock().unwrap().len()
    }

    pub fn cancel_count(&self) -> usize {
        self.cancels.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SpeechSynthesizer for GatedSynth {
    async fn voices(&self) -> Result<Vec<VoiceInfo>, SpeechError> {
        Ok(Vec::new())
    }

    async fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError> {
        let index = {
            let mut spoken = self.spoken.lock().unwrap();
            spoken.push(utterance.clone());
            spoken.len() - 1
        };
        if index == self.hold_at {
            self.entered.notify_one();
            self.gate.notified().await;
        }
        Ok(())
    }

    fn cancel(&self) {
        self.cancels.fetch_add(1, Ordering::SeqCst);
    }
}

/// Mutable settings source
pub(crate) struct TestSettings(Mutex<DebateSettings>);

impl TestSettings {
    pub fn new(settings: DebateSettings) -> Self {
        Self(Mutex::new(settings))
    }

    pub fn update(&self, f: impl FnOnce(&mut DebateSettings)) {
        f(&mut *self.0.lock().unwrap());
    }
}

impl SettingsPort for TestSettings {
    fn snapshot(&self) -> DebateSettings {
        self.0.lock().unwrap().clone()
    }
}

/// Fast settings with a credential: zero delay, `max_turns` turns
pub(crate) fn fast_settings(max_turns: usize) -> DebateSettings {
    DebateSettings::default()
        .with_provider(
            ProviderConfig::new(ProviderKind::OpenAi).with_credential(Credential::new("sk-test")),
        )
        .with_max_turns(max_turns)
        .with_turn_delay(Duration::ZERO)
}

pub(crate) fn drain(rx: &mut DebateEventReceiver) -> Vec<DebateEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}
