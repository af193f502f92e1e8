//! Debate Orchestrator
//!
//! Composes the history thread builder, the LLM gateway, the lifecycle
//! controller and the narrator into one end-to-end turn:
//!
//! ```text
//! check live ─▶ resolve seat persona ─▶ build thread ─▶ generate ─▶ re-check live
//!                                                                       │
//!      schedule next ◀── narrate ◀── append turn ◀───────────────────────┘
//! ```
//!
//! Every suspension point (generation, narration, inter-turn delay) races the
//! run's cancellation token. Turns never overlap: the driver runs one turn to
//! the end before arming the next delay.

use crate::config::DebateSettings;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::debate_event::{DebateErrorKind, DebateEvent, DebateEventSender};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::settings::SettingsPort;
use crate::use_cases::lifecycle::{LifecycleController, RunToken};
use crate::use_cases::narration::Narrator;
use debate_domain::{HistoryThreadBuilder, PersonaRegistry, preview};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// What happened to one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The turn was appended; the next one is due after the delay
    Scheduled(Duration),
    /// The turn limit was reached and the debate completed
    Completed,
    /// The turn failed and the debate was paused
    Halted,
    /// The run was stopped or superseded; nothing was recorded
    Discarded,
}

/// Runs debate turns against the current settings
pub struct DebateOrchestrator {
    registry: Arc<PersonaRegistry>,
    gateway: Arc<dyn LlmGateway>,
    narrator: Arc<Narrator>,
    settings: Arc<dyn SettingsPort>,
    lifecycle: Arc<LifecycleController>,
    /// Channel sender for debate events
    tx: DebateEventSender,
    /// Structured transcript logger
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl DebateOrchestrator {
    pub fn new(
        registry: Arc<PersonaRegistry>,
        gateway: Arc<dyn LlmGateway>,
        narrator: Arc<Narrator>,
        settings: Arc<dyn SettingsPort>,
        tx: DebateEventSender,
    ) -> Self {
        Self {
            registry,
            gateway,
            narrator,
            settings,
            lifecycle: Arc::new(LifecycleController::new()),
            tx,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn lifecycle(&self) -> &LifecycleController {
        &self.lifecycle
    }

    pub fn narrator(&self) -> &Narrator {
        &self.narrator
    }

    pub fn registry(&self) -> &PersonaRegistry {
        &self.registry
    }

    pub fn settings(&self) -> DebateSettings {
        self.settings.snapshot()
    }

    pub(crate) fn emit(&self, event: DebateEvent) {
        let _ = self.tx.send(event);
    }

    pub(crate) fn log(&self, event_type: &'static str, payload: serde_json::Value) {
        self.conversation_logger
            .log(ConversationEvent::new(event_type, payload));
    }

    /// Run turns until the debate completes, halts, or `token` is cancelled
    pub async fn drive(&self, token: RunToken) {
        loop {
            match self.run_turn(&token).await {
                TurnOutcome::Scheduled(delay) => {
                    tokio::select! {
                        biased;
                        _ = token.cancelled() => {
                            debug!(epoch = token.epoch(), "Pending turn cancelled");
                            return;
                        }
                        _ = tokio::time::sleep(delay) => {}
                    }
                }
                outcome => {
                    debug!(epoch = token.epoch(), ?outcome, "Driver finished");
                    return;
                }
            }
        }
    }

    /// Run one turn for the run identified by `token`
    pub async fn run_turn(&self, token: &RunToken) -> TurnOutcome {
        let Some(ctx) = self.lifecycle.turn_context(token) else {
            return TurnOutcome::Discarded;
        };
        if ctx.is_finished() {
            return self.finish(token);
        }

        let settings = self.settings.snapshot();
        let seat = ctx.seat();
        let persona = match self.registry.lookup(settings.persona_for(seat)) {
            Ok(persona) => persona.clone(),
            Err(e) => {
                return self.fail(token, DebateErrorKind::Configuration, e.to_string());
            }
        };

        let request = HistoryThreadBuilder::new(&ctx.topic)
            .with_language(settings.language.as_ref())
            .build(&persona, seat, &ctx.turns);

        info!(
            turn = ctx.turn_count(),
            seat = %seat,
            persona = %persona.id(),
            provider = %settings.provider.provider,
            model = %settings.provider.model,
            "Generating turn"
        );
        self.emit(DebateEvent::PlaceholderShown {
            seat,
            speaker_name: persona.display_name().to_string(),
        });

        let result = tokio::select! {
            biased;
            _ = token.cancelled() => Err(GatewayError::Cancelled),
            result = self.gateway.generate(&request, &settings.provider) => result,
        };

        self.emit(DebateEvent::PlaceholderRemoved { seat });

        if !self.lifecycle.is_live(token) {
            debug!(turn = ctx.turn_count(), "Run no longer live, discarding response");
            return TurnOutcome::Discarded;
        }

        let text = match result {
            Ok(text) => text,
            Err(e) if e.is_cancelled() => return TurnOutcome::Discarded,
            Err(e) => {
                let message = format!("Error ({}): {}", settings.provider.provider, e);
                return self.fail(token, e.classify(), message);
            }
        };

        let turn = match self.lifecycle.append_turn(token, seat, &persona, text) {
            Ok(Some(turn)) => turn,
            Ok(None) => return TurnOutcome::Discarded,
            Err(e) => {
                warn!(error = %e, "Turn rejected by conversation state");
                return TurnOutcome::Discarded;
            }
        };

        debug!(
            index = turn.index(),
            text = %preview(turn.text(), 80),
            "Turn appended"
        );
        self.emit(DebateEvent::TurnAppended {
            index: turn.index(),
            seat,
            speaker_name: turn.speaker_name().to_string(),
            text: turn.text().to_string(),
        });
        self.log(
            "turn_appended",
            json!({
                "index": turn.index(),
                "seat": seat.as_str(),
                "persona": turn.persona_id().as_str(),
                "speaker": turn.speaker_name(),
                "text": turn.text(),
            }),
        );

        let narration = settings.resolved_narration();
        tokio::select! {
            biased;
            _ = token.cancelled() => return TurnOutcome::Discarded,
            _ = self.narrator.speak(turn.text(), seat, &narration) => {}
        }

        if turn.index() + 1 >= ctx.max_turns {
            return self.finish(token);
        }
        if !self.lifecycle.is_live(token) {
            return TurnOutcome::Discarded;
        }

        // Re-read so a delay changed mid-turn applies to this wait
        TurnOutcome::Scheduled(self.settings.snapshot().turn_delay)
    }

    fn finish(&self, token: &RunToken) -> TurnOutcome {
        if !self.lifecycle.complete(token) {
            return TurnOutcome::Discarded;
        }
        let turns = self.lifecycle.turn_count();
        info!(turns, "Debate completed");
        self.emit(DebateEvent::DebateCompleted { turns });
        self.log("debate_completed", json!({ "turns": turns }));
        TurnOutcome::Completed
    }

    fn fail(&self, token: &RunToken, kind: DebateErrorKind, message: String) -> TurnOutcome {
        if !self.lifecycle.halt(token) {
            return TurnOutcome::Discarded;
        }
        warn!(kind = kind.as_str(), %message, "Turn failed, debate paused");
        self.log(
            "debate_error",
            json!({ "kind": kind.as_str(), "message": &message }),
        );
        self.emit(DebateEvent::DebateError { kind, message });
        TurnOutcome::Halted
    }
}
