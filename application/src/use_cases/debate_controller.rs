//! Debate Controller
//!
//! The facade the presentation layer drives: start, stop and resume a
//! debate, and read its status and transcript. Owns the driver task, which is
//! the single pending re-entry of the turn loop, and clears it together with
//! any in-flight narration on every transition.

use crate::ports::debate_event::DebateEvent;
use crate::ports::llm_gateway::GatewayError;
use crate::use_cases::lifecycle::{LifecycleError, RunToken};
use crate::use_cases::orchestrator::DebateOrchestrator;
use debate_domain::{ConversationTurn, DebateStatus, DomainError, Topic};
use serde_json::json;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::info;

/// Errors returned by controller commands
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DebateError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// User-facing debate facade
pub struct DebateController {
    orchestrator: Arc<DebateOrchestrator>,
    driver: Mutex<Option<JoinHandle<()>>>,
}

impl DebateController {
    pub fn new(orchestrator: Arc<DebateOrchestrator>) -> Self {
        Self {
            orchestrator,
            driver: Mutex::new(None),
        }
    }

    fn driver(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.driver.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start a fresh debate on `topic`, discarding any previous one.
    ///
    /// The credential and both seat personas are checked first; on failure
    /// nothing changes.
    pub fn start(&self, topic: &str) -> Result<(), DebateError> {
        let topic = Topic::new(topic)?;
        let settings = self.orchestrator.settings();

        if !settings.provider.has_credential() {
            return Err(GatewayError::Configuration(format!(
                "{} API Key is missing",
                settings.provider.provider.display_name()
            ))
            .into());
        }
        let registry = self.orchestrator.registry();
        let persona_a = registry.lookup(&settings.persona_a)?;
        let persona_b = registry.lookup(&settings.persona_b)?;

        self.clear_pending();
        let token = self
            .orchestrator
            .lifecycle()
            .start(topic.clone(), settings.max_turns);

        info!(
            topic = %topic,
            persona_a = %persona_a.id(),
            persona_b = %persona_b.id(),
            provider = %settings.provider.provider,
            max_turns = settings.max_turns,
            "Starting debate"
        );
        self.orchestrator.log(
            "debate_started",
            json!({
                "topic": topic.content(),
                "persona_a": persona_a.id().as_str(),
                "persona_b": persona_b.id().as_str(),
                "provider": settings.provider.provider.as_str(),
                "model": &settings.provider.model,
                "max_turns": settings.max_turns,
            }),
        );
        self.orchestrator.emit(DebateEvent::DebateStarted {
            topic: topic.into_content(),
        });

        self.spawn_driver(token);
        Ok(())
    }

    /// Stop the running debate. Returns `false` if nothing was running.
    pub fn stop(&self) -> bool {
        if !self.orchestrator.lifecycle().stop() {
            return false;
        }
        self.clear_pending();

        let turns = self.orchestrator.lifecycle().turn_count();
        info!(turns, "Debate stopped");
        self.orchestrator
            .log("debate_stopped", json!({ "turns": turns }));
        self.orchestrator.emit(DebateEvent::DebateStopped);
        true
    }

    /// Continue a paused debate with its topic and history
    pub fn resume(&self) -> Result<(), DebateError> {
        let status = self.orchestrator.lifecycle().status();
        if !status.is_resumable() {
            return Err(LifecycleError::NotResumable(status).into());
        }
        self.clear_pending();
        let token = self.orchestrator.lifecycle().resume()?;

        let turns = self.orchestrator.lifecycle().turn_count();
        info!(turns, "Debate resumed");
        self.orchestrator
            .log("debate_resumed", json!({ "turns": turns }));
        self.orchestrator.emit(DebateEvent::DebateResumed { turns });

        self.spawn_driver(token);
        Ok(())
    }

    /// Cut the current utterance short without touching the debate
    pub fn silence(&self) {
        self.orchestrator.narrator().silence();
    }

    pub fn status(&self) -> DebateStatus {
        self.orchestrator.lifecycle().status()
    }

    pub fn transcript(&self) -> Vec<ConversationTurn> {
        self.orchestrator.lifecycle().transcript()
    }

    pub fn topic(&self) -> Option<Topic> {
        self.orchestrator.lifecycle().topic()
    }

    /// Wait for the current driver task to finish
    pub async fn wait(&self) {
        let handle = self.driver().take();
        if let Some(handle) = handle {
            let _ = handle.await;
        }
    }

    fn spawn_driver(&self, token: RunToken) {
        let orchestrator = Arc::clone(&self.orchestrator);
        let handle = tokio::spawn(async move { orchestrator.drive(token).await });
        if let Some(old) = self.driver().replace(handle) {
            old.abort();
        }
    }

    fn clear_pending(&self) {
        if let Some(handle) = self.driver().take() {
            handle.abort();
        }
        self.orchestrator.narrator().silence();
    }
}

impl Drop for DebateController {
    fn drop(&mut self) {
        if let Some(handle) = self.driver().take() {
            handle.abort();
        }
    }
}
