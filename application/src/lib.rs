//! Application layer for persona-debate
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DebateSettings, NarrationSettings};
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    debate_event::{
        DebateErrorKind, DebateEvent, DebateEventReceiver, DebateEventSender,
        debate_event_channel,
    },
    llm_gateway::{GatewayError, LlmGateway},
    settings::{SettingsControl, SettingsPort},
    speech::{SpeechError, SpeechSynthesizer, Utterance},
};
pub use use_cases::debate_controller::{DebateController, DebateError};
pub use use_cases::lifecycle::{LifecycleController, LifecycleError, RunToken};
pub use use_cases::narration::Narrator;
pub use use_cases::orchestrator::{DebateOrchestrator, TurnOutcome};
