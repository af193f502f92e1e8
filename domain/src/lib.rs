//! Domain layer for persona-debate
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Seats and Personas
//!
//! A debate has exactly two **seats** (A and B) that alternate strictly,
//! A on even turn indices and B on odd ones. Each seat is assigned a
//! **persona** from a closed registry. The seat, not the persona, decides
//! who "I" am when the history is replayed to the next speaker.
//!
//! ## History Thread
//!
//! Every generation call sees the whole debate so far, re-tagged from the
//! acting seat's point of view. See [`prompt::thread::HistoryThreadBuilder`].

pub mod config;
pub mod core;
pub mod debate;
pub mod narration;
pub mod persona;
pub mod prompt;
pub mod providers;
pub mod session;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::{error::DomainError, language::Language, string::preview, topic::Topic};
pub use debate::{
    entities::{ConversationState, ConversationTurn, DebateStatus},
    seat::Seat,
};
pub use narration::voice::{
    GenderPreference, VoiceGender, VoiceInfo, prosody_for, select_voice,
};
pub use persona::registry::{Persona, PersonaId, PersonaRegistry};
pub use prompt::{template::PromptTemplate, thread::HistoryThreadBuilder};
pub use providers::{Credential, ProviderConfig, ProviderFamily, ProviderKind};
pub use session::entities::{GenerationRequest, Message, Role};
