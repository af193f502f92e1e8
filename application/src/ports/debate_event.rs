//! Debate events emitted for the presentation layer
//!
//! These events form the output port from the application layer to the
//! presentation layer. They are sent over an unbounded channel, so emitting
//! never blocks the turn loop; a closed receiver is ignored.

use debate_domain::Seat;
use tokio::sync::mpsc;

/// Category of a user-visible failure notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebateErrorKind {
    /// Missing credential, unknown persona, or other settings problem
    Configuration,
    /// Network failure or non-success status from the provider
    Transport,
    /// The provider answered without usable text
    ProviderResponse,
    /// Internal only; never shown to the user
    Cancelled,
}

impl DebateErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DebateErrorKind::Configuration => "configuration",
            DebateErrorKind::Transport => "transport",
            DebateErrorKind::ProviderResponse => "provider_response",
            DebateErrorKind::Cancelled => "cancelled",
        }
    }
}

/// Events emitted by the debate use cases for the presentation layer to render
#[derive(Debug, Clone, PartialEq)]
pub enum DebateEvent {
    /// A fresh debate began
    DebateStarted { topic: String },
    /// A generation call is in flight for `seat`
    PlaceholderShown { seat: Seat, speaker_name: String },
    /// The in-flight placeholder for `seat` should disappear
    PlaceholderRemoved { seat: Seat },
    /// A turn was appended to the history
    TurnAppended {
        index: usize,
        seat: Seat,
        speaker_name: String,
        text: String,
    },
    /// The turn limit was reached
    DebateCompleted { turns: usize },
    /// The user stopped the debate
    DebateStopped,
    /// A paused debate continues
    DebateResumed { turns: usize },
    /// A turn failed; the debate is paused
    DebateError {
        kind: DebateErrorKind,
        message: String,
    },
}

/// Sender half used by the use cases
pub type DebateEventSender = mpsc::UnboundedSender<DebateEvent>;

/// Receiver half consumed by the presentation layer
pub type DebateEventReceiver = mpsc::UnboundedReceiver<DebateEvent>;

/// Create a connected event channel
pub fn debate_event_channel() -> (DebateEventSender, DebateEventReceiver) {
    mpsc::unbounded_channel()
}
