//! Port for the structured debate transcript.
//!
//! Defines the [`ConversationLogger`] trait for recording debate events
//! (start, appended turns, completion, stops and failures) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the full
//! transcript in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured transcript event.
///
/// Each event has a type string and a JSON payload with event-specific
/// fields. The logger adds the timestamp when writing.
pub struct ConversationEvent {
    /// Event type identifier (e.g., "debate_started", "turn_appended").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging transcript events.
///
/// The `log` method is synchronous and infallible; implementations swallow
/// their own write failures.
pub trait ConversationLogger: Send + Sync {
    /// Record a transcript event.
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when no transcript is requested.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
