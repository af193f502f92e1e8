//! Debate domain.
//!
//! - [`seat::Seat`] — the two alternating debate positions
//! - [`entities::ConversationTurn`] — one generated utterance
//! - [`entities::ConversationState`] — topic, turns and turn limit
//! - [`entities::DebateStatus`] — run state of a debate

pub mod entities;
pub mod seat;
