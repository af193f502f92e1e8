//! Debate domain entities

use crate::core::error::DomainError;
use crate::core::topic::Topic;
use crate::debate::seat::Seat;
use crate::persona::registry::{Persona, PersonaId};
use serde::{Deserialize, Serialize};

/// Run state of a debate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DebateStatus {
    /// No debate has been started yet
    Idle,
    /// Turns are being generated
    Running,
    /// Stopped by the user or halted by a failure; resumable
    Paused,
    /// The turn limit was reached; only a new start leaves this state
    Completed,
}

impl DebateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DebateStatus::Idle => "idle",
            DebateStatus::Running => "running",
            DebateStatus::Paused => "paused",
            DebateStatus::Completed => "completed",
        }
    }

    pub fn is_resumable(&self) -> bool {
        matches!(self, DebateStatus::Paused)
    }
}

impl std::fmt::Display for DebateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One generated utterance (Entity, immutable once created)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    index: usize,
    seat: Seat,
    persona_id: PersonaId,
    speaker_name: String,
    text: String,
}

impl ConversationTurn {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn persona_id(&self) -> &PersonaId {
        &self.persona_id
    }

    pub fn speaker_name(&self) -> &str {
        &self.speaker_name
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Accumulated state of one debate (Entity)
///
/// The turn count is the length of the turn list, so the two can never
/// disagree. Turns can only be added through [`ConversationState::record`],
/// which assigns the next index and enforces seat parity and the turn limit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationState {
    topic: Topic,
    turns: Vec<ConversationTurn>,
    max_turns: usize,
}

impl ConversationState {
    pub fn new(topic: Topic, max_turns: usize) -> Self {
        Self {
            topic,
            turns: Vec::new(),
            max_turns,
        }
    }

    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    pub fn max_turns(&self) -> usize {
        self.max_turns
    }

    /// Whether the turn limit has been reached
    pub fn is_finished(&self) -> bool {
        self.turn_count() >= self.max_turns
    }

    /// Seat due for the next turn
    pub fn next_seat(&self) -> Seat {
        Seat::for_turn(self.turn_count())
    }

    /// Append a generated turn for `seat`, spoken by `persona`.
    ///
    /// Fails if the limit is reached or `seat` is not the seat due.
    pub fn record(
        &mut self,
        seat: Seat,
        persona: &Persona,
        text: impl Into<String>,
    ) -> Result<&ConversationTurn, DomainError> {
        let index = self.turn_count();
        if index >= self.max_turns {
            return Err(DomainError::TurnLimitReached(self.max_turns));
        }
        let expected = Seat::for_turn(index);
        if seat != expected {
            return Err(DomainError::SeatMismatch {
                index,
                expected,
                actual: seat,
            });
        }

        self.turns.push(ConversationTurn {
            index,
            seat,
            persona_id: persona.id().clone(),
            speaker_name: persona.display_name().to_string(),
            text: text.into(),
        });
        Ok(&self.turns[index])
    }
}
