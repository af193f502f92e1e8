//! Domain error types

use crate::debate::seat::Seat;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown persona: {0}")]
    PersonaNotFound(String),

    #[error("Duplicate persona id: {0}")]
    DuplicatePersona(String),

    #[error("Invalid topic: {0}")]
    InvalidTopic(String),

    #[error("Turn {index} belongs to seat {expected}, not seat {actual}")]
    SeatMismatch {
        index: usize,
        expected: Seat,
        actual: Seat,
    },

    #[error("Turn limit of {0} reached")]
    TurnLimitReached(usize),

    #[error("Operation cancelled")]
    Cancelled,
}

impl DomainError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, DomainError::Cancelled)
    }
}
