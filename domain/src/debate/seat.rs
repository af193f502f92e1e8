//! Seat value object

use serde::{Deserialize, Serialize};

/// One of the two fixed, alternating debate positions
///
/// A seat is a position, not a persona: the same persona may in principle
/// occupy either seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    A,
    B,
}

impl Seat {
    /// Seat due for the turn with the given index (A on even, B on odd)
    pub fn for_turn(index: usize) -> Self {
        if index % 2 == 0 { Seat::A } else { Seat::B }
    }

    pub fn opponent(self) -> Self {
        match self {
            Seat::A => Seat::B,
            Seat::B => Seat::A,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Seat::A => "A",
            Seat::B => "B",
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
