//! The two seats at the table.

use serde::{Deserialize, Serialize};

/// One of the two seats: the human player or the scripted opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    Human,
    Opponent,
}

impl Seat {
    /// The seat across the table.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Seat::Human => Seat::Opponent,
            Seat::Opponent => Seat::Human,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::Human => f.write_str("you"),
            Seat::Opponent => f.write_str("opponent"),
        }
    }
}
