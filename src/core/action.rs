//! Play declarations and the recorded action history.
//!
//! Some plays carry more intent than the cards alone: an Ace names the suit
//! it demands, and a Queen or 8 names the suit its question chain continues
//! in. `Declaration` is that extra intent, validated by the engine against
//! the cards actually played.
//!
//! Every accepted action is appended to the history as a `PlayRecord`, which
//! doubles as the engine's observability surface - the session's
//! last-action line is the description of the newest record.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Suit};

use super::seat::Seat;

/// Cards put down together in one play. Stack-allocated for the common
/// one-to-four card case.
pub type PlayGroup = SmallVec<[Card; 4]>;

/// Extra intent a play must carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Declaration {
    /// Suit demanded by an Ace.
    RequestSuit(Suit),
    /// Suit a Queen/8 question chain continues in. Must match the suit of
    /// the card left on top of the discard pile.
    ContinueSuit(Suit),
}

/// What an accepted action did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    /// Cards moved from hand to discard pile, in order.
    Played(PlayGroup),
    /// Cards drawn from the pile.
    Drew(u8),
    /// Nothing was obtainable anywhere; the turn passed by force.
    ForcedPass,
}

/// A recorded, accepted action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRecord {
    /// The seat that acted.
    pub seat: Seat,
    /// Value of the turn counter when the action was accepted.
    pub turn: u32,
    /// The action taken.
    pub kind: ActionKind,
    /// Human-readable summary for the presentation layer.
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn test_play_group_stays_inline() {
        let mut group = PlayGroup::new();
        for suit in [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades] {
            group.push(Card::new(suit, Rank::Seven));
        }
        assert_eq!(group.len(), 4);
        assert!(!group.spilled());
    }

    #[test]
    fn test_record_serialization() {
        let record = PlayRecord {
            seat: Seat::Human,
            turn: 3,
            kind: ActionKind::Drew(2),
            description: "you drew 2 cards".to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: PlayRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
