//! Suits, ranks, and the normal/special partition.
//!
//! Rank identity drives the whole rule set. Ranks partition into:
//!
//! - **Normal** ranks (4-7, 9, 10): no effect, and the only ranks that may
//!   legally finish a game.
//! - **Special** ranks (A, 2, 3, 8, J, Q, K): each triggers a rule effect
//!   when played.
//!
//! A `Card` is `Copy` and identified by suit plus rank - a single 52-card
//! deck never contains two equal cards, so no separate instance ID is needed.

use serde::{Deserialize, Serialize};

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

/// All four suits in deck-building order.
pub const SUITS: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
        };
        f.write_str(name)
    }
}

/// Card rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

/// All thirteen ranks in deck-building order.
pub const RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl Rank {
    /// Ranks without a rule effect. Only these may legally end a game
    /// (outside the suit-lock finish).
    #[must_use]
    pub const fn is_normal(self) -> bool {
        matches!(
            self,
            Rank::Four | Rank::Five | Rank::Six | Rank::Seven | Rank::Nine | Rank::Ten
        )
    }

    /// Ranks that trigger a rule effect when played.
    #[must_use]
    pub const fn is_special(self) -> bool {
        !self.is_normal()
    }

    /// Forced-draw penalty carried by this rank: 2 for a Two, 3 for a Three,
    /// zero for everything else.
    #[must_use]
    pub const fn draw_penalty(self) -> u8 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            _ => 0,
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        };
        f.write_str(name)
    }
}

/// A playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_partition() {
        let normal: Vec<_> = RANKS.iter().filter(|r| r.is_normal()).collect();
        let special: Vec<_> = RANKS.iter().filter(|r| r.is_special()).collect();

        assert_eq!(normal.len(), 6);
        assert_eq!(special.len(), 7);

        assert!(Rank::Four.is_normal());
        assert!(Rank::Ten.is_normal());
        assert!(!Rank::Eight.is_normal());
        assert!(Rank::Ace.is_special());
        assert!(Rank::King.is_special());
    }

    #[test]
    fn test_draw_penalty() {
        assert_eq!(Rank::Two.draw_penalty(), 2);
        assert_eq!(Rank::Three.draw_penalty(), 3);
        assert_eq!(Rank::Ace.draw_penalty(), 0);
        assert_eq!(Rank::Ten.draw_penalty(), 0);
    }

    #[test]
    fn test_card_display() {
        let card = Card::new(Suit::Hearts, Rank::Queen);
        assert_eq!(format!("{}", card), "Q of hearts");

        let card = Card::new(Suit::Spades, Rank::Ten);
        assert_eq!(format!("{}", card), "10 of spades");
    }

    #[test]
    fn test_card_identity() {
        let a = Card::new(Suit::Clubs, Rank::Seven);
        let b = Card::new(Suit::Clubs, Rank::Seven);
        let c = Card::new(Suit::Spades, Rank::Seven);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new(Suit::Diamonds, Rank::Ace);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
