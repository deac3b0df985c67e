//! The face-down draw pile.
//!
//! The deck is an ordered pile consumed from the top (the end of the backing
//! vec). It covers the full setup lifecycle - building the 52 cards,
//! shuffling, dealing opening hands, excising the starting discard - and the
//! mid-game refill that folds the discard pile (minus its top card) back in
//! when the draw pile runs dry.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

use super::card::{Card, RANKS, SUITS};

/// Build the full 52-card deck in suit-major, rank-minor order.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(52);
    for suit in SUITS {
        for rank in RANKS {
            cards.push(Card::new(suit, rank));
        }
    }
    cards
}

/// The draw pile. The top of the pile is the end of the backing vec.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A fresh, unshuffled 52-card deck.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            cards: standard_deck(),
        }
    }

    /// An empty deck.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the pile is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Fisher-Yates shuffle in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Take the top card, if any.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deal `n` cards off the top as an opening hand.
    ///
    /// Returns `None` without disturbing the deck when fewer than `n` cards
    /// remain.
    pub fn deal(&mut self, n: usize) -> Option<Vec<Card>> {
        if self.cards.len() < n {
            return None;
        }
        Some(self.cards.split_off(self.cards.len() - n))
    }

    /// Excise the first normal-rank card scanning down from the top.
    ///
    /// The opening discard must never be a special card - there is no prior
    /// turn whose effect it could resolve against. Returns `None` when the
    /// deck holds no normal card at all; the caller reshuffles and retries.
    pub fn extract_start_card(&mut self) -> Option<Card> {
        let index = self.cards.iter().rposition(|c| c.rank.is_normal())?;
        Some(self.cards.remove(index))
    }

    /// Refill an exhausted pile from recycled discards and shuffle.
    pub fn refill(&mut self, cards: Vec<Card>, rng: &mut GameRng) {
        self.cards.extend(cards);
        rng.shuffle(&mut self.cards);
    }
}
