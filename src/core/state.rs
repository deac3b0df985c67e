//! Authoritative table state.
//!
//! ## GameState
//!
//! One owned value holds everything the rules act on: the draw pile, both
//! hands, the discard pile, turn ownership, the single pending effect, the
//! lifecycle status, counters, and the play history. There is no other copy
//! of the truth; the presentation layer reads through accessors and mutates
//! only via the operations in `rules::engine`.
//!
//! ## Invariants
//!
//! - Deck + hands + discard pile always total 52 cards while a game is live.
//! - The discard pile is never empty once play starts.
//! - At most one `PendingEffect` is active.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::cards::{Card, Deck, Suit};

use super::action::{ActionKind, PlayRecord};
use super::rng::GameRng;
use super::seat::Seat;

/// The single active constraint governing the next legal play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingEffect {
    /// The next play must follow `suit`. Set by an Ace declaration or a King.
    SuitRequest { suit: Suit },
    /// The next player draws `count` cards, escalates with a 2/3, or cancels
    /// with an Ace.
    DrawStack { count: u8 },
    /// The same player keeps playing `suit`, another Queen/8, or draws to
    /// pass. Set by a Queen or an 8.
    QuestionChain { suit: Suit },
}

/// Game lifecycle. Monotonic; the won states are terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Setup,
    Playing,
    HumanWon,
    OpponentWon,
}

impl GameStatus {
    /// Whether a terminal state has been reached.
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::HumanWon | GameStatus::OpponentWon)
    }

    /// The winning seat, if the game is over.
    #[must_use]
    pub const fn winner(self) -> Option<Seat> {
        match self {
            GameStatus::HumanWon => Some(Seat::Human),
            GameStatus::OpponentWon => Some(Seat::Opponent),
            _ => None,
        }
    }

    /// The terminal state in which `seat` has won.
    #[must_use]
    pub const fn won_by(seat: Seat) -> Self {
        match seat {
            Seat::Human => GameStatus::HumanWon,
            Seat::Opponent => GameStatus::OpponentWon,
        }
    }
}

/// Both hands, indexable by seat.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hands {
    human: Vec<Card>,
    opponent: Vec<Card>,
}

impl Index<Seat> for Hands {
    type Output = Vec<Card>;

    fn index(&self, seat: Seat) -> &Self::Output {
        match seat {
            Seat::Human => &self.human,
            Seat::Opponent => &self.opponent,
        }
    }
}

impl IndexMut<Seat> for Hands {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        match seat {
            Seat::Human => &mut self.human,
            Seat::Opponent => &mut self.opponent,
        }
    }
}

/// Full table state.
pub struct GameState {
    pub(crate) deck: Deck,
    pub(crate) hands: Hands,
    pub(crate) discard: Vec<Card>,
    pub(crate) turn: Seat,
    pub(crate) pending: Option<PendingEffect>,
    pub(crate) status: GameStatus,
    pub(crate) turn_count: u32,
    pub(crate) draw_count: u32,
    pub(crate) last_action: String,
    pub(crate) history: Vector<PlayRecord>,
    pub(crate) rng: GameRng,
}

impl GameState {
    /// Fresh state in `Setup`, before any deal.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            deck: Deck::empty(),
            hands: Hands::default(),
            discard: Vec::new(),
            turn: Seat::Human,
            pending: None,
            status: GameStatus::Setup,
            turn_count: 0,
            draw_count: 0,
            last_action: String::new(),
            history: Vector::new(),
            rng: GameRng::new(seed),
        }
    }

    // === Read access ===

    /// The draw pile.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// A seat's hand.
    #[must_use]
    pub fn hand(&self, seat: Seat) -> &[Card] {
        &self.hands[seat]
    }

    /// The discard pile, oldest first.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard
    }

    /// The card legality is evaluated against.
    #[must_use]
    pub fn top_card(&self) -> Option<Card> {
        self.discard.last().copied()
    }

    /// The seat currently authorized to act.
    #[must_use]
    pub fn turn_owner(&self) -> Seat {
        self.turn
    }

    /// The active constraint, if any.
    #[must_use]
    pub fn pending_effect(&self) -> Option<PendingEffect> {
        self.pending
    }

    /// Lifecycle status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Accepted actions since the game started.
    #[must_use]
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// Cards drawn since the game started.
    #[must_use]
    pub fn draw_count(&self) -> u32 {
        self.draw_count
    }

    /// Accepted-action history, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<PlayRecord> {
        &self.history
    }

    /// Summary of the most recent state change, for the presentation layer.
    #[must_use]
    pub fn last_action(&self) -> &str {
        &self.last_action
    }

    /// Cards across every zone. 52 whenever a game is live.
    #[must_use]
    pub fn card_total(&self) -> usize {
        self.deck.len()
            + self.hands[Seat::Human].len()
            + self.hands[Seat::Opponent].len()
            + self.discard.len()
    }

    /// Cards that a draw could still reach: the pile itself plus the
    /// recyclable discard (everything but the top card).
    #[must_use]
    pub fn obtainable_cards(&self) -> usize {
        self.deck.len() + self.discard.len().saturating_sub(1)
    }

    // === Mutation primitives (rules engine only) ===

    /// Draw one card into `seat`'s hand, recycling the discard pile
    /// (minus its top card) when the pile is dry.
    pub(crate) fn draw_into(&mut self, seat: Seat) -> Option<Card> {
        if self.deck.is_empty() && self.discard.len() >= 2 {
            let top = self.discard.pop().expect("discard checked non-empty");
            let recycled = std::mem::take(&mut self.discard);
            self.discard.push(top);
            self.deck.refill(recycled, &mut self.rng);
        }
        let card = self.deck.draw()?;
        self.hands[seat].push(card);
        self.draw_count += 1;
        Some(card)
    }

    /// Append an accepted action to the history and advance the turn
    /// counter.
    pub(crate) fn record(&mut self, seat: Seat, kind: ActionKind, description: String) {
        self.last_action = description.clone();
        self.history.push_back(PlayRecord {
            seat,
            turn: self.turn_count,
            kind,
            description,
        });
        self.turn_count += 1;
    }

    /// Clear everything back to `Setup`, keeping the RNG stream.
    pub(crate) fn clear(&mut self) {
        self.deck = Deck::empty();
        self.hands = Hands::default();
        self.discard.clear();
        self.turn = Seat::Human;
        self.pending = None;
        self.status = GameStatus::Setup;
        self.turn_count = 0;
        self.draw_count = 0;
        self.last_action.clear();
        self.history.clear();
    }
}
