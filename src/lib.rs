//! # karata
//!
//! Rules engine for Karata ("Kenyan Poker"), a two-player shedding card
//! game in the Crazy Eights family, played human versus a scripted
//! opponent.
//!
//! The crate is the authority on the game: which cards may go down given
//! the table, what the special cards do, who holds the turn, and when the
//! game is won. It is a pure in-process library - a presentation layer
//! calls the operations in response to gestures and re-renders from the
//! snapshot it gets back.
//!
//! ## Rule sketch
//!
//! Shed your hand onto the discard pile by matching the top card's rank or
//! suit. Normal ranks (4-7, 9, 10) just pass the turn and are the only
//! ranks that may finish the game. The specials: an Ace is wild and
//! demands a suit, 2s and 3s stack a draw penalty onto the next player, a
//! Jack grants an extra turn, Queens and 8s open a "question chain" the
//! same player must keep answering, and a King locks the next play to its
//! suit.
//!
//! ## Modules
//!
//! - `cards`: suits, ranks, the normal/special partition, the draw pile
//! - `core`: seats, deterministic RNG, the authoritative `GameState`
//! - `rules`: the legality predicate, the turn state machine, errors
//! - `policy`: the scripted opponent
//! - `session`: the boundary the presentation layer drives, with paced
//!   and cancellation-safe opponent scheduling
//!
//! ## Quick start
//!
//! ```
//! use std::time::{Duration, Instant};
//! use karata::{GameSession, GameStatus};
//!
//! let mut session = GameSession::new(42);
//! session.start_game(Instant::now()).unwrap();
//!
//! let view = session.view();
//! assert_eq!(view.status, GameStatus::Playing);
//! assert_eq!(view.human_hand.len(), 4);
//!
//! // Drive the opponent from the render tick.
//! session.poll_opponent(Instant::now() + Duration::from_secs(2));
//! ```

pub mod cards;
pub mod core;
pub mod policy;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::cards::{standard_deck, Card, Deck, Rank, Suit, RANKS, SUITS};

pub use crate::core::{
    ActionKind, Declaration, GameRng, GameState, GameStatus, Hands, PendingEffect, PlayGroup,
    PlayRecord, Seat,
};

pub use crate::rules::{
    finish_eligible, group_shape_ok, is_legal, DrawOutcome, Game, GameConfig, PlayError,
    PlayOutcome, SetupError,
};

pub use crate::policy::{Decision, OpponentPolicy, PolicyProfile};

pub use crate::session::{GameSession, PacingProfile, SessionView};
