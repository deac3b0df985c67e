//! Core engine types: seats, state, actions, RNG.
//!
//! These are the building blocks the rules operate on. Everything here is
//! data plus low-level mutation primitives; the rule semantics live in
//! `rules`.

pub mod action;
pub mod rng;
pub mod seat;
pub mod state;

pub use action::{ActionKind, Declaration, PlayGroup, PlayRecord};
pub use rng::GameRng;
pub use seat::Seat;
pub use state::{GameState, GameStatus, Hands, PendingEffect};
