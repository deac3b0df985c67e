//! Error taxonomy for the rules engine.
//!
//! A `PlayError` is a contract violation: the call was rejected and the
//! table state is exactly as it was. Resource exhaustion is never an error
//! here - an impossible draw resolves to a forced turn pass inside the
//! engine instead.

use thiserror::Error;

use crate::cards::Card;
use crate::core::Seat;

/// Why a `play_cards` call was rejected. State is never mutated when one of
/// these comes back.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum PlayError {
    #[error("no game in progress")]
    NotPlaying,
    #[error("{0} played out of turn")]
    OffTurn(Seat),
    #[error("no cards selected")]
    EmptySelection,
    #[error("{0} is not in hand")]
    NotInHand(Card),
    #[error("cards played together must share a rank, or mix only 2s and 3s")]
    MixedRanks,
    #[error("{0} cannot be played on the current table")]
    Illegal(Card),
    #[error("an ace must name the suit it requests")]
    MissingSuitRequest,
    #[error("a question card must name the suit it continues in")]
    MissingContinuation,
    #[error("declaration does not match the cards played")]
    DeclarationMismatch,
    #[error("this play does not take a declaration")]
    UnexpectedDeclaration,
    #[error("a special card cannot finish the game")]
    IneligibleFinish,
}

/// Setup failed to produce a normal-rank starting discard within the retry
/// bound. Unreachable in practice with a full deck.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("no normal-rank start card found after {attempts} shuffles")]
    NoStartCard { attempts: u32 },
}
