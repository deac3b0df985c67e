//! Rule semantics: the legality predicate, the turn state machine, and the
//! error taxonomy.

pub mod engine;
pub mod error;
pub mod legality;

pub use engine::{DrawOutcome, Game, GameConfig, PlayOutcome};
pub use error::{PlayError, SetupError};
pub use legality::{finish_eligible, group_shape_ok, is_legal};
