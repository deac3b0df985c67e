//! The boundary the presentation layer drives.
//!
//! `GameSession` wraps the rules engine with the two concerns that belong
//! to the seam, not the rules: pacing the opponent so it appears to think,
//! and making sure a superseded game can never be mutated by a stale
//! scheduled move.
//!
//! ## Scheduling model
//!
//! Single-threaded and poll-driven. Whenever the turn lands on the
//! opponent, the session arms a deliberation stamped with the current game
//! generation and a maturity instant. The presentation layer calls
//! `poll_opponent` from its tick; once the deliberation matures the whole
//! opponent turn resolves through the engine. Starting or resetting a game
//! bumps the generation, so a deliberation armed for an earlier game is
//! discarded instead of fired.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::cards::Card;
use crate::core::{Declaration, GameRng, GameStatus, PendingEffect, Seat};
use crate::policy::OpponentPolicy;
use crate::rules::{DrawOutcome, Game, PlayError, PlayOutcome, SetupError};

/// Pacing knobs for the opponent's presentation delay.
#[derive(Clone, Copy, Debug)]
pub struct PacingProfile {
    /// How long the opponent "thinks" before its move resolves.
    pub thinking_delay: Duration,
}

impl Default for PacingProfile {
    fn default() -> Self {
        Self {
            thinking_delay: Duration::from_millis(1500),
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Deliberation {
    generation: u64,
    ready_at: Instant,
}

/// Engine plus pacing: the object the presentation layer owns.
pub struct GameSession {
    game: Game,
    policy: OpponentPolicy,
    pacing: PacingProfile,
    generation: u64,
    deliberation: Option<Deliberation>,
}

impl GameSession {
    /// New session. The opponent policy gets its own RNG stream derived
    /// from the seed, so its choices do not perturb the deal.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            game: Game::new(seed),
            policy: OpponentPolicy::new(GameRng::for_stream(seed, 1)),
            pacing: PacingProfile::default(),
            generation: 0,
            deliberation: None,
        }
    }

    /// Override the pacing profile.
    #[must_use]
    pub fn with_pacing(mut self, pacing: PacingProfile) -> Self {
        self.pacing = pacing;
        self
    }

    /// Override the opponent policy.
    #[must_use]
    pub fn with_policy(mut self, policy: OpponentPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Deal a fresh game. Any in-flight opponent deliberation is
    /// invalidated; if the opponent wins the first turn its deliberation is
    /// armed relative to `now`.
    pub fn start_game(&mut self, now: Instant) -> Result<(), SetupError> {
        self.generation += 1;
        self.deliberation = None;
        self.game.start()?;
        self.schedule_opponent(now);
        Ok(())
    }

    /// Tear the table down to `Setup` and invalidate any scheduled
    /// opponent move.
    pub fn reset_game(&mut self) {
        self.generation += 1;
        self.deliberation = None;
        self.game.reset();
    }

    /// Whether the human could legally lead `card` right now. Always false
    /// off-turn; used to highlight the hand.
    #[must_use]
    pub fn is_card_playable(&self, card: Card) -> bool {
        self.game.is_playable(Seat::Human, card)
    }

    /// Play a group of cards for the human seat.
    pub fn play_cards(
        &mut self,
        cards: &[Card],
        declaration: Option<Declaration>,
        now: Instant,
    ) -> Result<PlayOutcome, PlayError> {
        let outcome = self.game.play_cards(Seat::Human, cards, declaration)?;
        self.schedule_opponent(now);
        Ok(outcome)
    }

    /// Draw for the human seat.
    pub fn draw_cards(&mut self, now: Instant) -> DrawOutcome {
        let outcome = self.game.draw_cards(Seat::Human);
        // An ignored off-turn click must not push back an armed deliberation.
        if outcome != DrawOutcome::Ignored {
            self.schedule_opponent(now);
        }
        outcome
    }

    /// Drive the opponent. Call from the render tick; returns true when
    /// the opponent actually moved (so the caller re-renders).
    pub fn poll_opponent(&mut self, now: Instant) -> bool {
        let Some(deliberation) = self.deliberation else {
            return false;
        };
        if deliberation.generation != self.generation {
            self.deliberation = None;
            return false;
        }
        if now < deliberation.ready_at {
            return false;
        }
        self.deliberation = None;

        if self.game.state().status() != GameStatus::Playing
            || self.game.state().turn_owner() != Seat::Opponent
        {
            return false;
        }
        self.game.advance_opponent_turn(&mut self.policy);
        true
    }

    /// Whether a deliberation for the current game is armed.
    #[must_use]
    pub fn is_opponent_thinking(&self) -> bool {
        matches!(self.deliberation, Some(d) if d.generation == self.generation)
    }

    /// Read access to the engine.
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> SessionView<'_> {
        let state = self.game.state();
        SessionView {
            deck: state.deck().cards(),
            human_hand: state.hand(Seat::Human),
            opponent_hand: state.hand(Seat::Opponent),
            discard_pile: state.discard_pile(),
            top_card: state.top_card(),
            turn_owner: state.turn_owner(),
            pending_effect: state.pending_effect(),
            status: state.status(),
            turn_count: state.turn_count(),
            draw_count: state.draw_count(),
            last_action: state.last_action(),
            is_opponent_thinking: self.is_opponent_thinking(),
        }
    }

    fn schedule_opponent(&mut self, now: Instant) {
        let state = self.game.state();
        if state.status() == GameStatus::Playing && state.turn_owner() == Seat::Opponent {
            self.deliberation = Some(Deliberation {
                generation: self.generation,
                ready_at: now + self.pacing.thinking_delay,
            });
        }
    }
}

/// Everything the presentation layer renders from, borrowed straight off
/// the engine state.
#[derive(Debug, Serialize)]
pub struct SessionView<'a> {
    pub deck: &'a [Card],
    pub human_hand: &'a [Card],
    pub opponent_hand: &'a [Card],
    pub discard_pile: &'a [Card],
    pub top_card: Option<Card>,
    pub turn_owner: Seat,
    pub pending_effect: Option<PendingEffect>,
    pub status: GameStatus,
    pub turn_count: u32,
    pub draw_count: u32,
    pub last_action: &'a str,
    pub is_opponent_thinking: bool,
}
