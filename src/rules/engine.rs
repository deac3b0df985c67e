//! The turn state machine.
//!
//! `Game` owns the authoritative `GameState` and exposes the only mutating
//! operations: `start`, `play_cards`, `draw_cards`, and
//! `advance_opponent_turn`. Every operation either applies atomically or
//! rejects with state untouched - there is no partially applied play.
//!
//! ## Effects by led rank
//!
//! - **Ace**: cancels a pending draw stack; otherwise demands a declared
//!   suit. Turn passes.
//! - **2 / 3**: starts or escalates the draw stack by the summed penalty.
//!   Turn passes.
//! - **Jack**: extra turn for the same seat.
//! - **Queen / 8**: opens a question chain in the played suit; the same
//!   seat must continue (or draw to pass).
//! - **King**: locks the next play to the played suit. Turn passes.
//! - **Normal rank**: clears any pending effect. Turn passes.
//!
//! A play that would empty the acting hand is accepted as a win only when
//! the finish is eligible (normal led rank, or an exactly honored suit
//! request); otherwise the whole play is rejected.

use crate::cards::{Card, Deck, Rank};
use crate::core::{
    ActionKind, Declaration, GameState, GameStatus, PendingEffect, PlayGroup, Seat,
};
use crate::policy::{Decision, OpponentPolicy};

use super::error::{PlayError, SetupError};
use super::legality::{finish_eligible, group_shape_ok, is_legal};

/// Setup parameters.
#[derive(Clone, Copy, Debug)]
pub struct GameConfig {
    /// Cards dealt to each seat.
    pub hand_size: usize,
    /// Fresh shuffles attempted before setup gives up on finding a
    /// normal-rank start card.
    pub setup_retries: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: 4,
            setup_retries: 8,
        }
    }
}

/// How an accepted play left the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The turn moved to the other seat.
    TurnPassed,
    /// The acting seat kept the turn (Jack replay or an open question chain).
    TurnRetained,
    /// The play emptied the hand and ended the game.
    Won,
}

/// How a `draw_cards` call resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// This many cards were drawn; the turn passed.
    Drew(u8),
    /// Nothing was obtainable anywhere; the turn passed by force.
    ForcedPass,
    /// Off-turn or out-of-game call; nothing changed.
    Ignored,
}

/// The rules engine: authoritative state plus the operation surface.
pub struct Game {
    config: GameConfig,
    state: GameState,
}

impl Game {
    /// New engine in `Setup` with default configuration.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_config(GameConfig::default(), seed)
    }

    /// New engine with explicit configuration.
    #[must_use]
    pub fn with_config(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            state: GameState::new(seed),
        }
    }

    /// Read access to the table.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Setup parameters in use.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Shuffle, deal, excise a normal start card, and pick the first turn
    /// at random. Retries with fresh shuffles until a normal start card
    /// turns up, within the configured bound.
    ///
    /// Returns the seat that opens the game.
    pub fn start(&mut self) -> Result<Seat, SetupError> {
        let attempts = self.config.setup_retries.max(1);
        for _ in 0..attempts {
            let mut deck = Deck::standard();
            deck.shuffle(&mut self.state.rng);

            let Some(human) = deck.deal(self.config.hand_size) else {
                continue;
            };
            let Some(opponent) = deck.deal(self.config.hand_size) else {
                continue;
            };
            let Some(start_card) = deck.extract_start_card() else {
                continue;
            };

            let first = if self.state.rng.gen_bool(0.5) {
                Seat::Human
            } else {
                Seat::Opponent
            };

            self.state.clear();
            self.state.deck = deck;
            self.state.hands[Seat::Human] = human;
            self.state.hands[Seat::Opponent] = opponent;
            self.state.discard.push(start_card);
            self.state.turn = first;
            self.state.status = GameStatus::Playing;
            self.state.last_action = "game started".to_string();
            return Ok(first);
        }
        Err(SetupError::NoStartCard { attempts })
    }

    /// Clear everything back to `Setup`.
    pub fn reset(&mut self) {
        self.state.clear();
    }

    /// Whether `seat` could legally lead `card` right now. Always false
    /// off-turn or outside a live game; used by the presentation layer to
    /// highlight the hand.
    #[must_use]
    pub fn is_playable(&self, seat: Seat, card: Card) -> bool {
        self.state.status == GameStatus::Playing
            && self.state.turn == seat
            && self
                .state
                .top_card()
                .is_some_and(|top| is_legal(card, top, self.state.pending))
    }

    /// Play a group of cards for `seat`.
    ///
    /// Validates the full contract - turn ownership, hand membership, group
    /// shape, the legality predicate on the led card, declaration
    /// consistency, and finish eligibility - before touching any state.
    pub fn play_cards(
        &mut self,
        seat: Seat,
        cards: &[Card],
        declaration: Option<Declaration>,
    ) -> Result<PlayOutcome, PlayError> {
        if self.state.status != GameStatus::Playing {
            return Err(PlayError::NotPlaying);
        }
        if self.state.turn != seat {
            return Err(PlayError::OffTurn(seat));
        }
        let led = *cards.first().ok_or(PlayError::EmptySelection)?;

        // Membership; a card selected twice fails its second lookup.
        let mut remaining = self.state.hands[seat].clone();
        for card in cards {
            let position = remaining
                .iter()
                .position(|c| c == card)
                .ok_or(PlayError::NotInHand(*card))?;
            remaining.remove(position);
        }

        if !group_shape_ok(cards) {
            return Err(PlayError::MixedRanks);
        }

        let top = self.state.top_card().ok_or(PlayError::NotPlaying)?;
        let pending = self.state.pending;
        if !is_legal(led, top, pending) {
            return Err(PlayError::Illegal(led));
        }

        // The group lands on the pile in order, so its last card is the new
        // top and decides the suit a question chain or king lock carries.
        let tail = *cards.last().expect("group checked non-empty");
        let draw_group = cards.iter().all(|c| c.rank.draw_penalty() > 0);

        let (new_pending, next, outcome, suffix) = if draw_group {
            if declaration.is_some() {
                return Err(PlayError::UnexpectedDeclaration);
            }
            let total: u8 = cards.iter().map(|c| c.rank.draw_penalty()).sum();
            let base = match pending {
                Some(PendingEffect::DrawStack { count }) => count,
                _ => 0,
            };
            let count = base + total;
            (
                Some(PendingEffect::DrawStack { count }),
                seat.other(),
                PlayOutcome::TurnPassed,
                format!(" - {} must draw {count} or counter", seat.other()),
            )
        } else {
            match led.rank {
                Rank::Ace if matches!(pending, Some(PendingEffect::DrawStack { .. })) => {
                    // The suit picker may still attach a request; an ace
                    // spent on cancelling makes no demand.
                    (
                        None,
                        seat.other(),
                        PlayOutcome::TurnPassed,
                        " - draw penalty cancelled".to_string(),
                    )
                }
                Rank::Ace => {
                    let suit = match declaration {
                        Some(Declaration::RequestSuit(suit)) => suit,
                        Some(Declaration::ContinueSuit(_)) => {
                            return Err(PlayError::DeclarationMismatch)
                        }
                        None => return Err(PlayError::MissingSuitRequest),
                    };
                    (
                        Some(PendingEffect::SuitRequest { suit }),
                        seat.other(),
                        PlayOutcome::TurnPassed,
                        format!(" and requested {suit}"),
                    )
                }
                Rank::Jack => {
                    if declaration.is_some() {
                        return Err(PlayError::UnexpectedDeclaration);
                    }
                    (
                        None,
                        seat,
                        PlayOutcome::TurnRetained,
                        " - extra turn".to_string(),
                    )
                }
                Rank::Queen | Rank::Eight => {
                    match declaration {
                        Some(Declaration::ContinueSuit(suit)) if suit == tail.suit => {}
                        Some(_) => return Err(PlayError::DeclarationMismatch),
                        None => return Err(PlayError::MissingContinuation),
                    }
                    (
                        Some(PendingEffect::QuestionChain { suit: tail.suit }),
                        seat,
                        PlayOutcome::TurnRetained,
                        format!(" - must continue {}", tail.suit),
                    )
                }
                Rank::King => {
                    if declaration.is_some() {
                        return Err(PlayError::UnexpectedDeclaration);
                    }
                    (
                        Some(PendingEffect::SuitRequest { suit: tail.suit }),
                        seat.other(),
                        PlayOutcome::TurnPassed,
                        format!(" - next play must be {}", tail.suit),
                    )
                }
                _ => {
                    if declaration.is_some() {
                        return Err(PlayError::UnexpectedDeclaration);
                    }
                    (None, seat.other(), PlayOutcome::TurnPassed, String::new())
                }
            }
        };

        let empties_hand = remaining.is_empty();
        if empties_hand && !finish_eligible(cards, pending) {
            return Err(PlayError::IneligibleFinish);
        }

        // Commit.
        self.state.hands[seat] = remaining;
        self.state.discard.extend_from_slice(cards);
        let group: PlayGroup = cards.iter().copied().collect();

        if empties_hand {
            self.state.status = GameStatus::won_by(seat);
            self.state.pending = None;
            self.state
                .record(seat, ActionKind::Played(group), format!("{seat} won the game"));
            return Ok(PlayOutcome::Won);
        }

        self.state.pending = new_pending;
        self.state.turn = next;
        let description = format!("{seat} played {}{suffix}", describe_cards(cards));
        self.state.record(seat, ActionKind::Played(group), description);
        Ok(outcome)
    }

    /// Draw for `seat`: the whole pending draw stack if one is live,
    /// otherwise a single card. The turn always passes afterwards.
    ///
    /// Off-turn and out-of-game calls are silent no-ops. When neither the
    /// pile nor the recyclable discard can supply a card, the turn passes
    /// by force so the game can never stall.
    pub fn draw_cards(&mut self, seat: Seat) -> DrawOutcome {
        if self.state.status != GameStatus::Playing || self.state.turn != seat {
            return DrawOutcome::Ignored;
        }

        let want = match self.state.pending {
            Some(PendingEffect::DrawStack { count }) => count,
            _ => 1,
        };

        let mut drawn: u8 = 0;
        for _ in 0..want {
            if self.state.draw_into(seat).is_none() {
                break;
            }
            drawn += 1;
        }

        // Drawing serves a draw stack and forfeits a question chain; a suit
        // request stays until honored.
        if !matches!(self.state.pending, Some(PendingEffect::SuitRequest { .. })) {
            self.state.pending = None;
        }
        self.state.turn = seat.other();

        if drawn == 0 {
            self.state.record(
                seat,
                ActionKind::ForcedPass,
                format!("{seat} had nothing to draw - turn passes"),
            );
            return DrawOutcome::ForcedPass;
        }

        let description = if drawn == 1 {
            format!("{seat} drew a card")
        } else {
            format!("{seat} drew {drawn} cards")
        };
        self.state.record(seat, ActionKind::Drew(drawn), description);
        DrawOutcome::Drew(drawn)
    }

    /// Run the opponent's whole turn through `policy`, chaining while plays
    /// keep the turn (Jack replays, question chains), until the turn
    /// transfers or the game ends.
    pub fn advance_opponent_turn(&mut self, policy: &mut OpponentPolicy) {
        // A chain sheds at least one card per retained turn, so the hand
        // size bounds this loop; the fuel is a backstop.
        let mut fuel = 64;
        while self.state.status == GameStatus::Playing
            && self.state.turn == Seat::Opponent
            && fuel > 0
        {
            fuel -= 1;
            match policy.decide(&self.state) {
                Decision::Play { cards, declaration } => {
                    match self.play_cards(Seat::Opponent, &cards, declaration) {
                        Ok(PlayOutcome::TurnRetained) => {}
                        Ok(_) => break,
                        Err(_) => {
                            self.draw_cards(Seat::Opponent);
                            break;
                        }
                    }
                }
                Decision::Draw => {
                    self.draw_cards(Seat::Opponent);
                    break;
                }
            }
        }
    }
}

fn describe_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
