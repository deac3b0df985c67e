//! The scripted opponent.
//!
//! A deliberately simple heuristic player, deterministic given its RNG
//! stream. In order:
//!
//! 1. Under a draw stack, cancel with an Ace if possible, otherwise push
//!    the penalty back with every 2/3 in hand.
//! 2. Under a suit request, occasionally fold and draw even when it could
//!    follow suit - the opponent is meant to be beatable.
//! 3. Otherwise shed as many cards as possible: one candidate group per
//!    rank, largest group wins, ties break at random.
//! 4. With two or fewer cards left, prefer any play that finishes the game.
//! 5. Never strand the game on a finish the rules would reject; trim the
//!    group or draw instead.

use rustc_hash::FxHashMap;

use crate::cards::{Card, Rank, Suit, SUITS};
use crate::core::{Declaration, GameRng, GameState, PendingEffect, PlayGroup, Seat};
use crate::rules::{finish_eligible, is_legal};

/// Tunables for opponent behavior.
#[derive(Clone, Copy, Debug)]
pub struct PolicyProfile {
    /// Chance of drawing under a suit request despite holding a matching
    /// card.
    pub suit_request_fold_chance: f64,
}

impl Default for PolicyProfile {
    fn default() -> Self {
        Self {
            suit_request_fold_chance: 0.3,
        }
    }
}

/// What the opponent wants to do with its turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Put these cards down, with the declaration the rules require.
    Play {
        cards: PlayGroup,
        declaration: Option<Declaration>,
    },
    /// Draw (or serve the pending penalty) and pass the turn.
    Draw,
}

/// Scripted decision procedure for the opponent seat.
pub struct OpponentPolicy {
    profile: PolicyProfile,
    rng: GameRng,
}

impl OpponentPolicy {
    /// Policy with default tunables.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self::with_profile(PolicyProfile::default(), rng)
    }

    /// Policy with explicit tunables.
    #[must_use]
    pub fn with_profile(profile: PolicyProfile, rng: GameRng) -> Self {
        Self { profile, rng }
    }

    /// Choose a play or a draw for the opponent's turn.
    pub fn decide(&mut self, state: &GameState) -> Decision {
        let hand = state.hand(Seat::Opponent);
        let Some(top) = state.top_card() else {
            return Decision::Draw;
        };
        let pending = state.pending_effect();

        let legal: Vec<Card> = hand
            .iter()
            .copied()
            .filter(|c| is_legal(*c, top, pending))
            .collect();
        if legal.is_empty() {
            return Decision::Draw;
        }

        if matches!(pending, Some(PendingEffect::SuitRequest { .. }))
            && self.rng.gen_bool(self.profile.suit_request_fold_chance)
        {
            return Decision::Draw;
        }

        if matches!(pending, Some(PendingEffect::DrawStack { .. })) {
            if let Some(ace) = legal.iter().copied().find(|c| c.rank == Rank::Ace) {
                return self.commit(hand, PlayGroup::from_slice(&[ace]), pending);
            }
            let counters: PlayGroup = legal
                .iter()
                .copied()
                .filter(|c| c.rank.draw_penalty() > 0)
                .collect();
            return match guard_finish(hand, counters, pending) {
                Some(group) => self.commit(hand, group, pending),
                None => Decision::Draw,
            };
        }

        // One candidate per rank: the whole holding of that rank, led by a
        // card that can legally go down.
        let mut by_rank: FxHashMap<Rank, PlayGroup> = FxHashMap::default();
        for card in hand {
            by_rank.entry(card.rank).or_default().push(*card);
        }
        let mut candidates: Vec<PlayGroup> = Vec::new();
        for (_, mut group) in by_rank {
            let Some(lead) = group.iter().position(|c| is_legal(*c, top, pending)) else {
                continue;
            };
            group.swap(0, lead);
            if let Some(group) = guard_finish(hand, group, pending) {
                candidates.push(group);
            }
        }
        if candidates.is_empty() {
            return Decision::Draw;
        }

        // With the end in sight, prefer a play that finishes the game.
        if hand.len() <= 2 {
            if let Some(finisher) = candidates
                .iter()
                .find(|g| g.len() == hand.len() && finish_eligible(&g[..], pending))
            {
                return self.commit(hand, finisher.clone(), pending);
            }
        }

        let best = candidates.iter().map(|g| g.len()).max().expect("non-empty");
        let tied: Vec<&PlayGroup> = candidates.iter().filter(|g| g.len() == best).collect();
        let group = tied[self.rng.gen_range_usize(0..tied.len())].clone();
        self.commit(hand, group, pending)
    }

    fn commit(
        &self,
        hand: &[Card],
        cards: PlayGroup,
        pending: Option<PendingEffect>,
    ) -> Decision {
        let led = cards[0];
        let declaration = if cards.iter().all(|c| c.rank.draw_penalty() > 0) {
            None
        } else {
            match led.rank {
                Rank::Ace if matches!(pending, Some(PendingEffect::DrawStack { .. })) => None,
                Rank::Ace => Some(Declaration::RequestSuit(self.preferred_suit(hand, &cards))),
                Rank::Queen | Rank::Eight => {
                    let tail = *cards.last().expect("group is non-empty");
                    Some(Declaration::ContinueSuit(tail.suit))
                }
                _ => None,
            }
        };
        Decision::Play { cards, declaration }
    }

    /// The suit the opponent will hold most of once the group leaves its
    /// hand.
    fn preferred_suit(&self, hand: &[Card], group: &[Card]) -> Suit {
        let mut tally: FxHashMap<Suit, usize> = FxHashMap::default();
        for card in hand {
            if !group.contains(card) {
                *tally.entry(card.suit).or_insert(0) += 1;
            }
        }
        SUITS
            .iter()
            .copied()
            .max_by_key(|suit| tally.get(suit).copied().unwrap_or(0))
            .expect("SUITS is non-empty")
    }
}

/// Keep a group from stranding the game on a finish the rules would reject:
/// trim one card when emptying the hand would be ineligible, dropping the
/// candidate entirely when nothing remains.
fn guard_finish(
    hand: &[Card],
    mut group: PlayGroup,
    pending: Option<PendingEffect>,
) -> Option<PlayGroup> {
    if group.len() == hand.len() && !finish_eligible(&group, pending) {
        group.pop();
        if group.is_empty() {
            return None;
        }
    }
    Some(group)
}
