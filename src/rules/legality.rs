//! The legality predicate.
//!
//! One function answers "may this card go down right now?" for every
//! consumer: the engine validating a play, the session highlighting the
//! human's hand, and the opponent policy enumerating its options.
//!
//! The branches are evaluated in priority order - an active pending effect
//! overrides ordinary rank/suit matching entirely:
//!
//! 1. `DrawStack`: only a 2/3 (escalate) or an Ace (cancel) may go down.
//! 2. `SuitRequest(s)`: the requested suit, an Ace, or a Queen/8 (question
//!    cards may always break a suit lock to re-chain).
//! 3. `QuestionChain(s)`: another Queen/8, or any card of the chain suit.
//! 4. No effect: an Ace (always playable), a rank match, or a suit match.

use crate::cards::{Card, Rank};
use crate::core::PendingEffect;

/// Whether `card` may legally be played on `top` given the active effect.
#[must_use]
pub fn is_legal(card: Card, top: Card, pending: Option<PendingEffect>) -> bool {
    match pending {
        Some(PendingEffect::DrawStack { .. }) => {
            matches!(card.rank, Rank::Two | Rank::Three | Rank::Ace)
        }
        Some(PendingEffect::SuitRequest { suit }) => {
            card.suit == suit || card.rank == Rank::Ace || is_question(card.rank)
        }
        Some(PendingEffect::QuestionChain { suit }) => {
            is_question(card.rank) || card.suit == suit
        }
        None => card.rank == Rank::Ace || card.rank == top.rank || card.suit == top.suit,
    }
}

/// Queens and 8s open question chains.
#[must_use]
pub(crate) fn is_question(rank: Rank) -> bool {
    matches!(rank, Rank::Queen | Rank::Eight)
}

/// Whether `cards` may be put down together: one shared rank, or any mix of
/// 2s and 3s (whose draw penalties sum).
#[must_use]
pub fn group_shape_ok(cards: &[Card]) -> bool {
    match cards {
        [] => false,
        [led, rest @ ..] => {
            rest.iter().all(|c| c.rank == led.rank)
                || cards.iter().all(|c| c.rank.draw_penalty() > 0)
        }
    }
}

/// Whether a play that empties the acting hand is allowed to end the game:
/// the led rank is normal, or every card exactly honored an active suit
/// request.
#[must_use]
pub fn finish_eligible(cards: &[Card], pending: Option<PendingEffect>) -> bool {
    let Some(led) = cards.first() else {
        return false;
    };
    if led.rank.is_normal() {
        return true;
    }
    matches!(pending, Some(PendingEffect::SuitRequest { suit })
        if cards.iter().all(|c| c.suit == suit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    const TOP: Card = Card::new(Suit::Spades, Rank::Four);

    #[test]
    fn test_no_effect_matching() {
        // Rank match, suit match, ace.
        assert!(is_legal(card(Suit::Hearts, Rank::Four), TOP, None));
        assert!(is_legal(card(Suit::Spades, Rank::Nine), TOP, None));
        assert!(is_legal(card(Suit::Hearts, Rank::Ace), TOP, None));

        // Neither rank nor suit.
        assert!(!is_legal(card(Suit::Hearts, Rank::Nine), TOP, None));
        assert!(!is_legal(card(Suit::Clubs, Rank::King), TOP, None));
    }

    #[test]
    fn test_draw_stack_counters_only() {
        let pending = Some(PendingEffect::DrawStack { count: 2 });

        assert!(is_legal(card(Suit::Hearts, Rank::Two), TOP, pending));
        assert!(is_legal(card(Suit::Clubs, Rank::Three), TOP, pending));
        assert!(is_legal(card(Suit::Diamonds, Rank::Ace), TOP, pending));

        // Even a perfect rank/suit match is dead while a stack is live.
        assert!(!is_legal(card(Suit::Spades, Rank::Four), TOP, pending));
        assert!(!is_legal(card(Suit::Spades, Rank::Queen), TOP, pending));
    }

    #[test]
    fn test_suit_request_branch() {
        let pending = Some(PendingEffect::SuitRequest { suit: Suit::Hearts });

        assert!(is_legal(card(Suit::Hearts, Rank::King), TOP, pending));
        assert!(is_legal(card(Suit::Clubs, Rank::Ace), TOP, pending));
        // Question cards may break the lock.
        assert!(is_legal(card(Suit::Clubs, Rank::Queen), TOP, pending));
        assert!(is_legal(card(Suit::Spades, Rank::Eight), TOP, pending));

        assert!(!is_legal(card(Suit::Clubs, Rank::Seven), TOP, pending));
        // Matching the top card does not help against a request.
        assert!(!is_legal(card(Suit::Spades, Rank::Four), TOP, pending));
    }

    #[test]
    fn test_question_chain_branch() {
        let pending = Some(PendingEffect::QuestionChain { suit: Suit::Clubs });

        assert!(is_legal(card(Suit::Clubs, Rank::Seven), TOP, pending));
        assert!(is_legal(card(Suit::Hearts, Rank::Queen), TOP, pending));
        assert!(is_legal(card(Suit::Diamonds, Rank::Eight), TOP, pending));

        assert!(!is_legal(card(Suit::Hearts, Rank::Seven), TOP, pending));
        assert!(!is_legal(card(Suit::Hearts, Rank::Ace), TOP, pending));
    }

    #[test]
    fn test_group_shape() {
        assert!(!group_shape_ok(&[]));
        assert!(group_shape_ok(&[card(Suit::Hearts, Rank::Seven)]));
        assert!(group_shape_ok(&[
            card(Suit::Hearts, Rank::Seven),
            card(Suit::Clubs, Rank::Seven),
        ]));
        // 2/3 mix is the one cross-rank group.
        assert!(group_shape_ok(&[
            card(Suit::Hearts, Rank::Two),
            card(Suit::Clubs, Rank::Three),
        ]));
        assert!(!group_shape_ok(&[
            card(Suit::Hearts, Rank::Seven),
            card(Suit::Clubs, Rank::Eight),
        ]));
    }

    #[test]
    fn test_finish_eligibility() {
        // Normal rank always finishes.
        assert!(finish_eligible(&[card(Suit::Hearts, Rank::Seven)], None));

        // Specials cannot finish outside a suit lock.
        assert!(!finish_eligible(&[card(Suit::Hearts, Rank::King)], None));
        assert!(!finish_eligible(
            &[card(Suit::Hearts, Rank::Two)],
            Some(PendingEffect::DrawStack { count: 2 })
        ));

        // Exactly honoring an active suit request finishes.
        let lock = Some(PendingEffect::SuitRequest { suit: Suit::Hearts });
        assert!(finish_eligible(&[card(Suit::Hearts, Rank::King)], lock));
        assert!(!finish_eligible(&[card(Suit::Clubs, Rank::King)], lock));
        assert!(!finish_eligible(
            &[card(Suit::Hearts, Rank::King), card(Suit::Clubs, Rank::King)],
            lock
        ));
    }
}
