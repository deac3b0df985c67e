//! End-to-end flows through the public API: whole games driven the way the
//! presentation layer would drive them, with the table invariants checked
//! at every step.

use std::time::{Duration, Instant};

use karata::{
    finish_eligible, is_legal, Card, Declaration, GameSession, GameStatus, PendingEffect, Rank,
    Seat,
};

/// Minimal human stand-in: first legal single card, else draw. Declares
/// what the rules require and never attempts an ineligible finish.
fn drive_human(session: &mut GameSession, now: Instant) {
    let state = session.game().state();
    let hand: Vec<Card> = state.hand(Seat::Human).to_vec();
    let top = state.top_card().expect("discard is never empty in play");
    let pending = state.pending_effect();

    let choice = hand.iter().copied().find(|c| {
        is_legal(*c, top, pending) && (hand.len() > 1 || finish_eligible(&[*c], pending))
    });

    match choice {
        Some(card) => {
            let declaration = match card.rank {
                Rank::Ace if !matches!(pending, Some(PendingEffect::DrawStack { .. })) => {
                    Some(Declaration::RequestSuit(card.suit))
                }
                Rank::Queen | Rank::Eight => Some(Declaration::ContinueSuit(card.suit)),
                _ => None,
            };
            session
                .play_cards(&[card], declaration, now)
                .expect("a legal single with its declaration is accepted");
        }
        None => {
            session.draw_cards(now);
        }
    }
}

#[test]
fn test_invariants_hold_across_long_games() {
    for seed in [1u64, 7, 42, 1234, 99_999] {
        let mut session = GameSession::new(seed);
        let mut now = Instant::now();
        session.start_game(now).unwrap();

        for _ in 0..600 {
            let state = session.game().state();
            if state.status().is_over() {
                break;
            }

            assert_eq!(state.card_total(), 52, "conservation broke, seed {seed}");
            assert!(!state.discard_pile().is_empty(), "seed {seed}");

            match state.turn_owner() {
                Seat::Human => drive_human(&mut session, now),
                Seat::Opponent => {
                    assert!(session.is_opponent_thinking(), "seed {seed}");
                    now += Duration::from_secs(2);
                    assert!(session.poll_opponent(now), "seed {seed}");
                    // A full opponent turn always hands the turn over or
                    // ends the game.
                    let state = session.game().state();
                    assert!(
                        state.status().is_over() || state.turn_owner() == Seat::Human,
                        "seed {seed}"
                    );
                }
            }
        }

        let state = session.game().state();
        assert_eq!(state.card_total(), 52, "seed {seed}");
        if let Some(winner) = state.status().winner() {
            assert!(state.hand(winner).is_empty(), "seed {seed}");
            // The winning play went down on the pile like any other.
            assert!(state.discard_pile().len() >= 2, "seed {seed}");
        }
    }
}

#[test]
fn test_same_seed_replays_identically() {
    let run = |seed: u64| -> Vec<String> {
        let mut session = GameSession::new(seed);
        let mut now = Instant::now();
        session.start_game(now).unwrap();

        let mut log = Vec::new();
        for _ in 0..200 {
            if session.game().state().status().is_over() {
                break;
            }
            match session.game().state().turn_owner() {
                Seat::Human => drive_human(&mut session, now),
                Seat::Opponent => {
                    now += Duration::from_secs(2);
                    session.poll_opponent(now);
                }
            }
            log.push(session.game().state().last_action().to_string());
        }
        log
    };

    assert_eq!(run(42), run(42));
    assert_ne!(run(1), run(2));
}

#[test]
fn test_view_serializes_midgame() {
    let mut session = GameSession::new(42);
    let mut now = Instant::now();
    session.start_game(now).unwrap();

    for _ in 0..20 {
        if session.game().state().status().is_over() {
            break;
        }
        match session.game().state().turn_owner() {
            Seat::Human => drive_human(&mut session, now),
            Seat::Opponent => {
                now += Duration::from_secs(2);
                session.poll_opponent(now);
            }
        }
    }

    let view = session.view();
    let json = serde_json::to_string(&view).unwrap();
    assert!(json.contains("\"status\""));
    assert!(json.contains("\"pending_effect\""));
    assert!(json.contains("\"discard_pile\""));
}

#[test]
fn test_history_narrates_the_game() {
    let mut session = GameSession::new(42);
    let mut now = Instant::now();
    session.start_game(now).unwrap();

    for _ in 0..40 {
        if session.game().state().status().is_over() {
            break;
        }
        match session.game().state().turn_owner() {
            Seat::Human => drive_human(&mut session, now),
            Seat::Opponent => {
                now += Duration::from_secs(2);
                session.poll_opponent(now);
            }
        }
    }

    let state = session.game().state();
    assert_eq!(state.history().len() as u32, state.turn_count());
    for (index, record) in state.history().iter().enumerate() {
        assert_eq!(record.turn, index as u32);
        assert!(!record.description.is_empty());
    }
}

#[test]
fn test_reset_mid_game_returns_to_setup() {
    let mut session = GameSession::new(42);
    let now = Instant::now();
    session.start_game(now).unwrap();

    session.reset_game();

    let state = session.game().state();
    assert_eq!(state.status(), GameStatus::Setup);
    assert_eq!(state.card_total(), 0);
    assert!(state.discard_pile().is_empty());
    assert!(!session.is_opponent_thinking());

    // A reset table accepts a fresh start.
    session.start_game(now).unwrap();
    assert_eq!(session.game().state().status(), GameStatus::Playing);
    assert_eq!(session.game().state().card_total(), 52);
}
