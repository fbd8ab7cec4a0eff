//! Property tests over the round resolver and round advancement.

use proptest::prelude::*;
use time::macros::datetime;

use crate::domain::moves::Move;
use crate::domain::rules::{resolve, MatchRules, Outcome};
use crate::domain::state::{advance_round, GameMode, MatchState, MatchStatus};

fn any_move() -> impl Strategy<Value = Move> {
    prop_oneof![
        Just(Move::Rock),
        Just(Move::Paper),
        Just(Move::Scissors),
    ]
}

proptest! {
    #[test]
    fn resolve_is_total_and_antisymmetric(a in any_move(), b in any_move()) {
        let fwd = resolve(a, b);
        let rev = resolve(b, a);
        if a == b {
            prop_assert_eq!(fwd, Outcome::Tie);
            prop_assert_eq!(rev, Outcome::Tie);
        } else {
            prop_assert_ne!(fwd, Outcome::Tie);
            prop_assert_eq!(rev, fwd.flipped());
        }
    }

    #[test]
    fn resolve_is_idempotent(a in any_move(), b in any_move()) {
        prop_assert_eq!(resolve(a, b), resolve(a, b));
    }

    #[test]
    fn advancement_preserves_score_and_history_invariants(
        moves in proptest::collection::vec((any_move(), any_move()), 0..10)
    ) {
        let rules = MatchRules::best_of_three();
        let t = datetime!(2026-01-01 00:00:00 UTC);
        let mut state = MatchState::new(GameMode::Single, t);

        for (p1, p2) in moves {
            match advance_round(&state, &rules, p1, p2, t) {
                Ok(next) => {
                    // Exactly one record per advance, strictly increasing index.
                    prop_assert_eq!(next.rounds.len(), state.rounds.len() + 1);
                    prop_assert_eq!(next.round_number, state.round_number + 1);
                    prop_assert_eq!(
                        next.rounds.last().map(|r| r.round),
                        Some(next.round_number)
                    );
                    // Scores only ever count wins, one per non-tie round.
                    let decided = next
                        .rounds
                        .iter()
                        .filter(|r| r.outcome != Outcome::Tie)
                        .count() as u8;
                    prop_assert_eq!(next.player1_score + next.player2_score, decided);
                    prop_assert_ne!(next.status, MatchStatus::Waiting);
                    state = next;
                }
                Err(_) => {
                    // Only a finished match rejects advancement.
                    prop_assert_eq!(state.status, MatchStatus::Finished);
                }
            }
        }

        // Termination bounds from the ruleset.
        prop_assert!(state.round_number <= rules.total_rounds);
        prop_assert!(state.player1_score <= rules.win_target);
        prop_assert!(state.player2_score <= rules.win_target);
    }
}
