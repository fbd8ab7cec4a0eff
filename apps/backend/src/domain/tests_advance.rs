use time::macros::datetime;
use time::OffsetDateTime;

use crate::domain::moves::{Move, RawMove};
use crate::domain::rules::{MatchRules, Outcome};
use crate::domain::state::{advance_round, GameMode, MatchState, MatchStatus};
use crate::errors::domain::DomainError;

const T0: OffsetDateTime = datetime!(2026-01-01 12:00:00 UTC);

fn fresh() -> MatchState {
    MatchState::new(GameMode::Single, T0)
}

fn rules() -> MatchRules {
    MatchRules::best_of_three()
}

#[test]
fn first_round_activates_the_match() {
    let state = fresh();
    assert_eq!(state.status, MatchStatus::Waiting);

    let next = advance_round(&state, &rules(), Move::Rock, Move::Rock, T0).unwrap();
    assert_eq!(next.status, MatchStatus::Active);
    assert_eq!(next.round_number, 1);
    assert_eq!(next.rounds.len(), 1);
    assert_eq!(next.rounds[0].round, 1);
    assert_eq!(next.rounds[0].outcome, Outcome::Tie);
    assert_eq!(next.player1_score, 0);
    assert_eq!(next.player2_score, 0);

    // Input state is untouched; advancement is value-in, value-out.
    assert_eq!(state.status, MatchStatus::Waiting);
    assert!(state.rounds.is_empty());
}

#[test]
fn scores_accumulate_per_winner() {
    let mut state = fresh();
    state = advance_round(&state, &rules(), Move::Rock, Move::Scissors, T0).unwrap();
    assert_eq!((state.player1_score, state.player2_score), (1, 0));

    state = advance_round(&state, &rules(), Move::Rock, Move::Paper, T0).unwrap();
    assert_eq!((state.player1_score, state.player2_score), (1, 1));
}

#[test]
fn round_three_of_three_with_tied_scores_finishes() {
    // Three ties: no score threshold reached, round total is what ends it.
    let mut state = fresh();
    for expected_round in 1..=3u8 {
        state = advance_round(&state, &rules(), Move::Paper, Move::Paper, T0).unwrap();
        assert_eq!(state.round_number, expected_round);
    }
    assert_eq!(state.status, MatchStatus::Finished);
    assert_eq!(state.rounds.len(), 3);
    assert_eq!(state.rounds[2].round, 3);
    assert_eq!((state.player1_score, state.player2_score), (0, 0));
}

#[test]
fn win_target_finishes_early() {
    let mut state = fresh();
    state = advance_round(&state, &rules(), Move::Rock, Move::Scissors, T0).unwrap();
    assert_eq!(state.status, MatchStatus::Active);
    state = advance_round(&state, &rules(), Move::Rock, Move::Scissors, T0).unwrap();
    assert_eq!(state.status, MatchStatus::Finished);
    assert_eq!(state.round_number, 2);
}

#[test]
fn advancing_a_finished_match_is_rejected() {
    let mut state = fresh();
    for _ in 0..3 {
        state = advance_round(&state, &rules(), Move::Paper, Move::Paper, T0).unwrap();
    }
    assert_eq!(state.status, MatchStatus::Finished);

    let err = advance_round(&state, &rules(), Move::Rock, Move::Paper, T0).unwrap_err();
    assert_eq!(err, DomainError::MatchFinished);
    // No record appended by the failed call.
    assert_eq!(state.rounds.len(), 3);
}

#[test]
fn normalized_none_is_recorded_as_the_default_move() {
    let state = fresh();
    let r = rules();
    let player_move = RawMove::None.normalized(r.default_move);
    let next = advance_round(&state, &r, player_move, Move::Scissors, T0).unwrap();

    // The record holds the normalized move, never `none`.
    assert_eq!(next.rounds[0].player1_move, Move::Rock);
    assert_eq!(next.rounds[0].outcome, Outcome::Player1);
}

#[test]
fn round_indices_are_strictly_increasing() {
    let mut state = fresh();
    let r = MatchRules {
        total_rounds: 5,
        win_target: 5,
        default_move: Move::Rock,
    };
    for _ in 0..5 {
        state = advance_round(&state, &r, Move::Rock, Move::Rock, T0).unwrap();
    }
    let indices: Vec<u8> = state.rounds.iter().map(|rec| rec.round).collect();
    assert_eq!(indices, vec![1, 2, 3, 4, 5]);
}

#[test]
fn updated_at_tracks_the_round_timestamp() {
    let state = fresh();
    let later = datetime!(2026-01-01 12:00:30 UTC);
    let next = advance_round(&state, &rules(), Move::Rock, Move::Paper, later).unwrap();
    assert_eq!(next.created_at, T0);
    assert_eq!(next.updated_at, later);
    assert_eq!(next.rounds[0].at, later);
}
