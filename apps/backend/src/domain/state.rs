//! Match state container and round advancement.
//!
//! `MatchState` is owned by the session store and only ever replaced wholesale:
//! [`advance_round`] takes the current state by reference and returns the next
//! state as a value, so callers decide when (and whether) to write it back.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::moves::Move;
use crate::domain::rules::{resolve, MatchRules, Outcome};
use crate::errors::domain::DomainError;

/// How the match is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// One human against the AI opponent.
    Single,
    /// Two humans. Sessions can be created in this mode but round
    /// advancement against the AI is rejected.
    Multiplayer,
}

/// Match lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    /// Created, no round played yet.
    Waiting,
    /// At least one round resolved, more to come.
    Active,
    /// Round total or win target reached; no further rounds accepted.
    Finished,
}

/// One completed round. Appended once, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based index, strictly increasing within a match.
    pub round: u8,
    pub player1_move: Move,
    pub player2_move: Move,
    pub outcome: Outcome,
    #[serde(with = "time::serde::rfc3339")]
    pub at: OffsetDateTime,
}

/// Full state of one game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub id: Uuid,
    pub mode: GameMode,
    pub status: MatchStatus,
    pub player1_score: u8,
    pub player2_score: u8,
    /// Number of rounds resolved so far; equals `rounds.len()`.
    pub round_number: u8,
    pub rounds: Vec<RoundRecord>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl MatchState {
    /// Fresh session in `Waiting` status with a random id.
    pub fn new(mode: GameMode, at: OffsetDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            mode,
            status: MatchStatus::Waiting,
            player1_score: 0,
            player2_score: 0,
            round_number: 0,
            rounds: Vec::new(),
            created_at: at,
            updated_at: at,
        }
    }

    /// Player-1 moves in round order, oldest first. Input for AI opponent
    /// pattern analysis.
    pub fn player1_moves(&self) -> Vec<Move> {
        self.rounds.iter().map(|r| r.player1_move).collect()
    }

    pub fn last_player1_move(&self) -> Option<Move> {
        self.rounds.last().map(|r| r.player1_move)
    }
}

/// Resolve one round and fold it into a new `MatchState`.
///
/// Moves must already be normalized (no `none`). The first advanced round
/// transitions `Waiting` to `Active`; the state becomes `Finished` when the
/// round total is exhausted or either score reaches the win target.
///
/// Returns `MatchFinished` when called on a match that is already over; the
/// input state is never observedly changed on failure.
pub fn advance_round(
    state: &MatchState,
    rules: &MatchRules,
    player1: Move,
    player2: Move,
    at: OffsetDateTime,
) -> Result<MatchState, DomainError> {
    if state.status == MatchStatus::Finished {
        return Err(DomainError::MatchFinished);
    }

    let mut next = state.clone();
    let outcome = resolve(player1, player2);

    match outcome {
        Outcome::Player1 => next.player1_score += 1,
        Outcome::Player2 => next.player2_score += 1,
        Outcome::Tie => {}
    }

    next.round_number += 1;
    next.rounds.push(RoundRecord {
        round: next.round_number,
        player1_move: player1,
        player2_move: player2,
        outcome,
        at,
    });
    next.updated_at = at;

    let score_reached =
        next.player1_score >= rules.win_target || next.player2_score >= rules.win_target;
    next.status = if next.round_number >= rules.total_rounds || score_reached {
        MatchStatus::Finished
    } else {
        MatchStatus::Active
    };

    Ok(next)
}
