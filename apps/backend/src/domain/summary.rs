//! Aggregate match statistics derived from round history.

use serde::Serialize;

use crate::domain::moves::Move;
use crate::domain::rules::Outcome;
use crate::domain::state::{MatchState, RoundRecord};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WinTally {
    pub player1: u8,
    pub player2: u8,
    pub ties: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MoveTally {
    pub rock: u8,
    pub paper: u8,
    pub scissors: u8,
}

impl MoveTally {
    fn bump(&mut self, m: Move) {
        match m {
            Move::Rock => self.rock += 1,
            Move::Paper => self.paper += 1,
            Move::Scissors => self.scissors += 1,
        }
    }
}

/// Longest run of consecutive non-tie wins by one side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Streak {
    /// `None` when no round has been won yet.
    pub player: Option<Outcome>,
    pub length: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    pub total_rounds: u8,
    pub wins: WinTally,
    pub player1_moves: MoveTally,
    pub player2_moves: MoveTally,
    pub longest_streak: Streak,
}

/// Fold a match's round history into summary statistics.
///
/// Tie rounds are skipped by the streak tracking: they neither extend nor
/// reset the current run, so wins on either side of a tie still chain.
pub fn summarize(state: &MatchState) -> MatchSummary {
    summarize_rounds(&state.rounds)
}

pub fn summarize_rounds(rounds: &[RoundRecord]) -> MatchSummary {
    let mut wins = WinTally::default();
    let mut player1_moves = MoveTally::default();
    let mut player2_moves = MoveTally::default();
    let mut longest = Streak::default();
    let mut current = Streak::default();

    for record in rounds {
        match record.outcome {
            Outcome::Player1 => wins.player1 += 1,
            Outcome::Player2 => wins.player2 += 1,
            Outcome::Tie => wins.ties += 1,
        }
        player1_moves.bump(record.player1_move);
        player2_moves.bump(record.player2_move);

        if record.outcome != Outcome::Tie {
            if current.player == Some(record.outcome) {
                current.length += 1;
            } else {
                current = Streak {
                    player: Some(record.outcome),
                    length: 1,
                };
            }
            if current.length > longest.length {
                longest = current;
            }
        }
    }

    MatchSummary {
        total_rounds: rounds.len() as u8,
        wins,
        player1_moves,
        player2_moves,
        longest_streak: longest,
    }
}
