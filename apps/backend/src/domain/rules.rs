//! Round resolution rules and match configuration.

use serde::{Deserialize, Serialize};

use crate::domain::moves::Move;
use crate::errors::domain::DomainError;

pub const PLAYERS: usize = 2;

/// Result of one resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Player1,
    Player2,
    Tie,
}

impl Outcome {
    /// The same result seen from the opposite side of the table.
    pub fn flipped(self) -> Outcome {
        match self {
            Outcome::Player1 => Outcome::Player2,
            Outcome::Player2 => Outcome::Player1,
            Outcome::Tie => Outcome::Tie,
        }
    }
}

/// Resolve a round: identical moves tie, otherwise the dominant move wins.
///
/// Pure and total over the canonical move set. Inputs containing `none`
/// must be normalized by the caller before reaching this function.
pub fn resolve(player1: Move, player2: Move) -> Outcome {
    if player1 == player2 {
        Outcome::Tie
    } else if player1.prey() == player2 {
        Outcome::Player1
    } else {
        Outcome::Player2
    }
}

/// Fixed per-match configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRules {
    /// Number of rounds a match runs to (1-based round indices go up to this).
    pub total_rounds: u8,
    /// A score that ends the match early when reached.
    pub win_target: u8,
    /// Substitute for `none` moves at the boundary.
    pub default_move: Move,
}

impl MatchRules {
    /// Canonical best-of-3 ruleset.
    pub fn best_of_three() -> Self {
        Self {
            total_rounds: 3,
            win_target: 2,
            default_move: Move::Rock,
        }
    }

    /// Validate that the ruleset describes a playable match: at least one
    /// round, and a win target reachable within the round total.
    pub fn validate(self) -> Result<Self, DomainError> {
        if self.total_rounds == 0 {
            return Err(DomainError::validation("total_rounds must be at least 1"));
        }
        if self.win_target == 0 || self.win_target > self.total_rounds {
            return Err(DomainError::validation(format!(
                "win_target must be in 1..={}, got {}",
                self.total_rounds, self.win_target
            )));
        }
        Ok(self)
    }
}

impl Default for MatchRules {
    fn default() -> Self {
        Self::best_of_three()
    }
}
