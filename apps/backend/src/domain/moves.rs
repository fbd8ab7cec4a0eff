//! Move types for Rock-Paper-Scissors.
//!
//! `Move` is the canonical three-value type every domain operation works with.
//! `RawMove` is the boundary type: it additionally accepts `none` ("no gesture
//! detected") and must be normalized to a canonical move before resolution.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

/// A canonical move. Only these three values participate in resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    pub fn as_str(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }

    /// The move that beats `self` (paper counters rock, etc.).
    pub fn counter(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    /// The move that `self` beats.
    pub fn prey(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Move {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" => Ok(Move::Rock),
            "paper" => Ok(Move::Paper),
            "scissors" => Ok(Move::Scissors),
            other => Err(DomainError::invalid_move(other)),
        }
    }
}

/// Boundary move value: canonical moves plus the `none` sentinel reported by
/// the gesture classifier when no hand was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RawMove {
    Rock,
    Paper,
    Scissors,
    None,
}

impl RawMove {
    /// Normalize to a canonical move, substituting `default` for `none`.
    ///
    /// Callers must normalize before handing moves to the resolver; round
    /// records always hold the normalized value, never `none`.
    pub fn normalized(self, default: Move) -> Move {
        match self {
            RawMove::Rock => Move::Rock,
            RawMove::Paper => Move::Paper,
            RawMove::Scissors => Move::Scissors,
            RawMove::None => default,
        }
    }
}

impl FromStr for RawMove {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("none") {
            return Ok(RawMove::None);
        }
        s.parse::<Move>().map(RawMove::from)
    }
}

impl From<Move> for RawMove {
    fn from(m: Move) -> Self {
        match m {
            Move::Rock => RawMove::Rock,
            Move::Paper => RawMove::Paper,
            Move::Scissors => RawMove::Scissors,
        }
    }
}
