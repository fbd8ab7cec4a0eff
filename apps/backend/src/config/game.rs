//! Match rule configuration from the environment.
//!
//! - `STONEX_TOTAL_ROUNDS` (default 3)
//! - `STONEX_WIN_TARGET` (default: majority of the round total)
//! - `STONEX_DEFAULT_MOVE` (default "rock"; substituted for `none` inputs)

use std::str::FromStr;

use crate::domain::{MatchRules, Move};
use crate::error::AppError;

fn env_u8(key: &str, default: u8) -> Result<u8, AppError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u8>()
            .map_err(|_| AppError::config(format!("{key} must be a small integer, got {raw:?}"))),
        Err(_) => Ok(default),
    }
}

/// Build the match rules, validating that they describe a playable match.
pub fn match_rules_from_env() -> Result<MatchRules, AppError> {
    let total_rounds = env_u8("STONEX_TOTAL_ROUNDS", 3)?;
    let win_target = env_u8("STONEX_WIN_TARGET", total_rounds / 2 + 1)?;

    let default_move = match std::env::var("STONEX_DEFAULT_MOVE") {
        Ok(raw) => Move::from_str(&raw)
            .map_err(|e| AppError::config(format!("STONEX_DEFAULT_MOVE: {e}")))?,
        Err(_) => Move::Rock,
    };

    let rules = MatchRules {
        total_rounds,
        win_target,
        default_move,
    };
    rules
        .validate()
        .map_err(|e| AppError::config(format!("match rules: {e}")))
}
