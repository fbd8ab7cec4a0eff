//! Domain layer: pure game logic types and helpers.

pub mod analysis;
pub mod moves;
pub mod rules;
pub mod state;
pub mod summary;

#[cfg(test)]
mod tests_advance;
#[cfg(test)]
mod tests_props;

// Re-exports for ergonomics
pub use analysis::{analyze, MoveAnalysis};
pub use moves::{Move, RawMove};
pub use rules::{resolve, MatchRules, Outcome};
pub use state::{advance_round, GameMode, MatchState, MatchStatus, RoundRecord};
pub use summary::{summarize, MatchSummary};
