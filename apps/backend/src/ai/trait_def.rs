//! AI move provider trait definition.

use std::fmt;

use async_trait::async_trait;

use crate::domain::Move;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// What the AI opponent is allowed to see when choosing a move: the human
/// player's history, oldest move first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpponentView {
    pub opponent_moves: Vec<Move>,
}

impl OpponentView {
    pub fn from_moves(moves: Vec<Move>) -> Self {
        Self {
            opponent_moves: moves,
        }
    }

    pub fn last_opponent_move(&self) -> Option<Move> {
        self.opponent_moves.last().copied()
    }
}

/// A chosen move plus optional free-text rationale.
///
/// The rationale is opaque to the core; it is passed through to clients for
/// display and never interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvidedMove {
    pub mv: Move,
    pub rationale: Option<String>,
}

impl ProvidedMove {
    pub fn bare(mv: Move) -> Self {
        Self { mv, rationale: None }
    }
}

/// Errors that can occur during AI decision-making.
#[derive(Debug)]
pub enum AiError {
    /// Provider is not usable (missing key, no endpoint configured).
    Unconfigured(String),
    /// The hosted model call failed.
    Upstream(String),
    /// The provider produced something outside the canonical move set.
    InvalidMove(String),
    /// Internal provider failure.
    Internal(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::Unconfigured(msg) => write!(f, "AI provider unconfigured: {msg}"),
            AiError::Upstream(msg) => write!(f, "AI upstream error: {msg}"),
            AiError::InvalidMove(msg) => write!(f, "AI invalid move: {msg}"),
            AiError::Internal(msg) => write!(f, "AI internal error: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

impl From<AiError> for AppError {
    fn from(err: AiError) -> Self {
        AppError::upstream(ErrorCode::AiUnavailable, err.to_string())
    }
}

/// Capability for obtaining the AI opponent's move.
///
/// Implementations must only ever return canonical moves. Network-backed
/// providers surface failures as [`AiError`]; retry or fallback policy
/// belongs to the calling service, never to the provider itself.
#[async_trait]
pub trait MoveProvider: Send + Sync {
    /// Stable provider name, used for registry lookup and logging.
    fn name(&self) -> &'static str;

    /// Choose the next move given the opponent's visible history.
    async fn choose(&self, view: &OpponentView) -> Result<ProvidedMove, AiError>;
}
