//! Domain-level error type used across the core and services.
//!
//! This error type is HTTP-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert from `DomainError` via the
//! `From<DomainError> for AppError` implementation in `crate::error`.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Central domain error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A move value outside the canonical set after normalization.
    InvalidMove(String),
    /// Round advancement requested on a match that is already finished.
    MatchFinished,
    /// Operation not available for the session's game mode.
    ModeUnsupported(String),
    /// Lookup against an unknown session identifier.
    SessionNotFound(String),
    /// Input or configuration validation failure.
    Validation(String),
}

impl DomainError {
    pub fn invalid_move(value: impl Into<String>) -> Self {
        Self::InvalidMove(value.into())
    }

    pub fn mode_unsupported(detail: impl Into<String>) -> Self {
        Self::ModeUnsupported(detail.into())
    }

    pub fn session_not_found(id: impl Into<String>) -> Self {
        Self::SessionNotFound(id.into())
    }

    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::InvalidMove(v) => write!(f, "invalid move: {v}"),
            DomainError::MatchFinished => write!(f, "match already finished"),
            DomainError::ModeUnsupported(d) => write!(f, "mode unsupported: {d}"),
            DomainError::SessionNotFound(id) => write!(f, "session not found: {id}"),
            DomainError::Validation(d) => write!(f, "validation error: {d}"),
        }
    }
}

impl Error for DomainError {}
