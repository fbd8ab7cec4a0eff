//! Error codes for the StoneX backend API.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in HTTP responses. Add new codes here; never pass ad-hoc strings.

use core::fmt;

/// Centralized error codes for the StoneX backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request validation
    /// Move value outside {rock, paper, scissors, none}
    InvalidMove,
    /// Invalid game ID in the path
    InvalidGameId,
    /// Invalid or unknown game mode
    InvalidGameMode,
    /// Gesture request carried no image payload
    MissingImage,
    /// Image payload was not decodable base64
    InvalidImage,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource not found
    /// Game session not found
    GameNotFound,
    /// General not found error
    NotFound,

    // Business logic conflicts
    /// Round advancement on a finished match
    MatchFinished,
    /// Operation not supported for the session's game mode
    ModeUnsupported,

    // Upstream collaborators
    /// AI move provider failed
    AiUnavailable,
    /// Gesture classifier failed
    GestureUpstream,

    // Infrastructure
    /// Internal server error
    InternalError,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Canonical wire string for this code.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidMove => "INVALID_MOVE",
            ErrorCode::InvalidGameId => "INVALID_GAME_ID",
            ErrorCode::InvalidGameMode => "INVALID_GAME_MODE",
            ErrorCode::MissingImage => "MISSING_IMAGE",
            ErrorCode::InvalidImage => "INVALID_IMAGE",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::GameNotFound => "GAME_NOT_FOUND",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::MatchFinished => "MATCH_FINISHED",
            ErrorCode::ModeUnsupported => "MODE_UNSUPPORTED",
            ErrorCode::AiUnavailable => "AI_UNAVAILABLE",
            ErrorCode::GestureUpstream => "GESTURE_UPSTREAM",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &[ErrorCode] = &[
        ErrorCode::InvalidMove,
        ErrorCode::InvalidGameId,
        ErrorCode::InvalidGameMode,
        ErrorCode::MissingImage,
        ErrorCode::InvalidImage,
        ErrorCode::ValidationError,
        ErrorCode::BadRequest,
        ErrorCode::GameNotFound,
        ErrorCode::NotFound,
        ErrorCode::MatchFinished,
        ErrorCode::ModeUnsupported,
        ErrorCode::AiUnavailable,
        ErrorCode::GestureUpstream,
        ErrorCode::InternalError,
        ErrorCode::ConfigError,
    ];

    #[test]
    fn wire_strings_are_unique_and_screaming_snake() {
        let mut seen = std::collections::HashSet::new();
        for code in ALL {
            let s = code.as_str();
            assert!(seen.insert(s), "duplicate error code string: {s}");
            assert!(
                s.chars().all(|c| c.is_ascii_uppercase() || c == '_'),
                "not SCREAMING_SNAKE_CASE: {s}"
            );
        }
    }
}
