//! Application error type and RFC 7807 response mapping.

use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::errors::{DomainError, ErrorCode};
use crate::trace_ctx;

/// Problem-details body emitted for every error response.
#[derive(Debug, Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Bad request: {detail}")]
    BadRequest { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },
    #[error("Upstream failure: {detail}")]
    Upstream { code: ErrorCode, detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn validation(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
        }
    }

    pub fn bad_request(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            detail: detail.into(),
        }
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn conflict(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Conflict {
            code,
            detail: detail.into(),
        }
    }

    pub fn upstream(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Upstream {
            code,
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. }
            | AppError::BadRequest { code, .. }
            | AppError::NotFound { code, .. }
            | AppError::Conflict { code, .. }
            | AppError::Upstream { code, .. } => *code,
            AppError::Internal { .. } => ErrorCode::InternalError,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    fn detail(&self) -> &str {
        match self {
            AppError::Validation { detail, .. }
            | AppError::BadRequest { detail, .. }
            | AppError::NotFound { detail, .. }
            | AppError::Conflict { detail, .. }
            | AppError::Upstream { detail, .. }
            | AppError::Internal { detail }
            | AppError::Config { detail } => detail,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal { .. } | AppError::Config { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidMove(v) => {
                AppError::validation(ErrorCode::InvalidMove, format!("invalid move: {v}"))
            }
            DomainError::MatchFinished => AppError::conflict(
                ErrorCode::MatchFinished,
                "match is already finished; no further rounds accepted",
            ),
            DomainError::ModeUnsupported(d) => AppError::conflict(ErrorCode::ModeUnsupported, d),
            DomainError::SessionNotFound(id) => {
                AppError::not_found(ErrorCode::GameNotFound, format!("game {id} not found"))
            }
            DomainError::Validation(d) => AppError::validation(ErrorCode::ValidationError, d),
        }
    }
}

impl From<std::env::VarError> for AppError {
    fn from(e: std::env::VarError) -> Self {
        AppError::config(format!("env var error: {e}"))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let code = self.code().as_str();
        let trace_id = trace_ctx::trace_id();

        let problem_details = ProblemDetails {
            type_: format!("https://stonex.dev/errors/{code}"),
            title: Self::humanize_code(code),
            status: status.as_u16(),
            detail: self.detail().to_string(),
            code: code.to_string(),
            trace_id: trace_id.clone(),
        };

        HttpResponse::build(status)
            .content_type("application/problem+json")
            .insert_header(("x-request-id", trace_id))
            .json(problem_details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_expected_statuses() {
        let cases = [
            (
                AppError::from(DomainError::invalid_move("lizard")),
                StatusCode::BAD_REQUEST,
                ErrorCode::InvalidMove,
            ),
            (
                AppError::from(DomainError::MatchFinished),
                StatusCode::CONFLICT,
                ErrorCode::MatchFinished,
            ),
            (
                AppError::from(DomainError::session_not_found("abc")),
                StatusCode::NOT_FOUND,
                ErrorCode::GameNotFound,
            ),
            (
                AppError::from(DomainError::validation("bad rules")),
                StatusCode::BAD_REQUEST,
                ErrorCode::ValidationError,
            ),
        ];
        for (err, status, code) in cases {
            assert_eq!(err.status(), status);
            assert_eq!(err.code(), code);
        }
    }

    #[test]
    fn humanized_titles_read_naturally() {
        assert_eq!(AppError::humanize_code("MATCH_FINISHED"), "Match Finished");
        assert_eq!(AppError::humanize_code("AI_UNAVAILABLE"), "Ai Unavailable");
    }
}
