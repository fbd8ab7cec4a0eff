#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod gesture;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod trace_ctx;

// Re-exports for public API
pub use ai::{MoveProvider, ProvidedMove, RandomProvider, StrategicProvider};
pub use domain::{advance_round, resolve, MatchRules, MatchState, Move, Outcome, RawMove};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use extractors::game_id::GameId;
pub use extractors::validated_json::ValidatedJson;
pub use gesture::{GestureClassifier, GestureReading, ImagePayload};
pub use middleware::cors::cors_middleware;
pub use middleware::request_trace::RequestTrace;
pub use middleware::structured_logger::StructuredLogger;
pub use state::app_state::AppState;
pub use store::SessionStore;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
