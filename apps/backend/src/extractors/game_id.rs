//! Game ID path extractor.
//!
//! Parses the `game_id` path parameter as a UUID and verifies the session
//! exists, so handlers start from a known-live session id.

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use uuid::Uuid;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::state::app_state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameId(pub Uuid);

impl FromRequest for GameId {
    type Error = AppError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        std::future::ready(extract(req))
    }
}

fn extract(req: &HttpRequest) -> Result<GameId, AppError> {
    let raw = req.match_info().get("game_id").ok_or_else(|| {
        AppError::bad_request(ErrorCode::InvalidGameId, "missing game_id parameter")
    })?;

    let id = raw.parse::<Uuid>().map_err(|_| {
        AppError::bad_request(ErrorCode::InvalidGameId, format!("invalid game id: {raw}"))
    })?;

    let app_state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::internal("AppState not available"))?;

    if !app_state.sessions.contains(id) {
        return Err(AppError::not_found(
            ErrorCode::GameNotFound,
            format!("game {id} not found"),
        ));
    }

    Ok(GameId(id))
}
