//! Game session HTTP routes.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::ai::AnimationData;
use crate::domain::moves::{Move, RawMove};
use crate::domain::rules::Outcome;
use crate::domain::state::{GameMode, MatchStatus};
use crate::domain::summarize;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::{GameId, ValidatedJson};
use crate::services::{GameFlowService, SessionService};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateGameRequest {
    /// Defaults to `single` when omitted.
    pub mode: Option<String>,
}

#[derive(Debug, Serialize)]
struct CreateGameResponse {
    game_id: Uuid,
    status: &'static str,
    mode: GameMode,
}

fn parse_mode(raw: Option<&str>) -> Result<GameMode, AppError> {
    match raw {
        None | Some("single") => Ok(GameMode::Single),
        Some("multiplayer") => Ok(GameMode::Multiplayer),
        Some(other) => Err(AppError::validation(
            ErrorCode::InvalidGameMode,
            format!("unknown game mode: {other}"),
        )),
    }
}

/// POST /api/games
async fn create_game(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateGameRequest>,
) -> Result<HttpResponse, AppError> {
    let mode = parse_mode(body.mode.as_deref())?;
    let state = SessionService::new().create(&app_state.sessions, mode);

    Ok(HttpResponse::Created().json(CreateGameResponse {
        game_id: state.id,
        status: "created",
        mode: state.mode,
    }))
}

/// GET /api/games/{game_id}
async fn get_game(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let state = SessionService::new().get(&app_state.sessions, game_id.0)?;
    Ok(HttpResponse::Ok().json(state))
}

#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    /// "rock", "paper", "scissors" or "none"; parsed through the domain so
    /// out-of-set values surface as `INVALID_MOVE`, not a generic 400.
    pub r#move: String,
}

#[derive(Debug, Serialize)]
struct ScoreView {
    player: u8,
    ai: u8,
}

#[derive(Debug, Serialize)]
struct RoundResponse {
    player_move: Move,
    ai_move: Move,
    #[serde(skip_serializing_if = "Option::is_none")]
    ai_rationale: Option<String>,
    result: Outcome,
    score: ScoreView,
    round: u8,
    status: MatchStatus,
    animation: AnimationData,
}

/// POST /api/games/{game_id}/moves
async fn play_move(
    game_id: GameId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<MoveRequest>,
) -> Result<HttpResponse, AppError> {
    let player_move = body.r#move.parse::<RawMove>()?;
    let report = GameFlowService::new()
        .play_round(&app_state, game_id.0, player_move)
        .await?;

    Ok(HttpResponse::Ok().json(RoundResponse {
        player_move: report.record.player1_move,
        ai_move: report.record.player2_move,
        ai_rationale: report.ai.rationale,
        result: report.record.outcome,
        score: ScoreView {
            player: report.state.player1_score,
            ai: report.state.player2_score,
        },
        round: report.record.round,
        status: report.state.status,
        animation: report.animation,
    }))
}

/// GET /api/games/{game_id}/summary
async fn get_summary(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let state = SessionService::new().get(&app_state.sessions, game_id.0)?;
    Ok(HttpResponse::Ok().json(summarize(&state)))
}

/// DELETE /api/games/{game_id}
async fn delete_game(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    SessionService::new().evict(&app_state.sessions, game_id.0)?;
    info!(game_id = %game_id.0, "game session deleted");
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(create_game)));
    cfg.service(
        web::resource("/{game_id}")
            .route(web::get().to(get_game))
            .route(web::delete().to(delete_game)),
    );
    cfg.service(web::resource("/{game_id}/moves").route(web::post().to(play_move)));
    cfg.service(web::resource("/{game_id}/summary").route(web::get().to(get_summary)));
}
