//! Standalone AI move route.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::ai::AnimationData;
use crate::domain::Move;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::services::GameFlowService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct AiMoveRequest {
    /// Opponent's previous moves, oldest first. Empty or omitted means the
    /// AI plays without history.
    pub history: Option<Vec<Move>>,
}

#[derive(Debug, Serialize)]
struct AiMoveResponse {
    r#move: Move,
    #[serde(skip_serializing_if = "Option::is_none")]
    rationale: Option<String>,
    animation: AnimationData,
}

/// POST /api/ai/move
async fn ai_move(
    app_state: web::Data<AppState>,
    body: ValidatedJson<AiMoveRequest>,
) -> Result<HttpResponse, AppError> {
    let history = body.into_inner().history.unwrap_or_default();
    let (chosen, animation) = GameFlowService::new().ai_move(&app_state, history).await?;

    Ok(HttpResponse::Ok().json(AiMoveResponse {
        r#move: chosen.mv,
        rationale: chosen.rationale,
        animation,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/move").route(web::post().to(ai_move)));
}
