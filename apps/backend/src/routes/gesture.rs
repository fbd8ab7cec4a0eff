//! Gesture recognition route.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::ValidatedJson;
use crate::gesture::{feedback_for, GestureClassifier, GestureFeedback, ImagePayload};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecognizeRequest {
    /// Base64-encoded frame, with or without a `data:*;base64,` prefix.
    pub image: Option<String>,
}

#[derive(Debug, Serialize)]
struct RecognizeResponse {
    gesture: &'static str,
    confidence: f32,
    detected: bool,
    feedback: GestureFeedback,
}

/// POST /api/gesture/recognize
async fn recognize(
    app_state: web::Data<AppState>,
    body: ValidatedJson<RecognizeRequest>,
) -> Result<HttpResponse, AppError> {
    let raw = body
        .into_inner()
        .image
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| {
            AppError::validation(ErrorCode::MissingImage, "no image data provided")
        })?;

    let payload = ImagePayload::from_base64(&raw)?;
    let reading = app_state.gesture.classify(&payload).await?;

    debug!(
        detected = reading.detected,
        confidence = reading.confidence,
        "gesture classified"
    );

    let feedback = feedback_for(&reading);
    Ok(HttpResponse::Ok().json(RecognizeResponse {
        gesture: reading.gesture.map_or("none", |m| m.as_str()),
        confidence: reading.confidence,
        detected: reading.detected,
        feedback,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/recognize").route(web::post().to(recognize)));
}
