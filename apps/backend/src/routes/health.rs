use actix_web::HttpResponse;
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::error::AppError;

#[derive(Debug, Serialize)]
struct RootResponse {
    message: &'static str,
    version: &'static str,
}

/// GET /
pub async fn root() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(RootResponse {
        message: "StoneX game API is running!",
        version: env!("CARGO_PKG_VERSION"),
    }))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    app_version: String,
    time: String,
}

/// GET /health
///
/// The service holds all state in memory, so being able to answer at all
/// means it is healthy.
pub async fn health() -> Result<HttpResponse, AppError> {
    let time = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        time,
    }))
}
