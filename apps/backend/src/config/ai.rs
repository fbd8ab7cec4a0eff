//! AI provider configuration from the environment.
//!
//! - `STONEX_AI_PROVIDER`: "random", "strategic" or "gemini" (default
//!   "strategic")
//! - `STONEX_AI_SEED`: optional RNG seed for the local providers
//! - `GEMINI_API_KEY`, `GEMINI_MODEL`, `GEMINI_BASE_URL`,
//!   `GEMINI_TIMEOUT_MS`: hosted-model settings

use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use crate::ai::{GeminiProvider, MoveProvider, StrategicProvider};
use crate::error::AppError;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub request_timeout: Duration,
}

impl GeminiConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let request_timeout = match std::env::var("GEMINI_TIMEOUT_MS") {
            Ok(raw) => {
                let ms = raw.trim().parse::<u64>().map_err(|_| {
                    AppError::config(format!("GEMINI_TIMEOUT_MS must be milliseconds, got {raw:?}"))
                })?;
                Duration::from_millis(ms)
            }
            Err(_) => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            api_key: std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()),
            model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            request_timeout,
        })
    }
}

fn seed_from_env() -> Result<Option<u64>, AppError> {
    match std::env::var("STONEX_AI_SEED") {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| AppError::config(format!("STONEX_AI_SEED must be an integer, got {raw:?}"))),
        Err(_) => Ok(None),
    }
}

/// Build the configured provider and the strategic fallback.
///
/// An unusable Gemini configuration (missing key) degrades to the fallback at
/// startup rather than failing every request later.
pub fn providers_from_env() -> Result<(Arc<dyn MoveProvider>, Arc<dyn MoveProvider>), AppError> {
    let seed = seed_from_env()?;
    let fallback: Arc<dyn MoveProvider> = Arc::new(StrategicProvider::new(seed));

    let name = std::env::var("STONEX_AI_PROVIDER")
        .unwrap_or_else(|_| StrategicProvider::NAME.to_string());

    let provider: Arc<dyn MoveProvider> = if name == GeminiProvider::NAME {
        match GeminiProvider::from_config(&GeminiConfig::from_env()?) {
            Ok(gemini) => Arc::new(gemini),
            Err(err) => {
                warn!(error = %err, "gemini provider unusable; using fallback provider");
                Arc::clone(&fallback)
            }
        }
    } else {
        let factory = crate::ai::registry::by_name(&name).ok_or_else(|| {
            AppError::config(format!("STONEX_AI_PROVIDER: unknown provider {name:?}"))
        })?;
        (factory.make)(seed)
    };

    Ok((provider, fallback))
}
