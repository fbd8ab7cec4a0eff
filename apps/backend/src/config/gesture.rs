//! Gesture classifier configuration from the environment.
//!
//! - `GESTURE_API_URL`: hosted classifier endpoint; when unset the classifier
//!   is disabled and every frame reads as "nothing detected"
//! - `GESTURE_TIMEOUT_MS`: per-request timeout (default 5s)

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::error::AppError;
use crate::gesture::{DisabledClassifier, GestureClassifier, RemoteClassifier};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct GestureConfig {
    pub endpoint: Option<String>,
    pub request_timeout: Duration,
}

impl GestureConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let request_timeout = match std::env::var("GESTURE_TIMEOUT_MS") {
            Ok(raw) => {
                let ms = raw.trim().parse::<u64>().map_err(|_| {
                    AppError::config(format!(
                        "GESTURE_TIMEOUT_MS must be milliseconds, got {raw:?}"
                    ))
                })?;
                Duration::from_millis(ms)
            }
            Err(_) => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            endpoint: std::env::var("GESTURE_API_URL").ok().filter(|u| !u.is_empty()),
            request_timeout,
        })
    }
}

pub fn classifier_from_env() -> Result<Arc<dyn GestureClassifier>, AppError> {
    let config = GestureConfig::from_env()?;
    if config.endpoint.is_none() {
        info!("GESTURE_API_URL not set; gesture recognition disabled");
        return Ok(Arc::new(DisabledClassifier));
    }
    let remote = RemoteClassifier::from_config(&config)
        .map_err(|e| AppError::config(format!("gesture classifier: {e}")))?;
    Ok(Arc::new(remote))
}
