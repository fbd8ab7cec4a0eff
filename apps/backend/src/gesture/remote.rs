//! HTTP-backed gesture classifier.
//!
//! Forwards the validated frame to a hosted classification endpoint and maps
//! its JSON reply onto [`GestureReading`]. One request per frame, no retries.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::image::ImagePayload;
use super::trait_def::{GestureClassifier, GestureError, GestureReading};
use crate::config::gesture::GestureConfig;
use crate::domain::Move;

pub struct RemoteClassifier {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Debug, Serialize)]
struct ClassifyRequest {
    image: String,
}

#[derive(Debug, Deserialize)]
struct ClassifyResponse {
    gesture: String,
    #[serde(default)]
    confidence: f32,
    #[serde(default)]
    detected: bool,
}

impl RemoteClassifier {
    pub fn from_config(config: &GestureConfig) -> Result<Self, GestureError> {
        let endpoint = config
            .endpoint
            .clone()
            .ok_or_else(|| GestureError::Internal("GESTURE_API_URL is not set".into()))?;

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| GestureError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, endpoint })
    }

    fn reading_from(response: ClassifyResponse) -> GestureReading {
        if !response.detected {
            return GestureReading::none();
        }
        match response.gesture.parse::<Move>() {
            Ok(mv) => GestureReading::detected(mv, response.confidence),
            // Upstream labels outside the canonical set count as no detection.
            Err(_) => GestureReading::none(),
        }
    }
}

#[async_trait]
impl GestureClassifier for RemoteClassifier {
    async fn classify(&self, image: &ImagePayload) -> Result<GestureReading, GestureError> {
        let request = ClassifyRequest {
            image: image.to_base64(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| GestureError::Upstream(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GestureError::Upstream(format!(
                "classifier returned {status}"
            )));
        }

        let parsed: ClassifyResponse = response
            .json()
            .await
            .map_err(|e| GestureError::Upstream(format!("undecodable response: {e}")))?;

        let reading = Self::reading_from(parsed);
        debug!(
            detected = reading.detected,
            confidence = reading.confidence,
            "gesture classified"
        );
        Ok(reading)
    }
}
