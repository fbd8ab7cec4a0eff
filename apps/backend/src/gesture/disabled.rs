//! Fallback classifier used when no gesture endpoint is configured.
//!
//! Accepts any validated frame and reports "nothing detected", so the
//! endpoint keeps its contract (clients fall back to manual move input).

use async_trait::async_trait;

use super::image::ImagePayload;
use super::trait_def::{GestureClassifier, GestureError, GestureReading};

pub struct DisabledClassifier;

#[async_trait]
impl GestureClassifier for DisabledClassifier {
    async fn classify(&self, _image: &ImagePayload) -> Result<GestureReading, GestureError> {
        Ok(GestureReading::none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn always_reports_no_detection() {
        let payload = ImagePayload::from_base64("aGVsbG8=").unwrap();
        let reading = DisabledClassifier.classify(&payload).await.unwrap();
        assert_eq!(reading, GestureReading::none());
    }
}
