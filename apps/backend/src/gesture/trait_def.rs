//! Gesture classifier trait definition.

use std::fmt;

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::Move;
use crate::error::AppError;
use crate::errors::ErrorCode;

use super::image::ImagePayload;

/// Result of classifying one webcam frame.
///
/// `confidence` and `detected` are caller-side filtering inputs; they never
/// participate in round resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GestureReading {
    /// `None` when no hand/gesture was detected.
    pub gesture: Option<Move>,
    /// Classifier confidence in [0, 1].
    pub confidence: f32,
    pub detected: bool,
}

impl GestureReading {
    pub fn detected(gesture: Move, confidence: f32) -> Self {
        Self {
            gesture: Some(gesture),
            confidence: confidence.clamp(0.0, 1.0),
            detected: true,
        }
    }

    pub fn none() -> Self {
        Self {
            gesture: None,
            confidence: 0.0,
            detected: false,
        }
    }
}

/// Errors that can occur while classifying a frame.
#[derive(Debug)]
pub enum GestureError {
    /// Image payload failed boundary validation.
    InvalidPayload(String),
    /// The hosted classifier call failed.
    Upstream(String),
    /// Internal classifier failure.
    Internal(String),
}

impl fmt::Display for GestureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GestureError::InvalidPayload(msg) => write!(f, "invalid image payload: {msg}"),
            GestureError::Upstream(msg) => write!(f, "gesture upstream error: {msg}"),
            GestureError::Internal(msg) => write!(f, "gesture internal error: {msg}"),
        }
    }
}

impl std::error::Error for GestureError {}

impl From<GestureError> for AppError {
    fn from(err: GestureError) -> Self {
        match err {
            GestureError::InvalidPayload(msg) => {
                AppError::bad_request(ErrorCode::InvalidImage, msg)
            }
            GestureError::Upstream(msg) => AppError::upstream(ErrorCode::GestureUpstream, msg),
            GestureError::Internal(msg) => AppError::internal(msg),
        }
    }
}

/// Capability for turning a webcam frame into a move reading.
///
/// The vision model is an external collaborator; implementations do one call
/// per frame with no retries.
#[async_trait]
pub trait GestureClassifier: Send + Sync {
    async fn classify(&self, image: &ImagePayload) -> Result<GestureReading, GestureError>;
}
