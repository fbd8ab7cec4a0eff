//! Webcam frame payload validation.
//!
//! Frames arrive as base64 strings, usually wrapped in a browser data URL
//! (`data:image/jpeg;base64,...`). Validation happens here at the boundary so
//! classifiers only ever see decodable bytes.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use super::trait_def::GestureError;

/// A validated, decoded webcam frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    bytes: Vec<u8>,
}

impl ImagePayload {
    /// Parse a base64 string, stripping a leading `data:*;base64,` prefix
    /// when present. Empty and undecodable payloads are rejected.
    pub fn from_base64(raw: &str) -> Result<Self, GestureError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(GestureError::InvalidPayload("empty image data".into()));
        }

        let encoded = match trimmed.split_once(',') {
            Some((prefix, rest)) if prefix.starts_with("data:") => rest,
            _ => trimmed,
        };

        let bytes = BASE64
            .decode(encoded)
            .map_err(|e| GestureError::InvalidPayload(format!("undecodable base64: {e}")))?;

        if bytes.is_empty() {
            return Err(GestureError::InvalidPayload("decoded image is empty".into()));
        }

        Ok(Self { bytes })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Re-encode for forwarding to a remote classifier.
    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.bytes)
    }
}
