//! Gesture-quality feedback for the capture UI.
//!
//! Confidence tiers drive the hint shown next to the webcam preview. Display
//! guidance only; nothing here filters or alters the reading.

use serde::Serialize;

use super::trait_def::GestureReading;

pub const LOW_CONFIDENCE: f32 = 0.5;
pub const HIGH_CONFIDENCE: f32 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackStatus {
    NoGesture,
    LowConfidence,
    MediumConfidence,
    HighConfidence,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GestureFeedback {
    pub status: FeedbackStatus,
    pub message: String,
    /// UI accent color hint.
    pub color: &'static str,
}

/// Map a reading onto user-facing capture feedback.
pub fn feedback_for(reading: &GestureReading) -> GestureFeedback {
    let Some(gesture) = reading.gesture.filter(|_| reading.detected) else {
        return GestureFeedback {
            status: FeedbackStatus::NoGesture,
            message: "Show your hand clearly".to_string(),
            color: "orange",
        };
    };

    if reading.confidence < LOW_CONFIDENCE {
        GestureFeedback {
            status: FeedbackStatus::LowConfidence,
            message: format!("Detected {gesture} but unclear - try again"),
            color: "yellow",
        }
    } else if reading.confidence < HIGH_CONFIDENCE {
        GestureFeedback {
            status: FeedbackStatus::MediumConfidence,
            message: format!("Good! Detected {gesture}"),
            color: "lightblue",
        }
    } else {
        GestureFeedback {
            status: FeedbackStatus::HighConfidence,
            message: format!("Perfect! Clear {gesture} detected"),
            color: "green",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Move;

    #[test]
    fn no_detection_asks_for_a_clear_hand() {
        let fb = feedback_for(&GestureReading::none());
        assert_eq!(fb.status, FeedbackStatus::NoGesture);
        assert_eq!(fb.color, "orange");
    }

    #[test]
    fn tiers_split_at_the_documented_thresholds() {
        let low = feedback_for(&GestureReading::detected(Move::Rock, 0.4));
        assert_eq!(low.status, FeedbackStatus::LowConfidence);

        let medium = feedback_for(&GestureReading::detected(Move::Rock, 0.6));
        assert_eq!(medium.status, FeedbackStatus::MediumConfidence);

        let high = feedback_for(&GestureReading::detected(Move::Rock, 0.9));
        assert_eq!(high.status, FeedbackStatus::HighConfidence);
        assert!(high.message.contains("rock"));
    }
}
