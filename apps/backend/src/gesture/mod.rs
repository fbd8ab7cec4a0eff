//! Gesture classification boundary: payload validation, classifier
//! capability, and capture-quality feedback.

pub mod disabled;
pub mod feedback;
pub mod image;
pub mod remote;
pub mod trait_def;

pub use disabled::DisabledClassifier;
pub use feedback::{feedback_for, GestureFeedback};
pub use image::ImagePayload;
pub use remote::RemoteClassifier;
pub use trait_def::{GestureClassifier, GestureError, GestureReading};
