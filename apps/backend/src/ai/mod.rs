//! AI opponent: move providers and presentation payloads.

pub mod gemini;
pub mod mood;
pub mod random;
pub mod registry;
pub mod strategic;
pub mod trait_def;

pub use gemini::GeminiProvider;
pub use mood::{AnimationData, Mood};
pub use random::RandomProvider;
pub use strategic::StrategicProvider;
pub use trait_def::{AiError, MoveProvider, OpponentView, ProvidedMove};
