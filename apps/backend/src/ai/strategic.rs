//! Strategic move provider.
//!
//! Counters the opponent's predicted next move with a configurable bias,
//! mixing in random play for unpredictability:
//! - Predict via `domain::analysis` (frequency + sequence detection).
//! - With probability `counter_bias`, play the counter to the prediction.
//! - Otherwise, or when there is no history, play uniformly at random.
//!
//! Seeded construction makes the mix deterministic for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use rand::prelude::*;

use super::trait_def::{AiError, MoveProvider, OpponentView, ProvidedMove};
use crate::domain::{analyze, Move};

/// Fraction of decisions that counter the predicted move when history exists.
pub const DEFAULT_COUNTER_BIAS: f64 = 0.6;

pub struct StrategicProvider {
    rng: Mutex<StdRng>,
    counter_bias: f64,
}

impl StrategicProvider {
    pub const NAME: &'static str = "strategic";

    pub fn new(seed: Option<u64>) -> Self {
        Self::with_bias(seed, DEFAULT_COUNTER_BIAS)
    }

    pub fn with_bias(seed: Option<u64>, counter_bias: f64) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
            counter_bias: counter_bias.clamp(0.0, 1.0),
        }
    }

    fn random_move(rng: &mut StdRng) -> Result<Move, AiError> {
        Move::ALL
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::Internal("failed to choose random move".into()))
    }
}

#[async_trait]
impl MoveProvider for StrategicProvider {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn choose(&self, view: &OpponentView) -> Result<ProvidedMove, AiError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;

        let analysis = analyze(&view.opponent_moves);
        if let Some(predicted) = analysis.prediction {
            if rng.random_bool(self.counter_bias) {
                let mv = predicted.counter();
                return Ok(ProvidedMove {
                    mv,
                    rationale: Some(format!(
                        "countering predicted {predicted} (confidence {:.2})",
                        analysis.confidence
                    )),
                });
            }
        }

        let mv = Self::random_move(&mut rng)?;
        Ok(ProvidedMove::bare(mv))
    }
}
