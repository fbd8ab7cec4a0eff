//! Random move provider - uniform over the canonical move set.
//!
//! Reference implementation of [`MoveProvider`](super::MoveProvider): thread-safe
//! interior mutability via `Mutex<StdRng>`, optional seeding for deterministic
//! tests, no panics.

use std::sync::Mutex;

use async_trait::async_trait;
use rand::prelude::*;

use super::trait_def::{AiError, MoveProvider, OpponentView, ProvidedMove};
use crate::domain::Move;

pub struct RandomProvider {
    /// `MoveProvider::choose` takes `&self`, so the RNG lives behind a Mutex.
    rng: Mutex<StdRng>,
}

impl RandomProvider {
    pub const NAME: &'static str = "random";

    /// `Some(seed)` gives reproducible behavior for tests; `None` uses
    /// OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

#[async_trait]
impl MoveProvider for RandomProvider {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn choose(&self, _view: &OpponentView) -> Result<ProvidedMove, AiError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;

        let mv = Move::ALL
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::Internal("failed to choose random move".into()))?;

        Ok(ProvidedMove::bare(mv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_provider_is_deterministic() {
        let view = OpponentView::default();
        let a = RandomProvider::new(Some(42));
        let b = RandomProvider::new(Some(42));
        for _ in 0..20 {
            let ma = a.choose(&view).await.unwrap();
            let mb = b.choose(&view).await.unwrap();
            assert_eq!(ma.mv, mb.mv);
        }
    }

    #[tokio::test]
    async fn always_produces_canonical_moves() {
        let provider = RandomProvider::new(None);
        let view = OpponentView::default();
        for _ in 0..50 {
            let chosen = provider.choose(&view).await.unwrap();
            assert!(Move::ALL.contains(&chosen.mv));
            assert!(chosen.rationale.is_none());
        }
    }
}
