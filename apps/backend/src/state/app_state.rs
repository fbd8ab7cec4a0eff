//! Shared application state.

use std::sync::Arc;

use crate::ai::MoveProvider;
use crate::domain::MatchRules;
use crate::gesture::{DisabledClassifier, GestureClassifier};
use crate::store::SessionStore;

/// Application state containing shared resources.
///
/// The session store is owned here and handed to services by reference; the
/// AI provider and gesture classifier are capabilities injected at startup
/// (or by tests, with mocks).
pub struct AppState {
    pub sessions: SessionStore,
    pub rules: MatchRules,
    /// Configured move provider; gets the first attempt each round.
    pub ai: Arc<dyn MoveProvider>,
    /// Local provider used when the configured one fails.
    pub ai_fallback: Arc<dyn MoveProvider>,
    pub gesture: Arc<dyn GestureClassifier>,
}

impl AppState {
    /// State with a disabled gesture classifier; use [`with_gesture`] to
    /// attach a real one.
    ///
    /// [`with_gesture`]: AppState::with_gesture
    pub fn new(
        rules: MatchRules,
        ai: Arc<dyn MoveProvider>,
        ai_fallback: Arc<dyn MoveProvider>,
    ) -> Self {
        Self {
            sessions: SessionStore::new(),
            rules,
            ai,
            ai_fallback,
            gesture: Arc::new(DisabledClassifier),
        }
    }

    pub fn with_gesture(mut self, gesture: Arc<dyn GestureClassifier>) -> Self {
        self.gesture = gesture;
        self
    }

    /// Deterministic state for tests: seeded local providers, best-of-3.
    pub fn for_tests(seed: u64) -> Self {
        Self::new(
            MatchRules::best_of_three(),
            Arc::new(crate::ai::RandomProvider::new(Some(seed))),
            Arc::new(crate::ai::StrategicProvider::new(Some(seed))),
        )
    }
}
