//! Session lifecycle service.

use time::OffsetDateTime;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::{GameMode, MatchState};
use crate::errors::domain::DomainError;
use crate::store::SessionStore;

pub struct SessionService;

impl SessionService {
    pub fn new() -> Self {
        Self
    }

    /// Create a new session in `Waiting` status and store it.
    pub fn create(&self, store: &SessionStore, mode: GameMode) -> MatchState {
        let state = MatchState::new(mode, OffsetDateTime::now_utc());
        info!(game_id = %state.id, mode = ?mode, "session created");
        store.insert(state.clone());
        state
    }

    pub fn get(&self, store: &SessionStore, id: Uuid) -> Result<MatchState, DomainError> {
        store.get(id)
    }

    /// Evict a session, returning its final state.
    pub fn evict(&self, store: &SessionStore, id: Uuid) -> Result<MatchState, DomainError> {
        let state = store.remove(id)?;
        debug!(game_id = %id, rounds = state.round_number, "session evicted");
        Ok(state)
    }
}

impl Default for SessionService {
    fn default() -> Self {
        Self::new()
    }
}
