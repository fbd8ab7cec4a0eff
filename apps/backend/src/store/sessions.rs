//! In-memory session store.
//!
//! A plain concurrent map from session id to match state. No eviction policy
//! beyond process lifetime and no durability: a restart loses all sessions.

use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::MatchState;
use crate::errors::domain::DomainError;

#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<Uuid, MatchState>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a freshly created session, keyed by its own id.
    pub fn insert(&self, state: MatchState) {
        self.sessions.insert(state.id, state);
    }

    /// Clone of the stored state, or `SessionNotFound`.
    pub fn get(&self, id: Uuid) -> Result<MatchState, DomainError> {
        self.sessions
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| DomainError::session_not_found(id.to_string()))
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.sessions.contains_key(&id)
    }

    /// Replace the stored state for an existing session. Concurrent writes to
    /// the same session are last-write-wins.
    pub fn update(&self, state: MatchState) -> Result<(), DomainError> {
        if !self.sessions.contains_key(&state.id) {
            return Err(DomainError::session_not_found(state.id.to_string()));
        }
        self.sessions.insert(state.id, state);
        Ok(())
    }

    /// Evict a session, returning its final state.
    pub fn remove(&self, id: Uuid) -> Result<MatchState, DomainError> {
        self.sessions
            .remove(&id)
            .map(|(_, state)| state)
            .ok_or_else(|| DomainError::session_not_found(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use time::OffsetDateTime;

    use super::*;
    use crate::domain::{GameMode, MatchStatus};

    fn session() -> MatchState {
        MatchState::new(GameMode::Single, OffsetDateTime::UNIX_EPOCH)
    }

    #[test]
    fn insert_then_get_round_trips() {
        let store = SessionStore::new();
        let state = session();
        let id = state.id;
        store.insert(state.clone());
        assert_eq!(store.get(id).unwrap(), state);
        assert!(store.contains(id));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn unknown_ids_report_not_found() {
        let store = SessionStore::new();
        let id = Uuid::new_v4();
        assert!(matches!(
            store.get(id),
            Err(DomainError::SessionNotFound(_))
        ));
        assert!(store.remove(id).is_err());
    }

    #[test]
    fn update_replaces_existing_state_only() {
        let store = SessionStore::new();
        let mut state = session();
        store.insert(state.clone());

        state.status = MatchStatus::Active;
        store.update(state.clone()).unwrap();
        assert_eq!(store.get(state.id).unwrap().status, MatchStatus::Active);

        let orphan = session();
        assert!(store.update(orphan).is_err());
    }

    #[test]
    fn remove_evicts_and_returns_the_state() {
        let store = SessionStore::new();
        let state = session();
        let id = state.id;
        store.insert(state);

        let evicted = store.remove(id).unwrap();
        assert_eq!(evicted.id, id);
        assert!(store.is_empty());
        assert!(!store.contains(id));
    }
}
