use super::state::TherapySession;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Thread-safe store for concurrent sessions, keyed by session id
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, TherapySession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a fresh session and return its id
    pub fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.write().insert(id, TherapySession::new());
        id
    }

    pub fn get(&self, id: Uuid) -> Option<TherapySession> {
        self.sessions.read().get(&id).cloned()
    }

    /// Run `f` against the session, if it exists, and return its result
    pub fn update<R>(&self, id: Uuid, f: impl FnOnce(&mut TherapySession) -> R) -> Option<R> {
        self.sessions.write().get_mut(&id).map(f)
    }

    pub fn remove(&self, id: Uuid) -> Option<TherapySession> {
        self.sessions.write().remove(&id)
    }

    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }

    pub fn clear(&self) {
        self.sessions.write().clear();
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
