use dashmap::DashMap;
use rand::Rng;
use uuid::Uuid;

use crate::game::GameSession;
use crate::models::SessionSnapshot;

/// All live sessions, keyed by id.
///
/// The dictionary and letter pool are read-only shared state, so a
/// session only ever needs exclusive access to its own entry; DashMap
/// provides that per-key.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: DashMap<Uuid, GameSession>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Start a new session and return its id.
    pub fn create(&self) -> Uuid {
        self.insert(GameSession::new())
    }

    pub fn create_with_rng(&self, rng: &mut impl Rng) -> Uuid {
        self.insert(GameSession::new_with_rng(rng))
    }

    fn insert(&self, session: GameSession) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.insert(id, session);
        tracing::info!("Created game session {}", id);
        id
    }

    /// Run a closure against one session with exclusive access.
    /// Returns None if the id is unknown.
    pub fn with_session<T>(&self, id: &Uuid, f: impl FnOnce(&mut GameSession) -> T) -> Option<T> {
        self.sessions.get_mut(id).map(|mut entry| f(&mut entry))
    }

    pub fn snapshot(&self, id: &Uuid) -> Option<SessionSnapshot> {
        self.sessions.get(id).map(|entry| entry.snapshot())
    }

    /// Drop a session; true if it existed.
    pub fn remove(&self, id: &Uuid) -> bool {
        let removed = self.sessions.remove(id).is_some();
        if removed {
            tracing::info!("Removed game session {}", id);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
