//! Live sessions keyed by id.
//!
//! Each session sits behind its own async mutex, so two interactions on the
//! same session run one after the other while different sessions proceed
//! independently.

use std::collections::HashMap;
use std::sync::Arc;

use session::SessionState;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;
use uuid::Uuid;

pub type SessionHandle = Arc<Mutex<SessionState>>;

#[derive(Default, Clone)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<Uuid, SessionHandle>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh session on the welcome page
    pub async fn create(&self) -> (Uuid, SessionHandle) {
        let id = Uuid::new_v4();
        let handle = Arc::new(Mutex::new(SessionState::new()));
        self.sessions.write().await.insert(id, Arc::clone(&handle));
        debug!("Created session {}", id);
        (id, handle)
    }

    pub async fn get(&self, id: &Uuid) -> Option<SessionHandle> {
        self.sessions.read().await.get(id).cloned()
    }

    /// Look up `id`, creating an empty session under it when absent
    pub async fn get_or_create(&self, id: Uuid) -> SessionHandle {
        if let Some(handle) = self.get(&id).await {
            return handle;
        }
        let mut sessions = self.sessions.write().await;
        Arc::clone(
            sessions
                .entry(id)
                .or_insert_with(|| Arc::new(Mutex::new(SessionState::new()))),
        )
    }

    pub async fn remove(&self, id: &Uuid) -> bool {
        let removed = self.sessions.write().await.remove(id).is_some();
        if removed {
            debug!("Dropped session {}", id);
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
