use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_timestamp},
    session::{
        entities::{SessionId, SessionState},
        ports::SessionRepository,
    },
};

struct SessionEntry {
    state: SessionState,
    touched_at: DateTime<Utc>,
}

/// Process-local session storage. Nothing survives a restart, and entries idle
/// for longer than `idle_ttl` are treated as gone.
pub struct InMemorySessionRepository {
    sessions: Mutex<HashMap<SessionId, SessionEntry>>,
    idle_ttl: Duration,
}

impl InMemorySessionRepository {
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            idle_ttl,
        }
    }

    fn is_expired(&self, entry: &SessionEntry, now: DateTime<Utc>) -> bool {
        (now - entry.touched_at)
            .to_std()
            .map(|idle| idle >= self.idle_ttl)
            .unwrap_or(false)
    }
}

impl SessionRepository for InMemorySessionRepository {
    async fn load(&self, id: SessionId) -> Result<Option<SessionState>, CoreError> {
        let now = generate_timestamp();
        let mut sessions = self.sessions.lock().await;

        let expired = match sessions.get(&id) {
            Some(entry) => self.is_expired(entry, now),
            None => return Ok(None),
        };
        if expired {
            tracing::debug!(session_id = %id, "Session expired");
            sessions.remove(&id);
            return Ok(None);
        }

        Ok(sessions.get_mut(&id).map(|entry| {
            entry.touched_at = now;
            entry.state.clone()
        }))
    }

    async fn store(&self, id: SessionId, state: SessionState) -> Result<(), CoreError> {
        let now = generate_timestamp();
        let mut sessions = self.sessions.lock().await;

        sessions.retain(|_, entry| !self.is_expired(entry, now));
        sessions.insert(
            id,
            SessionEntry {
                state,
                touched_at: now,
            },
        );
        Ok(())
    }

    async fn remove(&self, id: SessionId) -> Result<(), CoreError> {
        self.sessions.lock().await.remove(&id);
        Ok(())
    }
}
