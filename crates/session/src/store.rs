//! Session storage with idle-time eviction.
//!
//! Sessions are process-wide, keyed by user id, and would live forever
//! unless swept. [`spawn_sweeper`] runs [`SessionStore::sweep_expired`] on
//! an interval.

use crate::types::{ChatSession, Role, UserId, DEFAULT_MAX_HISTORY};
use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Trait for storing and retrieving chat sessions
pub trait SessionStore: Send + Sync {
    /// Snapshot of the user's session, creating an empty one if needed
    fn get_or_create(&self, user_id: &str) -> ChatSession;

    /// Append a message to the user's session, creating it if needed
    fn push_message(&self, user_id: &str, role: Role, content: &str);

    fn remove(&self, user_id: &str) -> Option<ChatSession>;

    /// Drop every session idle for longer than `ttl`; returns how many were dropped
    fn sweep_expired(&self, ttl: Duration) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory implementation of SessionStore
#[derive(Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<DashMap<UserId, ChatSession>>,
    max_history: usize,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::with_max_history(DEFAULT_MAX_HISTORY)
    }

    pub fn with_max_history(max_history: usize) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            max_history,
        }
    }

    fn new_session(&self, user_id: &str) -> ChatSession {
        debug!("Creating chat session for {}", user_id);
        ChatSession::with_max_history(user_id, self.max_history)
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for InMemorySessionStore {
    fn get_or_create(&self, user_id: &str) -> ChatSession {
        self.sessions
            .entry(user_id.to_string())
            .or_insert_with(|| self.new_session(user_id))
            .value()
            .clone()
    }

    fn push_message(&self, user_id: &str, role: Role, content: &str) {
        self.sessions
            .entry(user_id.to_string())
            .or_insert_with(|| self.new_session(user_id))
            .value_mut()
            .push(role, content);
    }

    fn remove(&self, user_id: &str) -> Option<ChatSession> {
        self.sessions.remove(user_id).map(|(_, session)| session)
    }

    fn sweep_expired(&self, ttl: Duration) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, session| !session.is_expired(ttl));
        let removed = before.saturating_sub(self.sessions.len());
        if removed > 0 {
            info!("Swept {} idle chat sessions", removed);
        }
        removed
    }

    fn len(&self) -> usize {
        self.sessions.len()
    }
}

/// Periodically sweep idle sessions on the tokio runtime
///
/// The returned handle can be aborted to stop sweeping.
pub fn spawn_sweeper(store: Arc<dyn SessionStore>, ttl: Duration, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            store.sweep_expired(ttl);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_create_is_idempotent() {
        let store = InMemorySessionStore::new();
        store.get_or_create("alice");
        store.get_or_create("alice");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_push_message_persists_changes() {
        let store = InMemorySessionStore::with_max_history(2);
        store.push_message("alice", Role::User, "one");
        store.push_message("alice", Role::Assistant, "two");
        store.push_message("alice", Role::User, "three");

        let session = store.get_or_create("alice");
        assert_eq!(session.len(), 2);
        assert_eq!(session.conversation_context(), "Assistant: two\nUser: three");
    }

    #[test]
    fn test_sweep_expired() {
        let store = InMemorySessionStore::new();
        store.get_or_create("alice");
        store.get_or_create("bob");

        assert_eq!(store.sweep_expired(Duration::from_secs(3600)), 0);
        assert_eq!(store.len(), 2);

        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(store.sweep_expired(Duration::from_millis(1)), 2);
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove() {
        let store = InMemorySessionStore::new();
        store.get_or_create("alice");
        assert!(store.remove("alice").is_some());
        assert!(store.remove("alice").is_none());
    }

    #[tokio::test]
    async fn test_sweeper_task_evicts_sessions() {
        let store = Arc::new(InMemorySessionStore::new());
        store.get_or_create("alice");

        let handle = spawn_sweeper(
            store.clone(),
            Duration::from_millis(1),
            Duration::from_millis(10),
        );
        tokio::time::sleep(Duration::from_millis(60)).await;
        handle.abort();

        assert!(store.is_empty());
    }
}
