//! In-memory session store.
//!
//! Maps caller-supplied session keys to independent transcripts. The
//! transcript handle is an `Arc<tokio::sync::Mutex<_>>` held across the
//! model call, so one turn at a time mutates a given session while the
//! map itself stays contention-free behind a `parking_lot` read-write
//! lock.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::Mutex;

use crate::transcript::Transcript;

/// Store of all live sessions. Read-only shared state (the project record
/// and serialized context) lives elsewhere; this only owns transcripts.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Arc<Mutex<Transcript>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the transcript for `session_key`, creating it on first use.
    pub fn resolve_or_create(&self, session_key: &str) -> Arc<Mutex<Transcript>> {
        {
            let sessions = self.sessions.read();
            if let Some(t) = sessions.get(session_key) {
                return t.clone();
            }
        }

        let mut sessions = self.sessions.write();
        sessions
            .entry(session_key.to_owned())
            .or_insert_with(|| {
                tracing::debug!(session_key, "new session");
                Arc::new(Mutex::new(Transcript::new()))
            })
            .clone()
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }

    /// Drop a session and its transcript.
    pub fn remove(&self, session_key: &str) {
        self.sessions.write().remove(session_key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolve_or_create_returns_same_transcript() {
        let store = SessionStore::new();
        let a = store.resolve_or_create("web:alice");
        a.lock().await.push_user("hello");

        let b = store.resolve_or_create("web:alice");
        assert_eq!(b.lock().await.len(), 1);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn sessions_are_independent() {
        let store = SessionStore::new();
        store
            .resolve_or_create("web:alice")
            .lock()
            .await
            .push_user("hi");
        let bob = store.resolve_or_create("web:bob");
        assert!(bob.lock().await.is_empty());
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn remove_drops_transcript() {
        let store = SessionStore::new();
        store
            .resolve_or_create("cli:chat")
            .lock()
            .await
            .push_user("hi");
        store.remove("cli:chat");
        assert!(store.is_empty());
        // Re-resolving starts fresh.
        assert!(store.resolve_or_create("cli:chat").lock().await.is_empty());
    }
}
