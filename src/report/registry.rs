//! Per-user session bookkeeping.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::Mutex;

use super::session::ReportSession;

/// Handle to one user's session.
///
/// Holding the lock is what serializes a user's messages: a second message
/// from the same user waits until the first has been fully handled.
pub type SessionHandle = Arc<Mutex<ReportSession>>;

/// Registry of in-flight reports, keyed by the reporting user's id.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    inner: Arc<Mutex<HashMap<u64, SessionHandle>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the user's session, creating a fresh one only when `create` is set.
    pub async fn session_for(&self, user_id: u64, create: bool) -> Option<SessionHandle> {
        let mut sessions = self.inner.lock().await;

        if let Some(handle) = sessions.get(&user_id) {
            return Some(handle.clone());
        }

        if !create {
            return None;
        }

        let handle = SessionHandle::default();
        sessions.insert(user_id, handle.clone());

        Some(handle)
    }

    /// Drops the user's session, if any.
    pub async fn remove(&self, user_id: u64) {
        self.inner.lock().await.remove(&user_id);
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_creates_only_when_asked() {
        let registry = SessionRegistry::new();

        assert!(registry.session_for(1, false).await.is_none());
        assert!(registry.is_empty().await);

        assert!(registry.session_for(1, true).await.is_some());
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn test_returns_same_session_per_user() {
        let registry = SessionRegistry::new();

        let first = registry.session_for(7, true).await.unwrap();
        let again = registry.session_for(7, false).await.unwrap();
        let other = registry.session_for(8, true).await.unwrap();

        assert!(Arc::ptr_eq(&first, &again));
        assert!(!Arc::ptr_eq(&first, &other));
    }

    #[tokio::test]
    async fn test_remove_forgets_session() {
        let registry = SessionRegistry::new();
        registry.session_for(3, true).await;

        registry.remove(3).await;

        assert!(registry.session_for(3, false).await.is_none());
        assert!(registry.is_empty().await);
    }
}
