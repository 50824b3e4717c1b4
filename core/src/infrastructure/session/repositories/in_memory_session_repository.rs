use std::{collections::HashMap, sync::Arc};

use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::{
    chat::{
        entities::Session,
        ports::{SessionHandle, SessionRepository},
    },
    common::entities::app_errors::CoreError,
};

/// Process-lifetime session map. Sessions are never expired or persisted.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<Mutex<HashMap<String, SessionHandle>>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionRepository for InMemorySessionRepository {
    async fn get_or_create(&self, session_id: &str) -> Result<SessionHandle, CoreError> {
        let mut sessions = self.sessions.lock().await;

        let handle = sessions.entry(session_id.to_string()).or_insert_with(|| {
            debug!(session_id, "creating session");
            Arc::new(Mutex::new(Session::new(session_id.to_string())))
        });

        Ok(Arc::clone(handle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::collection::CollectionState;

    #[tokio::test]
    async fn test_same_key_returns_same_session() {
        let repository = InMemorySessionRepository::new();

        let first = repository.get_or_create("s1").await.unwrap();
        first.lock().await.collection = Some(CollectionState::start().0);

        let second = repository.get_or_create("s1").await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(
            second
                .lock()
                .await
                .collection
                .as_ref()
                .map(|s| s.next_question_index),
            Some(2)
        );
    }

    #[tokio::test]
    async fn test_new_session_starts_idle_and_empty() {
        let repository = InMemorySessionRepository::new();
        let handle = repository.get_or_create("fresh").await.unwrap();
        let session = handle.lock().await;
        assert_eq!(session.id, "fresh");
        assert!(session.history.is_empty());
        assert!(session.collection.is_none());
    }

    #[tokio::test]
    async fn test_different_keys_get_different_sessions() {
        let repository = InMemorySessionRepository::new();
        let a = repository.get_or_create("a").await.unwrap();
        let b = repository.get_or_create("b").await.unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
    }
}
