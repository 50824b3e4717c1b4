use std::{future::Future, sync::Arc};

use tokio::sync::Mutex;

use crate::domain::{
    chat::{
        entities::{ChatMessage, Session},
        value_objects::{ChatReply, GetHistoryInput, SendMessageInput},
    },
    common::entities::app_errors::CoreError,
};

/// Shared, lockable session. Holding the lock for a whole turn serializes
/// concurrent turns on the same session id.
pub type SessionHandle = Arc<Mutex<Session>>;

#[cfg_attr(test, mockall::automock)]
pub trait SessionRepository: Send + Sync {
    /// Returns the session for `session_id`, creating an empty one on first use.
    /// Every call with the same id yields the same handle.
    fn get_or_create(
        &self,
        session_id: &str,
    ) -> impl Future<Output = Result<SessionHandle, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ChatService: Send + Sync {
    fn send_message(
        &self,
        input: SendMessageInput,
    ) -> impl Future<Output = Result<ChatReply, CoreError>> + Send;

    fn get_history(
        &self,
        input: GetHistoryInput,
    ) -> impl Future<Output = Result<Vec<ChatMessage>, CoreError>> + Send;
}
