use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{chat::collection::CollectionState, common::generate_timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: MessageRole, content: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            role,
            content,
            created_at: now,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content.into())
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content.into())
    }
}

/// One conversation, keyed by the caller-supplied session id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    pub history: Vec<ChatMessage>,
    pub collection: Option<CollectionState>,
}

impl Session {
    pub fn new(id: String) -> Self {
        Self {
            id,
            history: Vec::new(),
            collection: None,
        }
    }

    /// Appends a user/assistant pair, then drops the oldest pairs until at most
    /// `max_messages` messages remain.
    pub fn record_exchange(
        &mut self,
        input: impl Into<String>,
        output: impl Into<String>,
        max_messages: Option<usize>,
    ) {
        self.history.push(ChatMessage::user(input));
        self.history.push(ChatMessage::assistant(output));

        // Whole exchanges only, so the oldest remaining message is always a user turn.
        if let Some(max) = max_messages {
            if self.history.len() > max {
                let overflow = self.history.len() - max;
                let excess = overflow.div_ceil(2) * 2;
                self.history.drain(..excess.min(self.history.len()));
            }
        }
    }
}
