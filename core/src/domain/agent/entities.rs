use serde_json::Value;

use crate::domain::chat::entities::{ChatMessage, MessageRole};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentRole {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    pub args: Value,
    /// Opaque token some models attach to a call; must be echoed back unchanged.
    pub thought_signature: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContentPart {
    Text(String),
    FunctionCall(FunctionCall),
    FunctionResponse { name: String, response: Value },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Content {
    pub role: ContentRole,
    pub parts: Vec<ContentPart>,
}

impl Content {
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: ContentRole::User,
            parts: vec![ContentPart::Text(text.into())],
        }
    }
}

impl From<&ChatMessage> for Content {
    fn from(message: &ChatMessage) -> Self {
        let role = match message.role {
            MessageRole::User => ContentRole::User,
            MessageRole::Assistant => ContentRole::Model,
        };

        Self {
            role,
            parts: vec![ContentPart::Text(message.content.clone())],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDeclaration {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LLMRequest {
    pub system_instruction: String,
    pub contents: Vec<Content>,
    pub tools: Vec<FunctionDeclaration>,
    pub temperature: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LLMResponse {
    pub text: Option<String>,
    pub function_calls: Vec<FunctionCall>,
}
