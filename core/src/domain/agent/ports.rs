use std::future::Future;

use crate::domain::{
    agent::entities::{LLMRequest, LLMResponse},
    chat::entities::ChatMessage,
    common::entities::app_errors::CoreError,
};

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate(
        &self,
        request: LLMRequest,
    ) -> impl Future<Output = Result<LLMResponse, CoreError>> + Send;
}

/// Looks up passages of the nutrition knowledge base relevant to a query.
#[cfg_attr(test, mockall::automock)]
pub trait KnowledgeRetriever: Send + Sync {
    fn retrieve(
        &self,
        query: &str,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;
}

/// Text in, text out: the only contract the chat flow relies on.
#[cfg_attr(test, mockall::automock)]
pub trait AgentFacade: Send + Sync {
    fn complete(
        &self,
        input: String,
        history: Vec<ChatMessage>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
