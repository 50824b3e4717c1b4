use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

use crate::domain::chat::value_objects::TriggerPhrases;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct DietAiConfig {
    pub llm: LLMConfig,
    pub chat: ChatConfig,
    pub pantry: PantryConfig,
    pub knowledge: KnowledgeConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub temperature: f32,
    pub max_tool_rounds: usize,
}

#[derive(Clone, Debug)]
pub struct ChatConfig {
    pub trigger_phrases: TriggerPhrases,
    /// Upper bound on messages kept per session; `None` keeps everything.
    pub history_max_messages: Option<usize>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            trigger_phrases: TriggerPhrases::default(),
            history_max_messages: Some(50),
        }
    }
}

#[derive(Clone, Debug)]
pub struct PantryConfig {
    pub pantry_file: String,
    pub affiliate_tag: String,
}

#[derive(Clone, Debug)]
pub struct KnowledgeConfig {
    pub knowledge_base_path: String,
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub max_passages: usize,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}
