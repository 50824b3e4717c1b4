use clap::{Args as ClapArgs, Parser, ValueEnum};
use dietai_core::{
    domain::{
        chat::value_objects::{DEFAULT_TRIGGER_PHRASES, TriggerPhrases},
        common::{ChatConfig, DietAiConfig, KnowledgeConfig, LLMConfig, PantryConfig},
    },
    infrastructure::llm::gemini_client::DEFAULT_GEMINI_BASE_URL,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "dietai", version, about = "DietAI nutrition assistant API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub chat: ChatArgs,

    #[command(flatten)]
    pub pantry: PantryArgs,

    #[command(flatten)]
    pub knowledge: KnowledgeArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`. Empty serves from the root.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000,http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-2.5-flash")]
    pub gemini_model: String,

    #[arg(long = "gemini-base-url", env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,

    #[arg(long = "llm-temperature", env = "LLM_TEMPERATURE", default_value_t = 0.5)]
    pub temperature: f32,

    #[arg(long = "llm-max-tool-rounds", env = "LLM_MAX_TOOL_ROUNDS", default_value_t = 5)]
    pub max_tool_rounds: usize,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ChatArgs {
    /// Phrases that start the guided diet plan questions.
    #[arg(
        long = "trigger-phrases",
        env = "CHAT_TRIGGER_PHRASES",
        value_delimiter = ',',
        default_values_t = DEFAULT_TRIGGER_PHRASES.map(String::from).to_vec()
    )]
    pub trigger_phrases: Vec<String>,

    /// 0 keeps the whole history.
    #[arg(long = "history-max-messages", env = "CHAT_HISTORY_MAX_MESSAGES", default_value_t = 50)]
    pub history_max_messages: usize,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct PantryArgs {
    #[arg(long = "pantry-file", env = "PANTRY_FILE", default_value = "data/pantry.json")]
    pub pantry_file: String,

    #[arg(long = "affiliate-tag", env = "AFFILIATE_TAG", default_value = "dietai-aff-123")]
    pub affiliate_tag: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct KnowledgeArgs {
    #[arg(
        long = "knowledge-base-path",
        env = "KNOWLEDGE_BASE_PATH",
        default_value = "knowledge_base/nutrition_facts.txt"
    )]
    pub knowledge_base_path: String,

    #[arg(long = "knowledge-chunk-size", env = "KNOWLEDGE_CHUNK_SIZE", default_value_t = 1000)]
    pub chunk_size: usize,

    #[arg(long = "knowledge-chunk-overlap", env = "KNOWLEDGE_CHUNK_OVERLAP", default_value_t = 200)]
    pub chunk_overlap: usize,

    #[arg(long = "knowledge-max-passages", env = "KNOWLEDGE_MAX_PASSAGES", default_value_t = 3)]
    pub max_passages: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    /// Used when RUST_LOG is not set.
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-format", env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub format: LogFormat,
}

impl From<Args> for DietAiConfig {
    fn from(args: Args) -> Self {
        DietAiConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
                temperature: args.llm.temperature,
                max_tool_rounds: args.llm.max_tool_rounds,
            },
            chat: ChatConfig {
                trigger_phrases: TriggerPhrases::new(args.chat.trigger_phrases),
                history_max_messages: (args.chat.history_max_messages > 0)
                    .then_some(args.chat.history_max_messages),
            },
            pantry: PantryConfig {
                pantry_file: args.pantry.pantry_file,
                affiliate_tag: args.pantry.affiliate_tag,
            },
            knowledge: KnowledgeConfig {
                knowledge_base_path: args.knowledge.knowledge_base_path,
                chunk_size: args.knowledge.chunk_size,
                chunk_overlap: args.knowledge.chunk_overlap,
                max_passages: args.knowledge.max_passages,
            },
        }
    }
}
