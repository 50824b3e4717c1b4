use tracing::info;

use crate::{
    domain::{
        agent::services::ToolCallingAgent,
        common::{DietAiConfig, services::Service},
    },
    infrastructure::{
        knowledge::KeywordKnowledgeRetriever, llm::GeminiLLMClient, pantry::JsonPantryRepository,
        session::InMemorySessionRepository,
    },
};

pub type DietAiAgent = ToolCallingAgent<GeminiLLMClient, KeywordKnowledgeRetriever>;

pub type DietAiService = Service<InMemorySessionRepository, DietAiAgent, JsonPantryRepository>;

pub async fn create_service(config: DietAiConfig) -> Result<DietAiService, anyhow::Error> {
    let retriever = KeywordKnowledgeRetriever::load(
        &config.knowledge.knowledge_base_path,
        config.knowledge.chunk_size,
        config.knowledge.chunk_overlap,
    )
    .await?;

    let llm_client = GeminiLLMClient::new(
        config.llm.gemini_api_key,
        config.llm.gemini_model.clone(),
        config.llm.gemini_base_url,
    );

    let agent = ToolCallingAgent::new(
        llm_client,
        retriever,
        config.llm.temperature,
        config.llm.max_tool_rounds,
        config.knowledge.max_passages,
    );

    let pantry_repository = JsonPantryRepository::new(&config.pantry.pantry_file);

    info!(
        model = %config.llm.gemini_model,
        pantry_file = %config.pantry.pantry_file,
        "DietAI service created"
    );

    Ok(Service::new(
        InMemorySessionRepository::new(),
        agent,
        pantry_repository,
        config.chat,
        config.pantry,
    ))
}
