use serde_json::json;
use tracing::{debug, warn};

use crate::domain::{
    agent::{
        entities::{Content, ContentPart, ContentRole, FunctionCall, LLMRequest},
        ports::{AgentFacade, KnowledgeRetriever, LLMClient},
        tools::{AgentTool, calculate_bmi, create_diet_plan, tool_declarations},
    },
    chat::entities::ChatMessage,
    common::entities::app_errors::CoreError,
};

pub const SYSTEM_PROMPT: &str = "You are a helpful and friendly AI diet and nutrition assistant. Your name is DietAI. For general questions, answer them. When asked to create a diet plan with user details, create a comprehensive plan. If you need more information to create a plan, ask for it.";

/// Agent that lets the model call the nutrition tools until it produces a text answer.
#[derive(Debug, Clone)]
pub struct ToolCallingAgent<LLM, KB> {
    llm_client: LLM,
    retriever: KB,
    temperature: f32,
    max_tool_rounds: usize,
    max_passages: usize,
}

impl<LLM, KB> ToolCallingAgent<LLM, KB>
where
    LLM: LLMClient,
    KB: KnowledgeRetriever,
{
    pub fn new(
        llm_client: LLM,
        retriever: KB,
        temperature: f32,
        max_tool_rounds: usize,
        max_passages: usize,
    ) -> Self {
        Self {
            llm_client,
            retriever,
            temperature,
            max_tool_rounds,
            max_passages,
        }
    }

    async fn run_tool(&self, call: &FunctionCall) -> Result<String, CoreError> {
        match AgentTool::try_from(call)? {
            AgentTool::CalculateBmi {
                height_m,
                weight_kg,
            } => calculate_bmi(height_m, weight_kg),
            AgentTool::CreateDietPlan {
                calories,
                dietary_preference,
            } => Ok(create_diet_plan(calories, &dietary_preference)),
            AgentTool::NutritionFactsRetriever { query } => {
                let passages = self.retriever.retrieve(&query, self.max_passages).await?;
                if passages.is_empty() {
                    Ok("No relevant information found in the nutrition knowledge base.".to_string())
                } else {
                    Ok(passages.join("\n\n"))
                }
            }
        }
    }
}

impl<LLM, KB> AgentFacade for ToolCallingAgent<LLM, KB>
where
    LLM: LLMClient,
    KB: KnowledgeRetriever,
{
    async fn complete(
        &self,
        input: String,
        history: Vec<ChatMessage>,
    ) -> Result<String, CoreError> {
        let mut contents: Vec<Content> = history.iter().map(Content::from).collect();
        contents.push(Content::user_text(input));

        let mut tool_rounds = 0;
        loop {
            let request = LLMRequest {
                system_instruction: SYSTEM_PROMPT.to_string(),
                contents: contents.clone(),
                tools: tool_declarations(),
                temperature: self.temperature,
            };

            let response = self.llm_client.generate(request).await?;

            if response.function_calls.is_empty() {
                return response
                    .text
                    .filter(|text| !text.trim().is_empty())
                    .ok_or_else(|| {
                        CoreError::ExternalServiceError("LLM returned an empty reply".to_string())
                    });
            }

            if tool_rounds >= self.max_tool_rounds {
                warn!(tool_rounds, "agent gave up after too many tool rounds");
                return Err(CoreError::ExternalServiceError(format!(
                    "agent exceeded {} tool rounds",
                    self.max_tool_rounds
                )));
            }
            tool_rounds += 1;

            let mut model_parts = Vec::new();
            if let Some(text) = response.text.filter(|t| !t.is_empty()) {
                model_parts.push(ContentPart::Text(text));
            }

            let mut tool_parts = Vec::with_capacity(response.function_calls.len());
            for call in response.function_calls {
                debug!(tool = %call.name, round = tool_rounds, "running agent tool");
                let result = match self.run_tool(&call).await {
                    Ok(output) => json!({ "result": output }),
                    Err(e) => {
                        warn!(tool = %call.name, "agent tool failed: {}", e);
                        json!({ "error": e.to_string() })
                    }
                };
                tool_parts.push(ContentPart::FunctionResponse {
                    name: call.name.clone(),
                    response: result,
                });
                model_parts.push(ContentPart::FunctionCall(call));
            }

            contents.push(Content {
                role: ContentRole::Model,
                parts: model_parts,
            });
            contents.push(Content {
                role: ContentRole::User,
                parts: tool_parts,
            });
        }
    }
}
