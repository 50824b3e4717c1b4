use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{
    agent::{
        entities::{Content, ContentPart, ContentRole, FunctionCall, LLMRequest, LLMResponse},
        ports::LLMClient,
    },
    common::entities::app_errors::CoreError,
};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    FunctionCall {
        #[serde(rename = "functionCall")]
        function_call: FunctionCallPart,
        #[serde(rename = "thoughtSignature", skip_serializing_if = "Option::is_none")]
        thought_signature: Option<String>,
    },
    FunctionResponse {
        #[serde(rename = "functionResponse")]
        function_response: FunctionResponsePart,
    },
}

#[derive(Debug, Serialize)]
struct FunctionCallPart {
    name: String,
    args: Value,
}

#[derive(Debug, Serialize)]
struct FunctionResponsePart {
    name: String,
    response: Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Tool {
    function_declarations: Vec<FunctionDeclarationPart>,
}

#[derive(Debug, Serialize)]
struct FunctionDeclarationPart {
    name: String,
    description: String,
    parameters: Value,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<ContentResponse>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PartResponse {
    text: Option<String>,
    function_call: Option<FunctionCallResponse>,
    thought_signature: Option<String>,
    #[serde(default)]
    thought: bool,
}

#[derive(Debug, Deserialize)]
struct FunctionCallResponse {
    name: String,
    #[serde(default)]
    args: Value,
}

impl GeminiLLMClient {
    pub fn new(api_key: String, model_name: String, base_url: String) -> Self {
        Self {
            api_key,
            model_name,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<GeminiResponse, CoreError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model_name
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })
    }
}

fn to_gemini_content(content: Content) -> GeminiContent {
    let role = match content.role {
        ContentRole::User => "user",
        ContentRole::Model => "model",
    };

    let parts = content
        .parts
        .into_iter()
        .map(|part| match part {
            ContentPart::Text(text) => Part::Text { text },
            ContentPart::FunctionCall(call) => Part::FunctionCall {
                function_call: FunctionCallPart {
                    name: call.name,
                    args: call.args,
                },
                thought_signature: call.thought_signature,
            },
            ContentPart::FunctionResponse { name, response } => Part::FunctionResponse {
                function_response: FunctionResponsePart { name, response },
            },
        })
        .collect();

    GeminiContent {
        role: Some(role.to_string()),
        parts,
    }
}

fn build_request(request: LLMRequest) -> GeminiRequest {
    let system_instruction = (!request.system_instruction.is_empty()).then(|| GeminiContent {
        role: None,
        parts: vec![Part::Text {
            text: request.system_instruction,
        }],
    });

    let tools = if request.tools.is_empty() {
        Vec::new()
    } else {
        vec![Tool {
            function_declarations: request
                .tools
                .into_iter()
                .map(|t| FunctionDeclarationPart {
                    name: t.name,
                    description: t.description,
                    parameters: t.parameters,
                })
                .collect(),
        }]
    };

    GeminiRequest {
        contents: request.contents.into_iter().map(to_gemini_content).collect(),
        system_instruction,
        tools,
        generation_config: GenerationConfig {
            temperature: request.temperature,
        },
    }
}

fn normalize_response(response: GeminiResponse) -> Result<LLMResponse, CoreError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))?;

    let parts = match candidate.content {
        Some(content) => content.parts,
        None => {
            return Err(CoreError::ExternalServiceError(format!(
                "LLM returned no content (finish reason: {})",
                candidate.finish_reason.as_deref().unwrap_or("unknown")
            )));
        }
    };

    let mut texts = Vec::new();
    let mut function_calls = Vec::new();
    for part in parts {
        if let Some(call) = part.function_call {
            function_calls.push(FunctionCall {
                name: call.name,
                args: call.args,
                thought_signature: part.thought_signature,
            });
        } else if let Some(text) = part.text.filter(|_| !part.thought) {
            texts.push(text);
        }
    }

    Ok(LLMResponse {
        text: (!texts.is_empty()).then(|| texts.concat()),
        function_calls,
    })
}

impl LLMClient for GeminiLLMClient {
    async fn generate(&self, request: LLMRequest) -> Result<LLMResponse, CoreError> {
        tracing::debug!(
            model = %self.model_name,
            contents = request.contents.len(),
            "calling Gemini"
        );

        let response = self.call_gemini_api(build_request(request)).await?;
        normalize_response(response)
    }
}
