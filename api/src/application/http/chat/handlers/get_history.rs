use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use dietai_core::domain::chat::entities::ChatMessage;
use dietai_core::domain::chat::ports::ChatService;
use dietai_core::domain::chat::value_objects::GetHistoryInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetHistoryResponse {
    pub data: Vec<ChatMessage>,
}

#[utoipa::path(
    get,
    path = "/{session_id}/history",
    tag = "chat",
    summary = "Get chat history",
    description = "Returns the recorded messages of a session, oldest first. Unknown sessions have an empty history.",
    params(
        ("session_id" = String, Path, description = "Session identifier"),
    ),
    responses(
        (status = 200, body = GetHistoryResponse)
    ),
)]
pub async fn get_history(
    Path(session_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetHistoryResponse>, ApiError> {
    let messages = state
        .service
        .get_history(GetHistoryInput { session_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetHistoryResponse { data: messages }))
}
