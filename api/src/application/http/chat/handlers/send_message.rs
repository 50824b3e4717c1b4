use crate::application::http::chat::validators::SendMessageValidator;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use dietai_core::domain::chat::ports::ChatService;
use dietai_core::domain::chat::value_objects::{ChatReply, SendMessageInput};

#[utoipa::path(
    post,
    path = "",
    tag = "chat",
    summary = "Send a chat message",
    description = "Runs one conversational turn for the session. Messages mentioning a diet plan start a five question intake; the fifth answer produces the plan.",
    request_body = SendMessageValidator,
    responses(
        (status = 200, body = ChatReply),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    ),
)]
pub async fn send_message(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SendMessageValidator>,
) -> Result<Response<ChatReply>, ApiError> {
    let reply = state
        .service
        .send_message(SendMessageInput {
            session_id: payload.session_id,
            message: payload.message,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(reply))
}
