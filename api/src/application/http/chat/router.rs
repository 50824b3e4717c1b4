use super::handlers::get_history::{__path_get_history, get_history};
use super::handlers::send_message::{__path_send_message, send_message};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(send_message, get_history))]
pub struct ChatApiDoc;

pub fn chat_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/chat", state.args.server.root_path),
            post(send_message),
        )
        .route(
            &format!(
                "{}/chat/{{session_id}}/history",
                state.args.server.root_path
            ),
            get(get_history),
        )
}
