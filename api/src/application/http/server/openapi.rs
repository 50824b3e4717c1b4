use crate::application::http::{
    chat::router::ChatApiDoc, health::HealthApiDoc, pantry::router::PantryApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "DietAI API",
        description = "Nutrition assistant chat and pantry tracking"
    ),
    nest(
        (path = "/chat", api = ChatApiDoc),
        (path = "/pantry", api = PantryApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
