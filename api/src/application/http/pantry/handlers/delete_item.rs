use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use dietai_core::domain::pantry::ports::PantryService;
use dietai_core::domain::pantry::value_objects::DeletePantryItemInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeletePantryItemResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/items/{name}",
    tag = "pantry",
    summary = "Delete pantry item",
    params(
        ("name" = String, Path, description = "Item name"),
    ),
    responses(
        (status = 200, body = DeletePantryItemResponse),
        (status = 404, body = ApiErrorResponse)
    ),
)]
pub async fn delete_item(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<DeletePantryItemResponse>, ApiError> {
    state
        .service
        .delete_item(DeletePantryItemInput { name: name.clone() })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeletePantryItemResponse {
        message: format!("Removed {} from pantry", name),
    }))
}
