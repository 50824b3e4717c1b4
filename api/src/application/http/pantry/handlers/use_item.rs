use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use dietai_core::domain::pantry::entities::PantryItem;
use dietai_core::domain::pantry::ports::PantryService;
use dietai_core::domain::pantry::value_objects::UsePantryItemInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UsePantryItemResponse {
    pub data: PantryItem,
}

#[utoipa::path(
    post,
    path = "/items/{name}/use",
    tag = "pantry",
    summary = "Use one unit",
    description = "Decrements the current quantity by one. An item already at zero is returned unchanged.",
    params(
        ("name" = String, Path, description = "Item name"),
    ),
    responses(
        (status = 200, body = UsePantryItemResponse),
        (status = 404, body = ApiErrorResponse)
    ),
)]
pub async fn use_item(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<UsePantryItemResponse>, ApiError> {
    let item = state
        .service
        .use_item(UsePantryItemInput { name })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UsePantryItemResponse { data: item }))
}
