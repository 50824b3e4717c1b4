use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use dietai_core::domain::pantry::entities::PantryItem;
use dietai_core::domain::pantry::ports::PantryService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetPantryItemsResponse {
    pub data: Vec<PantryItem>,
}

#[utoipa::path(
    get,
    path = "/items",
    tag = "pantry",
    summary = "List pantry items",
    responses(
        (status = 200, body = GetPantryItemsResponse)
    ),
)]
pub async fn get_items(
    State(state): State<AppState>,
) -> Result<Response<GetPantryItemsResponse>, ApiError> {
    let items = state
        .service
        .list_items()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetPantryItemsResponse { data: items }))
}
