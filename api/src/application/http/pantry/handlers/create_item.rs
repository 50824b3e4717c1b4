use crate::application::http::pantry::validators::CreatePantryItemValidator;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use dietai_core::domain::pantry::entities::PantryItem;
use dietai_core::domain::pantry::ports::PantryService;
use dietai_core::domain::pantry::value_objects::CreatePantryItemInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreatePantryItemResponse {
    pub data: PantryItem,
}

#[utoipa::path(
    post,
    path = "/items",
    tag = "pantry",
    summary = "Add pantry item",
    description = "Adds an item whose current quantity starts at its total quantity.",
    request_body = CreatePantryItemValidator,
    responses(
        (status = 201, body = CreatePantryItemResponse),
        (status = 400, body = ApiErrorResponse)
    ),
)]
pub async fn create_item(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreatePantryItemValidator>,
) -> Result<Response<CreatePantryItemResponse>, ApiError> {
    let item = state
        .service
        .add_item(CreatePantryItemInput {
            name: payload.name,
            total_quantity: payload.total_quantity,
            low_stock_threshold: payload.low_stock_threshold,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreatePantryItemResponse { data: item }))
}
