use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use dietai_core::domain::pantry::ports::PantryService;
use dietai_core::domain::pantry::value_objects::LowStockItem;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetLowStockResponse {
    pub data: Vec<LowStockItem>,
}

#[utoipa::path(
    get,
    path = "/low-stock",
    tag = "pantry",
    summary = "List low stock items",
    description = "Items at or below their warning level, each with quick-commerce purchase links.",
    responses(
        (status = 200, body = GetLowStockResponse)
    ),
)]
pub async fn get_low_stock(
    State(state): State<AppState>,
) -> Result<Response<GetLowStockResponse>, ApiError> {
    let items = state
        .service
        .get_low_stock_items()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetLowStockResponse { data: items }))
}
