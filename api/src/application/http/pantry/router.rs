use super::handlers::create_item::{__path_create_item, create_item};
use super::handlers::delete_item::{__path_delete_item, delete_item};
use super::handlers::get_items::{__path_get_items, get_items};
use super::handlers::get_low_stock::{__path_get_low_stock, get_low_stock};
use super::handlers::use_item::{__path_use_item, use_item};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{delete, get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_items, create_item, use_item, delete_item, get_low_stock))]
pub struct PantryApiDoc;

pub fn pantry_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/pantry/items", state.args.server.root_path),
            get(get_items).post(create_item),
        )
        .route(
            &format!("{}/pantry/items/{{name}}/use", state.args.server.root_path),
            post(use_item),
        )
        .route(
            &format!("{}/pantry/items/{{name}}", state.args.server.root_path),
            delete(delete_item),
        )
        .route(
            &format!("{}/pantry/low-stock", state.args.server.root_path),
            get(get_low_stock),
        )
}
