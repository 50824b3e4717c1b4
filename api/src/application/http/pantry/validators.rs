use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePantryItemValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(range(min = 1, message = "total_quantity must be at least 1"))]
    pub total_quantity: u32,

    #[serde(default)]
    pub low_stock_threshold: u32,
}
