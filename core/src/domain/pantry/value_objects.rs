use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::pantry::{entities::PantryItem, purchase_links::PurchaseLink};

#[derive(Debug, Clone)]
pub struct CreatePantryItemInput {
    pub name: String,
    pub total_quantity: u32,
    pub low_stock_threshold: u32,
}

#[derive(Debug, Clone)]
pub struct UsePantryItemInput {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct DeletePantryItemInput {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LowStockItem {
    pub item: PantryItem,
    pub purchase_links: Vec<PurchaseLink>,
}
