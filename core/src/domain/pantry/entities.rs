use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One kitchen item. Names are unique by convention only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PantryItem {
    pub name: String,
    pub total_quantity: u32,
    pub current_quantity: u32,
    pub low_stock_threshold: u32,
}

impl PantryItem {
    /// New items start fully stocked.
    pub fn new(name: String, total_quantity: u32, low_stock_threshold: u32) -> Self {
        Self {
            name,
            total_quantity,
            current_quantity: total_quantity,
            low_stock_threshold,
        }
    }

    pub fn is_low_stock(&self) -> bool {
        self.current_quantity <= self.low_stock_threshold
    }

    /// Consumes one unit; returns `false` when nothing is left.
    pub fn use_one(&mut self) -> bool {
        if self.current_quantity == 0 {
            return false;
        }
        self.current_quantity -= 1;
        true
    }
}
