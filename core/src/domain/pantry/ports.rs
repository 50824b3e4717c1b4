use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    pantry::{
        entities::PantryItem,
        value_objects::{
            CreatePantryItemInput, DeletePantryItemInput, LowStockItem, UsePantryItemInput,
        },
    },
};

/// Whole-collection storage: every save replaces what was stored before.
#[cfg_attr(test, mockall::automock)]
pub trait PantryRepository: Send + Sync {
    /// Returns an empty collection when nothing has been stored yet.
    fn load(&self) -> impl Future<Output = Result<Vec<PantryItem>, CoreError>> + Send;

    fn save(&self, items: Vec<PantryItem>) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait PantryService: Send + Sync {
    fn list_items(&self) -> impl Future<Output = Result<Vec<PantryItem>, CoreError>> + Send;

    fn add_item(
        &self,
        input: CreatePantryItemInput,
    ) -> impl Future<Output = Result<PantryItem, CoreError>> + Send;

    fn use_item(
        &self,
        input: UsePantryItemInput,
    ) -> impl Future<Output = Result<PantryItem, CoreError>> + Send;

    fn delete_item(
        &self,
        input: DeletePantryItemInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn get_low_stock_items(
        &self,
    ) -> impl Future<Output = Result<Vec<LowStockItem>, CoreError>> + Send;
}
