pub mod create_item;
pub mod delete_item;
pub mod get_items;
pub mod get_low_stock;
pub mod use_item;
