pub mod repositories;

pub use repositories::json_pantry_repository::JsonPantryRepository;
