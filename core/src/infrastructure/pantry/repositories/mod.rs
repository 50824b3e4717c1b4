pub mod json_pantry_repository;
