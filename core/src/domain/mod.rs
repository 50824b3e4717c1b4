pub mod agent;
pub mod chat;
pub mod common;
pub mod pantry;
