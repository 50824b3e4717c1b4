pub mod chat;
pub mod health;
pub mod pantry;
pub mod server;
