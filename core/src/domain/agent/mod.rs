pub mod entities;
pub mod ports;
pub mod services;
pub mod tools;

pub use entities::*;
pub use ports::*;
