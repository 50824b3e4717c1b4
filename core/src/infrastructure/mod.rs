pub mod knowledge;
pub mod llm;
pub mod pantry;
pub mod session;
