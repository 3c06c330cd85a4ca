pub mod common;
pub mod ingredient;
pub mod llm;
pub mod recipe;
pub mod session;
pub mod upload;
pub mod workflow;
