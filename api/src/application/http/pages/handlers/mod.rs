pub mod chat;
pub mod index;
pub mod results;
pub mod style;
pub mod upload;
