pub mod parser;
pub mod prompts;
pub mod services;
pub mod value_objects;

pub use parser::*;
pub use value_objects::*;
