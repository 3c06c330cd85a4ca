pub mod memory_session_repository;

pub use memory_session_repository::InMemorySessionRepository;
