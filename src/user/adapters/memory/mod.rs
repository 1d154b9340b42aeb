//! In-memory adapters for user directory tests.

mod repository;

pub use repository::InMemoryUserRepository;
