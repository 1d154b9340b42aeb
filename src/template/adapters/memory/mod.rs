//! In-memory adapters for template tests.

mod repository;

pub use repository::InMemoryTemplateRepository;
