//! In-memory adapters for assignment tests.

mod repository;

pub use repository::InMemoryAssignmentRepository;
