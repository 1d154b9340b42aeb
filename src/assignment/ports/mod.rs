//! Port contracts for assignment persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by assignment
//! services.

pub mod repository;

pub use repository::{
    AssignmentRepository, AssignmentRepositoryError, AssignmentRepositoryResult,
};
