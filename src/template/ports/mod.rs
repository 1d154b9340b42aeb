//! Port contracts for template management.
//!
//! Ports define infrastructure-agnostic interfaces used by template
//! services.

pub mod repository;

pub use repository::{TemplateRepository, TemplateRepositoryError, TemplateRepositoryResult};
