//! Repository port for template persistence.

use crate::template::domain::{Template, TemplateId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for template repository operations.
pub type TemplateRepositoryResult<T> = Result<T, TemplateRepositoryError>;

/// Template persistence contract.
///
/// Templates are stored and loaded as whole aggregates, task tree
/// included.
#[async_trait]
pub trait TemplateRepository: Send + Sync {
    /// Stores a new template aggregate.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateRepositoryError::DuplicateTemplate`] when the
    /// template ID already exists.
    async fn store(&self, template: &Template) -> TemplateRepositoryResult<()>;

    /// Persists changes to an existing template aggregate.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateRepositoryError::NotFound`] when the template
    /// does not exist.
    async fn update(&self, template: &Template) -> TemplateRepositoryResult<()>;

    /// Finds a template by identifier, with its full task tree.
    ///
    /// Returns `None` when the template does not exist.
    async fn find_by_id(&self, id: TemplateId) -> TemplateRepositoryResult<Option<Template>>;
}

/// Errors returned by template repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TemplateRepositoryError {
    /// A template with the same identifier already exists.
    #[error("duplicate template identifier: {0}")]
    DuplicateTemplate(TemplateId),

    /// The template was not found.
    #[error("template not found: {0}")]
    NotFound(TemplateId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TemplateRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
