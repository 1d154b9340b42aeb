//! Service layer for template versioning.
//!
//! Versioning is the only sanctioned path to evolve a published
//! template's structure: the source aggregate is deep-copied into a new
//! editable draft with the minor version incremented, leaving the
//! original and every existing assignment untouched.

use crate::error::{CategorizedError, ErrorKind};
use crate::policy::{self, Operation};
use crate::template::{
    domain::{Template, TemplateId},
    ports::{TemplateRepository, TemplateRepositoryError},
};
use crate::user::{
    domain::{UserId, UserRole},
    ports::{UserRepository, UserRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for template versioning operations.
#[derive(Debug, Error)]
pub enum TemplateVersioningError {
    /// No template exists with the given identifier.
    #[error("template {0} not found")]
    TemplateNotFound(TemplateId),
    /// No user exists for the acting identifier.
    #[error("actor {0} not found")]
    ActorNotFound(UserId),
    /// The actor's role does not permit creating template versions.
    #[error("actor {actor} with role {role:?} may not create template versions")]
    Forbidden {
        /// Acting user.
        actor: UserId,
        /// Role that failed the policy check.
        role: UserRole,
    },
    /// Template repository operation failed.
    #[error(transparent)]
    TemplateRepository(#[from] TemplateRepositoryError),
    /// User repository operation failed.
    #[error(transparent)]
    UserRepository(#[from] UserRepositoryError),
}

impl CategorizedError for TemplateVersioningError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::TemplateNotFound(_) | Self::ActorNotFound(_) => ErrorKind::NotFound,
            Self::Forbidden { .. } => ErrorKind::Forbidden,
            Self::TemplateRepository(_) | Self::UserRepository(_) => ErrorKind::Conflict,
        }
    }
}

/// Result type for template versioning operations.
pub type TemplateVersioningResult<T> = Result<T, TemplateVersioningError>;

/// Template versioning orchestration service.
#[derive(Clone)]
pub struct TemplateVersioningService<R, U, C>
where
    R: TemplateRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    templates: Arc<R>,
    users: Arc<U>,
    clock: Arc<C>,
}

impl<R, U, C> TemplateVersioningService<R, U, C>
where
    R: TemplateRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new versioning service.
    #[must_use]
    pub const fn new(templates: Arc<R>, users: Arc<U>, clock: Arc<C>) -> Self {
        Self {
            templates,
            users,
            clock,
        }
    }

    /// Clones a template into a new draft with the minor version
    /// incremented, attributed to `actor_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateVersioningError::TemplateNotFound`] when the
    /// source template is absent,
    /// [`TemplateVersioningError::ActorNotFound`] when the actor is not in
    /// the directory, and [`TemplateVersioningError::Forbidden`] when the
    /// actor's role fails the policy check.
    pub async fn create_new_version(
        &self,
        template_id: TemplateId,
        actor_id: UserId,
    ) -> TemplateVersioningResult<Template> {
        let source = self
            .templates
            .find_by_id(template_id)
            .await?
            .ok_or(TemplateVersioningError::TemplateNotFound(template_id))?;

        let actor = self
            .users
            .find_by_id(actor_id)
            .await?
            .ok_or(TemplateVersioningError::ActorNotFound(actor_id))?;
        if !policy::can_perform(actor.role(), Operation::CreateTemplateVersion) {
            return Err(TemplateVersioningError::Forbidden {
                actor: actor_id,
                role: actor.role(),
            });
        }

        let draft = source.clone_as_draft(actor_id, &*self.clock);
        self.templates.store(&draft).await?;
        Ok(draft)
    }
}
