//! Service layer for template authoring.
//!
//! All structural mutations route through the draft-gated aggregate
//! methods, so a published template can only be changed by creating a new
//! version.

use crate::error::{CategorizedError, ErrorKind};
use crate::template::{
    domain::{
        DurationDays, TaskOrder, Template, TemplateDomainError, TemplateId, TemplateSubTaskId,
        TemplateTaskId,
    },
    ports::{TemplateRepository, TemplateRepositoryError},
};
use crate::user::domain::UserId;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a draft template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTemplateRequest {
    title: String,
    description: Option<String>,
    created_by: UserId,
}

impl CreateTemplateRequest {
    /// Creates a request with required template fields.
    #[must_use]
    pub fn new(title: impl Into<String>, created_by: UserId) -> Self {
        Self {
            title: title.into(),
            description: None,
            created_by,
        }
    }

    /// Sets the template description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request payload for adding a task to a draft template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTaskRequest {
    title: String,
    description: Option<String>,
    order: u32,
    default_duration_days: u32,
}

impl AddTaskRequest {
    /// Creates a request with required task fields.
    #[must_use]
    pub fn new(title: impl Into<String>, order: u32, default_duration_days: u32) -> Self {
        Self {
            title: title.into(),
            description: None,
            order,
            default_duration_days,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Service-level errors for template authoring operations.
#[derive(Debug, Error)]
pub enum TemplateAuthoringError {
    /// No template exists with the given identifier.
    #[error("template {0} not found")]
    NotFound(TemplateId),
    /// Domain validation or lifecycle gating failed.
    #[error(transparent)]
    Domain(#[from] TemplateDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TemplateRepositoryError),
}

impl CategorizedError for TemplateAuthoringError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Domain(domain) => match domain {
                TemplateDomainError::NotDraft { .. }
                | TemplateDomainError::NotPublished { .. }
                | TemplateDomainError::NoTasks(_) => ErrorKind::InvalidState,
                TemplateDomainError::TaskNotFound { .. }
                | TemplateDomainError::SubTaskNotFound { .. } => ErrorKind::NotFound,
                TemplateDomainError::DuplicateTaskOrder { .. } => ErrorKind::Conflict,
                _ => ErrorKind::Validation,
            },
            Self::Repository(TemplateRepositoryError::NotFound(_)) => ErrorKind::NotFound,
            Self::Repository(_) => ErrorKind::Conflict,
        }
    }
}

/// Result type for template authoring operations.
pub type TemplateAuthoringResult<T> = Result<T, TemplateAuthoringError>;

/// Template authoring orchestration service.
#[derive(Clone)]
pub struct TemplateAuthoringService<R, C>
where
    R: TemplateRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TemplateAuthoringService<R, C>
where
    R: TemplateRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new authoring service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates and persists a new draft template at version `v1.0`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateAuthoringError`] when validation fails or the
    /// repository rejects persistence.
    pub async fn create_template(
        &self,
        request: CreateTemplateRequest,
    ) -> TemplateAuthoringResult<Template> {
        let template = Template::new_draft(
            request.title,
            request.description,
            request.created_by,
            &*self.clock,
        )?;
        self.repository.store(&template).await?;
        Ok(template)
    }

    /// Updates a draft template's title and/or description.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateAuthoringError::NotFound`] when the template does
    /// not exist and [`TemplateAuthoringError::Domain`] when it is not a
    /// draft or the new title is empty.
    pub async fn update_design(
        &self,
        template_id: TemplateId,
        title: Option<String>,
        description: Option<String>,
    ) -> TemplateAuthoringResult<Template> {
        self.mutate(template_id, |template, clock| {
            template.update_design(title, description, clock)
        })
        .await
    }

    /// Adds a task to a draft template.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateAuthoringError::Domain`] when the order or
    /// duration is invalid, the position is taken, or the template is not
    /// a draft.
    pub async fn add_task(
        &self,
        template_id: TemplateId,
        request: AddTaskRequest,
    ) -> TemplateAuthoringResult<Template> {
        let order = TaskOrder::new(request.order)?;
        let duration = DurationDays::new(request.default_duration_days)?;
        self.mutate(template_id, |template, clock| {
            template
                .add_task(request.title, request.description, order, duration, clock)
                .map(|_| ())
        })
        .await
    }

    /// Removes a task from a draft template.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateAuthoringError::Domain`] when the task does not
    /// belong to the template or the template is not a draft.
    pub async fn remove_task(
        &self,
        template_id: TemplateId,
        task_id: TemplateTaskId,
    ) -> TemplateAuthoringResult<Template> {
        self.mutate(template_id, |template, clock| {
            template.remove_task(task_id, clock)
        })
        .await
    }

    /// Appends a sub-task to a task's checklist.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateAuthoringError::Domain`] when the task does not
    /// belong to the template, the instruction is empty, or the template
    /// is not a draft.
    pub async fn add_sub_task(
        &self,
        template_id: TemplateId,
        task_id: TemplateTaskId,
        instruction: impl Into<String> + Send,
    ) -> TemplateAuthoringResult<Template> {
        let instruction = instruction.into();
        self.mutate(template_id, |template, clock| {
            template.add_sub_task(task_id, instruction, clock).map(|_| ())
        })
        .await
    }

    /// Removes a sub-task from a draft template.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateAuthoringError::Domain`] when no task owns the
    /// sub-task or the template is not a draft.
    pub async fn remove_sub_task(
        &self,
        template_id: TemplateId,
        sub_task_id: TemplateSubTaskId,
    ) -> TemplateAuthoringResult<Template> {
        self.mutate(template_id, |template, clock| {
            template.remove_sub_task(sub_task_id, clock)
        })
        .await
    }

    /// Publishes a draft template, freezing its structure.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateAuthoringError::Domain`] when the template is not
    /// a draft or has no tasks.
    pub async fn publish_template(
        &self,
        template_id: TemplateId,
    ) -> TemplateAuthoringResult<Template> {
        self.mutate(template_id, |template, clock| template.publish(clock))
            .await
    }

    /// Archives a published template.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateAuthoringError::Domain`] when the template is not
    /// published.
    pub async fn archive_template(
        &self,
        template_id: TemplateId,
    ) -> TemplateAuthoringResult<Template> {
        self.mutate(template_id, |template, clock| template.archive(clock))
            .await
    }

    /// Retrieves a template by identifier.
    ///
    /// Returns `Ok(None)` when no such template exists.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateAuthoringError::Repository`] when persistence
    /// lookup fails.
    pub async fn find_by_id(
        &self,
        template_id: TemplateId,
    ) -> TemplateAuthoringResult<Option<Template>> {
        Ok(self.repository.find_by_id(template_id).await?)
    }

    /// Loads, mutates, and persists a template aggregate.
    async fn mutate<F>(
        &self,
        template_id: TemplateId,
        apply: F,
    ) -> TemplateAuthoringResult<Template>
    where
        F: FnOnce(&mut Template, &C) -> Result<(), TemplateDomainError> + Send,
    {
        let mut template = self
            .repository
            .find_by_id(template_id)
            .await?
            .ok_or(TemplateAuthoringError::NotFound(template_id))?;
        apply(&mut template, &self.clock)?;
        self.repository.update(&template).await?;
        Ok(template)
    }
}
