//! Template aggregate root and lifecycle status.

use super::{
    DurationDays, ParseTemplateStatusError, TaskOrder, TemplateDomainError, TemplateId,
    TemplateSubTaskId, TemplateTask, TemplateTaskId, TemplateVersion,
};
use crate::user::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Template lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemplateStatus {
    /// Template is editable and cannot be assigned.
    Draft,
    /// Template structure is frozen and may be assigned.
    Published,
    /// Template is retired from assignment.
    Archived,
}

impl TemplateStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Published => "PUBLISHED",
            Self::Archived => "ARCHIVED",
        }
    }
}

impl TryFrom<&str> for TemplateStatus {
    type Error = ParseTemplateStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "DRAFT" => Ok(Self::Draft),
            "PUBLISHED" => Ok(Self::Published),
            "ARCHIVED" => Ok(Self::Archived),
            _ => Err(ParseTemplateStatusError(value.to_owned())),
        }
    }
}

/// Versioned intervention template aggregate root.
///
/// Owns its ordered task tree. Structural mutation is gated on
/// [`TemplateStatus::Draft`]; once published, the only path to a new
/// structure is [`Template::clone_as_draft`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    id: TemplateId,
    title: String,
    description: Option<String>,
    version: TemplateVersion,
    status: TemplateStatus,
    created_by: UserId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    tasks: Vec<TemplateTask>,
}

/// Parameter object for reconstructing a persisted template aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTemplateData {
    /// Persisted template identifier.
    pub id: TemplateId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted version.
    pub version: TemplateVersion,
    /// Persisted lifecycle status.
    pub status: TemplateStatus,
    /// Persisted creating administrator.
    pub created_by: UserId,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Persisted task tree.
    pub tasks: Vec<TemplateTask>,
}

impl Template {
    /// Creates a new draft template at version `v1.0` with no tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateDomainError::EmptyTitle`] when the trimmed title
    /// is empty.
    pub fn new_draft(
        title: impl Into<String>,
        description: Option<String>,
        created_by: UserId,
        clock: &impl Clock,
    ) -> Result<Self, TemplateDomainError> {
        let title = title.into();
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(TemplateDomainError::EmptyTitle);
        }
        let timestamp = clock.utc();
        Ok(Self {
            id: TemplateId::new(),
            title: trimmed.to_owned(),
            description,
            version: TemplateVersion::initial(),
            status: TemplateStatus::Draft,
            created_by,
            created_at: timestamp,
            updated_at: timestamp,
            tasks: Vec::new(),
        })
    }

    /// Reconstructs a template from persisted storage.
    ///
    /// Tasks are re-sorted by order so aggregate invariants hold
    /// regardless of storage ordering.
    #[must_use]
    pub fn from_persisted(data: PersistedTemplateData) -> Self {
        let mut tasks = data.tasks;
        tasks.sort_by_key(TemplateTask::order);
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            version: data.version,
            status: data.status,
            created_by: data.created_by,
            created_at: data.created_at,
            updated_at: data.updated_at,
            tasks,
        }
    }

    /// Returns the template identifier.
    #[must_use]
    pub const fn id(&self) -> TemplateId {
        self.id
    }

    /// Returns the template title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the template description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the template version.
    #[must_use]
    pub const fn version(&self) -> TemplateVersion {
        self.version
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TemplateStatus {
        self.status
    }

    /// Returns the creating administrator.
    #[must_use]
    pub const fn created_by(&self) -> UserId {
        self.created_by
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the tasks in ascending order.
    #[must_use]
    pub fn tasks(&self) -> &[TemplateTask] {
        &self.tasks
    }

    /// Updates title and/or description.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateDomainError::NotDraft`] when the template is not
    /// a draft, or [`TemplateDomainError::EmptyTitle`] when a new title is
    /// empty after trimming.
    pub fn update_design(
        &mut self,
        title: Option<String>,
        description: Option<String>,
        clock: &impl Clock,
    ) -> Result<(), TemplateDomainError> {
        self.require_draft()?;
        if let Some(new_title) = title {
            let trimmed = new_title.trim();
            if trimmed.is_empty() {
                return Err(TemplateDomainError::EmptyTitle);
            }
            self.title = trimmed.to_owned();
        }
        if let Some(new_description) = description {
            self.description = Some(new_description);
        }
        self.touch(clock);
        Ok(())
    }

    /// Adds a task at an explicit position.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateDomainError::NotDraft`] when the template is not
    /// a draft, [`TemplateDomainError::DuplicateTaskOrder`] when the
    /// position is taken, or [`TemplateDomainError::EmptyTitle`] when the
    /// title is empty after trimming.
    pub fn add_task(
        &mut self,
        title: impl Into<String>,
        description: Option<String>,
        order: TaskOrder,
        default_duration_days: DurationDays,
        clock: &impl Clock,
    ) -> Result<TemplateTaskId, TemplateDomainError> {
        self.require_draft()?;
        if self.tasks.iter().any(|task| task.order() == order) {
            return Err(TemplateDomainError::DuplicateTaskOrder {
                template_id: self.id,
                order: order.value(),
            });
        }
        let task = TemplateTask::new(title, description, order, default_duration_days)?;
        let id = task.id();
        self.tasks.push(task);
        self.tasks.sort_by_key(TemplateTask::order);
        self.touch(clock);
        Ok(id)
    }

    /// Removes the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateDomainError::NotDraft`] when the template is not
    /// a draft or [`TemplateDomainError::TaskNotFound`] when the task does
    /// not belong to this template.
    pub fn remove_task(
        &mut self,
        task_id: TemplateTaskId,
        clock: &impl Clock,
    ) -> Result<(), TemplateDomainError> {
        self.require_draft()?;
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id() != task_id);
        if self.tasks.len() == before {
            return Err(TemplateDomainError::TaskNotFound {
                template_id: self.id,
                task_id,
            });
        }
        self.touch(clock);
        Ok(())
    }

    /// Appends a sub-task to the given task's checklist.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateDomainError::NotDraft`] when the template is not
    /// a draft, [`TemplateDomainError::TaskNotFound`] when the task does
    /// not belong to this template, or
    /// [`TemplateDomainError::EmptyInstruction`] when the instruction is
    /// empty after trimming.
    pub fn add_sub_task(
        &mut self,
        task_id: TemplateTaskId,
        instruction: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<TemplateSubTaskId, TemplateDomainError> {
        self.require_draft()?;
        let template_id = self.id;
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id() == task_id)
            .ok_or(TemplateDomainError::TaskNotFound {
                template_id,
                task_id,
            })?;
        let sub_task_id = task.append_sub_task(instruction)?;
        self.touch(clock);
        Ok(sub_task_id)
    }

    /// Removes the sub-task with the given identifier from whichever task
    /// owns it.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateDomainError::NotDraft`] when the template is not
    /// a draft or [`TemplateDomainError::SubTaskNotFound`] when no task
    /// owns the sub-task.
    pub fn remove_sub_task(
        &mut self,
        sub_task_id: TemplateSubTaskId,
        clock: &impl Clock,
    ) -> Result<(), TemplateDomainError> {
        self.require_draft()?;
        let removed = self
            .tasks
            .iter_mut()
            .any(|task| task.remove_sub_task(sub_task_id));
        if !removed {
            return Err(TemplateDomainError::SubTaskNotFound {
                template_id: self.id,
                sub_task_id,
            });
        }
        self.touch(clock);
        Ok(())
    }

    /// Publishes the template, freezing its structure.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateDomainError::NotDraft`] when the template is not
    /// a draft or [`TemplateDomainError::NoTasks`] when it has no tasks.
    pub fn publish(&mut self, clock: &impl Clock) -> Result<(), TemplateDomainError> {
        self.require_draft()?;
        if self.tasks.is_empty() {
            return Err(TemplateDomainError::NoTasks(self.id));
        }
        self.status = TemplateStatus::Published;
        self.touch(clock);
        Ok(())
    }

    /// Archives a published template.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateDomainError::NotPublished`] when the template is
    /// not published.
    pub fn archive(&mut self, clock: &impl Clock) -> Result<(), TemplateDomainError> {
        if self.status != TemplateStatus::Published {
            return Err(TemplateDomainError::NotPublished {
                template_id: self.id,
                status: self.status,
            });
        }
        self.status = TemplateStatus::Archived;
        self.touch(clock);
        Ok(())
    }

    /// Deep-copies this template into a new draft with the minor version
    /// incremented.
    ///
    /// Every task and sub-task receives a fresh identity; the original
    /// aggregate and any assignments snapshotted from it are unaffected.
    #[must_use]
    pub fn clone_as_draft(&self, created_by: UserId, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TemplateId::new(),
            title: self.title.clone(),
            description: self.description.clone(),
            version: self.version.next_minor(),
            status: TemplateStatus::Draft,
            created_by,
            created_at: timestamp,
            updated_at: timestamp,
            tasks: self
                .tasks
                .iter()
                .map(TemplateTask::duplicate_with_fresh_ids)
                .collect(),
        }
    }

    fn require_draft(&self) -> Result<(), TemplateDomainError> {
        if self.status != TemplateStatus::Draft {
            return Err(TemplateDomainError::NotDraft {
                template_id: self.id,
                status: self.status,
            });
        }
        Ok(())
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
