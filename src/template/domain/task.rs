//! Template task and sub-task types.

use super::{DurationDays, TaskOrder, TemplateDomainError, TemplateSubTaskId, TemplateTaskId};
use serde::{Deserialize, Serialize};

/// Ordered checklist instruction attached to a template task.
///
/// Sub-tasks are informational only; they carry no independent state
/// machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSubTask {
    id: TemplateSubTaskId,
    instruction: String,
    order: TaskOrder,
}

impl TemplateSubTask {
    /// Creates a sub-task at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateDomainError::EmptyInstruction`] when the trimmed
    /// instruction is empty.
    pub fn new(
        instruction: impl Into<String>,
        order: TaskOrder,
    ) -> Result<Self, TemplateDomainError> {
        let instruction = instruction.into();
        let trimmed = instruction.trim();
        if trimmed.is_empty() {
            return Err(TemplateDomainError::EmptyInstruction);
        }
        Ok(Self {
            id: TemplateSubTaskId::new(),
            instruction: trimmed.to_owned(),
            order,
        })
    }

    /// Reconstructs a sub-task from persisted storage.
    #[must_use]
    pub const fn from_persisted(
        id: TemplateSubTaskId,
        instruction: String,
        order: TaskOrder,
    ) -> Self {
        Self {
            id,
            instruction,
            order,
        }
    }

    /// Returns the sub-task identifier.
    #[must_use]
    pub const fn id(&self) -> TemplateSubTaskId {
        self.id
    }

    /// Returns the checklist instruction.
    #[must_use]
    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    /// Returns the 1-based position within the owning task.
    #[must_use]
    pub const fn order(&self) -> TaskOrder {
        self.order
    }

    /// Copies this sub-task under a fresh identity.
    #[must_use]
    pub fn duplicate_with_fresh_id(&self) -> Self {
        Self {
            id: TemplateSubTaskId::new(),
            instruction: self.instruction.clone(),
            order: self.order,
        }
    }
}

/// Ordered task within a template, owning its sub-task checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateTask {
    id: TemplateTaskId,
    title: String,
    description: Option<String>,
    order: TaskOrder,
    default_duration_days: DurationDays,
    sub_tasks: Vec<TemplateSubTask>,
}

impl TemplateTask {
    /// Creates a task at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateDomainError::EmptyTitle`] when the trimmed title
    /// is empty.
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        order: TaskOrder,
        default_duration_days: DurationDays,
    ) -> Result<Self, TemplateDomainError> {
        let title = title.into();
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(TemplateDomainError::EmptyTitle);
        }
        Ok(Self {
            id: TemplateTaskId::new(),
            title: trimmed.to_owned(),
            description,
            order,
            default_duration_days,
            sub_tasks: Vec::new(),
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub const fn from_persisted(
        id: TemplateTaskId,
        title: String,
        description: Option<String>,
        order: TaskOrder,
        default_duration_days: DurationDays,
        sub_tasks: Vec<TemplateSubTask>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            order,
            default_duration_days,
            sub_tasks,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TemplateTaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the 1-based position within the template.
    #[must_use]
    pub const fn order(&self) -> TaskOrder {
        self.order
    }

    /// Returns the inclusive default duration.
    #[must_use]
    pub const fn default_duration_days(&self) -> DurationDays {
        self.default_duration_days
    }

    /// Returns the ordered sub-task checklist.
    #[must_use]
    pub fn sub_tasks(&self) -> &[TemplateSubTask] {
        &self.sub_tasks
    }

    /// Appends a sub-task at the next checklist position.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateDomainError::EmptyInstruction`] when the trimmed
    /// instruction is empty.
    pub fn append_sub_task(
        &mut self,
        instruction: impl Into<String>,
    ) -> Result<TemplateSubTaskId, TemplateDomainError> {
        let order = self
            .sub_tasks
            .last()
            .map_or(TaskOrder::FIRST, |last| last.order().next());
        let sub_task = TemplateSubTask::new(instruction, order)?;
        let id = sub_task.id();
        self.sub_tasks.push(sub_task);
        Ok(id)
    }

    /// Removes the sub-task with the given identifier.
    ///
    /// Returns `true` when a sub-task was removed.
    pub fn remove_sub_task(&mut self, sub_task_id: TemplateSubTaskId) -> bool {
        let before = self.sub_tasks.len();
        self.sub_tasks.retain(|sub_task| sub_task.id() != sub_task_id);
        self.sub_tasks.len() != before
    }

    /// Deep-copies this task and its checklist under fresh identities.
    #[must_use]
    pub fn duplicate_with_fresh_ids(&self) -> Self {
        Self {
            id: TemplateTaskId::new(),
            title: self.title.clone(),
            description: self.description.clone(),
            order: self.order,
            default_duration_days: self.default_duration_days,
            sub_tasks: self
                .sub_tasks
                .iter()
                .map(TemplateSubTask::duplicate_with_fresh_id)
                .collect(),
        }
    }
}
