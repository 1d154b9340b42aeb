//! Error types for template domain validation and parsing.

use super::template::TemplateStatus;
use super::{TemplateId, TemplateSubTaskId, TemplateTaskId};
use thiserror::Error;

/// Errors returned while constructing or mutating template domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TemplateDomainError {
    /// The template or task title is empty after trimming.
    #[error("title must not be empty")]
    EmptyTitle,

    /// The sub-task instruction is empty after trimming.
    #[error("sub-task instruction must not be empty")]
    EmptyInstruction,

    /// The version string does not follow `v<major>.<minor>` format.
    #[error("invalid version string '{0}', expected v<major>.<minor>")]
    InvalidVersion(String),

    /// The task order is not a positive position.
    #[error("invalid task order {0}, expected a 1-based position")]
    InvalidTaskOrder(u32),

    /// The duration is not a positive number of days.
    #[error("invalid duration {0}, expected at least 1 day")]
    InvalidDuration(u32),

    /// A structural mutation was attempted on a non-draft template.
    #[error("template {template_id} is {status:?}; structural changes require a draft")]
    NotDraft {
        /// Template that rejected the mutation.
        template_id: TemplateId,
        /// Lifecycle status at the time of the attempt.
        status: TemplateStatus,
    },

    /// Archiving was attempted on a template that is not published.
    #[error("template {template_id} is {status:?}; only published templates can be archived")]
    NotPublished {
        /// Template that rejected the archival.
        template_id: TemplateId,
        /// Lifecycle status at the time of the attempt.
        status: TemplateStatus,
    },

    /// A task with the same order already exists in the template.
    #[error("template {template_id} already has a task at order {order}")]
    DuplicateTaskOrder {
        /// Template that rejected the insertion.
        template_id: TemplateId,
        /// Conflicting 1-based position.
        order: u32,
    },

    /// Publishing was attempted on a template with no tasks.
    #[error("template {0} has no tasks and cannot be published")]
    NoTasks(TemplateId),

    /// The referenced task does not belong to the template.
    #[error("task {task_id} not found in template {template_id}")]
    TaskNotFound {
        /// Template that was searched.
        template_id: TemplateId,
        /// Missing task identifier.
        task_id: TemplateTaskId,
    },

    /// The referenced sub-task does not belong to the template.
    #[error("sub-task {sub_task_id} not found in template {template_id}")]
    SubTaskNotFound {
        /// Template that was searched.
        template_id: TemplateId,
        /// Missing sub-task identifier.
        sub_task_id: TemplateSubTaskId,
    },
}

/// Error returned while parsing template statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown template status: {0}")]
pub struct ParseTemplateStatusError(pub String);
