//! Role-based operation checks decoupled from presentation.
//!
//! Access control is a pure function over the actor's role and the
//! requested operation. Core services invoke it wherever an actor
//! identity is part of the operation contract; the embedding application
//! calls it at its own boundary for the remaining entry points.

use crate::user::domain::UserRole;

/// Operations subject to role-based access checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Create, update, or remove user directory entries.
    ManageUsers,
    /// Create a new draft template.
    CreateTemplate,
    /// Structurally edit a draft template (tasks and sub-tasks included).
    EditTemplate,
    /// Publish a draft template.
    PublishTemplate,
    /// Archive a published template.
    ArchiveTemplate,
    /// Clone a template into a new draft version.
    CreateTemplateVersion,
    /// Assign a published template to an assignee.
    AssignIntervention,
    /// Submit evidence for an active or rejected task execution.
    SubmitEvidence,
    /// Approve or reject a task execution under review.
    ReviewTask,
}

/// Returns whether `role` may perform `operation`.
///
/// Administrators hold the template, assignment, and user-management
/// operations; assignees submit evidence; mentors review.
#[must_use]
pub const fn can_perform(role: UserRole, operation: Operation) -> bool {
    match role {
        UserRole::Admin => matches!(
            operation,
            Operation::ManageUsers
                | Operation::CreateTemplate
                | Operation::EditTemplate
                | Operation::PublishTemplate
                | Operation::ArchiveTemplate
                | Operation::CreateTemplateVersion
                | Operation::AssignIntervention
        ),
        UserRole::HrPro => matches!(operation, Operation::SubmitEvidence),
        UserRole::Mentor => matches!(operation, Operation::ReviewTask),
    }
}
