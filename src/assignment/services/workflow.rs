//! Service layer for the task execution workflow.
//!
//! Orchestrates evidence submission, mentor review, and the unlock
//! cascade that approving one task triggers for its successor. Each
//! operation loads the execution, applies the domain transition, and
//! persists through the repository's optimistic-concurrency updates.

use crate::assignment::{
    domain::{Assignment, AssignmentDomainError, AssignmentId, TaskExecution, TaskExecutionId},
    ports::{AssignmentRepository, AssignmentRepositoryError},
};
use crate::error::{CategorizedError, ErrorKind};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for the task workflow.
#[derive(Debug, Error)]
pub enum TaskWorkflowError {
    /// No task execution exists with the given identifier.
    #[error("task execution {0} not found")]
    ExecutionNotFound(TaskExecutionId),
    /// The execution's parent assignment is missing.
    #[error("assignment {0} not found")]
    AssignmentNotFound(AssignmentId),
    /// A domain rule rejected the transition.
    #[error(transparent)]
    Domain(#[from] AssignmentDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] AssignmentRepositoryError),
}

impl CategorizedError for TaskWorkflowError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::ExecutionNotFound(_) | Self::AssignmentNotFound(_) => ErrorKind::NotFound,
            Self::Domain(domain) => match domain {
                AssignmentDomainError::InvalidTransition { .. } => ErrorKind::InvalidTransition,
                AssignmentDomainError::InvalidAssignmentTransition { .. } => {
                    ErrorKind::InvalidState
                }
                _ => ErrorKind::Validation,
            },
            Self::Repository(repository) => match repository {
                AssignmentRepositoryError::AssignmentNotFound(_)
                | AssignmentRepositoryError::ExecutionNotFound(_) => ErrorKind::NotFound,
                _ => ErrorKind::Conflict,
            },
        }
    }
}

/// Result type for task workflow operations.
pub type TaskWorkflowResult<T> = Result<T, TaskWorkflowError>;

/// Outcome of approving a task execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApprovalOutcome {
    /// An intermediate task was approved and its successor unlocked.
    SuccessorUnlocked {
        /// The approved execution.
        completed: TaskExecution,
        /// The successor execution, now active.
        unlocked: TaskExecution,
    },
    /// The final task was approved and the assignment completed.
    AssignmentCompleted {
        /// The approved execution.
        completed: TaskExecution,
        /// The completed assignment.
        assignment: Assignment,
    },
}

/// Task workflow orchestration service.
#[derive(Clone)]
pub struct TaskWorkflowService<A, C>
where
    A: AssignmentRepository,
    C: Clock + Send + Sync,
{
    assignments: Arc<A>,
    clock: Arc<C>,
}

impl<A, C> TaskWorkflowService<A, C>
where
    A: AssignmentRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task workflow service.
    #[must_use]
    pub const fn new(assignments: Arc<A>, clock: Arc<C>) -> Self {
        Self { assignments, clock }
    }

    /// Submits evidence for an execution, moving it into review.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::ExecutionNotFound`] when the execution
    /// is absent and propagates domain rejections for empty URLs or
    /// statuses that do not accept evidence.
    pub async fn submit_evidence(
        &self,
        execution_id: TaskExecutionId,
        evidence_url: impl Into<String> + Send,
    ) -> TaskWorkflowResult<TaskExecution> {
        let mut execution = self.load_execution(execution_id).await?;
        execution.submit_evidence(evidence_url)?;
        let stored = self.assignments.update_execution(&execution).await?;
        Ok(stored)
    }

    /// Approves an execution in review and advances the assignment.
    ///
    /// When a successor task exists it is unlocked; both rows persist as
    /// one atomic unit. When the approved task is the last one, the
    /// parent assignment is completed instead, again atomically.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::ExecutionNotFound`] when the execution
    /// is absent, [`TaskWorkflowError::AssignmentNotFound`] when the final
    /// task's parent assignment is missing, and propagates domain
    /// rejections when the execution is not in review.
    pub async fn approve(
        &self,
        execution_id: TaskExecutionId,
    ) -> TaskWorkflowResult<ApprovalOutcome> {
        let mut execution = self.load_execution(execution_id).await?;
        execution.approve(&*self.clock)?;

        let successor = self
            .assignments
            .find_execution_by_order(execution.assignment_id(), execution.order().next())
            .await?;

        if let Some(mut successor) = successor {
            successor.activate();
            let (completed, unlocked) = self
                .assignments
                .update_execution_pair(&execution, &successor)
                .await?;
            return Ok(ApprovalOutcome::SuccessorUnlocked {
                completed,
                unlocked,
            });
        }

        let mut assignment = self
            .assignments
            .find_assignment(execution.assignment_id())
            .await?
            .ok_or_else(|| TaskWorkflowError::AssignmentNotFound(execution.assignment_id()))?;
        assignment.complete(&*self.clock)?;
        let (completed, assignment) = self
            .assignments
            .complete_with_assignment(&execution, &assignment)
            .await?;
        Ok(ApprovalOutcome::AssignmentCompleted {
            completed,
            assignment,
        })
    }

    /// Rejects an execution in review with a mandatory mentor comment.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::ExecutionNotFound`] when the execution
    /// is absent and propagates domain rejections for empty comments or
    /// executions not in review. A rejected comment leaves the execution
    /// untouched.
    pub async fn reject(
        &self,
        execution_id: TaskExecutionId,
        comment: impl Into<String> + Send,
    ) -> TaskWorkflowResult<TaskExecution> {
        let mut execution = self.load_execution(execution_id).await?;
        execution.reject(comment)?;
        let stored = self.assignments.update_execution(&execution).await?;
        Ok(stored)
    }

    async fn load_execution(
        &self,
        execution_id: TaskExecutionId,
    ) -> TaskWorkflowResult<TaskExecution> {
        self.assignments
            .find_execution(execution_id)
            .await?
            .ok_or(TaskWorkflowError::ExecutionNotFound(execution_id))
    }
}
