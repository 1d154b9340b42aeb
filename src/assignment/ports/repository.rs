//! Repository port for assignment and task execution persistence.
//!
//! Updates to task executions use optimistic concurrency: each update
//! carries the revision the caller read, and implementations reject
//! stale revisions so racing reviewers cannot double-apply a cascade.
//! The multi-row operations are atomic; a concurrent reader never
//! observes a torn approve/unlock state.

use crate::assignment::domain::{Assignment, AssignmentId, TaskExecution, TaskExecutionId};
use crate::template::domain::TaskOrder;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for assignment repository operations.
pub type AssignmentRepositoryResult<T> = Result<T, AssignmentRepositoryError>;

/// Assignment persistence contract.
#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// Stores a new assignment together with all of its task executions
    /// as a single atomic unit.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentRepositoryError::DuplicateAssignment`] when the
    /// assignment ID already exists. On any failure nothing is persisted.
    async fn store_with_executions(
        &self,
        assignment: &Assignment,
        executions: &[TaskExecution],
    ) -> AssignmentRepositoryResult<()>;

    /// Finds an assignment by identifier.
    ///
    /// Returns `None` when the assignment does not exist.
    async fn find_assignment(
        &self,
        id: AssignmentId,
    ) -> AssignmentRepositoryResult<Option<Assignment>>;

    /// Finds a task execution by identifier.
    ///
    /// Returns `None` when the execution does not exist.
    async fn find_execution(
        &self,
        id: TaskExecutionId,
    ) -> AssignmentRepositoryResult<Option<TaskExecution>>;

    /// Finds the execution holding `order` within an assignment.
    ///
    /// Returns `None` when no execution holds the position.
    async fn find_execution_by_order(
        &self,
        assignment_id: AssignmentId,
        order: TaskOrder,
    ) -> AssignmentRepositoryResult<Option<TaskExecution>>;

    /// Returns an assignment's executions in ascending task order.
    async fn list_executions(
        &self,
        assignment_id: AssignmentId,
    ) -> AssignmentRepositoryResult<Vec<TaskExecution>>;

    /// Persists changes to a single task execution.
    ///
    /// Returns the stored execution with its revision advanced.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentRepositoryError::ExecutionNotFound`] when the
    /// execution does not exist and
    /// [`AssignmentRepositoryError::RevisionConflict`] when the caller's
    /// revision is stale.
    async fn update_execution(
        &self,
        execution: &TaskExecution,
    ) -> AssignmentRepositoryResult<TaskExecution>;

    /// Persists a completed execution and its activated successor as a
    /// single atomic unit.
    ///
    /// Returns both stored executions with revisions advanced.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentRepositoryError::ExecutionNotFound`] when
    /// either execution does not exist and
    /// [`AssignmentRepositoryError::RevisionConflict`] when either
    /// revision is stale. On any failure neither row changes.
    async fn update_execution_pair(
        &self,
        completed: &TaskExecution,
        successor: &TaskExecution,
    ) -> AssignmentRepositoryResult<(TaskExecution, TaskExecution)>;

    /// Persists a completed final execution and its completed parent
    /// assignment as a single atomic unit.
    ///
    /// Returns the stored execution with its revision advanced plus the
    /// stored assignment.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentRepositoryError::ExecutionNotFound`] or
    /// [`AssignmentRepositoryError::AssignmentNotFound`] when a row is
    /// missing and [`AssignmentRepositoryError::RevisionConflict`] when
    /// the execution revision is stale. On any failure neither row
    /// changes.
    async fn complete_with_assignment(
        &self,
        execution: &TaskExecution,
        assignment: &Assignment,
    ) -> AssignmentRepositoryResult<(TaskExecution, Assignment)>;
}

/// Errors returned by assignment repository implementations.
#[derive(Debug, Clone, Error)]
pub enum AssignmentRepositoryError {
    /// An assignment with the same identifier already exists.
    #[error("duplicate assignment identifier: {0}")]
    DuplicateAssignment(AssignmentId),

    /// The assignment was not found.
    #[error("assignment not found: {0}")]
    AssignmentNotFound(AssignmentId),

    /// The task execution was not found.
    #[error("task execution not found: {0}")]
    ExecutionNotFound(TaskExecutionId),

    /// The caller's revision of the execution is stale.
    #[error("stale revision for task execution {0}")]
    RevisionConflict(TaskExecutionId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AssignmentRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
