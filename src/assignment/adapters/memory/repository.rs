//! In-memory repository for assignment tests.
//!
//! All mutations for one call happen under a single write lock, so the
//! multi-row operations are atomic with respect to concurrent readers.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::assignment::{
    domain::{Assignment, AssignmentId, TaskExecution, TaskExecutionId},
    ports::{AssignmentRepository, AssignmentRepositoryError, AssignmentRepositoryResult},
};
use crate::template::domain::TaskOrder;

/// Thread-safe in-memory assignment repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssignmentRepository {
    state: Arc<RwLock<InMemoryAssignmentState>>,
}

#[derive(Debug, Default)]
struct InMemoryAssignmentState {
    assignments: HashMap<AssignmentId, Assignment>,
    executions: HashMap<TaskExecutionId, TaskExecution>,
    by_assignment: HashMap<AssignmentId, Vec<TaskExecutionId>>,
}

impl InMemoryAssignmentRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> AssignmentRepositoryError {
    AssignmentRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

/// Checks the caller's revision against the stored row and returns the
/// updated execution to store, with its revision advanced.
fn checked_update(
    state: &InMemoryAssignmentState,
    execution: &TaskExecution,
) -> AssignmentRepositoryResult<TaskExecution> {
    let stored = state
        .executions
        .get(&execution.id())
        .ok_or(AssignmentRepositoryError::ExecutionNotFound(execution.id()))?;
    if stored.revision() != execution.revision() {
        return Err(AssignmentRepositoryError::RevisionConflict(execution.id()));
    }
    let mut updated = execution.clone();
    updated.bump_revision();
    Ok(updated)
}

#[async_trait]
impl AssignmentRepository for InMemoryAssignmentRepository {
    async fn store_with_executions(
        &self,
        assignment: &Assignment,
        executions: &[TaskExecution],
    ) -> AssignmentRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state.assignments.contains_key(&assignment.id()) {
            return Err(AssignmentRepositoryError::DuplicateAssignment(
                assignment.id(),
            ));
        }

        let mut ids: Vec<TaskExecutionId> = Vec::with_capacity(executions.len());
        for execution in executions {
            ids.push(execution.id());
        }
        state.by_assignment.insert(assignment.id(), ids);
        for execution in executions {
            state.executions.insert(execution.id(), execution.clone());
        }
        state.assignments.insert(assignment.id(), assignment.clone());
        Ok(())
    }

    async fn find_assignment(
        &self,
        id: AssignmentId,
    ) -> AssignmentRepositoryResult<Option<Assignment>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.assignments.get(&id).cloned())
    }

    async fn find_execution(
        &self,
        id: TaskExecutionId,
    ) -> AssignmentRepositoryResult<Option<TaskExecution>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.executions.get(&id).cloned())
    }

    async fn find_execution_by_order(
        &self,
        assignment_id: AssignmentId,
        order: TaskOrder,
    ) -> AssignmentRepositoryResult<Option<TaskExecution>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let found = state
            .by_assignment
            .get(&assignment_id)
            .into_iter()
            .flatten()
            .filter_map(|id| state.executions.get(id))
            .find(|execution| execution.order() == order)
            .cloned();
        Ok(found)
    }

    async fn list_executions(
        &self,
        assignment_id: AssignmentId,
    ) -> AssignmentRepositoryResult<Vec<TaskExecution>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let mut executions: Vec<TaskExecution> = state
            .by_assignment
            .get(&assignment_id)
            .into_iter()
            .flatten()
            .filter_map(|id| state.executions.get(id))
            .cloned()
            .collect();
        executions.sort_by_key(TaskExecution::order);
        Ok(executions)
    }

    async fn update_execution(
        &self,
        execution: &TaskExecution,
    ) -> AssignmentRepositoryResult<TaskExecution> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let updated = checked_update(&state, execution)?;
        state.executions.insert(updated.id(), updated.clone());
        Ok(updated)
    }

    async fn update_execution_pair(
        &self,
        completed: &TaskExecution,
        successor: &TaskExecution,
    ) -> AssignmentRepositoryResult<(TaskExecution, TaskExecution)> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        // Validate both rows before touching either.
        let updated_completed = checked_update(&state, completed)?;
        let updated_successor = checked_update(&state, successor)?;
        state
            .executions
            .insert(updated_completed.id(), updated_completed.clone());
        state
            .executions
            .insert(updated_successor.id(), updated_successor.clone());
        Ok((updated_completed, updated_successor))
    }

    async fn complete_with_assignment(
        &self,
        execution: &TaskExecution,
        assignment: &Assignment,
    ) -> AssignmentRepositoryResult<(TaskExecution, Assignment)> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let updated = checked_update(&state, execution)?;
        if !state.assignments.contains_key(&assignment.id()) {
            return Err(AssignmentRepositoryError::AssignmentNotFound(
                assignment.id(),
            ));
        }
        state.executions.insert(updated.id(), updated.clone());
        state.assignments.insert(assignment.id(), assignment.clone());
        Ok((updated, assignment.clone()))
    }
}
