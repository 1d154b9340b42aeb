//! Service layer for assignment creation.
//!
//! The engine validates the source template, snapshots its task data
//! through the scheduler, and persists the assignment with every task
//! execution as one atomic unit. Scheduling is deterministic and fully
//! in-process; there are no retries, and a storage failure surfaces to
//! the caller with nothing persisted.

use crate::assignment::{
    domain::{schedule, Assignment, AssignmentDomainError, ScheduleEntry, TaskExecution},
    ports::{AssignmentRepository, AssignmentRepositoryError},
};
use crate::error::{CategorizedError, ErrorKind};
use crate::template::{
    domain::{TemplateId, TemplateStatus},
    ports::{TemplateRepository, TemplateRepositoryError},
};
use crate::user::domain::UserId;
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for assigning an intervention template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignInterventionRequest {
    template_id: TemplateId,
    assignee_id: UserId,
    mentor_id: Option<UserId>,
    start_date: NaiveDate,
}

impl AssignInterventionRequest {
    /// Creates a request with required assignment fields.
    #[must_use]
    pub const fn new(template_id: TemplateId, assignee_id: UserId, start_date: NaiveDate) -> Self {
        Self {
            template_id,
            assignee_id,
            mentor_id: None,
            start_date,
        }
    }

    /// Sets the reviewing mentor.
    #[must_use]
    pub const fn with_mentor(mut self, mentor_id: UserId) -> Self {
        self.mentor_id = Some(mentor_id);
        self
    }
}

/// A created assignment together with its task execution snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentWithExecutions {
    /// The created assignment.
    pub assignment: Assignment,
    /// Its executions in ascending task order.
    pub executions: Vec<TaskExecution>,
}

/// Service-level errors for assignment creation.
#[derive(Debug, Error)]
pub enum AssignmentEngineError {
    /// No template exists with the given identifier.
    #[error("template {0} not found")]
    TemplateNotFound(TemplateId),
    /// Only published templates may be assigned.
    #[error("template {template_id} is {status:?}; only published templates can be assigned")]
    TemplateNotPublished {
        /// Template that rejected the assignment.
        template_id: TemplateId,
        /// Lifecycle status at the time of the attempt.
        status: TemplateStatus,
    },
    /// The template has no tasks to schedule.
    #[error("template {0} has no tasks")]
    TemplateHasNoTasks(TemplateId),
    /// Scheduling failed.
    #[error(transparent)]
    Domain(#[from] AssignmentDomainError),
    /// Template repository operation failed.
    #[error(transparent)]
    TemplateRepository(#[from] TemplateRepositoryError),
    /// Assignment repository operation failed.
    #[error(transparent)]
    AssignmentRepository(#[from] AssignmentRepositoryError),
}

impl CategorizedError for AssignmentEngineError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::TemplateNotFound(_) => ErrorKind::NotFound,
            Self::TemplateNotPublished { .. } | Self::TemplateHasNoTasks(_) => {
                ErrorKind::InvalidState
            }
            Self::Domain(_) => ErrorKind::Validation,
            Self::TemplateRepository(TemplateRepositoryError::NotFound(_)) => ErrorKind::NotFound,
            Self::AssignmentRepository(AssignmentRepositoryError::AssignmentNotFound(_)) => {
                ErrorKind::NotFound
            }
            Self::TemplateRepository(_) | Self::AssignmentRepository(_) => ErrorKind::Conflict,
        }
    }
}

/// Result type for assignment engine operations.
pub type AssignmentEngineResult<T> = Result<T, AssignmentEngineError>;

/// Assignment creation orchestration service.
#[derive(Clone)]
pub struct AssignmentEngineService<T, A, C>
where
    T: TemplateRepository,
    A: AssignmentRepository,
    C: Clock + Send + Sync,
{
    templates: Arc<T>,
    assignments: Arc<A>,
    clock: Arc<C>,
}

impl<T, A, C> AssignmentEngineService<T, A, C>
where
    T: TemplateRepository,
    A: AssignmentRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new assignment engine service.
    #[must_use]
    pub const fn new(templates: Arc<T>, assignments: Arc<A>, clock: Arc<C>) -> Self {
        Self {
            templates,
            assignments,
            clock,
        }
    }

    /// Assigns a published template, snapshotting its tasks into a dated
    /// execution plan.
    ///
    /// The first execution starts active, the rest locked; the assignment
    /// and every execution are persisted as one atomic unit.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentEngineError::TemplateNotFound`] when the
    /// template is absent,
    /// [`AssignmentEngineError::TemplateNotPublished`] when it is not
    /// published, and [`AssignmentEngineError::TemplateHasNoTasks`] when
    /// it has no tasks to schedule.
    pub async fn assign(
        &self,
        request: AssignInterventionRequest,
    ) -> AssignmentEngineResult<AssignmentWithExecutions> {
        let template = self
            .templates
            .find_by_id(request.template_id)
            .await?
            .ok_or(AssignmentEngineError::TemplateNotFound(request.template_id))?;

        if template.status() != TemplateStatus::Published {
            return Err(AssignmentEngineError::TemplateNotPublished {
                template_id: template.id(),
                status: template.status(),
            });
        }
        if template.tasks().is_empty() {
            return Err(AssignmentEngineError::TemplateHasNoTasks(template.id()));
        }

        let entries: Vec<ScheduleEntry> = template
            .tasks()
            .iter()
            .map(|task| {
                ScheduleEntry::new(task.order(), task.title(), task.default_duration_days())
            })
            .collect();
        let plan = schedule(&entries, request.start_date)?;

        let assignment = Assignment::new(
            template.id(),
            request.assignee_id,
            request.mentor_id,
            request.start_date,
            plan.calculated_end_date(),
            &*self.clock,
        );
        let executions: Vec<TaskExecution> = plan
            .tasks()
            .iter()
            .map(|task| TaskExecution::from_scheduled(assignment.id(), task))
            .collect();

        self.assignments
            .store_with_executions(&assignment, &executions)
            .await?;

        Ok(AssignmentWithExecutions {
            assignment,
            executions,
        })
    }
}
