//! Task execution state machine.

use super::{
    AssignmentDomainError, AssignmentId, ParseExecutionStatusError, ScheduledTask, TaskExecutionId,
};
use crate::template::domain::TaskOrder;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task execution lifecycle status.
///
/// ```text
/// LOCKED ----(predecessor approved)----> ACTIVE
/// ACTIVE ----submit_evidence----> IN_REVIEW
/// IN_REVIEW ----approve----> COMPLETED
/// IN_REVIEW ----reject----> REJECTED
/// REJECTED ----submit_evidence----> IN_REVIEW
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionStatus {
    /// Waiting for the predecessor task to be approved.
    Locked,
    /// Ready for the assignee to work and submit evidence.
    Active,
    /// Evidence submitted, awaiting mentor review.
    InReview,
    /// Approved; terminal.
    Completed,
    /// Sent back by the mentor; may be resubmitted.
    Rejected,
}

impl ExecutionStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Locked => "LOCKED",
            Self::Active => "ACTIVE",
            Self::InReview => "IN_REVIEW",
            Self::Completed => "COMPLETED",
            Self::Rejected => "REJECTED",
        }
    }

    /// Returns `true` when evidence may be submitted from this status.
    #[must_use]
    pub const fn accepts_evidence(self) -> bool {
        matches!(self, Self::Active | Self::Rejected)
    }

    /// Returns `true` for the terminal status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl TryFrom<&str> for ExecutionStatus {
    type Error = ParseExecutionStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "LOCKED" => Ok(Self::Locked),
            "ACTIVE" => Ok(Self::Active),
            "IN_REVIEW" => Ok(Self::InReview),
            "COMPLETED" => Ok(Self::Completed),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(ParseExecutionStatusError(value.to_owned())),
        }
    }
}

/// Live, stateful instance of one template task within an assignment.
///
/// Field values are snapshots taken at scheduling time; later template
/// edits never reach an existing execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskExecution {
    id: TaskExecutionId,
    assignment_id: AssignmentId,
    title: String,
    order: TaskOrder,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: ExecutionStatus,
    evidence_url: Option<String>,
    mentor_comment: Option<String>,
    completed_at: Option<DateTime<Utc>>,
    revision: u64,
}

/// Parameter object for reconstructing a persisted task execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskExecutionData {
    /// Persisted execution identifier.
    pub id: TaskExecutionId,
    /// Persisted owning assignment.
    pub assignment_id: AssignmentId,
    /// Persisted snapshotted title.
    pub title: String,
    /// Persisted 1-based sequence position.
    pub order: TaskOrder,
    /// Persisted window start.
    pub start_date: NaiveDate,
    /// Persisted window end (inclusive).
    pub end_date: NaiveDate,
    /// Persisted lifecycle status.
    pub status: ExecutionStatus,
    /// Persisted evidence URL, if any.
    pub evidence_url: Option<String>,
    /// Persisted mentor comment, if any.
    pub mentor_comment: Option<String>,
    /// Persisted completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
    /// Persisted optimistic-concurrency revision.
    pub revision: u64,
}

impl TaskExecution {
    /// Creates an execution from one scheduled task.
    #[must_use]
    pub fn from_scheduled(assignment_id: AssignmentId, task: &ScheduledTask) -> Self {
        Self {
            id: TaskExecutionId::new(),
            assignment_id,
            title: task.title().to_owned(),
            order: task.order(),
            start_date: task.start_date(),
            end_date: task.end_date(),
            status: task.initial_status(),
            evidence_url: None,
            mentor_comment: None,
            completed_at: None,
            revision: 0,
        }
    }

    /// Reconstructs an execution from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskExecutionData) -> Self {
        Self {
            id: data.id,
            assignment_id: data.assignment_id,
            title: data.title,
            order: data.order,
            start_date: data.start_date,
            end_date: data.end_date,
            status: data.status,
            evidence_url: data.evidence_url,
            mentor_comment: data.mentor_comment,
            completed_at: data.completed_at,
            revision: data.revision,
        }
    }

    /// Returns the execution identifier.
    #[must_use]
    pub const fn id(&self) -> TaskExecutionId {
        self.id
    }

    /// Returns the owning assignment.
    #[must_use]
    pub const fn assignment_id(&self) -> AssignmentId {
        self.assignment_id
    }

    /// Returns the snapshotted task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the 1-based sequence position.
    #[must_use]
    pub const fn order(&self) -> TaskOrder {
        self.order
    }

    /// Returns the first day of the task window.
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the last day of the task window (inclusive).
    #[must_use]
    pub const fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> ExecutionStatus {
        self.status
    }

    /// Returns the submitted evidence URL, if any.
    #[must_use]
    pub fn evidence_url(&self) -> Option<&str> {
        self.evidence_url.as_deref()
    }

    /// Returns the mentor's rejection comment, if any.
    #[must_use]
    pub fn mentor_comment(&self) -> Option<&str> {
        self.mentor_comment.as_deref()
    }

    /// Returns the completion timestamp, if any.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the optimistic-concurrency revision.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Submits evidence, moving the execution into review.
    ///
    /// Allowed from [`ExecutionStatus::Active`] and
    /// [`ExecutionStatus::Rejected`]; resubmission while already in
    /// review is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::EmptyEvidenceUrl`] when the URL is
    /// empty after trimming and
    /// [`AssignmentDomainError::InvalidTransition`] when the current
    /// status does not accept evidence.
    pub fn submit_evidence(
        &mut self,
        evidence_url: impl Into<String>,
    ) -> Result<(), AssignmentDomainError> {
        let url = evidence_url.into();
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(AssignmentDomainError::EmptyEvidenceUrl);
        }
        if !self.status.accepts_evidence() {
            return Err(self.invalid_transition(ExecutionStatus::InReview));
        }
        self.evidence_url = Some(trimmed.to_owned());
        self.status = ExecutionStatus::InReview;
        Ok(())
    }

    /// Approves the execution, stamping its completion time.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::InvalidTransition`] when the
    /// execution is not in review.
    pub fn approve(&mut self, clock: &impl Clock) -> Result<(), AssignmentDomainError> {
        if self.status != ExecutionStatus::InReview {
            return Err(self.invalid_transition(ExecutionStatus::Completed));
        }
        self.status = ExecutionStatus::Completed;
        self.completed_at = Some(clock.utc());
        Ok(())
    }

    /// Rejects the execution with a mandatory mentor comment.
    ///
    /// The comment is validated before the transition guard, so a missing
    /// comment never mutates state.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::EmptyComment`] when the comment is
    /// empty after trimming and
    /// [`AssignmentDomainError::InvalidTransition`] when the execution is
    /// not in review.
    pub fn reject(&mut self, comment: impl Into<String>) -> Result<(), AssignmentDomainError> {
        let comment = comment.into();
        let trimmed = comment.trim();
        if trimmed.is_empty() {
            return Err(AssignmentDomainError::EmptyComment);
        }
        if self.status != ExecutionStatus::InReview {
            return Err(self.invalid_transition(ExecutionStatus::Rejected));
        }
        self.status = ExecutionStatus::Rejected;
        self.mentor_comment = Some(trimmed.to_owned());
        Ok(())
    }

    /// Activates the execution.
    ///
    /// Only the approve cascade of the predecessor task calls this; the
    /// successor is expected to be locked, and the status is set
    /// unconditionally.
    pub fn activate(&mut self) {
        self.status = ExecutionStatus::Active;
    }

    /// Increments the revision after a successful store.
    pub(crate) const fn bump_revision(&mut self) {
        self.revision = self.revision.saturating_add(1);
    }

    const fn invalid_transition(&self, to: ExecutionStatus) -> AssignmentDomainError {
        AssignmentDomainError::InvalidTransition {
            execution_id: self.id,
            from: self.status,
            to,
        }
    }
}
