//! Assignment aggregate root and lifecycle status.

use super::{AssignmentDomainError, AssignmentId, ParseAssignmentStatusError};
use crate::template::domain::TemplateId;
use crate::user::domain::UserId;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Assignment lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentStatus {
    /// Assignment is in progress.
    Active,
    /// Assignment is temporarily on hold.
    Paused,
    /// Every task execution has been approved; terminal.
    Completed,
    /// Assignment was called off; terminal.
    Cancelled,
}

impl AssignmentStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Paused => "PAUSED",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Returns `true` for terminal statuses.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl TryFrom<&str> for AssignmentStatus {
    type Error = ParseAssignmentStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "ACTIVE" => Ok(Self::Active),
            "PAUSED" => Ok(Self::Paused),
            "COMPLETED" => Ok(Self::Completed),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(ParseAssignmentStatusError(value.to_owned())),
        }
    }
}

/// Concrete, dated deployment of one template version to one assignee.
///
/// The assignment references its source template by id only; the task
/// data lives in snapshotted executions, so later template versions never
/// alter in-flight assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    id: AssignmentId,
    template_id: TemplateId,
    assigned_to: UserId,
    mentor: Option<UserId>,
    start_date: NaiveDate,
    calculated_end_date: NaiveDate,
    status: AssignmentStatus,
    completed_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedAssignmentData {
    /// Persisted assignment identifier.
    pub id: AssignmentId,
    /// Persisted source template reference.
    pub template_id: TemplateId,
    /// Persisted assignee.
    pub assigned_to: UserId,
    /// Persisted mentor, if any.
    pub mentor: Option<UserId>,
    /// Persisted start date.
    pub start_date: NaiveDate,
    /// Persisted derived end date.
    pub calculated_end_date: NaiveDate,
    /// Persisted lifecycle status.
    pub status: AssignmentStatus,
    /// Persisted completion timestamp, if any.
    pub completed_date: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Assignment {
    /// Creates a new active assignment.
    #[must_use]
    pub fn new(
        template_id: TemplateId,
        assigned_to: UserId,
        mentor: Option<UserId>,
        start_date: NaiveDate,
        calculated_end_date: NaiveDate,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: AssignmentId::new(),
            template_id,
            assigned_to,
            mentor,
            start_date,
            calculated_end_date,
            status: AssignmentStatus::Active,
            completed_date: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs an assignment from persisted storage.
    #[must_use]
    pub const fn from_persisted(data: PersistedAssignmentData) -> Self {
        Self {
            id: data.id,
            template_id: data.template_id,
            assigned_to: data.assigned_to,
            mentor: data.mentor,
            start_date: data.start_date,
            calculated_end_date: data.calculated_end_date,
            status: data.status,
            completed_date: data.completed_date,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the assignment identifier.
    #[must_use]
    pub const fn id(&self) -> AssignmentId {
        self.id
    }

    /// Returns the source template reference.
    #[must_use]
    pub const fn template_id(&self) -> TemplateId {
        self.template_id
    }

    /// Returns the assignee.
    #[must_use]
    pub const fn assigned_to(&self) -> UserId {
        self.assigned_to
    }

    /// Returns the mentor, if any.
    #[must_use]
    pub const fn mentor(&self) -> Option<UserId> {
        self.mentor
    }

    /// Returns the start date.
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the end date of the last scheduled task.
    #[must_use]
    pub const fn calculated_end_date(&self) -> NaiveDate {
        self.calculated_end_date
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> AssignmentStatus {
        self.status
    }

    /// Returns the completion timestamp, if any.
    #[must_use]
    pub const fn completed_date(&self) -> Option<DateTime<Utc>> {
        self.completed_date
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

    /// Completes the assignment, stamping its completion time.
    ///
    /// Called when the last task execution is approved.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::InvalidAssignmentTransition`] when
    /// the assignment is not active.
    pub fn complete(&mut self, clock: &impl Clock) -> Result<(), AssignmentDomainError> {
        self.require_status(AssignmentStatus::Active, AssignmentStatus::Completed)?;
        self.status = AssignmentStatus::Completed;
        self.completed_date = Some(clock.utc());
        self.touch(clock);
        Ok(())
    }

    /// Puts an active assignment on hold.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::InvalidAssignmentTransition`] when
    /// the assignment is not active.
    pub fn pause(&mut self, clock: &impl Clock) -> Result<(), AssignmentDomainError> {
        self.require_status(AssignmentStatus::Active, AssignmentStatus::Paused)?;
        self.status = AssignmentStatus::Paused;
        self.touch(clock);
        Ok(())
    }

    /// Resumes a paused assignment.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::InvalidAssignmentTransition`] when
    /// the assignment is not paused.
    pub fn resume(&mut self, clock: &impl Clock) -> Result<(), AssignmentDomainError> {
        self.require_status(AssignmentStatus::Paused, AssignmentStatus::Active)?;
        self.status = AssignmentStatus::Active;
        self.touch(clock);
        Ok(())
    }

    /// Cancels an active or paused assignment.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::InvalidAssignmentTransition`] when
    /// the assignment is already terminal.
    pub fn cancel(&mut self, clock: &impl Clock) -> Result<(), AssignmentDomainError> {
        if self.status.is_terminal() {
            return Err(AssignmentDomainError::InvalidAssignmentTransition {
                assignment_id: self.id,
                from: self.status,
                to: AssignmentStatus::Cancelled,
            });
        }
        self.status = AssignmentStatus::Cancelled;
        self.touch(clock);
        Ok(())
    }

    fn require_status(
        &self,
        required: AssignmentStatus,
        target: AssignmentStatus,
    ) -> Result<(), AssignmentDomainError> {
        if self.status != required {
            return Err(AssignmentDomainError::InvalidAssignmentTransition {
                assignment_id: self.id,
                from: self.status,
                to: target,
            });
        }
        Ok(())
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
