//! Pure scheduling of template tasks onto calendar dates.
//!
//! [`schedule`] converts an ordered task list and a start date into a
//! dated execution plan: durations are inclusive of both endpoints, each
//! task starts the day after its predecessor ends, and only the first
//! task begins active. The function is deterministic and free of side
//! effects.

use super::{AssignmentDomainError, ExecutionStatus};
use crate::template::domain::{DurationDays, TaskOrder};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Scheduling input snapshotted from one template task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    order: TaskOrder,
    title: String,
    duration_days: DurationDays,
}

impl ScheduleEntry {
    /// Creates a scheduling entry.
    #[must_use]
    pub fn new(order: TaskOrder, title: impl Into<String>, duration_days: DurationDays) -> Self {
        Self {
            order,
            title: title.into(),
            duration_days,
        }
    }

    /// Returns the 1-based sequence position.
    #[must_use]
    pub const fn order(&self) -> TaskOrder {
        self.order
    }

    /// Returns the snapshotted task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the inclusive duration.
    #[must_use]
    pub const fn duration_days(&self) -> DurationDays {
        self.duration_days
    }
}

/// One dated task produced by the scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    order: TaskOrder,
    title: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    initial_status: ExecutionStatus,
}

impl ScheduledTask {
    /// Returns the 1-based sequence position.
    #[must_use]
    pub const fn order(&self) -> TaskOrder {
        self.order
    }

    /// Returns the snapshotted task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
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

    /// Returns the status the execution starts in.
    #[must_use]
    pub const fn initial_status(&self) -> ExecutionStatus {
        self.initial_status
    }
}

/// Complete, dated execution plan for one assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    tasks: Vec<ScheduledTask>,
    calculated_end_date: NaiveDate,
}

impl Schedule {
    /// Returns the dated tasks in ascending order.
    #[must_use]
    pub fn tasks(&self) -> &[ScheduledTask] {
        &self.tasks
    }

    /// Returns the end date of the last task in the sequence.
    #[must_use]
    pub const fn calculated_end_date(&self) -> NaiveDate {
        self.calculated_end_date
    }
}

/// Produces a dated execution plan from ordered task entries.
///
/// For each task, `end = start + (duration - 1)` days and the successor
/// starts the following day; the first task starts on `start_date`. The
/// first task's initial status is [`ExecutionStatus::Active`], every
/// other task starts [`ExecutionStatus::Locked`].
///
/// # Errors
///
/// Returns [`AssignmentDomainError::EmptySchedule`] when `entries` is
/// empty, [`AssignmentDomainError::NonContiguousOrder`] when orders are
/// not exactly `1..=n` (duplicates included), and
/// [`AssignmentDomainError::ScheduleOutOfRange`] when date arithmetic
/// leaves the representable calendar range.
pub fn schedule(
    entries: &[ScheduleEntry],
    start_date: NaiveDate,
) -> Result<Schedule, AssignmentDomainError> {
    if entries.is_empty() {
        return Err(AssignmentDomainError::EmptySchedule);
    }

    let mut ordered: Vec<&ScheduleEntry> = entries.iter().collect();
    ordered.sort_by_key(|entry| entry.order());

    let mut expected = TaskOrder::FIRST;
    for entry in &ordered {
        if entry.order() != expected {
            return Err(AssignmentDomainError::NonContiguousOrder {
                expected: expected.value(),
                found: entry.order().value(),
            });
        }
        expected = expected.next();
    }

    let mut tasks = Vec::with_capacity(ordered.len());
    let mut current_start = start_date;
    let mut last_end = start_date;
    for entry in ordered {
        let tail_days = u64::from(entry.duration_days().value().saturating_sub(1));
        let end_date = current_start
            .checked_add_days(Days::new(tail_days))
            .ok_or(AssignmentDomainError::ScheduleOutOfRange)?;
        let initial_status = if entry.order().is_first() {
            ExecutionStatus::Active
        } else {
            ExecutionStatus::Locked
        };

        tasks.push(ScheduledTask {
            order: entry.order(),
            title: entry.title().to_owned(),
            start_date: current_start,
            end_date,
            initial_status,
        });

        last_end = end_date;
        current_start = end_date
            .checked_add_days(Days::new(1))
            .ok_or(AssignmentDomainError::ScheduleOutOfRange)?;
    }

    Ok(Schedule {
        tasks,
        calculated_end_date: last_end,
    })
}
