//! Domain model for assignments and task executions.
//!
//! The assignment domain models snapshot scheduling and the per-task
//! execution state machine while keeping all infrastructure concerns
//! outside of the domain boundary.

mod assignment;
mod error;
mod execution;
mod ids;
mod schedule;

pub use assignment::{Assignment, AssignmentStatus, PersistedAssignmentData};
pub use error::{
    AssignmentDomainError, ParseAssignmentStatusError, ParseExecutionStatusError,
};
pub use execution::{ExecutionStatus, PersistedTaskExecutionData, TaskExecution};
pub use ids::{AssignmentId, TaskExecutionId};
pub use schedule::{schedule, Schedule, ScheduleEntry, ScheduledTask};
