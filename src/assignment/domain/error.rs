//! Error types for assignment domain validation and transitions.

use super::assignment::AssignmentStatus;
use super::execution::ExecutionStatus;
use super::{AssignmentId, TaskExecutionId};
use thiserror::Error;

/// Errors returned while scheduling or transitioning assignment values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssignmentDomainError {
    /// Scheduling was attempted with no tasks.
    #[error("cannot schedule an empty task list")]
    EmptySchedule,

    /// Task orders are not contiguous starting at 1.
    #[error("task orders must be contiguous from 1: expected {expected}, found {found}")]
    NonContiguousOrder {
        /// Position the sequence required next.
        expected: u32,
        /// Position actually encountered.
        found: u32,
    },

    /// Date arithmetic left the representable calendar range.
    #[error("schedule dates exceed the supported calendar range")]
    ScheduleOutOfRange,

    /// A task execution transition was attempted from a disallowed state.
    #[error("execution {execution_id} cannot move from {from:?} to {to:?}")]
    InvalidTransition {
        /// Execution that rejected the transition.
        execution_id: TaskExecutionId,
        /// State at the time of the attempt.
        from: ExecutionStatus,
        /// Requested target state.
        to: ExecutionStatus,
    },

    /// A rejection was attempted without a mentor comment.
    #[error("rejection requires a non-empty mentor comment")]
    EmptyComment,

    /// Evidence was submitted without a URL.
    #[error("evidence submission requires a non-empty URL")]
    EmptyEvidenceUrl,

    /// An assignment transition was attempted from a disallowed state.
    #[error("assignment {assignment_id} cannot move from {from:?} to {to:?}")]
    InvalidAssignmentTransition {
        /// Assignment that rejected the transition.
        assignment_id: AssignmentId,
        /// Status at the time of the attempt.
        from: AssignmentStatus,
        /// Requested target status.
        to: AssignmentStatus,
    },
}

/// Error returned while parsing execution statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown execution status: {0}")]
pub struct ParseExecutionStatusError(pub String);

/// Error returned while parsing assignment statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown assignment status: {0}")]
pub struct ParseAssignmentStatusError(pub String);
