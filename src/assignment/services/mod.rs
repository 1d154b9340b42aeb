//! Application services for assignment creation and task workflow.

mod engine;
mod workflow;

pub use engine::{
    AssignInterventionRequest, AssignmentEngineError, AssignmentEngineResult,
    AssignmentEngineService, AssignmentWithExecutions,
};
pub use workflow::{
    ApprovalOutcome, TaskWorkflowError, TaskWorkflowResult, TaskWorkflowService,
};
