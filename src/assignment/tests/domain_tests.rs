//! Domain-focused tests for the task execution and assignment state
//! machines.

use crate::assignment::domain::{
    schedule, Assignment, AssignmentDomainError, AssignmentStatus, ExecutionStatus, ScheduleEntry,
    TaskExecution,
};
use crate::template::domain::{DurationDays, TaskOrder, TemplateId};
use crate::user::domain::UserId;
use chrono::NaiveDate;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Builds the executions of a two-task assignment: the first active, the
/// second locked.
fn two_executions() -> (TaskExecution, TaskExecution) {
    let entries = vec![
        ScheduleEntry::new(
            TaskOrder::FIRST,
            "Orientation",
            DurationDays::new(7).expect("valid duration"),
        ),
        ScheduleEntry::new(
            TaskOrder::FIRST.next(),
            "Shadowing",
            DurationDays::new(5).expect("valid duration"),
        ),
    ];
    let plan = schedule(&entries, date(2026, 2, 1)).expect("schedule should succeed");
    let assignment = Assignment::new(
        TemplateId::new(),
        UserId::new(),
        None,
        date(2026, 2, 1),
        plan.calculated_end_date(),
        &DefaultClock,
    );
    let mut executions = plan
        .tasks()
        .iter()
        .map(|task| TaskExecution::from_scheduled(assignment.id(), task));
    let first = executions.next().expect("first execution");
    let second = executions.next().expect("second execution");
    (first, second)
}

#[rstest]
#[case(ExecutionStatus::Locked, "LOCKED")]
#[case(ExecutionStatus::Active, "ACTIVE")]
#[case(ExecutionStatus::InReview, "IN_REVIEW")]
#[case(ExecutionStatus::Completed, "COMPLETED")]
#[case(ExecutionStatus::Rejected, "REJECTED")]
fn execution_status_round_trips_storage_strings(
    #[case] status: ExecutionStatus,
    #[case] wire: &str,
) {
    assert_eq!(status.as_str(), wire);
    assert_eq!(ExecutionStatus::try_from(wire), Ok(status));
}

#[rstest]
#[case(AssignmentStatus::Active, "ACTIVE")]
#[case(AssignmentStatus::Paused, "PAUSED")]
#[case(AssignmentStatus::Completed, "COMPLETED")]
#[case(AssignmentStatus::Cancelled, "CANCELLED")]
fn assignment_status_round_trips_storage_strings(
    #[case] status: AssignmentStatus,
    #[case] wire: &str,
) {
    assert_eq!(status.as_str(), wire);
    assert_eq!(AssignmentStatus::try_from(wire), Ok(status));
}

#[rstest]
fn submit_evidence_moves_active_task_into_review() {
    let (mut first, _) = two_executions();

    first
        .submit_evidence("https://evidence.example.com/report")
        .expect("submission should succeed");

    assert_eq!(first.status(), ExecutionStatus::InReview);
    assert_eq!(
        first.evidence_url(),
        Some("https://evidence.example.com/report")
    );
}

#[rstest]
fn locked_task_rejects_evidence() {
    let (_, mut second) = two_executions();

    let result = second.submit_evidence("https://evidence.example.com/report");

    assert_eq!(
        result,
        Err(AssignmentDomainError::InvalidTransition {
            execution_id: second.id(),
            from: ExecutionStatus::Locked,
            to: ExecutionStatus::InReview,
        })
    );
    assert_eq!(second.status(), ExecutionStatus::Locked);
}

#[rstest]
fn empty_evidence_url_is_rejected_before_any_transition() {
    let (mut first, _) = two_executions();

    let result = first.submit_evidence("   ");

    assert_eq!(result, Err(AssignmentDomainError::EmptyEvidenceUrl));
    assert_eq!(first.status(), ExecutionStatus::Active);
    assert_eq!(first.evidence_url(), None);
}

#[rstest]
fn approve_requires_review_and_stamps_completion(clock: DefaultClock) {
    let (mut first, _) = two_executions();

    let premature = first.approve(&clock);
    assert_eq!(
        premature,
        Err(AssignmentDomainError::InvalidTransition {
            execution_id: first.id(),
            from: ExecutionStatus::Active,
            to: ExecutionStatus::Completed,
        })
    );

    first
        .submit_evidence("https://evidence.example.com/report")
        .expect("submission should succeed");
    first.approve(&clock).expect("approval should succeed");

    assert_eq!(first.status(), ExecutionStatus::Completed);
    assert!(first.completed_at().is_some());
}

#[rstest]
fn completed_task_rejects_resubmission(clock: DefaultClock) {
    let (mut first, _) = two_executions();
    first
        .submit_evidence("https://evidence.example.com/report")
        .expect("submission should succeed");
    first.approve(&clock).expect("approval should succeed");

    let result = first.submit_evidence("https://evidence.example.com/second");

    assert_eq!(
        result,
        Err(AssignmentDomainError::InvalidTransition {
            execution_id: first.id(),
            from: ExecutionStatus::Completed,
            to: ExecutionStatus::InReview,
        })
    );
}

#[rstest]
fn reject_requires_comment_and_leaves_state_on_failure() {
    let (mut first, _) = two_executions();
    first
        .submit_evidence("https://evidence.example.com/report")
        .expect("submission should succeed");

    let missing_comment = first.reject("  ");
    assert_eq!(missing_comment, Err(AssignmentDomainError::EmptyComment));
    assert_eq!(first.status(), ExecutionStatus::InReview);
    assert_eq!(first.mentor_comment(), None);

    first
        .reject("Evidence does not cover the checklist")
        .expect("rejection should succeed");
    assert_eq!(first.status(), ExecutionStatus::Rejected);
    assert_eq!(
        first.mentor_comment(),
        Some("Evidence does not cover the checklist")
    );
}

#[rstest]
fn rejected_task_accepts_resubmission() {
    let (mut first, _) = two_executions();
    first
        .submit_evidence("https://evidence.example.com/report")
        .expect("submission should succeed");
    first
        .reject("Evidence does not cover the checklist")
        .expect("rejection should succeed");

    first
        .submit_evidence("https://evidence.example.com/revised")
        .expect("resubmission should succeed");

    assert_eq!(first.status(), ExecutionStatus::InReview);
    assert_eq!(
        first.evidence_url(),
        Some("https://evidence.example.com/revised")
    );
}

#[rstest]
fn activate_unlocks_a_locked_successor() {
    let (_, mut second) = two_executions();

    second.activate();

    assert_eq!(second.status(), ExecutionStatus::Active);
}

#[rstest]
fn assignment_pause_resume_cycle(clock: DefaultClock) {
    let mut assignment = Assignment::new(
        TemplateId::new(),
        UserId::new(),
        Some(UserId::new()),
        date(2026, 2, 1),
        date(2026, 2, 12),
        &clock,
    );
    assert_eq!(assignment.status(), AssignmentStatus::Active);

    assignment.pause(&clock).expect("pause should succeed");
    assert_eq!(assignment.status(), AssignmentStatus::Paused);

    let double_pause = assignment.pause(&clock);
    assert_eq!(
        double_pause,
        Err(AssignmentDomainError::InvalidAssignmentTransition {
            assignment_id: assignment.id(),
            from: AssignmentStatus::Paused,
            to: AssignmentStatus::Paused,
        })
    );

    assignment.resume(&clock).expect("resume should succeed");
    assert_eq!(assignment.status(), AssignmentStatus::Active);
}

#[rstest]
fn terminal_assignment_rejects_further_transitions(clock: DefaultClock) {
    let mut assignment = Assignment::new(
        TemplateId::new(),
        UserId::new(),
        None,
        date(2026, 2, 1),
        date(2026, 2, 12),
        &clock,
    );
    assignment.complete(&clock).expect("completion should succeed");
    assert_eq!(assignment.status(), AssignmentStatus::Completed);
    assert!(assignment.completed_date().is_some());

    let cancel_after_completion = assignment.cancel(&clock);
    assert_eq!(
        cancel_after_completion,
        Err(AssignmentDomainError::InvalidAssignmentTransition {
            assignment_id: assignment.id(),
            from: AssignmentStatus::Completed,
            to: AssignmentStatus::Cancelled,
        })
    );
}
