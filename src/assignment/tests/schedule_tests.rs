//! Tests for the pure date scheduler.

use crate::assignment::domain::{schedule, AssignmentDomainError, ExecutionStatus, ScheduleEntry};
use crate::template::domain::{DurationDays, TaskOrder};
use chrono::NaiveDate;
use rstest::rstest;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

fn entry(order: u32, duration_days: u32) -> ScheduleEntry {
    ScheduleEntry::new(
        TaskOrder::new(order).expect("valid order"),
        format!("Task {order}"),
        DurationDays::new(duration_days).expect("valid duration"),
    )
}

#[rstest]
fn chains_inclusive_windows_back_to_back() {
    let entries = vec![entry(1, 7), entry(2, 5)];

    let plan = schedule(&entries, date(2026, 2, 1)).expect("schedule should succeed");

    let tasks = plan.tasks();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].start_date(), date(2026, 2, 1));
    assert_eq!(tasks[0].end_date(), date(2026, 2, 7));
    assert_eq!(tasks[1].start_date(), date(2026, 2, 8));
    assert_eq!(tasks[1].end_date(), date(2026, 2, 12));
    assert_eq!(plan.calculated_end_date(), date(2026, 2, 12));
}

#[rstest]
fn single_day_task_starts_and_ends_same_day() {
    let entries = vec![entry(1, 1)];

    let plan = schedule(&entries, date(2026, 3, 15)).expect("schedule should succeed");

    let task = &plan.tasks()[0];
    assert_eq!(task.start_date(), date(2026, 3, 15));
    assert_eq!(task.end_date(), date(2026, 3, 15));
    assert_eq!(plan.calculated_end_date(), date(2026, 3, 15));
}

#[rstest]
fn only_first_task_starts_active() {
    let entries = vec![entry(1, 2), entry(2, 3), entry(3, 1)];

    let plan = schedule(&entries, date(2026, 2, 1)).expect("schedule should succeed");

    let statuses: Vec<ExecutionStatus> = plan
        .tasks()
        .iter()
        .map(|task| task.initial_status())
        .collect();
    assert_eq!(
        statuses,
        vec![
            ExecutionStatus::Active,
            ExecutionStatus::Locked,
            ExecutionStatus::Locked,
        ]
    );
}

#[rstest]
fn unsorted_input_is_scheduled_in_order() {
    let entries = vec![entry(3, 1), entry(1, 2), entry(2, 3)];

    let plan = schedule(&entries, date(2026, 2, 1)).expect("schedule should succeed");

    let orders: Vec<u32> = plan
        .tasks()
        .iter()
        .map(|task| task.order().value())
        .collect();
    assert_eq!(orders, vec![1, 2, 3]);
    assert_eq!(plan.tasks()[0].start_date(), date(2026, 2, 1));
}

#[rstest]
fn empty_task_list_is_rejected() {
    let result = schedule(&[], date(2026, 2, 1));
    assert_eq!(result, Err(AssignmentDomainError::EmptySchedule));
}

#[rstest]
#[case(vec![(1, 1), (3, 1)], 2, 3)]
#[case(vec![(2, 1), (3, 1)], 1, 2)]
#[case(vec![(1, 1), (1, 1)], 2, 1)]
fn gaps_and_duplicates_are_rejected(
    #[case] pairs: Vec<(u32, u32)>,
    #[case] expected: u32,
    #[case] found: u32,
) {
    let entries: Vec<ScheduleEntry> = pairs
        .into_iter()
        .map(|(order, duration)| entry(order, duration))
        .collect();

    let result = schedule(&entries, date(2026, 2, 1));

    assert_eq!(
        result,
        Err(AssignmentDomainError::NonContiguousOrder { expected, found })
    );
}

#[rstest]
fn dates_past_calendar_range_are_rejected() {
    let entries = vec![entry(1, u32::MAX)];

    let result = schedule(&entries, NaiveDate::MAX);

    assert_eq!(result, Err(AssignmentDomainError::ScheduleOutOfRange));
}
