//! Domain-focused tests for the template aggregate and its values.

use crate::template::domain::{
    DurationDays, TaskOrder, Template, TemplateDomainError, TemplateStatus, TemplateVersion,
};
use crate::user::domain::UserId;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

fn draft_with_one_task(clock: &DefaultClock) -> Template {
    let mut template = Template::new_draft("Onboarding", None, UserId::new(), clock)
        .expect("valid draft");
    template
        .add_task(
            "Orientation",
            None,
            TaskOrder::FIRST,
            DurationDays::new(7).expect("valid duration"),
            clock,
        )
        .expect("task should be added");
    template
}

#[rstest]
#[case("v1.0", 1, 0)]
#[case("v2.13", 2, 13)]
#[case("v10.0", 10, 0)]
fn version_parses_storage_strings(#[case] input: &str, #[case] major: u32, #[case] minor: u32) {
    let version = TemplateVersion::parse(input).expect("valid version");
    assert_eq!(version.major(), major);
    assert_eq!(version.minor(), minor);
    assert_eq!(version.to_string(), input);
}

#[rstest]
#[case("")]
#[case("1.0")]
#[case("v1")]
#[case("v1.")]
#[case("vone.two")]
#[case("v1.0.1")]
fn version_rejects_malformed_strings(#[case] input: &str) {
    let result = TemplateVersion::parse(input);
    assert_eq!(
        result,
        Err(TemplateDomainError::InvalidVersion(input.to_owned()))
    );
}

#[rstest]
fn version_next_minor_keeps_major() {
    let version = TemplateVersion::initial();
    assert_eq!(version.next_minor(), TemplateVersion::new(1, 1));
    assert_eq!(TemplateVersion::new(3, 9).next_minor(), TemplateVersion::new(3, 10));
}

#[rstest]
fn task_order_rejects_zero() {
    assert_eq!(
        TaskOrder::new(0),
        Err(TemplateDomainError::InvalidTaskOrder(0))
    );
}

#[rstest]
fn duration_rejects_zero() {
    assert_eq!(
        DurationDays::new(0),
        Err(TemplateDomainError::InvalidDuration(0))
    );
}

#[rstest]
fn new_draft_starts_at_initial_version(clock: DefaultClock) {
    let template = Template::new_draft("  Onboarding  ", None, UserId::new(), &clock)
        .expect("valid draft");

    assert_eq!(template.title(), "Onboarding");
    assert_eq!(template.version(), TemplateVersion::initial());
    assert_eq!(template.status(), TemplateStatus::Draft);
    assert!(template.tasks().is_empty());
}

#[rstest]
fn new_draft_rejects_empty_title(clock: DefaultClock) {
    let result = Template::new_draft("   ", None, UserId::new(), &clock);
    assert_eq!(result, Err(TemplateDomainError::EmptyTitle));
}

#[rstest]
fn add_task_rejects_duplicate_order(clock: DefaultClock) {
    let mut template = draft_with_one_task(&clock);

    let result = template.add_task(
        "Shadowing",
        None,
        TaskOrder::FIRST,
        DurationDays::new(5).expect("valid duration"),
        &clock,
    );

    assert_eq!(
        result,
        Err(TemplateDomainError::DuplicateTaskOrder {
            template_id: template.id(),
            order: 1,
        })
    );
}

#[rstest]
fn tasks_stay_sorted_by_order(clock: DefaultClock) {
    let mut template = Template::new_draft("Onboarding", None, UserId::new(), &clock)
        .expect("valid draft");
    let third = TaskOrder::new(3).expect("valid order");
    let second = TaskOrder::new(2).expect("valid order");
    let duration = DurationDays::new(1).expect("valid duration");
    template
        .add_task("Wrap-up", None, third, duration, &clock)
        .expect("task should be added");
    template
        .add_task("Orientation", None, TaskOrder::FIRST, duration, &clock)
        .expect("task should be added");
    template
        .add_task("Shadowing", None, second, duration, &clock)
        .expect("task should be added");

    let orders: Vec<u32> = template
        .tasks()
        .iter()
        .map(|task| task.order().value())
        .collect();
    assert_eq!(orders, vec![1, 2, 3]);
}

#[rstest]
fn publish_rejects_empty_template(clock: DefaultClock) {
    let mut template = Template::new_draft("Onboarding", None, UserId::new(), &clock)
        .expect("valid draft");

    let result = template.publish(&clock);

    assert_eq!(result, Err(TemplateDomainError::NoTasks(template.id())));
    assert_eq!(template.status(), TemplateStatus::Draft);
}

#[rstest]
fn publish_freezes_structure(clock: DefaultClock) {
    let mut template = draft_with_one_task(&clock);
    template.publish(&clock).expect("publish should succeed");
    assert_eq!(template.status(), TemplateStatus::Published);

    let result = template.add_task(
        "Late addition",
        None,
        TaskOrder::new(2).expect("valid order"),
        DurationDays::new(1).expect("valid duration"),
        &clock,
    );

    assert_eq!(
        result,
        Err(TemplateDomainError::NotDraft {
            template_id: template.id(),
            status: TemplateStatus::Published,
        })
    );
}

#[rstest]
fn archive_requires_published(clock: DefaultClock) {
    let mut template = draft_with_one_task(&clock);

    let result = template.archive(&clock);

    assert_eq!(
        result,
        Err(TemplateDomainError::NotPublished {
            template_id: template.id(),
            status: TemplateStatus::Draft,
        })
    );

    template.publish(&clock).expect("publish should succeed");
    template.archive(&clock).expect("archive should succeed");
    assert_eq!(template.status(), TemplateStatus::Archived);
}

#[rstest]
fn sub_tasks_append_in_checklist_order(clock: DefaultClock) {
    let mut template = draft_with_one_task(&clock);
    let task_id = template.tasks()[0].id();

    template
        .add_sub_task(task_id, "Read the handbook", &clock)
        .expect("sub-task should be added");
    let second = template
        .add_sub_task(task_id, "Meet the team", &clock)
        .expect("sub-task should be added");

    let sub_tasks = template.tasks()[0].sub_tasks();
    assert_eq!(sub_tasks.len(), 2);
    assert_eq!(sub_tasks[0].order(), TaskOrder::FIRST);
    assert_eq!(sub_tasks[1].order(), TaskOrder::FIRST.next());

    template
        .remove_sub_task(second, &clock)
        .expect("sub-task should be removed");
    assert_eq!(template.tasks()[0].sub_tasks().len(), 1);
}

#[rstest]
fn clone_as_draft_deep_copies_with_fresh_identity(clock: DefaultClock) {
    let mut source = draft_with_one_task(&clock);
    let task_id = source.tasks()[0].id();
    source
        .add_sub_task(task_id, "Read the handbook", &clock)
        .expect("sub-task should be added");
    source.publish(&clock).expect("publish should succeed");
    let editor = UserId::new();

    let draft = source.clone_as_draft(editor, &clock);

    assert_ne!(draft.id(), source.id());
    assert_eq!(draft.status(), TemplateStatus::Draft);
    assert_eq!(draft.version(), TemplateVersion::new(1, 1));
    assert_eq!(draft.created_by(), editor);
    assert_eq!(draft.tasks().len(), 1);
    assert_ne!(draft.tasks()[0].id(), source.tasks()[0].id());
    assert_eq!(draft.tasks()[0].title(), source.tasks()[0].title());
    assert_ne!(
        draft.tasks()[0].sub_tasks()[0].id(),
        source.tasks()[0].sub_tasks()[0].id()
    );
    // The source keeps its published structure and version.
    assert_eq!(source.status(), TemplateStatus::Published);
    assert_eq!(source.version(), TemplateVersion::initial());
}
