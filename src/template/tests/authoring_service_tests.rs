//! Service orchestration tests for template authoring.

use std::sync::Arc;

use crate::error::{CategorizedError, ErrorKind};
use crate::template::{
    adapters::memory::InMemoryTemplateRepository,
    domain::{Template, TemplateDomainError, TemplateId, TemplateStatus},
    services::{
        AddTaskRequest, CreateTemplateRequest, TemplateAuthoringError, TemplateAuthoringService,
    },
};
use crate::user::domain::UserId;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = TemplateAuthoringService<InMemoryTemplateRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    TemplateAuthoringService::new(
        Arc::new(InMemoryTemplateRepository::new()),
        Arc::new(DefaultClock),
    )
}

async fn create_draft(service: &TestService) -> Template {
    let request = CreateTemplateRequest::new("Onboarding", UserId::new())
        .with_description("Twelve-week onboarding programme");
    service
        .create_template(request)
        .await
        .expect("template creation should succeed")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_template_persists_draft(service: TestService) {
    let created = create_draft(&service).await;

    let fetched = service
        .find_by_id(created.id())
        .await
        .expect("lookup should succeed");

    assert_eq!(fetched, Some(created));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn add_task_validates_order_and_duration(service: TestService) {
    let template = create_draft(&service).await;

    let zero_order = service
        .add_task(template.id(), AddTaskRequest::new("Orientation", 0, 7))
        .await;
    match zero_order {
        Err(ref err @ TemplateAuthoringError::Domain(_)) => {
            assert_eq!(err.kind(), ErrorKind::Validation);
        }
        other => panic!("expected order validation failure, got {other:?}"),
    }

    let zero_duration = service
        .add_task(template.id(), AddTaskRequest::new("Orientation", 1, 0))
        .await;
    match zero_duration {
        Err(ref err @ TemplateAuthoringError::Domain(_)) => {
            assert_eq!(err.kind(), ErrorKind::Validation);
        }
        other => panic!("expected duration validation failure, got {other:?}"),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn add_task_rejects_taken_position(service: TestService) {
    let template = create_draft(&service).await;
    service
        .add_task(template.id(), AddTaskRequest::new("Orientation", 1, 7))
        .await
        .expect("first task should be added");

    let result = service
        .add_task(template.id(), AddTaskRequest::new("Shadowing", 1, 5))
        .await;

    match result {
        Err(
            ref err @ TemplateAuthoringError::Domain(TemplateDomainError::DuplicateTaskOrder {
                ..
            }),
        ) => {
            assert_eq!(err.kind(), ErrorKind::Conflict);
        }
        other => panic!("expected duplicate order conflict, got {other:?}"),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn publish_then_edit_is_rejected(service: TestService) {
    let template = create_draft(&service).await;
    service
        .add_task(template.id(), AddTaskRequest::new("Orientation", 1, 7))
        .await
        .expect("task should be added");

    let published = service
        .publish_template(template.id())
        .await
        .expect("publish should succeed");
    assert_eq!(published.status(), TemplateStatus::Published);

    let result = service
        .update_design(template.id(), Some("Renamed".to_owned()), None)
        .await;

    match result {
        Err(ref err @ TemplateAuthoringError::Domain(TemplateDomainError::NotDraft { .. })) => {
            assert_eq!(err.kind(), ErrorKind::InvalidState);
        }
        other => panic!("expected draft gating failure, got {other:?}"),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn publish_rejects_template_without_tasks(service: TestService) {
    let template = create_draft(&service).await;

    let result = service.publish_template(template.id()).await;

    match result {
        Err(ref err @ TemplateAuthoringError::Domain(TemplateDomainError::NoTasks(_))) => {
            assert_eq!(err.kind(), ErrorKind::InvalidState);
        }
        other => panic!("expected empty template rejection, got {other:?}"),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sub_task_round_trip_through_service(service: TestService) {
    let template = create_draft(&service).await;
    let with_task = service
        .add_task(template.id(), AddTaskRequest::new("Orientation", 1, 7))
        .await
        .expect("task should be added");
    let task_id = with_task.tasks()[0].id();

    let with_sub_task = service
        .add_sub_task(template.id(), task_id, "Read the handbook")
        .await
        .expect("sub-task should be added");
    let sub_task_id = with_sub_task.tasks()[0].sub_tasks()[0].id();

    let trimmed = service
        .remove_sub_task(template.id(), sub_task_id)
        .await
        .expect("sub-task should be removed");

    assert!(trimmed.tasks()[0].sub_tasks().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_template_maps_to_not_found(service: TestService) {
    let result = service.publish_template(TemplateId::new()).await;

    match result {
        Err(ref err @ TemplateAuthoringError::NotFound(_)) => {
            assert_eq!(err.kind(), ErrorKind::NotFound);
        }
        other => panic!("expected missing template failure, got {other:?}"),
    }
}
