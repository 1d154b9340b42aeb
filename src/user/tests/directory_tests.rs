//! Service orchestration tests for the user directory.

use std::sync::Arc;

use crate::error::{CategorizedError, ErrorKind};
use crate::user::{
    adapters::memory::InMemoryUserRepository,
    ports::UserRepositoryError,
    services::{CreateUserRequest, UserDirectoryError, UserDirectoryService},
};
use crate::user::domain::UserRole;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = UserDirectoryService<InMemoryUserRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    UserDirectoryService::new(Arc::new(InMemoryUserRepository::new()), Arc::new(DefaultClock))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_user_persists_and_is_retrievable(service: TestService) {
    let request = CreateUserRequest::new("Alice Admin", "alice@example.com", UserRole::Admin);

    let created = service
        .create_user(request)
        .await
        .expect("user creation should succeed");
    let fetched = service
        .find_by_id(created.id())
        .await
        .expect("lookup should succeed");

    assert_eq!(fetched, Some(created));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_user_rejects_duplicate_email(service: TestService) {
    let first = CreateUserRequest::new("Bob HR", "bob@example.com", UserRole::HrPro);
    service
        .create_user(first)
        .await
        .expect("first creation should succeed");

    let second = CreateUserRequest::new("Bobby", "bob@example.com", UserRole::Mentor);
    let result = service.create_user(second).await;

    match result {
        Err(ref err @ UserDirectoryError::Repository(UserRepositoryError::DuplicateEmail(_))) => {
            assert_eq!(err.kind(), ErrorKind::Conflict);
        }
        other => panic!("expected duplicate email conflict, got {other:?}"),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_user_rejects_invalid_email(service: TestService) {
    let request = CreateUserRequest::new("Charlie Mentor", "not-an-email", UserRole::Mentor);

    let result = service.create_user(request).await;

    match result {
        Err(ref err @ UserDirectoryError::Domain(_)) => {
            assert_eq!(err.kind(), ErrorKind::Validation);
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}
