//! Service layer for user directory management.

use crate::error::{CategorizedError, ErrorKind};
use crate::user::{
    domain::{EmailAddress, User, UserDomainError, UserId, UserRole},
    ports::{UserRepository, UserRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for registering a directory user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserRequest {
    name: String,
    email: String,
    role: UserRole,
}

impl CreateUserRequest {
    /// Creates a request with required user fields.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: UserRole) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role,
        }
    }
}

/// Service-level errors for user directory operations.
#[derive(Debug, Error)]
pub enum UserDirectoryError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] UserDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
}

impl CategorizedError for UserDirectoryError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(_) => ErrorKind::Validation,
            Self::Repository(UserRepositoryError::NotFound(_)) => ErrorKind::NotFound,
            Self::Repository(_) => ErrorKind::Conflict,
        }
    }
}

/// Result type for user directory service operations.
pub type UserDirectoryResult<T> = Result<T, UserDirectoryError>;

/// User directory orchestration service.
#[derive(Clone)]
pub struct UserDirectoryService<R, C>
where
    R: UserRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> UserDirectoryService<R, C>
where
    R: UserRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new user directory service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Registers a new directory user.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Domain`] when the name or email fails
    /// validation and [`UserDirectoryError::Repository`] when the email
    /// address is already registered or persistence fails.
    pub async fn create_user(&self, request: CreateUserRequest) -> UserDirectoryResult<User> {
        let email = EmailAddress::new(request.email)?;
        let user = User::new(request.name, email, request.role, &*self.clock)?;
        self.repository.store(&user).await?;
        Ok(user)
    }

    /// Retrieves a user by identifier.
    ///
    /// Returns `Ok(None)` when no such user exists.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_by_id(&self, id: UserId) -> UserDirectoryResult<Option<User>> {
        Ok(self.repository.find_by_id(id).await?)
    }
}
