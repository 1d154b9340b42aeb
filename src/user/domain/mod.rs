//! Domain model for the user directory.

mod error;
mod ids;
mod user;

pub use error::{ParseUserRoleError, UserDomainError};
pub use ids::UserId;
pub use user::{EmailAddress, PersistedUserData, User, UserRole};
