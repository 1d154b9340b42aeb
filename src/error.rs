//! Shared error classification for service-level failures.
//!
//! Every service error enum maps onto one of a small set of kinds so that
//! callers can discriminate failures without matching on each concrete
//! variant.

use std::fmt;

/// Coarse classification of a service-level failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A referenced entity does not exist.
    NotFound,
    /// The operation targeted an entity in the wrong lifecycle state.
    InvalidState,
    /// A task-execution transition was attempted from a disallowed state.
    InvalidTransition,
    /// Input was missing or malformed.
    Validation,
    /// The operation lost a write race or violated a uniqueness constraint.
    Conflict,
    /// The actor is not permitted to perform the operation.
    Forbidden,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NotFound => "not found",
            Self::InvalidState => "invalid state",
            Self::InvalidTransition => "invalid transition",
            Self::Validation => "validation",
            Self::Conflict => "conflict",
            Self::Forbidden => "forbidden",
        };
        f.write_str(label)
    }
}

/// Errors that expose a coarse [`ErrorKind`] classification.
pub trait CategorizedError {
    /// Returns the classification of this error.
    fn kind(&self) -> ErrorKind;
}
