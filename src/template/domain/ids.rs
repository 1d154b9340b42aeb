//! Identifier and validated scalar types for the template domain.

use super::TemplateDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for an intervention template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(Uuid);

impl TemplateId {
    /// Creates a new random template identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a template identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for TemplateId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for TemplateId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a task within a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateTaskId(Uuid);

impl TemplateTaskId {
    /// Creates a new random template task identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a template task identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for TemplateTaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TemplateTaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a sub-task within a template task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateSubTaskId(Uuid);

impl TemplateSubTaskId {
    /// Creates a new random sub-task identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a sub-task identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for TemplateSubTaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TemplateSubTaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One-based position of a task in its template sequence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TaskOrder(u32);

impl TaskOrder {
    /// The first position in a sequence.
    pub const FIRST: Self = Self(1);

    /// Creates a validated task order.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateDomainError::InvalidTaskOrder`] when the value is
    /// zero.
    pub const fn new(value: u32) -> Result<Self, TemplateDomainError> {
        if value == 0 {
            return Err(TemplateDomainError::InvalidTaskOrder(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric position.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns the next position in the sequence.
    ///
    /// Saturates at `u32::MAX`.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Returns `true` when this is the first position.
    #[must_use]
    pub const fn is_first(self) -> bool {
        self.0 == 1
    }
}

impl fmt::Display for TaskOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inclusive task duration in days.
///
/// A duration of 1 means the task starts and ends on the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DurationDays(u32);

impl DurationDays {
    /// Creates a validated duration.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateDomainError::InvalidDuration`] when the value is
    /// zero.
    pub const fn new(value: u32) -> Result<Self, TemplateDomainError> {
        if value == 0 {
            return Err(TemplateDomainError::InvalidDuration(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying number of days.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for DurationDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
