//! Template version string handling.

use super::TemplateDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Template version in `v<major>.<minor>` format.
///
/// The string form is part of the storage contract; parsing and
/// formatting round-trip exactly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct TemplateVersion {
    major: u32,
    minor: u32,
}

impl TemplateVersion {
    /// Creates a version from explicit components.
    #[must_use]
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// The version assigned to freshly created templates, `v1.0`.
    #[must_use]
    pub const fn initial() -> Self {
        Self::new(1, 0)
    }

    /// Parses a `v<major>.<minor>` string.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateDomainError::InvalidVersion`] when the prefix,
    /// separator, or numeric components are malformed.
    pub fn parse(value: &str) -> Result<Self, TemplateDomainError> {
        let invalid = || TemplateDomainError::InvalidVersion(value.to_owned());
        let rest = value.strip_prefix('v').ok_or_else(invalid)?;
        let (major_part, minor_part) = rest.split_once('.').ok_or_else(invalid)?;
        let major = major_part.parse::<u32>().map_err(|_| invalid())?;
        let minor = minor_part.parse::<u32>().map_err(|_| invalid())?;
        Ok(Self { major, minor })
    }

    /// Returns the major component.
    #[must_use]
    pub const fn major(self) -> u32 {
        self.major
    }

    /// Returns the minor component.
    #[must_use]
    pub const fn minor(self) -> u32 {
        self.minor
    }

    /// Returns the next version: minor incremented, major kept.
    ///
    /// Saturates at `u32::MAX`.
    #[must_use]
    pub const fn next_minor(self) -> Self {
        Self {
            major: self.major,
            minor: self.minor.saturating_add(1),
        }
    }
}

impl fmt::Display for TemplateVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}", self.major, self.minor)
    }
}

impl TryFrom<String> for TemplateVersion {
    type Error = TemplateDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TemplateVersion> for String {
    fn from(version: TemplateVersion) -> Self {
        version.to_string()
    }
}
