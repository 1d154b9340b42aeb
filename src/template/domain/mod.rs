//! Domain model for intervention templates.
//!
//! The template domain models versioned, immutable-once-published program
//! designs while keeping all infrastructure concerns outside of the
//! domain boundary.

mod error;
mod ids;
mod task;
mod template;
mod version;

pub use error::{ParseTemplateStatusError, TemplateDomainError};
pub use ids::{DurationDays, TaskOrder, TemplateId, TemplateSubTaskId, TemplateTaskId};
pub use task::{TemplateSubTask, TemplateTask};
pub use template::{PersistedTemplateData, Template, TemplateStatus};
pub use version::TemplateVersion;
