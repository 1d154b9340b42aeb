//! Application services for template authoring and versioning.

mod authoring;
mod versioning;

pub use authoring::{
    AddTaskRequest, CreateTemplateRequest, TemplateAuthoringError, TemplateAuthoringResult,
    TemplateAuthoringService,
};
pub use versioning::{
    TemplateVersioningError, TemplateVersioningResult, TemplateVersioningService,
};
