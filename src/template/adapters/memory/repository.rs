//! In-memory repository for template tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::template::{
    domain::{Template, TemplateId},
    ports::{TemplateRepository, TemplateRepositoryError, TemplateRepositoryResult},
};

/// Thread-safe in-memory template repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTemplateRepository {
    state: Arc<RwLock<HashMap<TemplateId, Template>>>,
}

impl InMemoryTemplateRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> TemplateRepositoryError {
    TemplateRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TemplateRepository for InMemoryTemplateRepository {
    async fn store(&self, template: &Template) -> TemplateRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state.contains_key(&template.id()) {
            return Err(TemplateRepositoryError::DuplicateTemplate(template.id()));
        }
        state.insert(template.id(), template.clone());
        Ok(())
    }

    async fn update(&self, template: &Template) -> TemplateRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if !state.contains_key(&template.id()) {
            return Err(TemplateRepositoryError::NotFound(template.id()));
        }
        state.insert(template.id(), template.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TemplateId) -> TemplateRepositoryResult<Option<Template>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.get(&id).cloned())
    }
}
