//! In-memory resource catalog.
//!
//! At most one resource per name; entries are never silently overwritten and
//! never removed. A deleted resource stays queryable in its terminal state.

use crate::resource::Resource;
use crate::CoreError;
use std::collections::HashMap;
use strato_model::ResourceName;

#[derive(Debug, Default)]
pub struct Catalog {
    resources: HashMap<ResourceName, Resource>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `resource`, failing if a resource with the same name exists.
    pub fn add(&mut self, resource: Resource) -> Result<(), CoreError> {
        if self.resources.contains_key(resource.name()) {
            return Err(CoreError::DuplicateResource(resource.name().to_string()));
        }
        self.resources.insert(resource.name().clone(), resource);
        Ok(())
    }

    pub fn get(&self, name: &ResourceName) -> Result<&Resource, CoreError> {
        self.resources
            .get(name)
            .ok_or_else(|| CoreError::ResourceNotFound(name.to_string()))
    }

    pub fn get_mut(&mut self, name: &ResourceName) -> Result<&mut Resource, CoreError> {
        self.resources
            .get_mut(name)
            .ok_or_else(|| CoreError::ResourceNotFound(name.to_string()))
    }

    pub fn exists(&self, name: &ResourceName) -> bool {
        self.resources.contains_key(name)
    }
}
