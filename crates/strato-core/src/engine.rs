use crate::catalog::Catalog;
use crate::notify::ResourceSubscriber;
use crate::registry::BuilderRegistry;
use crate::resource::Resource;
use crate::CoreError;
use serde_json::Value;
use std::sync::Arc;
use strato_model::ResourceName;
use tracing::info;

/// Central orchestration service for the resource lifecycle.
///
/// Composes the catalog, the builder registry, and the process-wide
/// subscriber injected at construction. Every operation runs to completion
/// synchronously; errors propagate unchanged to the caller.
pub struct Engine {
    catalog: Catalog,
    registry: BuilderRegistry,
    subscriber: Arc<dyn ResourceSubscriber>,
}

impl Engine {
    pub fn new(registry: BuilderRegistry, subscriber: Arc<dyn ResourceSubscriber>) -> Self {
        Self {
            catalog: Catalog::new(),
            registry,
            subscriber,
        }
    }

    /// Validate the name, build the resource via the registry, attach the
    /// process-wide subscriber, and store it in the catalog.
    pub fn create_resource(
        &mut self,
        type_tag: &str,
        name: &str,
        options: &Value,
    ) -> Result<&Resource, CoreError> {
        info!("creating {type_tag} resource '{name}'");
        let name = ResourceName::parse(name)?;

        if self.catalog.exists(&name) {
            return Err(CoreError::DuplicateResource(name.to_string()));
        }

        let mut resource = self.registry.build(type_tag, name.clone(), options)?;
        resource.attach_subscriber(Arc::clone(&self.subscriber));
        self.catalog.add(resource)?;

        self.catalog.get(&name)
    }

    pub fn start_resource(&mut self, name: &str) -> Result<(), CoreError> {
        info!("starting resource '{name}'");
        let name = ResourceName::parse(name)?;
        self.catalog.get_mut(&name)?.start()
    }

    pub fn stop_resource(&mut self, name: &str) -> Result<(), CoreError> {
        info!("stopping resource '{name}'");
        let name = ResourceName::parse(name)?;
        self.catalog.get_mut(&name)?.stop()
    }

    pub fn delete_resource(&mut self, name: &str) -> Result<(), CoreError> {
        info!("deleting resource '{name}'");
        let name = ResourceName::parse(name)?;
        self.catalog.get_mut(&name)?.delete()
    }

    /// Read-only lookup, for inspection without driving a transition.
    pub fn inspect(&self, name: &str) -> Result<&Resource, CoreError> {
        let name = ResourceName::parse(name)?;
        self.catalog.get(&name)
    }
}
