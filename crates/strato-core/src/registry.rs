//! Type-tag construction registry.
//!
//! Maps a resource-type tag to a builder that validates type-specific options
//! and produces a `Resource`. Registration overwrites any prior builder for
//! the same tag; building with an unregistered tag is a request-time
//! `UnknownResourceType` error. The registry never touches the catalog.

use crate::resource::{Resource, ResourceKind};
use crate::CoreError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use strato_model::{
    AppServiceSpec, CacheDbSpec, EvictionPolicy, Region, ResourceName, Runtime,
    StorageAccountSpec, ValidationError,
};

/// Validates type-specific options and constructs one resource variant.
pub trait ResourceBuilder {
    fn build(&self, name: ResourceName, options: &Value) -> Result<Resource, CoreError>;
}

/// Runtime-mutable map from type tag to builder.
#[derive(Default)]
pub struct BuilderRegistry {
    builders: HashMap<String, Box<dyn ResourceBuilder>>,
}

impl BuilderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `builder` under `tag`, replacing any previous builder.
    pub fn register(&mut self, tag: impl Into<String>, builder: Box<dyn ResourceBuilder>) {
        self.builders.insert(tag.into(), builder);
    }

    /// Look up the builder for `tag` and delegate construction to it.
    pub fn build(
        &self,
        tag: &str,
        name: ResourceName,
        options: &Value,
    ) -> Result<Resource, CoreError> {
        let builder = self
            .builders
            .get(tag)
            .ok_or_else(|| CoreError::UnknownResourceType(tag.to_owned()))?;
        builder.build(name, options)
    }
}

/// Deserialize a typed options record from the raw options map.
fn decode<T: DeserializeOwned>(options: &Value) -> Result<T, CoreError> {
    serde_json::from_value(options.clone())
        .map_err(|e| ValidationError::InvalidOptions(e.to_string()).into())
}

#[derive(Debug, Deserialize)]
struct AppServiceOptions {
    runtime: Runtime,
    region: Region,
    replica_count: u32,
}

pub struct AppServiceBuilder;

impl ResourceBuilder for AppServiceBuilder {
    fn build(&self, name: ResourceName, options: &Value) -> Result<Resource, CoreError> {
        let opts: AppServiceOptions = decode(options)?;
        let spec = AppServiceSpec::new(opts.runtime, opts.region, opts.replica_count)?;
        Ok(Resource::new(name, ResourceKind::AppService(spec)))
    }
}

#[derive(Debug, Deserialize)]
struct StorageAccountOptions {
    encryption_enabled: bool,
    access_key: String,
    max_size_gb: u32,
}

pub struct StorageAccountBuilder;

impl ResourceBuilder for StorageAccountBuilder {
    fn build(&self, name: ResourceName, options: &Value) -> Result<Resource, CoreError> {
        let opts: StorageAccountOptions = decode(options)?;
        let spec =
            StorageAccountSpec::new(opts.encryption_enabled, opts.access_key, opts.max_size_gb)?;
        Ok(Resource::new(name, ResourceKind::StorageAccount(spec)))
    }
}

#[derive(Debug, Deserialize)]
struct CacheDbOptions {
    ttl_seconds: u32,
    capacity_mb: u32,
    eviction_policy: EvictionPolicy,
}

pub struct CacheDbBuilder;

impl ResourceBuilder for CacheDbBuilder {
    fn build(&self, name: ResourceName, options: &Value) -> Result<Resource, CoreError> {
        let opts: CacheDbOptions = decode(options)?;
        let spec = CacheDbSpec::new(opts.ttl_seconds, opts.capacity_mb, opts.eviction_policy)?;
        Ok(Resource::new(name, ResourceKind::CacheDb(spec)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn name(s: &str) -> ResourceName {
        ResourceName::parse(s).unwrap()
    }

    fn registry() -> BuilderRegistry {
        let mut r = BuilderRegistry::new();
        r.register("AppService", Box::new(AppServiceBuilder));
        r.register("StorageAccount", Box::new(StorageAccountBuilder));
        r.register("CacheDB", Box::new(CacheDbBuilder));
        r
    }

    #[test]
    fn builds_each_registered_variant() {
        let r = registry();

        let app = r
            .build(
                "AppService",
                name("web-1"),
                &json!({"runtime": "python", "region": "EastUS", "replica_count": 3}),
            )
            .unwrap();
        assert_eq!(app.type_tag(), "AppService");

        let storage = r
            .build(
                "StorageAccount",
                name("blob-1"),
                &json!({
                    "encryption_enabled": true,
                    "access_key": "0123456789abcdef",
                    "max_size_gb": 500
                }),
            )
            .unwrap();
        assert_eq!(storage.type_tag(), "StorageAccount");

        let cache = r
            .build(
                "CacheDB",
                name("c1"),
                &json!({"ttl_seconds": 300, "capacity_mb": 512, "eviction_policy": "LFU"}),
            )
            .unwrap();
        assert_eq!(cache.type_tag(), "CacheDB");
    }

    #[test]
    fn unknown_tag_is_an_error() {
        let r = registry();
        let err = r.build("VirtualMachine", name("vm-1"), &json!({})).unwrap_err();
        assert!(matches!(err, CoreError::UnknownResourceType(tag) if tag == "VirtualMachine"));
    }

    #[test]
    fn registration_overwrites() {
        let mut r = BuilderRegistry::new();
        r.register("Thing", Box::new(AppServiceBuilder));
        r.register("Thing", Box::new(CacheDbBuilder));

        let built = r
            .build(
                "Thing",
                name("t1"),
                &json!({"ttl_seconds": 60, "capacity_mb": 64, "eviction_policy": "FIFO"}),
            )
            .unwrap();
        assert_eq!(built.type_tag(), "CacheDB");
    }

    #[test]
    fn missing_option_field_is_a_validation_error() {
        let r = registry();
        let err = r
            .build(
                "AppService",
                name("web-1"),
                &json!({"runtime": "python", "region": "EastUS"}),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::InvalidOptions(_))
        ));
    }

    #[test]
    fn out_of_range_option_propagates_the_specific_error() {
        let r = registry();
        let err = r
            .build(
                "CacheDB",
                name("c1"),
                &json!({"ttl_seconds": 0, "capacity_mb": 512, "eviction_policy": "LRU"}),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::TtlOutOfRange(0))
        ));
    }

    #[test]
    fn unknown_enum_string_is_a_validation_error() {
        let r = registry();
        let err = r
            .build(
                "AppService",
                name("web-1"),
                &json!({"runtime": "java", "region": "EastUS", "replica_count": 1}),
            )
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }
}
