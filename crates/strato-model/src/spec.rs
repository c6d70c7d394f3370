//! Per-variant configuration records.
//!
//! Each record is immutable once constructed and carries only validated
//! values; the constructors enforce the documented ranges and there is no
//! partial-update API.

use crate::choices::{EvictionPolicy, Region, Runtime};
use crate::ValidationError;
use serde::{Deserialize, Serialize};

/// Configuration for an app service: runtime, region, replica count in [1, 10].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppServiceSpec {
    runtime: Runtime,
    region: Region,
    replica_count: u32,
}

impl AppServiceSpec {
    pub fn new(runtime: Runtime, region: Region, replica_count: u32) -> Result<Self, ValidationError> {
        if !(1..=10).contains(&replica_count) {
            return Err(ValidationError::ReplicaCountOutOfRange(replica_count));
        }
        Ok(Self {
            runtime,
            region,
            replica_count,
        })
    }

    pub fn runtime(&self) -> Runtime {
        self.runtime
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn replica_count(&self) -> u32 {
        self.replica_count
    }
}

/// Configuration for a storage account: encryption flag, access key of at
/// least 16 characters, max size in [1, 10000] GB.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageAccountSpec {
    encryption_enabled: bool,
    access_key: String,
    max_size_gb: u32,
}

impl StorageAccountSpec {
    pub fn new(
        encryption_enabled: bool,
        access_key: String,
        max_size_gb: u32,
    ) -> Result<Self, ValidationError> {
        if !(1..=10_000).contains(&max_size_gb) {
            return Err(ValidationError::MaxSizeOutOfRange(max_size_gb));
        }
        if access_key.chars().count() < 16 {
            return Err(ValidationError::AccessKeyTooShort(access_key.chars().count()));
        }
        Ok(Self {
            encryption_enabled,
            access_key,
            max_size_gb,
        })
    }

    pub fn encryption_enabled(&self) -> bool {
        self.encryption_enabled
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    pub fn max_size_gb(&self) -> u32 {
        self.max_size_gb
    }
}

/// Configuration for a cache store: TTL in [1, 86400] seconds, capacity in
/// [1, 10000] MB, eviction policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheDbSpec {
    ttl_seconds: u32,
    capacity_mb: u32,
    eviction_policy: EvictionPolicy,
}

impl CacheDbSpec {
    pub fn new(
        ttl_seconds: u32,
        capacity_mb: u32,
        eviction_policy: EvictionPolicy,
    ) -> Result<Self, ValidationError> {
        if !(1..=86_400).contains(&ttl_seconds) {
            return Err(ValidationError::TtlOutOfRange(ttl_seconds));
        }
        if !(1..=10_000).contains(&capacity_mb) {
            return Err(ValidationError::CapacityOutOfRange(capacity_mb));
        }
        Ok(Self {
            ttl_seconds,
            capacity_mb,
            eviction_policy,
        })
    }

    pub fn ttl_seconds(&self) -> u32 {
        self.ttl_seconds
    }

    pub fn capacity_mb(&self) -> u32 {
        self.capacity_mb
    }

    pub fn eviction_policy(&self) -> EvictionPolicy {
        self.eviction_policy
    }
}
