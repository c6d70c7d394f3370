//! Validated identifier and configuration value types for Strato resources.
//!
//! This crate defines the model layer: the `ResourceName` identifier newtype,
//! the closed choice enums (`Runtime`, `Region`, `EvictionPolicy`), and the
//! per-variant configuration records (`AppServiceSpec`, `StorageAccountSpec`,
//! `CacheDbSpec`). Every type is fully validated at construction; a value that
//! exists is a value that is valid.

pub mod choices;
pub mod name;
pub mod spec;

pub use choices::{EvictionPolicy, Region, Runtime};
pub use name::ResourceName;
pub use spec::{AppServiceSpec, CacheDbSpec, StorageAccountSpec};

use thiserror::Error;

/// Construction-time validation failure. Never observed after a value exists.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Resource name cannot be empty")]
    EmptyName,
    #[error("Resource name cannot exceed 50 characters")]
    NameTooLong,
    #[error("unknown runtime: '{0}', expected python, nodejs, or dotnet")]
    UnknownRuntime(String),
    #[error("unknown region: '{0}', expected EastUS, WestEurope, or CentralIndia")]
    UnknownRegion(String),
    #[error("unknown eviction policy: '{0}', expected LRU, FIFO, or LFU")]
    UnknownEvictionPolicy(String),
    #[error("Replica count must be between 1 and 10")]
    ReplicaCountOutOfRange(u32),
    #[error("Max size must be between 1 and 10000 GB")]
    MaxSizeOutOfRange(u32),
    #[error("Access key must be at least 16 characters")]
    AccessKeyTooShort(usize),
    #[error("TTL must be between 1 and 86400 seconds")]
    TtlOutOfRange(u32),
    #[error("Capacity must be between 1 and 10000 MB")]
    CapacityOutOfRange(u32),
    #[error("malformed options: {0}")]
    InvalidOptions(String),
}
