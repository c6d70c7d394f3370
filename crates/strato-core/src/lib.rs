//! Resource lifecycle core for Strato.
//!
//! This crate ties the model types together into the lifecycle subsystem: the
//! `Resource` entity with its tagged variants, the four-state lifecycle
//! machine, synchronous transition notifications, the type-tag builder
//! registry, the uniqueness-enforcing catalog, and the `Engine` — the central
//! API for creating, starting, stopping, and deleting resources.

pub mod catalog;
pub mod engine;
pub mod lifecycle;
pub mod notify;
pub mod registry;
pub mod resource;

pub use catalog::Catalog;
pub use engine::Engine;
pub use lifecycle::{LifecycleOp, LifecycleState};
pub use notify::{JournalSubscriber, ResourceSubscriber};
pub use registry::{
    AppServiceBuilder, BuilderRegistry, CacheDbBuilder, ResourceBuilder, StorageAccountBuilder,
};
pub use resource::{Resource, ResourceKind};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("validation error: {0}")]
    Validation(#[from] strato_model::ValidationError),
    #[error("resource '{0}' already exists")]
    DuplicateResource(String),
    #[error("resource '{0}' not found")]
    ResourceNotFound(String),
    #[error("unknown resource type: {0}")]
    UnknownResourceType(String),
    #[error("invalid state transition: {reason} (cannot {op} while {from})")]
    InvalidTransition {
        from: String,
        op: String,
        reason: &'static str,
    },
    #[error("journal error: {0}")]
    Journal(#[from] strato_journal::JournalError),
}
