use crate::lifecycle::{self, LifecycleOp, LifecycleState};
use crate::notify::ResourceSubscriber;
use crate::CoreError;
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;
use strato_model::{AppServiceSpec, CacheDbSpec, ResourceName, StorageAccountSpec};

/// Timestamp format embedded in transition messages, e.g. `03:41 PM`.
const MESSAGE_TIME_FORMAT: &str = "%I:%M %p";

/// Closed set of resource variants, each carrying its validated configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceKind {
    AppService(AppServiceSpec),
    StorageAccount(StorageAccountSpec),
    CacheDb(CacheDbSpec),
}

impl ResourceKind {
    /// Registry tag and journal key for this variant.
    pub fn type_tag(&self) -> &'static str {
        match self {
            ResourceKind::AppService(_) => "AppService",
            ResourceKind::StorageAccount(_) => "StorageAccount",
            ResourceKind::CacheDb(_) => "CacheDB",
        }
    }

    fn start_message(&self) -> String {
        let time = chrono::Local::now().format(MESSAGE_TIME_FORMAT);
        match self {
            ResourceKind::AppService(spec) => {
                format!("AppService started at {time} in {}", spec.region())
            }
            ResourceKind::StorageAccount(spec) => {
                let encryption = if spec.encryption_enabled() {
                    "with encryption"
                } else {
                    "without encryption"
                };
                format!("StorageAccount started at {time} {encryption}")
            }
            ResourceKind::CacheDb(spec) => {
                format!(
                    "CacheDB started at {time} with {} eviction policy",
                    spec.eviction_policy()
                )
            }
        }
    }

    fn stop_message(&self) -> String {
        format!("{} stopped successfully", self.type_tag())
    }

    fn delete_message(&self) -> String {
        format!("{} marked as deleted", self.type_tag())
    }
}

/// One managed resource: identity, validated configuration, lifecycle state,
/// and the ordered list of attached transition subscribers.
///
/// Configuration is immutable after construction; the state changes only
/// through [`start`](Resource::start), [`stop`](Resource::stop), and
/// [`delete`](Resource::delete). Each transition commits the new state first
/// and then notifies subscribers in attachment order, stopping at the first
/// subscriber error.
pub struct Resource {
    name: ResourceName,
    kind: ResourceKind,
    state: LifecycleState,
    created_at: DateTime<Utc>,
    subscribers: Vec<Arc<dyn ResourceSubscriber>>,
}

impl Resource {
    pub fn new(name: ResourceName, kind: ResourceKind) -> Self {
        Self {
            name,
            kind,
            state: LifecycleState::Created,
            created_at: Utc::now(),
            subscribers: Vec::new(),
        }
    }

    pub fn name(&self) -> &ResourceName {
        &self.name
    }

    pub fn kind(&self) -> &ResourceKind {
        &self.kind
    }

    pub fn type_tag(&self) -> &'static str {
        self.kind.type_tag()
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Append a subscriber. No deduplication: attaching the same subscriber
    /// twice yields two deliveries per transition.
    pub fn attach_subscriber(&mut self, subscriber: Arc<dyn ResourceSubscriber>) {
        self.subscribers.push(subscriber);
    }

    pub fn start(&mut self) -> Result<(), CoreError> {
        self.state = lifecycle::apply(self.state, LifecycleOp::Start)?;
        let message = self.kind.start_message();
        for subscriber in &self.subscribers {
            subscriber.on_resource_started(self.kind.type_tag(), &message)?;
        }
        Ok(())
    }

    pub fn stop(&mut self) -> Result<(), CoreError> {
        self.state = lifecycle::apply(self.state, LifecycleOp::Stop)?;
        let message = self.kind.stop_message();
        for subscriber in &self.subscribers {
            subscriber.on_resource_stopped(self.kind.type_tag(), &message)?;
        }
        Ok(())
    }

    pub fn delete(&mut self) -> Result<(), CoreError> {
        self.state = lifecycle::apply(self.state, LifecycleOp::Delete)?;
        let message = self.kind.delete_message();
        for subscriber in &self.subscribers {
            subscriber.on_resource_deleted(self.kind.type_tag(), &message)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("state", &self.state)
            .field("created_at", &self.created_at)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
