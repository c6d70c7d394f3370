//! Transition notifications.
//!
//! Delivery is synchronous and in attachment order; a subscriber error aborts
//! delivery to the remaining subscribers and propagates to the caller of the
//! lifecycle operation. The state change itself is already committed by then.

use crate::CoreError;
use std::sync::Arc;
use strato_journal::EventJournal;

/// Listener for resource transitions. Callbacks receive the resource's type
/// tag and its human-readable transition message.
pub trait ResourceSubscriber {
    fn on_resource_started(&self, type_tag: &str, message: &str) -> Result<(), CoreError>;
    fn on_resource_stopped(&self, type_tag: &str, message: &str) -> Result<(), CoreError>;
    fn on_resource_deleted(&self, type_tag: &str, message: &str) -> Result<(), CoreError>;
}

/// The process-wide production subscriber: appends every transition message
/// to the per-type event journal.
pub struct JournalSubscriber {
    journal: Arc<EventJournal>,
}

impl JournalSubscriber {
    pub fn new(journal: Arc<EventJournal>) -> Self {
        Self { journal }
    }
}

impl ResourceSubscriber for JournalSubscriber {
    fn on_resource_started(&self, type_tag: &str, message: &str) -> Result<(), CoreError> {
        Ok(self.journal.append(type_tag, message)?)
    }

    fn on_resource_stopped(&self, type_tag: &str, message: &str) -> Result<(), CoreError> {
        Ok(self.journal.append(type_tag, message)?)
    }

    fn on_resource_deleted(&self, type_tag: &str, message: &str) -> Result<(), CoreError> {
        Ok(self.journal.append(type_tag, message)?)
    }
}
