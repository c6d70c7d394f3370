use crate::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a resource. `Deleted` is terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LifecycleState {
    Created,
    Started,
    Stopped,
    Deleted,
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleState::Created => write!(f, "created"),
            LifecycleState::Started => write!(f, "started"),
            LifecycleState::Stopped => write!(f, "stopped"),
            LifecycleState::Deleted => write!(f, "deleted"),
        }
    }
}

/// Operation driving a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleOp {
    Start,
    Stop,
    Delete,
}

impl fmt::Display for LifecycleOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleOp::Start => write!(f, "start"),
            LifecycleOp::Stop => write!(f, "stop"),
            LifecycleOp::Delete => write!(f, "delete"),
        }
    }
}

/// Apply `op` to `state`, yielding the successor state or an
/// `InvalidTransition` error.
///
/// Both `Created` and `Stopped` admit `start`; a started resource must be
/// stopped before it can be deleted; nothing is legal after `Deleted`.
pub fn apply(state: LifecycleState, op: LifecycleOp) -> Result<LifecycleState, CoreError> {
    use LifecycleOp::{Delete, Start, Stop};
    use LifecycleState::{Created, Deleted, Started, Stopped};

    match (state, op) {
        (Created | Stopped, Start) => Ok(Started),
        (Started, Stop) => Ok(Stopped),
        (Created | Stopped, Delete) => Ok(Deleted),
        (from, op) => Err(CoreError::InvalidTransition {
            from: from.to_string(),
            op: op.to_string(),
            reason: refusal(from, op),
        }),
    }
}

fn refusal(from: LifecycleState, op: LifecycleOp) -> &'static str {
    use LifecycleOp::{Delete, Start, Stop};
    use LifecycleState::{Created, Deleted, Started, Stopped};

    match (from, op) {
        (Created, Stop) => "Cannot stop a resource that hasn't been started",
        (Started, Start) => "Resource is already started",
        (Started, Delete) => "Cannot delete: Resource must be stopped first",
        (Stopped, Stop) => "Resource is already stopped",
        (Deleted, Start) => "Cannot start a deleted resource",
        (Deleted, Stop) => "Cannot stop a deleted resource",
        (Deleted, Delete) => "Resource is already deleted",
        _ => "transition not permitted",
    }
}
