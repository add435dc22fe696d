//! Instance registry
//!
//! External collaborator tracking every live instance and which target node
//! each one is bound to. The binding side-table is what enforces the
//! one-instance-per-target invariant; destroy deregisters through here.

use std::collections::HashMap;

use tracing::error;

use crate::document::NodeId;
use crate::error::{Error, Result};

/// Identity of a live scroll instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId(pub u64);

/// Tracks live instances and their target bindings.
#[derive(Debug, Default)]
pub struct InstanceRegistry {
    bindings: HashMap<NodeId, InstanceId>,
    live: Vec<InstanceId>,
    next_id: u64,
}

impl InstanceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the identity a new instance will use.
    pub fn allocate_id(&mut self) -> InstanceId {
        let id = InstanceId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Whether a target node already carries a live binding.
    pub fn is_bound(&self, target: NodeId) -> bool {
        self.bindings.contains_key(&target)
    }

    /// Bind `target` to `id` and record the instance as live.
    ///
    /// Fails when the target is already bound; the caller is expected to
    /// have checked before mutating any state.
    pub fn claim(&mut self, target: NodeId, id: InstanceId) -> Result<()> {
        if self.is_bound(target) {
            error!(node = target.0, "the target has already been initialized");
            return Err(Error::AlreadyInitialized);
        }
        self.bindings.insert(target, id);
        self.live.push(id);
        Ok(())
    }

    /// Release a binding and forget the instance. Safe to call for an
    /// already-released pair.
    pub fn release(&mut self, target: NodeId, id: InstanceId) {
        if self.bindings.get(&target) == Some(&id) {
            self.bindings.remove(&target);
        }
        self.live.retain(|live| *live != id);
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}
