//! Listener registry
//!
//! Tracks every host listener an instance attaches so teardown can remove
//! them in bulk.

use crate::document::{Document, DomEvent, ListenerId, NodeId};

#[derive(Debug, Clone, Copy)]
struct ListenerEntry {
    event: DomEvent,
    node: NodeId,
    id: ListenerId,
}

/// Records `(event, node, listener)` tuples for bulk removal on destroy.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    entries: Vec<ListenerEntry>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a listener the instance just attached.
    pub fn track(&mut self, event: DomEvent, node: NodeId, id: ListenerId) {
        self.entries.push(ListenerEntry { event, node, id });
    }

    /// Remove every recorded listener from the document and clear the
    /// registry. Calling this twice is a no-op the second time.
    pub fn destroy_all(&mut self, doc: &mut dyn Document) {
        for entry in self.entries.drain(..) {
            doc.remove_listener(entry.id);
        }
    }

    /// The `(event, node)` pairs currently tracked.
    pub fn tracked(&self) -> impl Iterator<Item = (DomEvent, NodeId)> + '_ {
        self.entries.iter().map(|entry| (entry.event, entry.node))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::MemoryDocument;

    #[test]
    fn test_destroy_all_removes_and_clears() {
        let mut doc = MemoryDocument::new();
        let node = doc.add_node("main", 0.0);
        let mut registry = ListenerRegistry::new();

        let resize = doc.add_listener(DomEvent::Resize, node);
        registry.track(DomEvent::Resize, node, resize);
        let scroll = doc.add_listener(DomEvent::Scroll, node);
        registry.track(DomEvent::Scroll, node, scroll);
        assert_eq!(registry.len(), 2);

        registry.destroy_all(&mut doc);
        assert!(registry.is_empty());
        assert_eq!(doc.listener_count(), 0);
    }

    #[test]
    fn test_destroy_all_idempotent() {
        let mut doc = MemoryDocument::new();
        let node = doc.add_node("main", 0.0);
        let mut registry = ListenerRegistry::new();

        let resize = doc.add_listener(DomEvent::Resize, node);
        registry.track(DomEvent::Resize, node, resize);

        registry.destroy_all(&mut doc);
        registry.destroy_all(&mut doc);
        assert!(registry.is_empty());
    }
}
