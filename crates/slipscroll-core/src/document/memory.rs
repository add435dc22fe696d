//! In-memory document for tests and headless runs
//!
//! Behaves like a minimal page: named nodes addressable by `#id` selectors,
//! a native scroll offset the caller moves directly, and a write counter on
//! the translation so redundant-write skips are observable.

use std::collections::HashMap;

use super::{Document, DomEvent, ListenerId, NodeId, ResolveError};

#[derive(Debug, Clone)]
struct NodeState {
    scroll_height: f64,
    translation: f64,
    pinned: bool,
}

/// A `Document` backed by plain data structures.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    nodes: Vec<NodeState>,
    ids: HashMap<String, NodeId>,
    scroll_offset: f64,
    body_height: Option<f64>,
    listeners: Vec<(ListenerId, DomEvent, NodeId)>,
    next_listener: u64,
    translation_writes: u64,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node addressable as `#id`.
    pub fn add_node(&mut self, id: &str, scroll_height: f64) -> NodeId {
        let node = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeState {
            scroll_height,
            translation: 0.0,
            pinned: false,
        });
        self.ids.insert(id.to_string(), node);
        node
    }

    /// Move the native scroll offset, as the host scrollbar would.
    pub fn set_scroll_offset(&mut self, y: f64) {
        self.scroll_offset = y;
    }

    pub fn set_scroll_height(&mut self, node: NodeId, height: f64) {
        if let Some(state) = self.nodes.get_mut(node.0 as usize) {
            state.scroll_height = height;
        }
    }

    pub fn body_height(&self) -> Option<f64> {
        self.body_height
    }

    pub fn is_pinned(&self, node: NodeId) -> bool {
        self.nodes
            .get(node.0 as usize)
            .map(|state| state.pinned)
            .unwrap_or(false)
    }

    /// Number of translation writes performed so far.
    pub fn translation_writes(&self) -> u64 {
        self.translation_writes
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn has_listener(&self, event: DomEvent) -> bool {
        self.listeners.iter().any(|(_, ev, _)| *ev == event)
    }
}

/// `#id` selectors only: must start with `#`, followed by at least one
/// character, none of which is whitespace or another `#`.
fn is_valid_selector(selector: &str) -> bool {
    match selector.strip_prefix('#') {
        Some(rest) if !rest.is_empty() => !rest.chars().any(|c| c.is_whitespace() || c == '#'),
        _ => false,
    }
}

impl Document for MemoryDocument {
    fn resolve(&self, selector: &str) -> Result<NodeId, ResolveError> {
        if !is_valid_selector(selector) {
            return Err(ResolveError::InvalidSelector);
        }
        self.ids
            .get(&selector[1..])
            .copied()
            .ok_or(ResolveError::NotFound)
    }

    fn contains(&self, node: NodeId) -> bool {
        (node.0 as usize) < self.nodes.len()
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    fn scroll_height(&self, node: NodeId) -> f64 {
        self.nodes
            .get(node.0 as usize)
            .map(|state| state.scroll_height)
            .unwrap_or(0.0)
    }

    fn set_body_height(&mut self, height: f64) {
        self.body_height = Some(height);
    }

    fn clear_body_height(&mut self) {
        self.body_height = None;
    }

    fn pin_container(&mut self, node: NodeId) {
        if let Some(state) = self.nodes.get_mut(node.0 as usize) {
            state.pinned = true;
        }
    }

    fn set_translation(&mut self, node: NodeId, y: f64) {
        if let Some(state) = self.nodes.get_mut(node.0 as usize) {
            state.translation = y;
            self.translation_writes += 1;
        }
    }

    fn translation(&self, node: NodeId) -> f64 {
        self.nodes
            .get(node.0 as usize)
            .map(|state| state.translation)
            .unwrap_or(0.0)
    }

    fn add_listener(&mut self, event: DomEvent, node: NodeId) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, event, node));
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.listeners.retain(|(lid, _, _)| *lid != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        let mut doc = MemoryDocument::new();
        let main = doc.add_node("main", 500.0);

        assert_eq!(doc.resolve("#main"), Ok(main));
        assert_eq!(doc.resolve("#other"), Err(ResolveError::NotFound));
        assert_eq!(doc.resolve("main"), Err(ResolveError::InvalidSelector));
        assert_eq!(doc.resolve("#"), Err(ResolveError::InvalidSelector));
        assert_eq!(doc.resolve("#two words"), Err(ResolveError::InvalidSelector));
    }

    #[test]
    fn test_translation_writes_counted() {
        let mut doc = MemoryDocument::new();
        let node = doc.add_node("content", 500.0);

        assert_eq!(doc.translation_writes(), 0);
        doc.set_translation(node, -10.0);
        doc.set_translation(node, -10.0);
        assert_eq!(doc.translation_writes(), 2);
        assert!((doc.translation(node) + 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_listener_roundtrip() {
        let mut doc = MemoryDocument::new();
        let node = doc.add_node("main", 0.0);

        let a = doc.add_listener(DomEvent::Resize, node);
        let b = doc.add_listener(DomEvent::Scroll, node);
        assert_eq!(doc.listener_count(), 2);

        doc.remove_listener(a);
        assert!(!doc.has_listener(DomEvent::Resize));
        assert!(doc.has_listener(DomEvent::Scroll));

        // removing twice is harmless
        doc.remove_listener(a);
        doc.remove_listener(b);
        assert_eq!(doc.listener_count(), 0);
    }
}
