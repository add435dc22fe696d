//! Host document abstraction
//!
//! The engine never touches a concrete page directly. Everything it needs
//! from the host — the native scroll offset, content heights, the body
//! spacer, container pinning, the vertical translation, listener interest —
//! goes through the [`Document`] trait, so the same instance logic drives a
//! terminal viewport in the demo and an in-memory page in tests.

pub mod memory;

pub use memory::MemoryDocument;

use tracing::error;

use crate::error::{Error, Result};

/// Opaque handle to a node in the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

/// Handle to a registered event listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Host events an instance can register interest in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomEvent {
    Scroll,
    Resize,
}

/// A node reference or a selector string that resolves to one.
#[derive(Debug, Clone)]
pub enum TargetRef {
    Node(NodeId),
    Selector(String),
}

impl From<NodeId> for TargetRef {
    fn from(node: NodeId) -> Self {
        TargetRef::Node(node)
    }
}

impl From<&str> for TargetRef {
    fn from(selector: &str) -> Self {
        TargetRef::Selector(selector.to_string())
    }
}

impl From<String> for TargetRef {
    fn from(selector: String) -> Self {
        TargetRef::Selector(selector)
    }
}

/// Why a selector failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
    /// The selector is syntactically invalid for this document.
    InvalidSelector,
    /// The selector is well formed but matches nothing.
    NotFound,
}

/// The host page the engine reads from and writes to.
pub trait Document {
    /// Resolve a selector string to a node.
    fn resolve(&self, selector: &str) -> std::result::Result<NodeId, ResolveError>;

    /// Whether a node handle refers to a live node.
    fn contains(&self, node: NodeId) -> bool;

    /// Current native vertical scroll offset. No side effects.
    fn scroll_offset(&self) -> f64;

    /// Content height of a node.
    fn scroll_height(&self, node: NodeId) -> f64;

    /// Size the body spacer so the native scrollable range matches content.
    fn set_body_height(&mut self, height: f64);

    /// Remove the body spacer.
    fn clear_body_height(&mut self);

    /// Apply fixed positioning, full-bleed sizing and hidden overflow to the
    /// container so only the translation controls visible position.
    fn pin_container(&mut self, node: NodeId);

    /// Set the vertical translation of a node.
    fn set_translation(&mut self, node: NodeId, y: f64);

    /// Current vertical translation of a node.
    fn translation(&self, node: NodeId) -> f64;

    /// Register interest in a host event on a node.
    fn add_listener(&mut self, event: DomEvent, node: NodeId) -> ListenerId;

    /// Remove a previously registered listener. Unknown ids are ignored.
    fn remove_listener(&mut self, id: ListenerId);
}

/// Resolve a target reference against a document.
///
/// On failure a diagnostic identifying the case (dangling node, invalid
/// selector, selector matching nothing) is logged and the error returned;
/// this never panics.
pub fn validate_target(doc: &dyn Document, target: &TargetRef) -> Result<NodeId> {
    match target {
        TargetRef::Node(node) => {
            if doc.contains(*node) {
                Ok(*node)
            } else {
                error!(node = node.0, "target element not found, node handle is dangling");
                Err(Error::TargetNotFound)
            }
        }
        TargetRef::Selector(selector) => match doc.resolve(selector) {
            Ok(node) => Ok(node),
            Err(ResolveError::InvalidSelector) => {
                error!(%selector, "target selector is not valid, use a correct selector");
                Err(Error::InvalidSelector(selector.clone()))
            }
            Err(ResolveError::NotFound) => {
                error!(%selector, "target element not found for selector");
                Err(Error::TargetNotFound)
            }
        },
    }
}
