//! Position helpers
//!
//! Reading the native offset, applying the eased translation, and the
//! one-time geometry setup an instance performs on construction.

use crate::document::{Document, NodeId};

/// Current native vertical scroll offset.
#[inline]
pub fn scroll_position(doc: &dyn Document) -> f64 {
    doc.scroll_offset()
}

/// Apply the eased position as a negative vertical translation.
///
/// Skips the write when not forced and the rounded eased position equals the
/// rounded raw position — once motion has settled there is no layout work to
/// repeat. `force` bypasses the check for the initial paint.
pub fn set_position(doc: &mut dyn Document, scrollable: NodeId, raw: f64, eased: f64, force: bool) {
    if force || eased.round() != raw.round() {
        doc.set_translation(scrollable, -eased);
    }
}

/// Seed scroll state and prepare the document geometry.
///
/// Reads the live native offset (so the eased position starts with no lag),
/// measures the scrollable content, sizes the body spacer to it, pins the
/// container, and paints the initial position once, forced.
///
/// Returns `(scroll_position, scrollable_height)`.
pub fn init_scroll_variables(
    doc: &mut dyn Document,
    target: NodeId,
    scrollable: NodeId,
) -> (f64, f64) {
    let offset = doc.scroll_offset();
    let height = doc.scroll_height(scrollable);

    doc.set_body_height(height);
    doc.pin_container(target);
    set_position(doc, scrollable, offset, offset, true);

    (offset, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::MemoryDocument;

    #[test]
    fn test_set_position_skips_when_settled() {
        let mut doc = MemoryDocument::new();
        let node = doc.add_node("content", 500.0);

        // rounded positions equal, not forced: no write
        set_position(&mut doc, node, 100.2, 100.4, false);
        assert_eq!(doc.translation_writes(), 0);

        // forced: always writes
        set_position(&mut doc, node, 100.2, 100.4, true);
        assert_eq!(doc.translation_writes(), 1);
        assert!((doc.translation(node) + 100.4).abs() < f64::EPSILON);

        // rounded positions differ: writes
        set_position(&mut doc, node, 100.0, 50.0, false);
        assert_eq!(doc.translation_writes(), 2);
        assert!((doc.translation(node) + 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_init_scroll_variables() {
        let mut doc = MemoryDocument::new();
        let target = doc.add_node("main", 0.0);
        let content = doc.add_node("content", 1200.0);
        doc.set_scroll_offset(300.0);

        let (offset, height) = init_scroll_variables(&mut doc, target, content);

        assert!((offset - 300.0).abs() < f64::EPSILON);
        assert!((height - 1200.0).abs() < f64::EPSILON);
        assert_eq!(doc.body_height(), Some(1200.0));
        assert!(doc.is_pinned(target));
        // initial paint happened, forced
        assert_eq!(doc.translation_writes(), 1);
        assert!((doc.translation(content) + 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_init_zero_height_content() {
        let mut doc = MemoryDocument::new();
        let target = doc.add_node("main", 0.0);
        let content = doc.add_node("content", 0.0);

        let (offset, height) = init_scroll_variables(&mut doc, target, content);

        assert!((offset - 0.0).abs() < f64::EPSILON);
        assert!((height - 0.0).abs() < f64::EPSILON);
        assert_eq!(doc.body_height(), Some(0.0));
        assert!((doc.translation(content) - 0.0).abs() < f64::EPSILON);
    }
}
