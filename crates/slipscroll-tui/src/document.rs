//! Terminal-backed document
//!
//! A `Document` over a block of text in a terminal viewport. The "native"
//! scroll offset is a row count the key handler moves directly; the engine
//! lerps the translation, and drawing slices the text at the eased offset.
//! Two fixed nodes exist: `#viewport` (the pinned container) and `#content`
//! (the translated text).

use slipscroll_core::document::{Document, DomEvent, ListenerId, NodeId, ResolveError};

/// Node handle for the pinned container.
pub const VIEWPORT: NodeId = NodeId(0);

/// Node handle for the translated content.
pub const CONTENT: NodeId = NodeId(1);

/// Terminal host page.
#[derive(Debug)]
pub struct TermDocument {
    lines: Vec<String>,
    viewport_rows: u16,
    scroll_offset: f64,
    translation: f64,
    pinned: bool,
    body_height: Option<f64>,
    listeners: Vec<(ListenerId, DomEvent, NodeId)>,
    next_listener: u64,
}

impl TermDocument {
    pub fn new(text: &str, viewport_rows: u16) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
            viewport_rows,
            scroll_offset: 0.0,
            translation: 0.0,
            pinned: false,
            body_height: None,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn viewport_rows(&self) -> u16 {
        self.viewport_rows
    }

    /// Largest valid native offset for the current viewport.
    pub fn max_scroll(&self) -> f64 {
        (self.lines.len() as f64 - self.viewport_rows as f64).max(0.0)
    }

    /// Move the native offset by `delta` rows, clamped to the valid range.
    pub fn scroll_by(&mut self, delta: f64) {
        self.scroll_offset = (self.scroll_offset + delta).clamp(0.0, self.max_scroll());
    }

    pub fn jump_to_top(&mut self) {
        self.scroll_offset = 0.0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.scroll_offset = self.max_scroll();
    }

    /// Apply a new viewport height, clamping the offset into range.
    pub fn resize(&mut self, rows: u16) {
        self.viewport_rows = rows;
        self.scroll_offset = self.scroll_offset.clamp(0.0, self.max_scroll());
    }

    /// The eased top row currently painted, derived from the translation.
    pub fn eased_top(&self) -> f64 {
        -self.translation
    }

    /// Whether any instance registered interest in resize events.
    pub fn wants_resize(&self) -> bool {
        self.listeners
            .iter()
            .any(|(_, event, _)| *event == DomEvent::Resize)
    }
}

fn is_valid_selector(selector: &str) -> bool {
    match selector.strip_prefix('#') {
        Some(rest) if !rest.is_empty() => !rest.chars().any(|c| c.is_whitespace() || c == '#'),
        _ => false,
    }
}

impl Document for TermDocument {
    fn resolve(&self, selector: &str) -> Result<NodeId, ResolveError> {
        if !is_valid_selector(selector) {
            return Err(ResolveError::InvalidSelector);
        }
        match &selector[1..] {
            "viewport" => Ok(VIEWPORT),
            "content" => Ok(CONTENT),
            _ => Err(ResolveError::NotFound),
        }
    }

    fn contains(&self, node: NodeId) -> bool {
        node == VIEWPORT || node == CONTENT
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    fn scroll_height(&self, node: NodeId) -> f64 {
        if node == CONTENT {
            self.lines.len() as f64
        } else {
            0.0
        }
    }

    fn set_body_height(&mut self, height: f64) {
        self.body_height = Some(height);
    }

    fn clear_body_height(&mut self) {
        self.body_height = None;
    }

    fn pin_container(&mut self, node: NodeId) {
        if node == VIEWPORT {
            self.pinned = true;
        }
    }

    fn set_translation(&mut self, node: NodeId, y: f64) {
        if node == CONTENT {
            self.translation = y;
        }
    }

    fn translation(&self, node: NodeId) -> f64 {
        if node == CONTENT {
            self.translation
        } else {
            0.0
        }
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

/// Generate the text the demo scrolls through.
pub fn demo_text(paragraphs: usize) -> String {
    let mut text = String::new();
    for n in 1..=paragraphs {
        text.push_str(&format!("== Section {n} ==\n"));
        for line in 1..=6 {
            text.push_str(&format!(
                "section {n} line {line}: the eased offset chases the native offset a \
                 fraction of the remaining distance per frame\n"
            ));
        }
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_fixed_nodes() {
        let doc = TermDocument::new("a\nb\nc", 2);
        assert_eq!(doc.resolve("#viewport"), Ok(VIEWPORT));
        assert_eq!(doc.resolve("#content"), Ok(CONTENT));
        assert_eq!(doc.resolve("#other"), Err(ResolveError::NotFound));
        assert_eq!(doc.resolve("viewport"), Err(ResolveError::InvalidSelector));
    }

    #[test]
    fn test_scroll_clamps_to_range() {
        let mut doc = TermDocument::new(&demo_text(4), 10);
        doc.scroll_by(-5.0);
        assert!((doc.scroll_offset() - 0.0).abs() < f64::EPSILON);

        doc.scroll_by(10_000.0);
        assert!((doc.scroll_offset() - doc.max_scroll()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resize_keeps_offset_valid() {
        let mut doc = TermDocument::new(&demo_text(4), 10);
        doc.jump_to_bottom();
        let at_bottom = doc.scroll_offset();

        doc.resize(20);
        assert!(doc.scroll_offset() <= at_bottom);
        assert!(doc.scroll_offset() <= doc.max_scroll());
    }

    #[test]
    fn test_short_content_has_zero_range() {
        let doc = TermDocument::new("one line", 24);
        assert!((doc.max_scroll() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_eased_top_tracks_translation() {
        let mut doc = TermDocument::new(&demo_text(4), 10);
        doc.set_translation(CONTENT, -12.5);
        assert!((doc.eased_top() - 12.5).abs() < f64::EPSILON);
    }
}
