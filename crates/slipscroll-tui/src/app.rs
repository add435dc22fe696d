//! Demo application state
//!
//! Wires a scroll instance to a [`TermDocument`]: key input moves the native
//! offset, the per-frame tick renders the instance, and resize events reach
//! the instance through its registered listener interest.

use anyhow::{anyhow, Result};
use tracing::debug;

use slipscroll_core::{
    InstanceRegistry, ScrollInstance, ScrollOptions, ScrollSettings, ScrollState,
};

use crate::document::TermDocument;
use crate::input::Action;

pub struct App {
    pub doc: TermDocument,
    registry: InstanceRegistry,
    instance: ScrollInstance,
    pub should_quit: bool,
    /// First half of a pending `gg` chord.
    pub pending_key: Option<char>,
}

impl App {
    /// Build the document and bind a scroll instance to it.
    pub fn new(settings: &ScrollSettings, text: &str, viewport_rows: u16) -> Result<Self> {
        let mut doc = TermDocument::new(text, viewport_rows);
        let mut registry = InstanceRegistry::new();

        let mut options = ScrollOptions::from_settings("#viewport", "#content", settings);
        // the input loop is the frame scheduler here, so the instance must
        // not self-drive
        options.auto_render = false;
        options.id = Some("demo".to_string());

        let instance = ScrollInstance::new(&mut doc, &mut registry, options)
            .map_err(|e| anyhow!("failed to bind scroll instance: {e}"))?;

        Ok(Self {
            doc,
            registry,
            instance,
            should_quit: false,
            pending_key: None,
        })
    }

    /// One render tick; returns the post-tick state for drawing.
    pub fn tick(&mut self) -> Option<ScrollState> {
        self.instance.render(&mut self.doc)
    }

    /// Latest state without advancing a frame.
    pub fn state(&self) -> ScrollState {
        self.instance.state()
    }

    pub fn handle_action(&mut self, action: Action) {
        let half_page = (self.doc.viewport_rows() / 2).max(1) as f64;
        let page = self.doc.viewport_rows() as f64;

        match action {
            Action::Quit => self.should_quit = true,
            Action::ScrollDown => self.doc.scroll_by(1.0),
            Action::ScrollUp => self.doc.scroll_by(-1.0),
            Action::ScrollHalfPageDown => self.doc.scroll_by(half_page),
            Action::ScrollHalfPageUp => self.doc.scroll_by(-half_page),
            Action::ScrollPageDown => self.doc.scroll_by(page),
            Action::ScrollPageUp => self.doc.scroll_by(-page),
            Action::JumpToTop => self.doc.jump_to_top(),
            Action::JumpToBottom => self.doc.jump_to_bottom(),
            Action::PendingG | Action::None => {}
        }

        self.pending_key = match action {
            Action::PendingG => Some('g'),
            _ => None,
        };
    }

    /// Deliver a terminal resize to the document and, when the instance
    /// registered resize interest, to the instance.
    pub fn handle_resize(&mut self, rows: u16) {
        self.doc.resize(rows);
        if self.doc.wants_resize() {
            debug!(rows, "delivering resize to scroll instance");
            self.instance.refresh_geometry(&mut self.doc);
        }
    }

    /// Tear the instance down before leaving the terminal.
    pub fn shutdown(&mut self) {
        self.instance.destroy(&mut self.doc, &mut self.registry);
    }
}
