//! Scroll instance
//!
//! Owns the complete lifecycle of one scroll-follower: construction and
//! validation, the per-tick interpolation and paint, lifecycle event
//! delivery, and teardown. State machine:
//! `Uninitialized → Initialized → Rendering → Destroyed`, no paused state —
//! a caller wanting to pause simply stops driving `render`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::ScrollOptions;
use crate::document::{validate_target, Document, DomEvent, NodeId};
use crate::easing::{clamp_ease, lerp, round3, scroll_speed};
use crate::error::{Error, Result};
use crate::events::{Emitter, EventCallback, ON_INIT, ON_RENDER};
use crate::frame::FrameClock;
use crate::listeners::ListenerRegistry;
use crate::position::{init_scroll_variables, scroll_position, set_position};
use crate::registry::{InstanceId, InstanceRegistry};

/// Snapshot of instance state, the payload every event callback receives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub id: InstanceId,
    /// Raw native scroll offset as of the last tick.
    pub scroll_position: f64,
    /// Eased position actually applied to the document.
    pub scroll_position_in_lerp: f64,
    /// Raw bounded scroll speed, [0, 1].
    pub speed: f64,
    /// Eased scroll speed, [0, 1].
    pub speed_in_lerp: f64,
    /// Cached content height backing the body spacer.
    pub scrollable_height: f64,
}

/// Cloneable flag that ends a self-driving render loop.
///
/// A scheduled frame that fires after logical teardown checks this before
/// acting, so a stale callback can never tick a dead instance.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// One bound scroll-follower.
#[derive(Debug)]
pub struct ScrollInstance {
    id: InstanceId,
    user_id: Option<String>,
    target: NodeId,
    scrollable: NodeId,
    scroll_ease: f64,
    speed_ease: f64,
    auto_render: bool,
    scroll_position: f64,
    scroll_position_in_lerp: f64,
    speed: f64,
    speed_in_lerp: f64,
    scrollable_height: f64,
    alive: bool,
    stop: StopHandle,
    events: Emitter,
    listeners: ListenerRegistry,
}

impl ScrollInstance {
    /// Construct and initialize an instance.
    ///
    /// Resolves both target references, refuses a target that already
    /// carries a live binding, seeds scroll state from the live native
    /// offset, prepares the document geometry, registers a resize listener,
    /// wires the optional callbacks and fires `onInit` synchronously. The
    /// binding is claimed in the registry only after all of that succeeded;
    /// on any failure nothing has been mutated and the error (already logged
    /// at the failure site) is returned.
    pub fn new(
        doc: &mut dyn Document,
        registry: &mut InstanceRegistry,
        options: ScrollOptions,
    ) -> Result<Self> {
        let target = validate_target(doc, &options.target)?;
        let scrollable = validate_target(doc, &options.scrollable_elm)?;

        if registry.is_bound(target) {
            warn!(node = target.0, "refusing to bind an already-initialized target");
            return Err(Error::AlreadyInitialized);
        }

        let scroll_ease = clamp_ease(options.scroll_ease, "scroll_ease");
        let speed_ease = clamp_ease(options.speed_ease, "speed_ease");

        let mut events = Emitter::new();
        if let Some(callback) = options.on_init {
            events.on(ON_INIT, callback);
        }
        if let Some(callback) = options.on_render {
            events.on(ON_RENDER, callback);
        }

        // seed positions from the live offset, size the spacer, pin the
        // container, paint once forced
        let (offset, height) = init_scroll_variables(doc, target, scrollable);

        // re-measure geometry when the host window changes
        let mut listeners = ListenerRegistry::new();
        let resize = doc.add_listener(DomEvent::Resize, target);
        listeners.track(DomEvent::Resize, target, resize);

        let id = registry.allocate_id();
        let mut instance = Self {
            id,
            user_id: options.id,
            target,
            scrollable,
            scroll_ease,
            speed_ease,
            auto_render: options.auto_render,
            scroll_position: offset,
            scroll_position_in_lerp: offset,
            speed: 0.0,
            speed_in_lerp: 0.0,
            scrollable_height: height,
            alive: true,
            stop: StopHandle::default(),
            events,
            listeners,
        };

        let state = instance.state();
        instance.events.trigger(ON_INIT, &state);

        registry.claim(target, id)?;
        debug!(id = id.0, node = target.0, "scroll instance initialized");

        Ok(instance)
    }

    /// One render tick.
    ///
    /// Reads the fresh native offset, derives the bounded speed from the
    /// distance still to cover, eases speed then position (each rounded to
    /// 3 decimals), applies the translation unless motion has settled, and
    /// fires `onRender` after the document mutation so observers see a
    /// consistent post-update state. Returns the post-tick snapshot, or
    /// `None` when the instance is already destroyed.
    pub fn render(&mut self, doc: &mut dyn Document) -> Option<ScrollState> {
        if !self.alive {
            warn!(id = self.id.0, "render called on a destroyed instance");
            return None;
        }

        self.scroll_position = scroll_position(doc);

        // speed before position: distance between raw and eased, capped
        self.speed = scroll_speed(self.scroll_position - self.scroll_position_in_lerp);
        self.speed_in_lerp = round3(lerp(self.speed_in_lerp, self.speed, self.speed_ease));

        self.scroll_position_in_lerp = round3(lerp(
            self.scroll_position_in_lerp,
            self.scroll_position,
            self.scroll_ease,
        ));

        set_position(
            doc,
            self.scrollable,
            self.scroll_position,
            self.scroll_position_in_lerp,
            false,
        );

        let state = self.state();
        self.events.trigger(ON_RENDER, &state);
        Some(state)
    }

    /// Self-driving render loop, the `auto_render` mode.
    ///
    /// Ticks, then yields the remainder of the frame to the host through the
    /// clock, until the instance dies, the stop handle is raised, or
    /// `auto_render` is off (in which case this returns after zero ticks and
    /// the caller drives `render` directly).
    pub fn run(&mut self, doc: &mut dyn Document, clock: &mut FrameClock) {
        while self.alive && self.auto_render && !self.stop.is_stopped() {
            self.render(doc);
            if self.stop.is_stopped() {
                break;
            }
            clock.wait();
        }
    }

    /// Handle a host resize: re-measure the content and re-apply the spacer.
    pub fn refresh_geometry(&mut self, doc: &mut dyn Document) {
        if !self.alive {
            return;
        }
        self.scrollable_height = doc.scroll_height(self.scrollable);
        doc.set_body_height(self.scrollable_height);
    }

    /// Register a callback under an event name. Multiple callbacks per name
    /// are allowed and run in registration order.
    pub fn on(&mut self, name: &str, callback: EventCallback) {
        self.events.on(name, callback);
    }

    /// Tear the instance down: remove every tracked listener, restore the
    /// body height, release the target binding and deregister from the
    /// registry. Idempotent; a destroyed instance refuses further renders.
    pub fn destroy(&mut self, doc: &mut dyn Document, registry: &mut InstanceRegistry) {
        if !self.alive {
            return;
        }
        self.listeners.destroy_all(doc);
        doc.clear_body_height();
        registry.release(self.target, self.id);
        self.stop.stop();
        self.alive = false;
        debug!(id = self.id.0, "scroll instance destroyed");
    }

    /// Current state snapshot.
    pub fn state(&self) -> ScrollState {
        ScrollState {
            id: self.id,
            scroll_position: self.scroll_position,
            scroll_position_in_lerp: self.scroll_position_in_lerp,
            speed: self.speed,
            speed_in_lerp: self.speed_in_lerp,
            scrollable_height: self.scrollable_height,
        }
    }

    /// Handle that ends a running `run` loop when raised.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn instance_id(&self) -> InstanceId {
        self.id
    }

    /// The opaque consumer tag from the options, untouched.
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn auto_render(&self) -> bool {
        self.auto_render
    }

    /// Number of listeners currently tracked for teardown.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
