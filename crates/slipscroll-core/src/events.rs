//! Named-event notifier
//!
//! A minimal publish/subscribe registry used to deliver lifecycle events to
//! consumer callbacks. Names are arbitrary strings; multiple callbacks per
//! name are kept in registration order and invoked synchronously.

use std::collections::HashMap;

use crate::instance::ScrollState;

/// Lifecycle event fired once after successful initialization.
pub const ON_INIT: &str = "onInit";

/// Lifecycle event fired after every render tick.
pub const ON_RENDER: &str = "onRender";

/// Callback receiving a snapshot of the instance state.
pub type EventCallback = Box<dyn FnMut(&ScrollState)>;

/// Name → ordered callbacks registry.
#[derive(Default)]
pub struct Emitter {
    callbacks: HashMap<String, Vec<EventCallback>>,
}

impl std::fmt::Debug for Emitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Emitter")
            .field("events", &self.callbacks.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback under an event name. No uniqueness constraint.
    pub fn on(&mut self, name: &str, callback: EventCallback) {
        self.callbacks.entry(name.to_string()).or_default().push(callback);
    }

    /// Invoke every callback registered for `name`, in registration order.
    ///
    /// Triggering a name with no callbacks is a no-op.
    pub fn trigger(&mut self, name: &str, state: &ScrollState) {
        if let Some(callbacks) = self.callbacks.get_mut(name) {
            for callback in callbacks.iter_mut() {
                callback(state);
            }
        }
    }

    /// Number of callbacks registered under `name`.
    pub fn callback_count(&self, name: &str) -> usize {
        self.callbacks.get(name).map(Vec::len).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn state() -> ScrollState {
        ScrollState {
            id: crate::registry::InstanceId(0),
            scroll_position: 0.0,
            scroll_position_in_lerp: 0.0,
            speed: 0.0,
            speed_in_lerp: 0.0,
            scrollable_height: 0.0,
        }
    }

    #[test]
    fn test_callbacks_run_in_registration_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut emitter = Emitter::new();

        for tag in ["first", "second", "third"] {
            let calls = Rc::clone(&calls);
            emitter.on("onRender", Box::new(move |_| calls.borrow_mut().push(tag)));
        }

        emitter.trigger("onRender", &state());
        assert_eq!(*calls.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_trigger_unknown_name_is_noop() {
        let mut emitter = Emitter::new();
        emitter.trigger("nothing", &state());
    }

    #[test]
    fn test_names_are_independent() {
        let count = Rc::new(RefCell::new(0));
        let mut emitter = Emitter::new();

        let c = Rc::clone(&count);
        emitter.on(ON_INIT, Box::new(move |_| *c.borrow_mut() += 1));

        emitter.trigger(ON_RENDER, &state());
        assert_eq!(*count.borrow(), 0);

        emitter.trigger(ON_INIT, &state());
        assert_eq!(*count.borrow(), 1);
        assert_eq!(emitter.callback_count(ON_INIT), 1);
        assert_eq!(emitter.callback_count(ON_RENDER), 0);
    }
}
