//! This module implements the observation contract of the color object: a per-instance registry
//! mapping an event name to an ordered list of callbacks. It is deliberately not a
//! general-purpose event bus. There is no global state, no threading, and no payloads: the
//! registry is plain owned data, torn down with the object that holds it, and the only event the
//! color itself ever fires is `"change"`.

use std::collections::HashMap;

/// The boxed callback type stored in the registry. Callbacks take no arguments: a closure
/// captures whatever context it needs to react to an event.
pub type Callback = Box<dyn FnMut()>;

/// A handle identifying one registered callback. Registering the same closure twice yields two
/// distinct handles, so one of two duplicates can be removed while the other stays subscribed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// The listener registry itself: event names mapped to callbacks in registration order.
#[derive(Default)]
pub struct EventEmitter {
    listeners: HashMap<String, Vec<(ListenerId, Callback)>>,
    next_id: u64,
}

impl EventEmitter {
    /// Creates an empty registry.
    pub fn new() -> EventEmitter {
        EventEmitter {
            listeners: HashMap::new(),
            next_id: 0,
        }
    }

    /// Appends a callback for the given event name and returns its handle. Duplicates are
    /// allowed: every registration gets its own slot and its own handle.
    pub fn on(&mut self, name: &str, callback: Callback) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners
            .entry(name.to_string())
            .or_insert_with(Vec::new)
            .push((id, callback));
        id
    }

    /// Removes the first registered callback with the given handle, leaving any other
    /// registrations (including duplicates of the same closure under other handles) in place.
    /// Unknown handles are ignored.
    pub fn off(&mut self, name: &str, id: ListenerId) {
        if let Some(callbacks) = self.listeners.get_mut(name) {
            if let Some(pos) = callbacks.iter().position(|&(ref cb_id, _)| *cb_id == id) {
                callbacks.remove(pos);
            }
        }
    }

    /// Removes every callback registered for the given event name.
    pub fn off_all(&mut self, name: &str) {
        self.listeners.remove(name);
    }

    /// Invokes every callback registered for the given event name, synchronously and in
    /// registration order. A panicking callback propagates immediately, so callbacks after it do
    /// not run; nothing is swallowed.
    pub fn trigger(&mut self, name: &str) {
        if let Some(callbacks) = self.listeners.get_mut(name) {
            for &mut (_, ref mut callback) in callbacks.iter_mut() {
                callback();
            }
        }
    }
}
