//! Event kinds and the out-of-band handler registry.
//!
//! Callbacks never appear in the serialized document. Each registration is
//! recorded against a target token — the node's `user_id` when one is set,
//! otherwise a generated v4 uuid — and the resulting map travels with the
//! built element so the application shell can dispatch by
//! `(target, event kind)` at runtime.

use std::collections::HashMap;
use std::sync::Arc;

/// The kinds of events the render surface can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum EventKind {
    /// A pointer click on the element.
    Click,
    /// A keystroke-level change of an input's value.
    Input,
    /// A committed change of a form control's value.
    Change,
}

/// An event delivered by the render surface.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Event {
    /// The element was clicked.
    Click,
    /// An input's value changed to the carried string.
    Input(String),
    /// A form control committed the carried value.
    Change(String),
}

impl Event {
    /// The kind this event dispatches under.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Click => EventKind::Click,
            Self::Input(_) => EventKind::Input,
            Self::Change(_) => EventKind::Change,
        }
    }
}

/// A registered event callback.
///
/// Handlers are invoked by the external event loop, which makes no promise
/// about thread identity, so the closure must be `Send + Sync`.
#[derive(Clone)]
pub struct EventHandler(Arc<dyn Fn(Event) + Send + Sync>);

impl EventHandler {
    /// Wraps a closure taking the full [`Event`].
    pub fn new(handler: impl Fn(Event) + Send + Sync + 'static) -> Self {
        Self(Arc::new(handler))
    }

    /// Invokes the handler with `event`.
    pub fn call(&self, event: Event) {
        (self.0)(event);
    }
}

impl core::fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("EventHandler")
    }
}

/// The key a handler is registered under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandlerKey {
    /// The node's `user_id`, or a generated token for anonymous nodes.
    pub target: String,
    /// The event kind the handler listens for.
    pub kind: EventKind,
}

impl HandlerKey {
    /// Creates a key for `target` and `kind`.
    #[must_use]
    pub fn new(target: impl Into<String>, kind: EventKind) -> Self {
        Self {
            target: target.into(),
            kind,
        }
    }
}

/// All handlers registered within one built element tree.
#[derive(Debug, Clone, Default)]
pub struct HandlerMap {
    entries: HashMap<HandlerKey, EventHandler>,
}

impl HandlerMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` under `key`. A later registration for the same
    /// key wins.
    pub fn insert(&mut self, key: HandlerKey, handler: EventHandler) {
        self.entries.insert(key, handler);
    }

    /// Looks up the handler registered for `(target, kind)`.
    #[must_use]
    pub fn get(&self, target: &str, kind: EventKind) -> Option<&EventHandler> {
        self.entries.get(&HandlerKey::new(target, kind))
    }

    /// Absorbs all entries of `other`; entries of `other` win on key clash.
    pub fn merge(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no handler is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all `(key, handler)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (&HandlerKey, &EventHandler)> {
        self.entries.iter()
    }
}
