//! The identifier-addressed partial-update protocol.
//!
//! The channel speaks two message shapes to the render surface: a full-tree
//! replacement and a single named-subtree replacement. It never diffs trees —
//! "partial" refers to the scope of a replacement, not to attribute-level
//! patching. Messages are submitted synchronously, one per call, in call
//! order; there is no batching or coalescing.

use brookui_core::{Element, ElementNode, Event, HandlerMap};
use serde::Serialize;
use tracing::debug;

use crate::error::Error;

/// One message on the wire to the render surface.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Message {
    /// Replace the whole rendered document with `tree`.
    SetRoot {
        /// The new document root.
        tree: ElementNode,
    },
    /// Replace the subtree previously rendered under `user_id == id` with
    /// `tree`.
    UpdateElement {
        /// The `user_id` addressing the slot to replace.
        id: String,
        /// The replacement subtree.
        tree: ElementNode,
    },
}

impl Message {
    /// Serializes the message to the JSON handed to the render surface.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the underlying serializer fails; this is
    /// unreachable for builder-produced trees.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }
}

/// The seam to the external rendering collaborator.
///
/// Implementations materialize submitted trees into pixels; how they do so is
/// outside this crate's contract. Submission happens on the caller's thread
/// and must not block.
pub trait RenderSurface {
    /// Consumes one protocol message.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Surface`] when the surface cannot accept the message.
    fn submit(&mut self, message: &Message) -> Result<(), Error>;
}

/// Pushes tree replacements to a render surface and tracks what was sent.
///
/// The channel keeps its own copy of the last rendered tree so that targeted
/// updates can be applied locally too; re-serializing [`root`](Self::root)
/// after an update reflects the replaced subtree while all siblings are
/// untouched. The "no surface attached yet" state is a first-class variant:
/// a root set before [`attach`](Self::attach) is kept pending and submitted
/// once a surface arrives.
#[derive(Default)]
pub struct UpdateChannel {
    surface: Option<Box<dyn RenderSurface>>,
    root: Option<ElementNode>,
    handlers: HandlerMap,
}

impl core::fmt::Debug for UpdateChannel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("UpdateChannel")
            .field("attached", &self.surface.is_some())
            .field("has_root", &self.root.is_some())
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

impl UpdateChannel {
    /// Creates a channel with no surface attached.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches the render surface. A pending root, if any, is submitted
    /// immediately.
    ///
    /// # Errors
    ///
    /// Propagates the surface's failure to accept the pending root.
    pub fn attach(&mut self, surface: impl RenderSurface + 'static) -> Result<(), Error> {
        self.surface = Some(Box::new(surface));
        if let Some(tree) = self.root.clone() {
            debug!("submitting pending root to newly attached surface");
            self.submit(Message::SetRoot { tree })?;
        }
        Ok(())
    }

    /// Whether a render surface is attached.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    /// Replaces the entire rendered tree.
    ///
    /// The element's handlers supersede all previously registered ones —
    /// callbacks live exactly as long as the tree that registered them.
    ///
    /// # Errors
    ///
    /// Propagates surface submission failures.
    pub fn set_root(&mut self, element: Element) -> Result<(), Error> {
        let (node, handlers) = element.into_parts();
        self.handlers = handlers;
        self.root = Some(node.clone());
        self.submit(Message::SetRoot { tree: node })
    }

    /// Replaces the subtree whose `user_id` equals `id`.
    ///
    /// The replacement is applied to the tracked tree (first match,
    /// depth-first) and forwarded to the surface. An `id` unknown to the
    /// tracked tree leaves the tracked copy untouched but still forwards the
    /// message — materialization is the surface's concern. Called before any
    /// root exists, this is a complete no-op.
    ///
    /// # Errors
    ///
    /// Propagates surface submission failures.
    pub fn update_element(&mut self, id: impl Into<String>, element: Element) -> Result<(), Error> {
        let id = id.into();
        let Some(root) = self.root.as_mut() else {
            debug!(id = %id, "update_element before set_root is a no-op");
            return Ok(());
        };

        let (node, handlers) = element.into_parts();
        if !root.replace(&id, &node) {
            debug!(id = %id, "id not present in tracked tree; forwarding unchanged");
        }
        self.handlers.merge(handlers);
        self.submit(Message::UpdateElement { id, tree: node })
    }

    /// The channel's copy of the last rendered tree.
    #[must_use]
    pub fn root(&self) -> Option<&ElementNode> {
        self.root.as_ref()
    }

    /// Every handler currently registered for the rendered tree.
    #[must_use]
    pub fn handlers(&self) -> &HandlerMap {
        &self.handlers
    }

    /// Dispatches an event reported by the render surface.
    ///
    /// Looks up the handler registered under `(target, event.kind())` and
    /// invokes it. Returns whether a handler ran; an unknown target is a
    /// normal outcome.
    pub fn dispatch(&self, target: &str, event: Event) -> bool {
        match self.handlers.get(target, event.kind()) {
            Some(handler) => {
                handler.call(event);
                true
            }
            None => {
                debug!(target = %target, "no handler registered for event");
                false
            }
        }
    }

    fn submit(&mut self, message: Message) -> Result<(), Error> {
        match self.surface.as_mut() {
            Some(surface) => surface.submit(&message),
            None => {
                debug!("no surface attached; message kept pending");
                Ok(())
            }
        }
    }
}
