//! The application-facing window façade.
//!
//! [`Window`] owns an [`UpdateChannel`] and the window chrome configuration
//! (title, size, background). The actual OS window, webview and event loop
//! are the render surface's business; this type only speaks the update
//! protocol to whatever surface gets attached and routes events back to
//! registered handlers.

use brookui_core::{Element, ElementNode, Event, HandlerMap};
use tracing::debug;

use crate::error::Error;
use crate::update::{RenderSurface, UpdateChannel};

/// An RGBA color, 8 bits per channel.
pub type Rgba = (u8, u8, u8, u8);

const DEFAULT_BACKGROUND: Rgba = (26, 26, 26, 255); // #1a1a1a

/// Parses `#rgb`, `#rrggbb` or `#rrggbbaa` into an RGBA tuple.
#[must_use]
pub fn parse_hex_color(hex: &str) -> Option<Rgba> {
    let hex = hex.trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }
    let channel = |range: core::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    match hex.len() {
        3 => {
            let nibble = |index| {
                u8::from_str_radix(&hex[index..=index], 16)
                    .ok()
                    .map(|n| n * 17)
            };
            Some((nibble(0)?, nibble(1)?, nibble(2)?, 255))
        }
        6 => Some((channel(0..2)?, channel(2..4)?, channel(4..6)?, 255)),
        8 => Some((
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
        )),
        _ => None,
    }
}

/// Window configuration plus the update channel to its render surface.
///
/// # Example
///
/// ```
/// use brookui::prelude::*;
///
/// let mut window = Window::new("Counter").size(400, 300).background_color("#0a0a0a");
/// window.set_root(div().size_full().build()).unwrap();
/// ```
#[derive(Debug)]
pub struct Window {
    title: String,
    width: u32,
    height: u32,
    background: Rgba,
    channel: UpdateChannel,
}

impl Window {
    /// Creates a window with the given title and the default 800×600 size.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            width: 800,
            height: 600,
            background: DEFAULT_BACKGROUND,
            channel: UpdateChannel::new(),
        }
    }

    /// Sets the inner size in logical pixels.
    #[must_use]
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the background color from a hex string.
    ///
    /// Unparseable input falls back to the default dark background.
    #[must_use]
    pub fn background_color(mut self, hex: &str) -> Self {
        self.background = parse_hex_color(hex).unwrap_or(DEFAULT_BACKGROUND);
        self
    }

    /// The window title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The inner width in logical pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The inner height in logical pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The background color.
    #[must_use]
    pub fn background(&self) -> Rgba {
        self.background
    }

    /// Attaches the render surface; a root set beforehand is submitted
    /// immediately.
    ///
    /// # Errors
    ///
    /// Propagates the surface's failure to accept the pending root.
    pub fn attach(&mut self, surface: impl RenderSurface + 'static) -> Result<(), Error> {
        debug!(title = %self.title, "attaching render surface");
        self.channel.attach(surface)
    }

    /// Replaces the entire rendered tree.
    ///
    /// # Errors
    ///
    /// Propagates surface submission failures.
    pub fn set_root(&mut self, element: Element) -> Result<(), Error> {
        self.channel.set_root(element)
    }

    /// Replaces the subtree addressed by `id`; see
    /// [`UpdateChannel::update_element`].
    ///
    /// # Errors
    ///
    /// Propagates surface submission failures.
    pub fn update_element(&mut self, id: impl Into<String>, element: Element) -> Result<(), Error> {
        self.channel.update_element(id, element)
    }

    /// The tracked copy of the last rendered tree.
    #[must_use]
    pub fn root(&self) -> Option<&ElementNode> {
        self.channel.root()
    }

    /// Every handler registered for the rendered tree.
    #[must_use]
    pub fn handlers(&self) -> &HandlerMap {
        self.channel.handlers()
    }

    /// Routes an event from the render surface to its registered handler.
    /// Returns whether a handler ran.
    pub fn dispatch(&self, target: &str, event: Event) -> bool {
        self.channel.dispatch(target, event)
    }
}
