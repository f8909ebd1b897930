#![doc = include_str!("../README.md")]

pub mod error;
pub mod update;
pub mod window;

pub use brookui_assets as assets;
#[doc(inline)]
pub use brookui_core::{
    Element, ElementBuilder, ElementNode, ElementType, Event, EventHandler, EventKind, HandlerMap,
    Scalar, SelectOption, builder, button, checkbox, div, element, event, image, input, radio,
    select, text,
};

pub use error::Error;
pub use update::{Message, RenderSurface, UpdateChannel};
pub use window::Window;

pub mod prelude {
    //! Everything needed to build and push an element tree, in one import.
    //!
    //! # Example
    //!
    //! ```
    //! use brookui::prelude::*;
    //!
    //! let root = div().v_flex().gap(8).child_text("hi").build();
    //! let mut window = Window::new("App");
    //! window.set_root(root).unwrap();
    //! ```

    pub use crate::assets::AssetCatalog;
    pub use crate::error::Error;
    pub use crate::update::{Message, RenderSurface, UpdateChannel};
    pub use crate::window::Window;
    pub use brookui_core::{
        Element, ElementBuilder, ElementType, Event, EventKind, Scalar, button, checkbox, div,
        image, input, radio, select, text,
    };
}
