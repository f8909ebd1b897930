//! # brookui-core
//!
//! The element tree at the heart of brookui: a fluent builder DSL producing
//! immutable, serializable element nodes.
//!
//! The crate has three concerns:
//!
//! - [`element`] — the typed tree node ([`ElementNode`]) and its canonical
//!   JSON form.
//! - [`builder`] — the construction DSL ([`div`], [`text`], [`button`], …)
//!   whose terminal [`ElementBuilder::build`] yields an immutable
//!   [`Element`].
//! - [`event`] — the out-of-band handler registry; callbacks never appear in
//!   the serialized document.
//!
//! Rendering, windowing and the update protocol live in the `brookui` crate;
//! this crate performs no I/O.

pub mod builder;
pub mod element;
pub mod error;
pub mod event;

pub use builder::{
    Element, ElementBuilder, button, checkbox, div, image, input, radio, select, text,
};
pub use element::{ElementNode, ElementType, Scalar, SelectOption};
pub use error::Error;
pub use event::{Event, EventHandler, EventKind, HandlerKey, HandlerMap};

#[cfg(test)]
mod tests;
