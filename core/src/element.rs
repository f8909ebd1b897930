//! The element tree data model and its canonical JSON form.
//!
//! An [`ElementNode`] is an immutable snapshot produced by
//! [`ElementBuilder::build`](crate::builder::ElementBuilder::build). The node
//! is a closed, typed structure: every attribute the wire schema knows about
//! is a concrete field, and fields that were never set are omitted from the
//! serialized document rather than emitted as `null`.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The closed set of element tags understood by the render surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    /// Generic container.
    #[default]
    Div,
    /// Text run; the content lives in `text_content`.
    Text,
    /// Clickable button with a `label`.
    Button,
    /// Single-line text input.
    Input,
    /// Checkbox with a `label` and a `checked` state.
    Checkbox,
    /// Radio button; grouped through `radio_group`.
    Radio,
    /// Drop-down with ordered `options`.
    Select,
    /// Image; the source URI lives in `text_content`.
    Image,
}

impl ElementType {
    /// The lowercase tag as it appears on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Div => "div",
            Self::Text => "text",
            Self::Button => "button",
            Self::Input => "input",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Select => "select",
            Self::Image => "image",
        }
    }
}

impl core::fmt::Display for ElementType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An attribute value that preserves the caller's lexical category.
///
/// `gap(16)` must serialize as the integer `16` while `opacity(0.5)` must
/// stay fractional, so integers and floats are kept apart instead of being
/// widened into a single numeric type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Boolean flag.
    Bool(bool),
    /// Integral number.
    Int(i64),
    /// Floating-point number.
    Float(f64),
    /// Free-form string, e.g. `"100%"` or `"auto"`.
    Str(String),
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// One entry of a `select` element, serialized as `{value, label}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// The value submitted when this option is chosen.
    pub value: String,
    /// The human-readable label.
    pub label: String,
}

/// An immutable element tree node.
///
/// Nodes are only ever produced by a builder's `build()`; nothing in the
/// public API mutates a node that has already been handed out. The field
/// order below is the canonical serialization order, which makes the JSON
/// mapping referentially transparent: serializing the same node twice yields
/// byte-identical output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementNode {
    /// Element tag; always present on the wire.
    pub element_type: ElementType,

    // Content
    /// Text body for `text`, source URI for `image`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,
    /// Label for `button`, `checkbox` and `radio`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Placeholder shown by an empty `input`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Current value of an `input` or `radio`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Checked state of a `checkbox` or `radio`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    /// Mutual-exclusion group of a `radio`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radio_group: Option<String>,
    /// Ordered options of a `select` element.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    /// Currently selected value of a `select`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<String>,
    /// Alternative text of an `image`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    /// Object-fit mode of an `image`, e.g. `"cover"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_fit: Option<String>,

    // Identity
    /// Stable identifier used to address this subtree in partial updates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// CSS class names, in registration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub class_names: Vec<String>,

    // Styling
    /// Background color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Foreground text color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    /// Border color, all four sides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    /// Border width, all four sides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<Scalar>,
    /// Top border width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_top_width: Option<Scalar>,
    /// Top border color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_top_color: Option<String>,
    /// Bottom border width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom_width: Option<Scalar>,
    /// Bottom border color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom_color: Option<String>,
    /// Corner radius, all four corners.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<Scalar>,
    /// Top-left corner radius.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius_top_left: Option<Scalar>,
    /// Top-right corner radius.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius_top_right: Option<Scalar>,
    /// Bottom-left corner radius.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius_bottom_left: Option<Scalar>,
    /// Bottom-right corner radius.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius_bottom_right: Option<Scalar>,
    /// Uniform padding, all four sides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Scalar>,
    /// Top padding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<Scalar>,
    /// Bottom padding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<Scalar>,
    /// Left padding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<Scalar>,
    /// Right padding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<Scalar>,
    /// Uniform margin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Scalar>,
    /// Width, numeric or a CSS length like `"100%"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Scalar>,
    /// Height, numeric or a CSS length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Scalar>,
    /// Minimum width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<Scalar>,
    /// Maximum width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<Scalar>,
    /// Minimum height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<Scalar>,
    /// Maximum height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<Scalar>,
    /// Opacity, `0.0` to `1.0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<Scalar>,
    /// Cursor shown on hover, e.g. `"pointer"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,

    // Text
    /// Font size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<Scalar>,
    /// Font weight: `"normal"`, `"bold"` or `"100"`–`"900"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    /// Text alignment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    /// Overflow behavior, e.g. `"hidden"` or `"auto"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow: Option<String>,
    /// Word-wrap behavior.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_wrap: Option<String>,

    // Flex layout
    /// Main axis: `"row"` or `"column"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<String>,
    /// Cross-axis alignment of children.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<String>,
    /// Main-axis distribution of children.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<String>,
    /// Gap between children.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<Scalar>,
    /// Flex wrapping mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_wrap: Option<String>,
    /// Flex grow factor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_grow: Option<Scalar>,
    /// Flex shrink factor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_shrink: Option<Scalar>,
    /// Flex basis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_basis: Option<Scalar>,

    // Grid layout
    /// Whether the element lays children out as a grid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_grid: Option<bool>,
    /// Grid column template, e.g. `"1fr 1fr"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_template_columns: Option<String>,
    /// Grid row template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_template_rows: Option<String>,
    /// This element's column placement within its parent grid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_column: Option<String>,
    /// This element's row placement within its parent grid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_row: Option<String>,
    /// Item placement in both axes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_items: Option<String>,

    // Positioning
    /// Positioning mode, e.g. `"absolute"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// Top offset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<Scalar>,
    /// Left offset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<Scalar>,
    /// Right offset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<Scalar>,
    /// Bottom offset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<Scalar>,

    // Transitions and overlays
    /// Raw `transition` value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<String>,
    /// Background color while hovered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_bg: Option<String>,
    /// Text color while hovered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_text_color: Option<String>,
    /// Border color while hovered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_border_color: Option<String>,
    /// Scale factor while hovered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_scale: Option<Scalar>,
    /// Opacity while hovered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_opacity: Option<Scalar>,
    /// Border color while focused.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_border_color: Option<String>,
    /// Background color while focused.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_bg: Option<String>,

    /// Whether the element fills all available space.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_full: Option<bool>,

    /// Ordered children; always present on the wire, defaulting to `[]`.
    #[serde(default)]
    pub children: Vec<ElementNode>,
}

impl ElementNode {
    /// Creates an empty node with the given tag.
    #[must_use]
    pub fn new(element_type: ElementType) -> Self {
        Self {
            element_type,
            ..Self::default()
        }
    }

    /// Serializes this node to its canonical JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the underlying serializer fails; this is
    /// unreachable for builder-produced nodes.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes this node to a [`serde_json::Value`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the underlying serializer fails.
    pub fn to_value(&self) -> Result<serde_json::Value, Error> {
        Ok(serde_json::to_value(self)?)
    }

    /// Returns the first node in this subtree whose `user_id` equals `id`,
    /// searching depth-first in child order.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Self> {
        if self.user_id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Replaces the first subtree whose `user_id` equals `id` with
    /// `replacement`, searching depth-first in child order.
    ///
    /// Returns `true` if a matching node was found. When no node matches,
    /// the tree is left untouched.
    pub fn replace(&mut self, id: &str, replacement: &Self) -> bool {
        if self.user_id.as_deref() == Some(id) {
            *self = replacement.clone();
            return true;
        }
        self.children
            .iter_mut()
            .any(|child| child.replace(id, replacement))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_keeps_int_and_float_apart() {
        assert_eq!(serde_json::to_string(&Scalar::from(16)).unwrap(), "16");
        assert_eq!(serde_json::to_string(&Scalar::from(0.5)).unwrap(), "0.5");
        assert_eq!(
            serde_json::to_string(&Scalar::from("0%")).unwrap(),
            "\"0%\""
        );
    }

    #[test]
    fn unset_fields_are_omitted() {
        let node = ElementNode::new(ElementType::Div);
        let json = node.to_json().unwrap();
        assert_eq!(json, r#"{"element_type":"div","children":[]}"#);
    }

    #[test]
    fn serialization_is_idempotent() {
        let mut node = ElementNode::new(ElementType::Text);
        node.text_content = Some("hi".into());
        node.opacity = Some(0.5.into());
        assert_eq!(node.to_json().unwrap(), node.to_json().unwrap());
    }

    #[test]
    fn round_trips_through_json() {
        let mut node = ElementNode::new(ElementType::Select);
        node.options.push(SelectOption {
            value: "a".into(),
            label: "A".into(),
        });
        node.selected = Some("a".into());
        node.children.push(ElementNode::new(ElementType::Text));
        let json = node.to_json().unwrap();
        let back: ElementNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn replace_targets_first_match_and_leaves_siblings() {
        let mut root = ElementNode::new(ElementType::Div);
        let mut a = ElementNode::new(ElementType::Text);
        a.user_id = Some("a".into());
        let mut b = ElementNode::new(ElementType::Text);
        b.user_id = Some("b".into());
        root.children.push(a);
        root.children.push(b);

        let mut replacement = ElementNode::new(ElementType::Button);
        replacement.user_id = Some("a".into());
        assert!(root.replace("a", &replacement));
        assert_eq!(root.children[0].element_type, ElementType::Button);
        assert_eq!(root.children[1].element_type, ElementType::Text);
        assert!(!root.replace("missing", &replacement));
    }
}
