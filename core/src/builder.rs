//! The fluent element construction DSL.
//!
//! Builders are owned values: every modifier consumes `self` and returns it,
//! and [`ElementBuilder::build`] consumes the builder outright. A built
//! [`Element`] can therefore never be affected by later builder calls — the
//! copy-on-build guarantee is structural, not a runtime convention.
//!
//! # Example
//!
//! ```
//! use brookui_core::builder::{button, div, text};
//!
//! let card = div()
//!     .v_flex()
//!     .gap(8)
//!     .padding(16)
//!     .bg("#171717")
//!     .rounded(12)
//!     .child_builder(text("Hello").text_size(18).text_color("#fafafa"))
//!     .child_builder(button("Ok").on_click(|| {}))
//!     .build();
//!
//! assert_eq!(card.node().children.len(), 2);
//! ```

use uuid::Uuid;

use crate::element::{ElementNode, ElementType, Scalar, SelectOption};
use crate::error::Error;
use crate::event::{Event, EventHandler, EventKind, HandlerKey, HandlerMap};

/// An immutable built element: the node tree plus every handler registered
/// while constructing it.
#[derive(Debug, Clone)]
pub struct Element {
    node: ElementNode,
    handlers: HandlerMap,
}

impl Element {
    /// The underlying tree node.
    #[must_use]
    pub fn node(&self) -> &ElementNode {
        &self.node
    }

    /// Consumes the element, returning the bare node.
    #[must_use]
    pub fn into_node(self) -> ElementNode {
        self.node
    }

    /// All handlers registered in this tree.
    #[must_use]
    pub fn handlers(&self) -> &HandlerMap {
        &self.handlers
    }

    /// Looks up a handler by its registration target and event kind.
    #[must_use]
    pub fn handler(&self, target: &str, kind: EventKind) -> Option<&EventHandler> {
        self.handlers.get(target, kind)
    }

    /// Splits the element into its node and handler map.
    #[must_use]
    pub fn into_parts(self) -> (ElementNode, HandlerMap) {
        (self.node, self.handlers)
    }

    /// Serializes the tree to its canonical JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the underlying serializer fails; this is
    /// unreachable for builder-produced trees.
    pub fn to_json(&self) -> Result<String, Error> {
        self.node.to_json()
    }

    /// Serializes the tree to a [`serde_json::Value`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the underlying serializer fails.
    pub fn to_value(&self) -> Result<serde_json::Value, Error> {
        self.node.to_value()
    }
}

/// Fluent accumulator for one element and its subtree.
///
/// Created by the tag constructors ([`div`], [`text`], [`button`], [`input`],
/// [`checkbox`], [`radio`], [`select`], [`image`]); finished with
/// [`build`](Self::build).
#[derive(Debug)]
#[must_use = "builders do nothing until `build()` is called"]
pub struct ElementBuilder {
    node: ElementNode,
    pending: Vec<(EventKind, EventHandler)>,
    handlers: HandlerMap,
}

/// Creates a `div` container builder.
pub fn div() -> ElementBuilder {
    ElementBuilder::new(ElementType::Div)
}

/// Creates a `text` builder with the given content.
pub fn text(content: impl Into<String>) -> ElementBuilder {
    let mut builder = ElementBuilder::new(ElementType::Text);
    builder.node.text_content = Some(content.into());
    builder
}

/// Creates a `button` builder with the given label.
pub fn button(label: impl Into<String>) -> ElementBuilder {
    let mut builder = ElementBuilder::new(ElementType::Button);
    builder.node.label = Some(label.into());
    builder
}

/// Creates an `input` builder.
pub fn input() -> ElementBuilder {
    ElementBuilder::new(ElementType::Input)
}

/// Creates a `checkbox` builder with the given label.
pub fn checkbox(label: impl Into<String>) -> ElementBuilder {
    let mut builder = ElementBuilder::new(ElementType::Checkbox);
    builder.node.label = Some(label.into());
    builder
}

/// Creates a `radio` builder with the given label.
pub fn radio(label: impl Into<String>) -> ElementBuilder {
    let mut builder = ElementBuilder::new(ElementType::Radio);
    builder.node.label = Some(label.into());
    builder
}

/// Creates a `select` builder.
pub fn select() -> ElementBuilder {
    ElementBuilder::new(ElementType::Select)
}

/// Creates an `image` builder with the given source URI.
///
/// The source may be an `http(s)` URL, a `data:` URI, or an `asset:<name>`
/// reference resolved through the asset catalog.
pub fn image(src: impl Into<String>) -> ElementBuilder {
    let mut builder = ElementBuilder::new(ElementType::Image);
    builder.node.text_content = Some(src.into());
    builder
}

impl ElementBuilder {
    fn new(element_type: ElementType) -> Self {
        Self {
            node: ElementNode::new(element_type),
            pending: Vec::new(),
            handlers: HandlerMap::new(),
        }
    }

    fn expect_kind(&self, allowed: &[ElementType], method: &str) {
        assert!(
            allowed.contains(&self.node.element_type),
            "`{method}()` is not valid on a `{}` element",
            self.node.element_type
        );
    }

    // ------------------------------------------------------------------
    // Identity
    // ------------------------------------------------------------------

    /// Sets the `user_id` used to address this subtree in partial updates.
    ///
    /// Ids are unique by convention within one rendered tree; nothing here
    /// enforces it.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.node.user_id = Some(id.into());
        self
    }

    /// Appends one class name. Duplicates are kept.
    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.node.class_names.push(class.into());
        self
    }

    /// Replaces the whole class list.
    pub fn classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.node.class_names = classes.into_iter().map(Into::into).collect();
        self
    }

    // ------------------------------------------------------------------
    // Children
    // ------------------------------------------------------------------

    /// Appends an already-built element as a child, absorbing its handlers.
    pub fn child(mut self, child: Element) -> Self {
        let (node, handlers) = child.into_parts();
        self.node.children.push(node);
        self.handlers.merge(handlers);
        self
    }

    /// Builds `child` and appends it.
    pub fn child_builder(self, child: Self) -> Self {
        self.child(child.build())
    }

    /// Appends a plain text child.
    pub fn child_text(self, content: impl Into<String>) -> Self {
        self.child(text(content).build())
    }

    // ------------------------------------------------------------------
    // Sizing
    // ------------------------------------------------------------------

    /// Sets the width.
    pub fn width(mut self, width: impl Into<Scalar>) -> Self {
        self.node.width = Some(width.into());
        self
    }

    /// Sets the height.
    pub fn height(mut self, height: impl Into<Scalar>) -> Self {
        self.node.height = Some(height.into());
        self
    }

    /// Sets the minimum width.
    pub fn min_width(mut self, width: impl Into<Scalar>) -> Self {
        self.node.min_width = Some(width.into());
        self
    }

    /// Sets the maximum width.
    pub fn max_width(mut self, width: impl Into<Scalar>) -> Self {
        self.node.max_width = Some(width.into());
        self
    }

    /// Sets the minimum height.
    pub fn min_height(mut self, height: impl Into<Scalar>) -> Self {
        self.node.min_height = Some(height.into());
        self
    }

    /// Sets the maximum height.
    pub fn max_height(mut self, height: impl Into<Scalar>) -> Self {
        self.node.max_height = Some(height.into());
        self
    }

    /// Makes the element fill all available space.
    pub fn size_full(mut self) -> Self {
        self.node.size_full = Some(true);
        self
    }

    /// Stretches the element to the full width of its parent.
    pub fn full_width(mut self) -> Self {
        self.node.width = Some("100%".into());
        self
    }

    // ------------------------------------------------------------------
    // Flex layout
    // ------------------------------------------------------------------

    /// Lays children out in a vertical flex column.
    pub fn v_flex(mut self) -> Self {
        self.node.flex_direction = Some("column".into());
        self
    }

    /// Lays children out in a horizontal flex row.
    pub fn h_flex(mut self) -> Self {
        self.node.flex_direction = Some("row".into());
        self
    }

    /// Centers children on the cross axis.
    pub fn items_center(mut self) -> Self {
        self.node.align_items = Some("center".into());
        self
    }

    /// Aligns children to the start of the cross axis.
    pub fn items_start(mut self) -> Self {
        self.node.align_items = Some("flex-start".into());
        self
    }

    /// Aligns children to the end of the cross axis.
    pub fn items_end(mut self) -> Self {
        self.node.align_items = Some("flex-end".into());
        self
    }

    /// Centers children on the main axis.
    pub fn justify_center(mut self) -> Self {
        self.node.justify_content = Some("center".into());
        self
    }

    /// Distributes the free space between children.
    pub fn justify_between(mut self) -> Self {
        self.node.justify_content = Some("space-between".into());
        self
    }

    /// Packs children to the start of the main axis.
    pub fn justify_start(mut self) -> Self {
        self.node.justify_content = Some("flex-start".into());
        self
    }

    /// Packs children to the end of the main axis.
    pub fn justify_end(mut self) -> Self {
        self.node.justify_content = Some("flex-end".into());
        self
    }

    /// Sets the gap between children.
    pub fn gap(mut self, gap: impl Into<Scalar>) -> Self {
        self.node.gap = Some(gap.into());
        self
    }

    /// Sets `flex-wrap`.
    pub fn flex_wrap(mut self, wrap: impl Into<String>) -> Self {
        self.node.flex_wrap = Some(wrap.into());
        self
    }

    /// Sets the flex grow factor.
    pub fn flex_grow(mut self, grow: impl Into<Scalar>) -> Self {
        self.node.flex_grow = Some(grow.into());
        self
    }

    /// Sets the flex shrink factor.
    pub fn flex_shrink(mut self, shrink: impl Into<Scalar>) -> Self {
        self.node.flex_shrink = Some(shrink.into());
        self
    }

    /// Sets the flex basis.
    pub fn flex_basis(mut self, basis: impl Into<Scalar>) -> Self {
        self.node.flex_basis = Some(basis.into());
        self
    }

    /// Shorthand for `flex: 1` — grow 1, shrink 1, basis `"0%"`.
    pub fn flex_1(mut self) -> Self {
        self.node.flex_grow = Some(1.into());
        self.node.flex_shrink = Some(1.into());
        self.node.flex_basis = Some("0%".into());
        self
    }

    // ------------------------------------------------------------------
    // Grid layout
    // ------------------------------------------------------------------

    /// Switches the element to grid display.
    pub fn grid(mut self) -> Self {
        self.node.display_grid = Some(true);
        self
    }

    /// Sets the grid column template; implies grid display.
    pub fn grid_cols(mut self, template: impl Into<String>) -> Self {
        self.node.display_grid = Some(true);
        self.node.grid_template_columns = Some(template.into());
        self
    }

    /// Sets the grid row template; implies grid display.
    pub fn grid_rows(mut self, template: impl Into<String>) -> Self {
        self.node.display_grid = Some(true);
        self.node.grid_template_rows = Some(template.into());
        self
    }

    /// Sets this element's `grid-column` placement.
    pub fn grid_column(mut self, placement: impl Into<String>) -> Self {
        self.node.grid_column = Some(placement.into());
        self
    }

    /// Sets this element's `grid-row` placement.
    pub fn grid_row(mut self, placement: impl Into<String>) -> Self {
        self.node.grid_row = Some(placement.into());
        self
    }

    /// Sets `place-items`.
    pub fn place_items(mut self, value: impl Into<String>) -> Self {
        self.node.place_items = Some(value.into());
        self
    }

    /// Centers grid items in both axes; implies grid display.
    pub fn place_center(mut self) -> Self {
        self.node.display_grid = Some(true);
        self.node.place_items = Some("center".into());
        self
    }

    // ------------------------------------------------------------------
    // Spacing
    // ------------------------------------------------------------------

    /// Sets uniform padding on all four sides.
    pub fn padding(mut self, padding: impl Into<Scalar>) -> Self {
        self.node.padding = Some(padding.into());
        self
    }

    /// Sets vertical (`y`: top and bottom) and horizontal (`x`: left and
    /// right) padding. The uniform `padding` key is never touched.
    pub fn padding_xy(mut self, y: impl Into<Scalar>, x: impl Into<Scalar>) -> Self {
        let y = y.into();
        let x = x.into();
        self.node.padding_top = Some(y.clone());
        self.node.padding_bottom = Some(y);
        self.node.padding_left = Some(x.clone());
        self.node.padding_right = Some(x);
        self
    }

    /// Sets the top padding.
    pub fn padding_top(mut self, padding: impl Into<Scalar>) -> Self {
        self.node.padding_top = Some(padding.into());
        self
    }

    /// Sets the bottom padding.
    pub fn padding_bottom(mut self, padding: impl Into<Scalar>) -> Self {
        self.node.padding_bottom = Some(padding.into());
        self
    }

    /// Sets the left padding.
    pub fn padding_left(mut self, padding: impl Into<Scalar>) -> Self {
        self.node.padding_left = Some(padding.into());
        self
    }

    /// Sets the right padding.
    pub fn padding_right(mut self, padding: impl Into<Scalar>) -> Self {
        self.node.padding_right = Some(padding.into());
        self
    }

    /// Sets the margin.
    pub fn margin(mut self, margin: impl Into<Scalar>) -> Self {
        self.node.margin = Some(margin.into());
        self
    }

    // ------------------------------------------------------------------
    // Styling
    // ------------------------------------------------------------------

    /// Sets the background color, e.g. `"#1a1a1a"` or `"transparent"`.
    pub fn bg(mut self, color: impl Into<String>) -> Self {
        self.node.background_color = Some(color.into());
        self
    }

    /// Sets the text color.
    pub fn text_color(mut self, color: impl Into<String>) -> Self {
        self.node.text_color = Some(color.into());
        self
    }

    /// Rounds all four corners.
    pub fn rounded(mut self, radius: impl Into<Scalar>) -> Self {
        self.node.border_radius = Some(radius.into());
        self
    }

    /// Rounds the top-left corner.
    pub fn rounded_top_left(mut self, radius: impl Into<Scalar>) -> Self {
        self.node.border_radius_top_left = Some(radius.into());
        self
    }

    /// Rounds the top-right corner.
    pub fn rounded_top_right(mut self, radius: impl Into<Scalar>) -> Self {
        self.node.border_radius_top_right = Some(radius.into());
        self
    }

    /// Rounds the bottom-left corner.
    pub fn rounded_bottom_left(mut self, radius: impl Into<Scalar>) -> Self {
        self.node.border_radius_bottom_left = Some(radius.into());
        self
    }

    /// Rounds the bottom-right corner.
    pub fn rounded_bottom_right(mut self, radius: impl Into<Scalar>) -> Self {
        self.node.border_radius_bottom_right = Some(radius.into());
        self
    }

    /// Sets border width and color in one call.
    pub fn border(mut self, width: impl Into<Scalar>, color: impl Into<String>) -> Self {
        self.node.border_width = Some(width.into());
        self.node.border_color = Some(color.into());
        self
    }

    /// Sets width and color of the top border only, e.g. as a header rule.
    pub fn border_top(mut self, width: impl Into<Scalar>, color: impl Into<String>) -> Self {
        self.node.border_top_width = Some(width.into());
        self.node.border_top_color = Some(color.into());
        self
    }

    /// Sets width and color of the bottom border only, e.g. as a divider.
    pub fn border_bottom(mut self, width: impl Into<Scalar>, color: impl Into<String>) -> Self {
        self.node.border_bottom_width = Some(width.into());
        self.node.border_bottom_color = Some(color.into());
        self
    }

    /// Sets the border width.
    pub fn border_width(mut self, width: impl Into<Scalar>) -> Self {
        self.node.border_width = Some(width.into());
        self
    }

    /// Sets the border color.
    pub fn border_color(mut self, color: impl Into<String>) -> Self {
        self.node.border_color = Some(color.into());
        self
    }

    /// Sets the opacity, `0.0` to `1.0`.
    pub fn opacity(mut self, opacity: impl Into<Scalar>) -> Self {
        self.node.opacity = Some(opacity.into());
        self
    }

    /// Sets the cursor shown on hover, e.g. `"pointer"`.
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.node.cursor = Some(cursor.into());
        self
    }

    // ------------------------------------------------------------------
    // Text
    // ------------------------------------------------------------------

    /// Sets the font size.
    pub fn text_size(mut self, size: impl Into<Scalar>) -> Self {
        self.node.font_size = Some(size.into());
        self
    }

    /// Sets the font weight: `"normal"`, `"bold"` or `"100"`–`"900"`.
    pub fn text_weight(mut self, weight: impl Into<String>) -> Self {
        self.node.font_weight = Some(weight.into());
        self
    }

    /// Sets the text alignment.
    pub fn text_align(mut self, align: impl Into<String>) -> Self {
        self.node.text_align = Some(align.into());
        self
    }

    /// Centers the text.
    pub fn text_center(mut self) -> Self {
        self.node.text_align = Some("center".into());
        self
    }

    /// Sets the overflow behavior, e.g. `"hidden"` or `"auto"`.
    pub fn overflow(mut self, overflow: impl Into<String>) -> Self {
        self.node.overflow = Some(overflow.into());
        self
    }

    /// Sets the word-wrap behavior.
    pub fn word_wrap(mut self, wrap: impl Into<String>) -> Self {
        self.node.word_wrap = Some(wrap.into());
        self
    }

    // ------------------------------------------------------------------
    // Positioning
    // ------------------------------------------------------------------

    /// Sets the positioning mode.
    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.node.position = Some(position.into());
        self
    }

    /// Positions the element absolutely.
    pub fn absolute(mut self) -> Self {
        self.node.position = Some("absolute".into());
        self
    }

    /// Positions the element relatively.
    pub fn relative(mut self) -> Self {
        self.node.position = Some("relative".into());
        self
    }

    /// Sets the top offset.
    pub fn top(mut self, offset: impl Into<Scalar>) -> Self {
        self.node.top = Some(offset.into());
        self
    }

    /// Sets the left offset.
    pub fn left(mut self, offset: impl Into<Scalar>) -> Self {
        self.node.left = Some(offset.into());
        self
    }

    /// Sets the right offset.
    pub fn right(mut self, offset: impl Into<Scalar>) -> Self {
        self.node.right = Some(offset.into());
        self
    }

    /// Sets the bottom offset.
    pub fn bottom(mut self, offset: impl Into<Scalar>) -> Self {
        self.node.bottom = Some(offset.into());
        self
    }

    // ------------------------------------------------------------------
    // Transitions and hover/focus overlays
    // ------------------------------------------------------------------

    /// Sets a raw `transition` value.
    pub fn transition(mut self, transition: impl Into<String>) -> Self {
        self.node.transition = Some(transition.into());
        self
    }

    /// Transitions every animatable property over `duration` seconds.
    pub fn transition_all(mut self, duration: f64) -> Self {
        self.node.transition = Some(format!("all {duration}s ease"));
        self
    }

    /// Transitions the color properties over `duration` seconds.
    pub fn transition_colors(mut self, duration: f64) -> Self {
        self.node.transition = Some(format!(
            "background {duration}s ease, color {duration}s ease, border-color {duration}s ease"
        ));
        self
    }

    /// Transitions the transform over `duration` seconds.
    pub fn transition_transform(mut self, duration: f64) -> Self {
        self.node.transition = Some(format!("transform {duration}s ease"));
        self
    }

    /// Background color while hovered.
    pub fn hover_bg(mut self, color: impl Into<String>) -> Self {
        self.node.hover_bg = Some(color.into());
        self
    }

    /// Text color while hovered.
    pub fn hover_text_color(mut self, color: impl Into<String>) -> Self {
        self.node.hover_text_color = Some(color.into());
        self
    }

    /// Border color while hovered.
    pub fn hover_border_color(mut self, color: impl Into<String>) -> Self {
        self.node.hover_border_color = Some(color.into());
        self
    }

    /// Scale factor while hovered, e.g. `1.05`.
    pub fn hover_scale(mut self, scale: impl Into<Scalar>) -> Self {
        self.node.hover_scale = Some(scale.into());
        self
    }

    /// Opacity while hovered.
    pub fn hover_opacity(mut self, opacity: impl Into<Scalar>) -> Self {
        self.node.hover_opacity = Some(opacity.into());
        self
    }

    /// Border color while focused.
    pub fn focus_border_color(mut self, color: impl Into<String>) -> Self {
        self.node.focus_border_color = Some(color.into());
        self
    }

    /// Background color while focused.
    pub fn focus_bg(mut self, color: impl Into<String>) -> Self {
        self.node.focus_bg = Some(color.into());
        self
    }

    // ------------------------------------------------------------------
    // Form controls
    // ------------------------------------------------------------------

    /// Sets the current value of an `input` or `radio`.
    ///
    /// # Panics
    ///
    /// Panics when called on any other element kind.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.expect_kind(&[ElementType::Input, ElementType::Radio], "value");
        self.node.value = Some(value.into());
        self
    }

    /// Sets the placeholder of an `input`.
    ///
    /// # Panics
    ///
    /// Panics when called on any other element kind.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.expect_kind(&[ElementType::Input], "placeholder");
        self.node.placeholder = Some(placeholder.into());
        self
    }

    /// Sets the checked state of a `checkbox` or `radio`.
    ///
    /// # Panics
    ///
    /// Panics when called on any other element kind.
    pub fn checked(mut self, checked: bool) -> Self {
        self.expect_kind(&[ElementType::Checkbox, ElementType::Radio], "checked");
        self.node.checked = Some(checked);
        self
    }

    /// Assigns a `radio` to a mutually exclusive group.
    ///
    /// # Panics
    ///
    /// Panics when called on any other element kind.
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.expect_kind(&[ElementType::Radio], "group");
        self.node.radio_group = Some(group.into());
        self
    }

    /// Appends one option to a `select`, preserving insertion order.
    ///
    /// # Panics
    ///
    /// Panics when called on any other element kind.
    pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.expect_kind(&[ElementType::Select], "option");
        self.node.options.push(SelectOption {
            value: value.into(),
            label: label.into(),
        });
        self
    }

    /// Sets the selected value of a `select`.
    ///
    /// # Panics
    ///
    /// Panics when called on any other element kind.
    pub fn selected(mut self, value: impl Into<String>) -> Self {
        self.expect_kind(&[ElementType::Select], "selected");
        self.node.selected = Some(value.into());
        self
    }

    /// Sets the alternative text of an `image`.
    ///
    /// # Panics
    ///
    /// Panics when called on any other element kind.
    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.expect_kind(&[ElementType::Image], "alt");
        self.node.alt = Some(alt.into());
        self
    }

    /// Sets the object-fit mode of an `image`, e.g. `"cover"`.
    ///
    /// # Panics
    ///
    /// Panics when called on any other element kind.
    pub fn object_fit(mut self, fit: impl Into<String>) -> Self {
        self.expect_kind(&[ElementType::Image], "object_fit");
        self.node.object_fit = Some(fit.into());
        self
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    /// Registers a click handler.
    ///
    /// The callback never appears in the serialized document; it is recorded
    /// against this node's `user_id` (or a generated token when none is set)
    /// and travels with the built element.
    pub fn on_click(mut self, handler: impl Fn() + Send + Sync + 'static) -> Self {
        self.pending.push((
            EventKind::Click,
            EventHandler::new(move |_| handler()),
        ));
        self
    }

    /// Registers a handler for keystroke-level value changes of an `input`.
    ///
    /// # Panics
    ///
    /// Panics when called on any other element kind.
    pub fn on_input(mut self, handler: impl Fn(String) + Send + Sync + 'static) -> Self {
        self.expect_kind(&[ElementType::Input], "on_input");
        self.pending.push((
            EventKind::Input,
            EventHandler::new(move |event| {
                if let Event::Input(value) = event {
                    handler(value);
                }
            }),
        ));
        self
    }

    /// Registers a handler for committed value changes of a form control.
    ///
    /// # Panics
    ///
    /// Panics when called on an element that is not an `input`, `checkbox`,
    /// `radio` or `select`.
    pub fn on_change(mut self, handler: impl Fn(String) + Send + Sync + 'static) -> Self {
        self.expect_kind(
            &[
                ElementType::Input,
                ElementType::Checkbox,
                ElementType::Radio,
                ElementType::Select,
            ],
            "on_change",
        );
        self.pending.push((
            EventKind::Change,
            EventHandler::new(move |event| {
                if let Event::Change(value) = event {
                    handler(value);
                }
            }),
        ));
        self
    }

    // ------------------------------------------------------------------
    // Terminal
    // ------------------------------------------------------------------

    /// Produces the immutable element snapshot.
    ///
    /// Pending handler registrations are bound here: to the node's `user_id`
    /// when one was set (in any call order), otherwise to a generated token.
    pub fn build(self) -> Element {
        let Self {
            node,
            pending,
            mut handlers,
        } = self;
        if !pending.is_empty() {
            let target = node
                .user_id
                .clone()
                .unwrap_or_else(|| Uuid::new_v4().to_string());
            for (kind, handler) in pending {
                handlers.insert(HandlerKey::new(target.clone(), kind), handler);
            }
        }
        Element { node, handlers }
    }
}
