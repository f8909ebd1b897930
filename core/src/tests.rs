//! Behavioral tests for the builder DSL and the wire contract.

use serde_json::{Value, json};

use crate::builder::{Element, button, checkbox, div, image, input, radio, select, text};
use crate::element::{ElementNode, ElementType};
use crate::event::{Event, EventKind};

fn value_of(element: &Element) -> Value {
    element.to_value().unwrap()
}

#[test]
fn constructors_fix_the_element_type_tag() {
    let cases = [
        (div().build(), "div"),
        (text("t").build(), "text"),
        (button("b").build(), "button"),
        (input().build(), "input"),
        (checkbox("c").build(), "checkbox"),
        (radio("r").build(), "radio"),
        (select().build(), "select"),
        (image("asset:logo.png").build(), "image"),
    ];
    for (element, tag) in cases {
        assert_eq!(value_of(&element)["element_type"], json!(tag));
    }
}

#[test]
fn constructors_seed_content_fields() {
    let v = value_of(&text("hello").build());
    assert_eq!(v["text_content"], json!("hello"));

    let v = value_of(&button("Go").build());
    assert_eq!(v["label"], json!("Go"));
    assert!(v.get("text_content").is_none());

    let v = value_of(&checkbox("Enable").build());
    assert_eq!(v["label"], json!("Enable"));

    let v = value_of(&image("https://example.com/a.png").build());
    assert_eq!(v["text_content"], json!("https://example.com/a.png"));
}

#[test]
fn attributes_round_trip_verbatim() {
    let v = value_of(
        &div()
            .bg("#1a1a1a")
            .text_color("#fff")
            .rounded(8)
            .border(1, "#404040")
            .opacity(0.5)
            .cursor("pointer")
            .width("100%")
            .height(120)
            .build(),
    );
    assert_eq!(v["background_color"], json!("#1a1a1a"));
    assert_eq!(v["text_color"], json!("#fff"));
    assert_eq!(v["border_radius"], json!(8));
    assert_eq!(v["border_width"], json!(1));
    assert_eq!(v["border_color"], json!("#404040"));
    assert_eq!(v["opacity"], json!(0.5));
    assert_eq!(v["cursor"], json!("pointer"));
    assert_eq!(v["width"], json!("100%"));
    assert_eq!(v["height"], json!(120));
}

#[test]
fn padding_two_argument_form_never_sets_the_uniform_key() {
    let v = value_of(&div().padding_xy(10, 20).build());
    assert_eq!(v["padding_top"], json!(10));
    assert_eq!(v["padding_bottom"], json!(10));
    assert_eq!(v["padding_left"], json!(20));
    assert_eq!(v["padding_right"], json!(20));
    assert!(v.get("padding").is_none());

    let v = value_of(&div().padding(16).build());
    assert_eq!(v["padding"], json!(16));
    assert!(v.get("padding_top").is_none());
}

#[test]
fn per_side_borders_never_set_the_uniform_keys() {
    let v = value_of(&div().border_bottom(1, "#333").build());
    assert_eq!(v["border_bottom_width"], json!(1));
    assert_eq!(v["border_bottom_color"], json!("#333"));
    assert!(v.get("border_width").is_none());
    assert!(v.get("border_color").is_none());

    let v = value_of(&div().border_top(2, "#404040").build());
    assert_eq!(v["border_top_width"], json!(2));
    assert_eq!(v["border_top_color"], json!("#404040"));
    assert!(v.get("border_bottom_width").is_none());
}

#[test]
fn flex_1_expands_to_grow_shrink_basis() {
    let v = value_of(&div().flex_1().build());
    assert_eq!(v["flex_grow"], json!(1));
    assert_eq!(v["flex_shrink"], json!(1));
    assert_eq!(v["flex_basis"], json!("0%"));
}

#[test]
fn grid_cols_with_gap() {
    let v = value_of(&div().grid_cols("1fr 1fr 1fr").gap(16).build());
    assert_eq!(v["display_grid"], json!(true));
    assert_eq!(v["grid_template_columns"], json!("1fr 1fr 1fr"));
    assert_eq!(v["gap"], json!(16));
}

#[test]
fn place_center_implies_grid_display() {
    let v = value_of(&div().place_center().build());
    assert_eq!(v["display_grid"], json!(true));
    assert_eq!(v["place_items"], json!("center"));
}

#[test]
fn child_order_is_call_order() {
    let element = div()
        .child_builder(text("a"))
        .child_builder(button("b"))
        .child_text("c")
        .build();
    let children = &element.node().children;
    assert_eq!(children.len(), 3);
    assert_eq!(children[0].element_type, ElementType::Text);
    assert_eq!(children[0].text_content.as_deref(), Some("a"));
    assert_eq!(children[1].element_type, ElementType::Button);
    assert_eq!(children[1].label.as_deref(), Some("b"));
    assert_eq!(children[2].element_type, ElementType::Text);
    assert_eq!(children[2].text_content.as_deref(), Some("c"));
}

#[test]
fn select_scenario() {
    let v = value_of(
        &select()
            .option("", "Select...")
            .option("beginner", "Beginner")
            .selected("beginner")
            .build(),
    );
    let options = v["options"].as_array().unwrap();
    assert_eq!(options.len(), 2);
    assert_eq!(options[0], json!({"value": "", "label": "Select..."}));
    assert_eq!(options[1], json!({"value": "beginner", "label": "Beginner"}));
    assert_eq!(v["selected"], json!("beginner"));
}

#[test]
fn transitions_expand_deterministically() {
    let v = value_of(&div().transition_all(0.3).build());
    assert_eq!(v["transition"], json!("all 0.3s ease"));

    let v = value_of(&button("x").transition_colors(0.15).build());
    let transition = v["transition"].as_str().unwrap();
    assert!(transition.contains("background"));
    assert!(transition.contains("color"));
    assert!(transition.contains("0.15s"));

    let v = value_of(&image("a").transition_transform(0.3).build());
    assert!(v["transition"].as_str().unwrap().contains("transform"));
}

#[test]
fn hover_and_focus_groups_pass_through() {
    let v = value_of(
        &input()
            .bg("#171717")
            .hover_bg("#262626")
            .hover_text_color("#fafafa")
            .focus_border_color("#a3a3a3")
            .focus_bg("#0a0a0a")
            .build(),
    );
    assert_eq!(v["background_color"], json!("#171717"));
    assert_eq!(v["hover_bg"], json!("#262626"));
    assert_eq!(v["hover_text_color"], json!("#fafafa"));
    assert_eq!(v["focus_border_color"], json!("#a3a3a3"));
    assert_eq!(v["focus_bg"], json!("#0a0a0a"));
}

#[test]
fn class_name_appends_and_classes_replaces() {
    let v = value_of(
        &div()
            .class_name("card")
            .class_name("card")
            .class_name("elevated")
            .build(),
    );
    assert_eq!(v["class_names"], json!(["card", "card", "elevated"]));

    let v = value_of(
        &div()
            .class_name("stale")
            .classes(["fresh", "list"])
            .build(),
    );
    assert_eq!(v["class_names"], json!(["fresh", "list"]));
}

#[test]
fn later_calls_overwrite_earlier_ones() {
    let v = value_of(&div().bg("#000").bg("#fff").gap(4).gap(8).build());
    assert_eq!(v["background_color"], json!("#fff"));
    assert_eq!(v["gap"], json!(8));
}

#[test]
fn form_control_state_serializes() {
    let v = value_of(
        &input()
            .placeholder("Enter your name")
            .value("Ada")
            .build(),
    );
    assert_eq!(v["placeholder"], json!("Enter your name"));
    assert_eq!(v["value"], json!("Ada"));

    let v = value_of(&checkbox("News").checked(true).build());
    assert_eq!(v["checked"], json!(true));

    let v = value_of(&radio("Email").group("contact").value("email").build());
    assert_eq!(v["radio_group"], json!("contact"));
    assert_eq!(v["value"], json!("email"));

    let v = value_of(&image("a.png").alt("A").object_fit("cover").build());
    assert_eq!(v["alt"], json!("A"));
    assert_eq!(v["object_fit"], json!("cover"));
}

#[test]
fn serializing_twice_is_byte_identical() {
    let element = div()
        .v_flex()
        .gap(12)
        .child_builder(text("x").text_size(14))
        .build();
    assert_eq!(element.to_json().unwrap(), element.to_json().unwrap());
}

#[test]
fn serialized_tree_deserializes_back() {
    let element = div()
        .id("root")
        .size_full()
        .child_builder(select().option("a", "A").selected("a"))
        .build();
    let json = element.to_json().unwrap();
    let back: ElementNode = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, element.node());
}

#[test]
fn handlers_bind_to_user_id_in_any_call_order() {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    let clicks = Arc::new(AtomicUsize::new(0));
    let counted = clicks.clone();
    // `on_click` before `id`: binding happens at build time.
    let element = button("+")
        .on_click(move || {
            counted.fetch_add(1, Ordering::SeqCst);
        })
        .id("inc")
        .build();

    assert_eq!(element.handlers().len(), 1);
    let handler = element.handler("inc", EventKind::Click).unwrap();
    handler.call(Event::Click);
    assert_eq!(clicks.load(Ordering::SeqCst), 1);
    assert!(element.handler("inc", EventKind::Change).is_none());
}

#[test]
fn child_handlers_surface_at_the_root() {
    let element = div()
        .child_builder(div().child_builder(button("x").id("deep").on_click(|| {})))
        .build();
    assert!(element.handler("deep", EventKind::Click).is_some());
}

#[test]
fn anonymous_handlers_get_distinct_targets() {
    let element = div()
        .child_builder(button("a").on_click(|| {}))
        .child_builder(button("b").on_click(|| {}))
        .build();
    assert_eq!(element.handlers().len(), 2);
}

#[test]
fn handlers_never_reach_the_wire() {
    let v = value_of(&button("x").id("b").on_click(|| {}).build());
    let object = v.as_object().unwrap();
    assert!(object.keys().all(|key| !key.contains("click")));
}

#[test]
#[should_panic(expected = "`option()` is not valid on a `div` element")]
fn option_on_a_div_fails_fast() {
    let _ = div().option("a", "A");
}

#[test]
#[should_panic(expected = "`checked()` is not valid on a `button` element")]
fn checked_on_a_button_fails_fast() {
    let _ = button("x").checked(true);
}

#[test]
#[should_panic(expected = "`on_input()` is not valid on a `select` element")]
fn on_input_on_a_select_fails_fast() {
    let _ = select().on_input(|_| {});
}
