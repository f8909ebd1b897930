//! End-to-end tests for the update protocol and event routing.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use brookui::prelude::*;
use serde_json::{Value, json};

/// A render surface that records every submitted message as JSON.
#[derive(Default, Clone)]
struct RecordingSurface {
    messages: Rc<RefCell<Vec<String>>>,
}

impl RecordingSurface {
    fn new() -> Self {
        Self::default()
    }

    fn recorded(&self) -> Vec<Value> {
        self.messages
            .borrow()
            .iter()
            .map(|json| serde_json::from_str(json).unwrap())
            .collect()
    }
}

impl RenderSurface for RecordingSurface {
    fn submit(&mut self, message: &Message) -> Result<(), Error> {
        self.messages.borrow_mut().push(message.to_json()?);
        Ok(())
    }
}

fn counter_view(count: i64) -> Element {
    text(format!("Count: {count}"))
        .id("counter")
        .text_size(48)
        .build()
}

fn app_root(count: i64) -> Element {
    div()
        .size_full()
        .v_flex()
        .gap(30)
        .child(counter_view(count))
        .child_builder(div().id("toolbar").child_builder(button("+").id("inc")))
        .build()
}

#[test]
fn set_root_sends_the_full_tree() {
    let surface = RecordingSurface::new();
    let mut window = Window::new("Counter").size(400, 300);
    window.attach(surface.clone()).unwrap();
    window.set_root(app_root(0)).unwrap();

    let recorded = surface.recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0]["op"], json!("set_root"));
    assert_eq!(recorded[0]["tree"]["element_type"], json!("div"));
    assert_eq!(
        recorded[0]["tree"]["children"][0]["text_content"],
        json!("Count: 0")
    );
}

#[test]
fn update_element_replaces_only_the_addressed_subtree() {
    let surface = RecordingSurface::new();
    let mut window = Window::new("Counter");
    window.attach(surface.clone()).unwrap();
    window.set_root(app_root(0)).unwrap();

    window.update_element("counter", counter_view(1)).unwrap();

    // The tracked tree reflects the replacement...
    let root = window.root().unwrap();
    let counter = root.find("counter").unwrap();
    assert_eq!(counter.text_content.as_deref(), Some("Count: 1"));
    // ...while the sibling subtree is untouched.
    let toolbar = root.find("toolbar").unwrap();
    assert_eq!(toolbar.children.len(), 1);

    let recorded = surface.recorded();
    assert_eq!(recorded.len(), 2);
    assert_eq!(recorded[1]["op"], json!("update_element"));
    assert_eq!(recorded[1]["id"], json!("counter"));
    assert_eq!(recorded[1]["tree"]["text_content"], json!("Count: 1"));
}

#[test]
fn updates_are_submitted_in_call_order() {
    let surface = RecordingSurface::new();
    let mut window = Window::new("Counter");
    window.attach(surface.clone()).unwrap();
    window.set_root(app_root(0)).unwrap();

    for count in 1..=3 {
        window.update_element("counter", counter_view(count)).unwrap();
    }

    let texts: Vec<_> = surface
        .recorded()
        .iter()
        .skip(1)
        .map(|message| message["tree"]["text_content"].clone())
        .collect();
    assert_eq!(texts, vec![json!("Count: 1"), json!("Count: 2"), json!("Count: 3")]);
}

#[test]
fn update_before_set_root_is_a_no_op() {
    let surface = RecordingSurface::new();
    let mut window = Window::new("Counter");
    window.attach(surface.clone()).unwrap();

    window.update_element("counter", counter_view(1)).unwrap();

    assert!(window.root().is_none());
    assert!(surface.recorded().is_empty());
}

#[test]
fn unknown_id_leaves_the_tracked_tree_untouched_but_forwards() {
    let surface = RecordingSurface::new();
    let mut window = Window::new("Counter");
    window.attach(surface.clone()).unwrap();
    window.set_root(app_root(0)).unwrap();

    window
        .update_element("missing", text("orphan").build())
        .unwrap();

    let root = window.root().unwrap();
    assert!(root.find("missing").is_none());
    assert_eq!(
        root.find("counter").unwrap().text_content.as_deref(),
        Some("Count: 0")
    );
    // The message still went out; materialization is the surface's concern.
    assert_eq!(surface.recorded().len(), 2);
}

#[test]
fn root_set_before_attach_is_submitted_on_attach() {
    let surface = RecordingSurface::new();
    let mut window = Window::new("Counter");
    window.set_root(app_root(0)).unwrap();
    assert!(surface.recorded().is_empty());

    window.attach(surface.clone()).unwrap();

    let recorded = surface.recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0]["op"], json!("set_root"));
}

#[test]
fn dispatch_routes_events_to_registered_handlers() {
    let clicks = Arc::new(AtomicUsize::new(0));
    let values = Arc::new(std::sync::Mutex::new(Vec::new()));

    let counted = clicks.clone();
    let collected = values.clone();
    let root = div()
        .child_builder(button("+").id("inc").on_click(move || {
            counted.fetch_add(1, Ordering::SeqCst);
        }))
        .child_builder(input().id("name").on_input(move |value| {
            collected.lock().unwrap().push(value);
        }))
        .build();

    let mut window = Window::new("Form");
    window.set_root(root).unwrap();

    assert!(window.dispatch("inc", Event::Click));
    assert!(window.dispatch("name", Event::Input("Ada".into())));
    assert!(!window.dispatch("inc", Event::Input("x".into())));
    assert!(!window.dispatch("nobody", Event::Click));

    assert_eq!(clicks.load(Ordering::SeqCst), 1);
    assert_eq!(*values.lock().unwrap(), vec!["Ada".to_owned()]);
}

#[test]
fn set_root_replaces_the_handler_registry() {
    let mut window = Window::new("App");
    window
        .set_root(div().child_builder(button("old").id("old").on_click(|| {})).build())
        .unwrap();
    assert!(window.dispatch("old", Event::Click));

    window
        .set_root(div().child_builder(button("new").id("new").on_click(|| {})).build())
        .unwrap();
    // Handlers live exactly as long as the tree that registered them.
    assert!(!window.dispatch("old", Event::Click));
    assert!(window.dispatch("new", Event::Click));
}

#[test]
fn update_element_merges_new_handlers() {
    let hits = Arc::new(AtomicUsize::new(0));
    let mut window = Window::new("App");
    window.set_root(app_root(0)).unwrap();

    let counted = hits.clone();
    window
        .update_element(
            "toolbar",
            div()
                .id("toolbar")
                .child_builder(button("reset").id("reset").on_click(move || {
                    counted.fetch_add(1, Ordering::SeqCst);
                }))
                .build(),
        )
        .unwrap();

    assert!(window.dispatch("reset", Event::Click));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn update_message_wire_shape_is_stable() {
    let message = Message::UpdateElement {
        id: "counter".into(),
        tree: counter_view(2).into_node(),
    };
    let value: Value = serde_json::from_str(&message.to_json().unwrap()).unwrap();
    assert_eq!(
        value,
        json!({
            "op": "update_element",
            "id": "counter",
            "tree": {
                "element_type": "text",
                "text_content": "Count: 2",
                "user_id": "counter",
                "font_size": 48,
                "children": []
            }
        })
    );
}
