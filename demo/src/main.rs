//! Counter demo: builds a small UI once, then pushes targeted updates for
//! the counter element only. Without a real webview in the loop, the render
//! surface here just prints every protocol message it receives.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use brookui::prelude::*;

/// Stands in for the webview: prints each submitted message.
#[derive(Debug)]
struct StdoutSurface;

impl RenderSurface for StdoutSurface {
    fn submit(&mut self, message: &Message) -> Result<(), Error> {
        println!("{}", message.to_json()?);
        Ok(())
    }
}

fn counter_color(count: i64) -> &'static str {
    if count > 0 {
        "#4ade80"
    } else if count < 0 {
        "#f87171"
    } else {
        "#ffffff"
    }
}

fn counter_view(count: i64) -> Element {
    text(format!("Count: {count}"))
        .id("counter")
        .text_size(48)
        .text_color(counter_color(count))
        .transition_colors(0.3)
        .build()
}

fn control(
    label: &str,
    id: &str,
    color: &str,
    on_click: impl Fn() + Send + Sync + 'static,
) -> ElementBuilder {
    button(label)
        .id(id)
        .padding_xy(12, 24)
        .bg(color)
        .text_color("#fff")
        .rounded(6)
        .cursor("pointer")
        .transition_colors(0.15)
        .hover_bg("#666")
        .on_click(on_click)
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let count = Arc::new(AtomicI64::new(0));

    let mut window = Window::new("Partial Update")
        .size(400, 300)
        .background_color("#1a1a1a");
    window.attach(StdoutSurface)?;

    let increments = count.clone();
    let decrements = count.clone();
    let resets = count.clone();
    let root = div()
        .size_full()
        .v_flex()
        .items_center()
        .justify_center()
        .gap(30)
        .bg("#1a1a1a")
        .child(counter_view(0))
        .child_builder(
            div()
                .h_flex()
                .gap(12)
                .child_builder(control("-", "dec", "#dc2626", move || {
                    decrements.fetch_sub(1, Ordering::SeqCst);
                }))
                .child_builder(control("Reset", "reset", "#525252", move || {
                    resets.store(0, Ordering::SeqCst);
                }))
                .child_builder(control("+", "inc", "#16a34a", move || {
                    increments.fetch_add(1, Ordering::SeqCst);
                })),
        )
        .build();

    window.set_root(root)?;

    // Simulate a burst of clicks coming back from the render surface; each
    // one triggers a targeted update of the counter element only.
    for target in ["inc", "inc", "inc", "dec", "reset", "inc"] {
        window.dispatch(target, Event::Click);
        window.update_element("counter", counter_view(count.load(Ordering::SeqCst)))?;
    }

    Ok(())
}
