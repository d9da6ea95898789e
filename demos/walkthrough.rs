//! Story Walkthrough
//!
//! This example demonstrates a complete playthrough of a small story.
//!
//! Key concepts:
//! - Loading story data through the infallible boundary
//! - Selecting choices and undoing them
//! - Rendering scenes to framework-free views
//!
//! Run with: cargo run --example walkthrough

use plotline::session::SessionBuilder;
use plotline::story::{ChoiceSlot, SceneStore};

const STORY: &[u8] = br#"[
    {"id": 0, "title": "The Lighthouse", "text": "The lamp went dark an hour ago.",
     "a": {"text": "Climb the stairs", "to": 1},
     "b": {"text": "Check the cellar", "to": 2}},
    {"id": 1, "title": "The Lamp Room", "text": "The wick is fine. The oil line is cut.",
     "a": {"text": "Follow the line down", "to": 2},
     "b": {"text": "Signal with a lantern", "to": 3}},
    {"id": 2, "title": "The Cellar", "text": "Someone has been living here.",
     "a": {"text": "Search the bedroll", "to": 3},
     "b": {"text": "Leave quietly", "to": 99}},
    {"id": 3, "title": "The Note", "text": "It names you.",
     "a": {"text": "Burn it", "to": 99},
     "b": {"text": "Keep it", "to": 99}}
]"#;

fn print_scene(view: &plotline::SceneView) {
    println!("== {} ==", view.title);
    println!("{}", view.body);
    for button in &view.choices {
        if !button.label.is_empty() {
            println!("  [{}] {}", button.slot.name(), button.label);
        }
    }
    if view.can_go_back {
        println!("  [back]");
    }
    println!();
}

fn main() {
    println!("=== Story Walkthrough ===\n");

    let mut session = SessionBuilder::new()
        .store(SceneStore::load(STORY))
        .build()
        .expect("store was provided");

    print_scene(&session.view());

    println!("-> choose a\n");
    session.select(ChoiceSlot::A);
    print_scene(&session.view());

    println!("-> choose b\n");
    session.select(ChoiceSlot::B);
    print_scene(&session.view());

    println!("-> back\n");
    session.go_back();
    print_scene(&session.view());

    // Walk off the edge of the story: target 99 has no scene,
    // so lookup resolves to the terminal sentinel.
    println!("-> choose a, then b\n");
    session.select(ChoiceSlot::A);
    session.select(ChoiceSlot::B);
    print_scene(&session.view());

    println!("=== Example Complete ===");
}
