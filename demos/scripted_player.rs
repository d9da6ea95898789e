//! Scripted Player
//!
//! This example demonstrates observers and a custom audio sink.
//!
//! Key concepts:
//! - Observer notification after every navigation mutation
//! - Injecting an audio capability behind the AudioSink trait
//! - The fallback scene substituted for malformed story data
//!
//! Run with: cargo run --example scripted_player

use plotline::audio::AudioSink;
use plotline::session::{FnObserver, SessionBuilder};
use plotline::story::{ChoiceSlot, Scene, SceneStore};

/// Audio sink that narrates cues to stdout instead of playing them.
struct LoggingAudio;

impl AudioSink for LoggingAudio {
    fn play_effect(&self) {
        println!("   (click)");
    }

    fn play_ambient(&self) {
        println!("   (ambient hum)");
    }
}

const STORY: &[u8] = br#"[
    {"id": 0, "title": "Platform 4", "text": "The last train is boarding.",
     "a": {"text": "Board it", "to": 1},
     "b": {"text": "Let it go", "to": 2}},
    {"id": 1, "title": "Aboard", "text": "The doors seal behind you.",
     "a": {"text": "", "to": 0}, "b": {"text": "", "to": 0}},
    {"id": 2, "title": "The Empty Platform", "text": "The lights go out one by one.",
     "a": {"text": "", "to": 0}, "b": {"text": "", "to": 0}}
]"#;

fn main() {
    println!("=== Scripted Player ===\n");

    let mut session = SessionBuilder::new()
        .store(SceneStore::load(STORY))
        .audio(LoggingAudio)
        .observe(FnObserver::new(|scene: &Scene| {
            println!("   observer: now at \"{}\"", scene.title);
        }))
        .build()
        .expect("store was provided");

    println!("Start: \"{}\"", session.current_scene().title);

    println!("\nToggling ambient audio:");
    session.toggle_ambient();

    println!("\nTaking choice b:");
    session.select(ChoiceSlot::B);

    println!("\nUndoing:");
    session.go_back();

    println!("\nUndoing again (empty history, silent no-op):");
    let moved = session.go_back();
    println!("   moved: {moved}");

    // A second session over unreadable bytes: the engine degrades to
    // the fallback scene instead of failing.
    println!("\nLoading a broken story:");
    let broken = SessionBuilder::new()
        .store(SceneStore::load(b"{ not a story"))
        .build()
        .expect("store was provided");
    println!(
        "   \"{}\": {}",
        broken.current_scene().title,
        broken.current_scene().text
    );

    println!("\n=== Example Complete ===");
}
