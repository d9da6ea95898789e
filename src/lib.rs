//! Plotline: a minimal branching-narrative engine.
//!
//! Plotline loads a fixed story (an array of scenes, each with two
//! labeled choices) and drives one playthrough at a time: pick a choice
//! to move forward, pop the undo stack to move back. The engine never
//! fails at runtime: malformed story data collapses into a fallback
//! scene at load, and a dangling choice target resolves to a terminal
//! "story ended" scene at lookup.
//!
//! # Core Concepts
//!
//! - **Scene**: one node of the narrative: title, body, two choices
//! - **SceneStore**: the immutable collection, with total `lookup`
//! - **Session**: the single state owner, driving navigation, audio
//!   cues, and observer notification
//! - **SceneView**: a framework-free description of what to draw
//!
//! # Example
//!
//! ```rust
//! use plotline::session::SessionBuilder;
//! use plotline::story::{ChoiceSlot, SceneId, SceneStore};
//!
//! let data = br#"[
//!     {"id": 0, "title": "Shore", "text": "Waves lap the sand.",
//!      "a": {"text": "Follow the cliff", "to": 1},
//!      "b": {"text": "Wade in", "to": 2}},
//!     {"id": 1, "title": "Cliff path", "text": "Gulls wheel overhead.",
//!      "a": {"text": "", "to": 0}, "b": {"text": "", "to": 0}}
//! ]"#;
//!
//! let mut session = SessionBuilder::new()
//!     .store(SceneStore::load(data))
//!     .build()
//!     .unwrap();
//!
//! session.select(ChoiceSlot::A);
//! assert_eq!(session.current_scene().id, SceneId(1));
//!
//! session.go_back();
//! assert_eq!(session.current_scene().id, SceneId(0));
//! ```

pub mod audio;
pub mod session;
pub mod story;
pub mod view;

// Re-export commonly used types
pub use audio::{AudioSink, NullAudio};
pub use session::{Session, SessionBuilder};
pub use story::{Choice, ChoiceSlot, Scene, SceneId, SceneStore, StoryError};
pub use view::SceneView;
