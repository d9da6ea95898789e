//! Story data: scenes, choices, and the scene store.
//!
//! This module is the pure data half of the engine:
//! - `Scene` and `Choice` records parsed from the bundled wire format
//! - `SceneStore` with its fallible `parse` and infallible `load`/`lookup`
//! - The two sentinel scenes that absorb bad data and story endings
//!
//! Nothing here mutates after loading; the collection is parsed once and
//! read by id for the rest of the session.

mod error;
mod scene;
mod store;

pub use error::StoryError;
pub use scene::{Choice, ChoiceSlot, Scene, SceneId};
pub use store::SceneStore;
