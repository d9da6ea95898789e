//! The scene store: parses bundled story data and resolves scene lookups.
//!
//! `parse` keeps the failure path distinguishable for callers inside the
//! crate; `load` is the boundary exposed to presentation code, where every
//! failure collapses into a one-scene fallback story. `lookup` is total:
//! it resolves every id to either a real scene or the terminal sentinel.

use super::error::StoryError;
use super::scene::{Scene, SceneId};
use tracing::warn;

/// An ordered, immutable collection of scenes, loaded once per process.
///
/// # Example
///
/// ```rust
/// use plotline::story::{SceneStore, SceneId};
///
/// let data = br#"[
///     {"id": 0, "title": "Dawn", "text": "You wake.",
///      "a": {"text": "Get up", "to": 1}, "b": {"text": "Sleep on", "to": 2}},
///     {"id": 1, "title": "Morning", "text": "The day begins.",
///      "a": {"text": "", "to": 0}, "b": {"text": "", "to": 0}}
/// ]"#;
///
/// let store = SceneStore::load(data);
/// assert_eq!(store.len(), 2);
/// assert_eq!(store.first_scene_id(), SceneId(0));
/// assert_eq!(store.lookup(SceneId(1)).title, "Morning");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SceneStore {
    scenes: Vec<Scene>,
}

impl SceneStore {
    /// Parse raw story bytes into a store, preserving source order.
    ///
    /// This is the distinguishable failure path: any structural problem
    /// (truncated bytes, non-array root, missing field) is returned as
    /// [`StoryError::Malformed`]. A well-formed empty array parses to an
    /// empty store.
    ///
    /// # Example
    ///
    /// ```rust
    /// use plotline::story::SceneStore;
    ///
    /// assert!(SceneStore::parse(b"[]").unwrap().is_empty());
    /// assert!(SceneStore::parse(b"not json").is_err());
    /// ```
    pub fn parse(bytes: &[u8]) -> Result<Self, StoryError> {
        let scenes: Vec<Scene> = serde_json::from_slice(bytes)?;
        Ok(Self { scenes })
    }

    /// Load story bytes, falling back to a one-scene error story on any
    /// parse failure.
    ///
    /// This is the boundary contract: it never fails, so the presentation
    /// layer never sees bad data as anything but a renderable scene.
    ///
    /// # Example
    ///
    /// ```rust
    /// use plotline::story::{Scene, SceneStore, SceneId};
    ///
    /// let store = SceneStore::load(b"{ truncated");
    /// assert_eq!(store.len(), 1);
    /// assert_eq!(store.lookup(SceneId(0)), Scene::load_failure());
    /// ```
    pub fn load(bytes: &[u8]) -> Self {
        match Self::parse(bytes) {
            Ok(store) => store,
            Err(err) => {
                warn!(error = %err, "story data unreadable, substituting fallback scene");
                Self {
                    scenes: vec![Scene::load_failure().clone()],
                }
            }
        }
    }

    /// Build a store directly from scenes. Useful for tests and
    /// programmatically authored stories.
    pub fn from_scenes(scenes: Vec<Scene>) -> Self {
        Self { scenes }
    }

    /// Resolve a scene id.
    ///
    /// Total: returns the first scene whose id matches, or the
    /// [`Scene::story_ended`] sentinel when none does. A lookup miss is
    /// not an error; it is how stories end.
    ///
    /// # Example
    ///
    /// ```rust
    /// use plotline::story::{Scene, SceneStore, SceneId};
    ///
    /// let store = SceneStore::load(b"[]");
    /// assert_eq!(store.lookup(SceneId(99)), Scene::story_ended());
    /// ```
    pub fn lookup(&self, id: SceneId) -> &Scene {
        self.scenes
            .iter()
            .find(|scene| scene.id == id)
            .unwrap_or_else(|| Scene::story_ended())
    }

    /// Id of the first loaded scene, or 0 for an empty store.
    ///
    /// This is the initial scene of a new session. For an empty store the
    /// returned id resolves to the terminal sentinel via [`lookup`].
    ///
    /// [`lookup`]: SceneStore::lookup
    pub fn first_scene_id(&self) -> SceneId {
        self.scenes.first().map(|scene| scene.id).unwrap_or(SceneId(0))
    }

    /// Number of loaded scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Check whether the store holds no scenes.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Iterate scenes in source order.
    pub fn iter(&self) -> impl Iterator<Item = &Scene> {
        self.scenes.iter()
    }
}
