//! Builder for constructing sessions with a fluent API.

use super::observer::Observer;
use super::Session;
use crate::audio::{AudioSink, NullAudio};
use crate::story::SceneStore;
use thiserror::Error;

/// Errors that can occur when building a session.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Scene store not specified. Call .store(store) before .build()")]
    MissingStore,
}

/// Builder for [`Session`].
///
/// The scene store is required; the audio sink defaults to [`NullAudio`]
/// and observers are optional.
///
/// # Example
///
/// ```rust
/// use plotline::session::SessionBuilder;
/// use plotline::story::SceneStore;
///
/// let store = SceneStore::load(b"[]");
/// let session = SessionBuilder::new().store(store).build().unwrap();
/// assert!(session.current_scene().is_sentinel());
/// ```
pub struct SessionBuilder {
    store: Option<SceneStore>,
    audio: Box<dyn AudioSink>,
    observers: Vec<Box<dyn Observer>>,
}

impl SessionBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            store: None,
            audio: Box::new(NullAudio),
            observers: Vec::new(),
        }
    }

    /// Set the scene store (required).
    pub fn store(mut self, store: SceneStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the audio sink. Defaults to [`NullAudio`].
    pub fn audio(mut self, audio: impl AudioSink + 'static) -> Self {
        self.audio = Box::new(audio);
        self
    }

    /// Register an observer. May be called multiple times.
    pub fn observe(mut self, observer: impl Observer + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Build the session.
    /// Returns an error if the scene store is missing.
    pub fn build(self) -> Result<Session, BuildError> {
        let store = self.store.ok_or(BuildError::MissingStore)?;
        Ok(Session::with_parts(store, self.audio, self.observers))
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
