//! Story loading errors.

use thiserror::Error;

/// Errors raised while parsing bundled story data.
///
/// This is the crate's one recoverable error class. It stays
/// distinguishable inside the crate so the failure path can be tested
/// directly; at the [`SceneStore::load`](crate::story::SceneStore::load)
/// boundary it collapses into the load-failure sentinel scene.
#[derive(Debug, Error)]
pub enum StoryError {
    /// The data was not a well-formed array of scene records: truncated
    /// bytes, a non-array root, and missing required fields all land here.
    #[error("story data unreadable or malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}
