//! Undo history for scene navigation.
//!
//! The history is a plain stack: `choose` pushes the scene being left,
//! `back` pops it. Entries are timestamped so shells can show when a
//! branch was taken.

use crate::story::SceneId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a scene pushed onto the undo stack.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The scene that was current when a choice was taken.
    pub scene: SceneId,
    /// When the entry was recorded.
    pub recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Record an entry for a scene at the current time.
    pub fn now(scene: SceneId) -> Self {
        Self {
            scene,
            recorded_at: Utc::now(),
        }
    }
}

/// The undo stack of previously visited scene ids.
///
/// Append and pop happen only at the end; popping from an empty history
/// returns `None` and changes nothing.
///
/// # Example
///
/// ```rust
/// use plotline::session::History;
/// use plotline::story::SceneId;
///
/// let mut history = History::new();
/// history.push(SceneId(0));
/// history.push(SceneId(3));
///
/// assert_eq!(history.pop(), Some(SceneId(3)));
/// assert_eq!(history.pop(), Some(SceneId(0)));
/// assert_eq!(history.pop(), None);
/// ```
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a visited scene onto the stack.
    pub fn push(&mut self, scene: SceneId) {
        self.entries.push(HistoryEntry::now(scene));
    }

    /// Pop the most recently pushed scene, if any.
    pub fn pop(&mut self) -> Option<SceneId> {
        self.entries.pop().map(|entry| entry.scene)
    }

    /// Number of entries on the stack.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Scene ids in push order, oldest first.
    pub fn scene_ids(&self) -> Vec<SceneId> {
        self.entries.iter().map(|entry| entry.scene).collect()
    }

    /// All entries in push order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}
