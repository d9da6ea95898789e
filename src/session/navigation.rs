//! The navigation state machine: current scene id plus undo history.
//!
//! `choose` and `back` are the only mutations. Neither validates that the
//! target id resolves to a real scene; resolution happens lazily through
//! [`SceneStore::lookup`](crate::story::SceneStore::lookup), where a miss
//! degrades to the terminal sentinel.

use super::history::History;
use crate::story::SceneId;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Mutable navigation state for one playthrough.
///
/// # Example
///
/// ```rust
/// use plotline::session::Navigation;
/// use plotline::story::SceneId;
///
/// let mut nav = Navigation::new(SceneId(0));
///
/// nav.choose(SceneId(1));
/// assert_eq!(nav.current(), SceneId(1));
///
/// // choose then back is a round trip
/// assert!(nav.back());
/// assert_eq!(nav.current(), SceneId(0));
///
/// // back on empty history is a silent no-op
/// assert!(!nav.back());
/// assert_eq!(nav.current(), SceneId(0));
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Navigation {
    current: SceneId,
    history: History,
}

impl Navigation {
    /// Start a playthrough at the given scene with empty history.
    pub fn new(initial: SceneId) -> Self {
        Self {
            current: initial,
            history: History::new(),
        }
    }

    /// The current scene id.
    pub fn current(&self) -> SceneId {
        self.current
    }

    /// The undo history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Move to `target`, pushing the scene being left onto the history.
    ///
    /// The target is not validated here; a dangling id resolves to the
    /// terminal sentinel at lookup time.
    pub fn choose(&mut self, target: SceneId) {
        debug!(from = %self.current, to = %target, "choose");
        self.history.push(self.current);
        self.current = target;
    }

    /// Undo the most recent `choose`, restoring the previous scene.
    ///
    /// Returns whether anything moved. With empty history this is a
    /// silent no-op, not an error.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                debug!(from = %self.current, to = %previous, "back");
                self.current = previous;
                true
            }
            None => false,
        }
    }
}
