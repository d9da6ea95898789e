//! Scene and choice types for the branching narrative.
//!
//! Scenes are immutable values parsed once from the bundled story data.
//! Each scene carries exactly two choices; a choice target is resolved
//! lazily at lookup time, never validated at load time.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Identifier of a scene within a story.
///
/// Ids are unique across a loaded collection but carry no other meaning;
/// a dangling id resolves to the terminal sentinel at lookup time.
///
/// # Example
///
/// ```rust
/// use plotline::story::SceneId;
///
/// let id = SceneId(3);
/// assert_eq!(id.0, 3);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneId(pub i64);

impl std::fmt::Display for SceneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which of a scene's two choices.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ChoiceSlot {
    A,
    B,
}

impl ChoiceSlot {
    /// Slot name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
        }
    }
}

/// One labeled branch out of a scene.
///
/// The wire format names the fields `text` and `to`:
///
/// ```rust
/// use plotline::story::{Choice, SceneId};
///
/// let choice: Choice = serde_json::from_str(r#"{"text": "Open the door", "to": 2}"#).unwrap();
/// assert_eq!(choice.label, "Open the door");
/// assert_eq!(choice.target, SceneId(2));
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Choice {
    /// Text shown on the choice control.
    #[serde(rename = "text")]
    pub label: String,
    /// Scene to move to when this choice is taken. May dangle.
    #[serde(rename = "to")]
    pub target: SceneId,
}

impl Choice {
    /// A choice that leads nowhere: empty label, target 0.
    ///
    /// Used by the sentinel scenes so they render harmlessly.
    pub fn inert() -> Self {
        Self {
            label: String::new(),
            target: SceneId(0),
        }
    }
}

/// One node of the branching narrative.
///
/// A scene is a title, a body text, and exactly two choices. The wire
/// format nests the choices under `a` and `b`:
///
/// ```rust
/// use plotline::story::{ChoiceSlot, Scene, SceneId};
///
/// let scene: Scene = serde_json::from_str(
///     r#"{
///         "id": 1,
///         "title": "The Fork",
///         "text": "The path splits in two.",
///         "a": {"text": "Go left", "to": 2},
///         "b": {"text": "Go right", "to": 3}
///     }"#,
/// )
/// .unwrap();
///
/// assert_eq!(scene.id, SceneId(1));
/// assert_eq!(scene.choice(ChoiceSlot::B).target, SceneId(3));
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Scene {
    /// Unique id within the loaded collection.
    pub id: SceneId,
    /// Display title.
    pub title: String,
    /// Body text.
    pub text: String,
    /// First choice.
    #[serde(rename = "a")]
    pub choice_a: Choice,
    /// Second choice.
    #[serde(rename = "b")]
    pub choice_b: Choice,
}

static LOAD_FAILURE: Lazy<Scene> = Lazy::new(|| Scene {
    id: SceneId(0),
    title: "Story unavailable".to_string(),
    text: "The story data could not be read.".to_string(),
    choice_a: Choice::inert(),
    choice_b: Choice::inert(),
});

static STORY_ENDED: Lazy<Scene> = Lazy::new(|| Scene {
    id: SceneId(0),
    title: "The End".to_string(),
    text: "The story has ended.".to_string(),
    choice_a: Choice::inert(),
    choice_b: Choice::inert(),
});

impl Scene {
    /// Get a choice by slot.
    pub fn choice(&self, slot: ChoiceSlot) -> &Choice {
        match slot {
            ChoiceSlot::A => &self.choice_a,
            ChoiceSlot::B => &self.choice_b,
        }
    }

    /// The sentinel substituted for the whole collection when the story
    /// data cannot be parsed. Distinct from [`Scene::story_ended`] so bad
    /// data is never mistaken for a story's natural end.
    pub fn load_failure() -> &'static Scene {
        &LOAD_FAILURE
    }

    /// The sentinel returned when a scene lookup misses. Dangling choice
    /// targets and exhausted stories both resolve here.
    pub fn story_ended() -> &'static Scene {
        &STORY_ENDED
    }

    /// Check whether this scene is one of the two sentinels.
    ///
    /// Sentinel scenes have inert choices, so reaching one is the
    /// practical end of a playthrough.
    pub fn is_sentinel(&self) -> bool {
        self == Scene::load_failure() || self == Scene::story_ended()
    }
}
