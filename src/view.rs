//! Pure projection from a scene to a renderable view description.
//!
//! Nothing here touches session state or issues side effects; a UI shell
//! takes a [`SceneView`], draws it with whatever framework it likes, and
//! maps control activations back onto session operations.

use crate::story::{ChoiceSlot, Scene, SceneId};
use serde::{Deserialize, Serialize};

/// One choice control: which slot it activates, its label, its target.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ChoiceButton {
    pub slot: ChoiceSlot,
    pub label: String,
    pub target: SceneId,
}

/// Everything a shell needs to draw one scene.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SceneView {
    pub title: String,
    pub body: String,
    pub choices: [ChoiceButton; 2],
    /// Whether the back control should be enabled.
    pub can_go_back: bool,
}

/// Render a scene to a view description.
///
/// # Example
///
/// ```rust
/// use plotline::story::{ChoiceSlot, Scene};
/// use plotline::view::render;
///
/// let scene: Scene = serde_json::from_str(
///     r#"{"id": 0, "title": "Gate", "text": "A gate stands open.",
///         "a": {"text": "Enter", "to": 1}, "b": {"text": "Leave", "to": 2}}"#,
/// )
/// .unwrap();
///
/// let view = render(&scene, false);
/// assert_eq!(view.title, "Gate");
/// assert_eq!(view.choices[0].label, "Enter");
/// assert!(!view.can_go_back);
/// ```
pub fn render(scene: &Scene, can_go_back: bool) -> SceneView {
    let button = |slot: ChoiceSlot| {
        let choice = scene.choice(slot);
        ChoiceButton {
            slot,
            label: choice.label.clone(),
            target: choice.target,
        }
    };

    SceneView {
        title: scene.title.clone(),
        body: scene.text.clone(),
        choices: [button(ChoiceSlot::A), button(ChoiceSlot::B)],
        can_go_back,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::Choice;

    fn scene() -> Scene {
        Scene {
            id: SceneId(4),
            title: "Bridge".to_string(),
            text: "The planks creak.".to_string(),
            choice_a: Choice {
                label: "Cross".to_string(),
                target: SceneId(5),
            },
            choice_b: Choice {
                label: "Retreat".to_string(),
                target: SceneId(3),
            },
        }
    }

    #[test]
    fn render_copies_title_and_body() {
        let view = render(&scene(), false);
        assert_eq!(view.title, "Bridge");
        assert_eq!(view.body, "The planks creak.");
    }

    #[test]
    fn render_orders_choices_a_then_b() {
        let view = render(&scene(), false);

        assert_eq!(view.choices[0].slot, ChoiceSlot::A);
        assert_eq!(view.choices[0].target, SceneId(5));
        assert_eq!(view.choices[1].slot, ChoiceSlot::B);
        assert_eq!(view.choices[1].label, "Retreat");
    }

    #[test]
    fn render_passes_back_availability_through() {
        assert!(render(&scene(), true).can_go_back);
        assert!(!render(&scene(), false).can_go_back);
    }

    #[test]
    fn render_is_deterministic() {
        let scene = scene();
        assert_eq!(render(&scene, true), render(&scene, true));
    }

    #[test]
    fn sentinel_scene_renders_inert_buttons() {
        let view = render(Scene::story_ended(), false);

        assert!(view.choices[0].label.is_empty());
        assert_eq!(view.choices[0].target, SceneId(0));
    }
}
