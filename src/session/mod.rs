//! The playthrough session: one explicitly constructed state owner.
//!
//! A [`Session`] ties together the loaded [`SceneStore`], the mutable
//! [`Navigation`] state, the audio capability, and registered observers.
//! There is no ambient singleton; shells construct a session, hold it for
//! the lifetime of the UI, and drop it when the UI goes away. Navigation
//! state is never persisted.
//!
//! All mutations run synchronously on the caller's thread; after each
//! one the session resolves the current scene and notifies observers,
//! which is how rendering stays in step with state.

mod builder;
mod history;
mod navigation;
mod observer;

pub use builder::{BuildError, SessionBuilder};
pub use history::{History, HistoryEntry};
pub use navigation::Navigation;
pub use observer::{FnObserver, Observer};

use crate::audio::AudioSink;
use crate::story::{ChoiceSlot, Scene, SceneStore};
use crate::view::{self, SceneView};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Unique identifier of a session.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One playthrough of a story.
///
/// # Example
///
/// ```rust
/// use plotline::session::SessionBuilder;
/// use plotline::story::{ChoiceSlot, SceneId, SceneStore};
///
/// let data = br#"[
///     {"id": 0, "title": "Gate", "text": "A gate stands open.",
///      "a": {"text": "Enter", "to": 1}, "b": {"text": "Leave", "to": 2}},
///     {"id": 1, "title": "Courtyard", "text": "Quiet inside.",
///      "a": {"text": "", "to": 0}, "b": {"text": "", "to": 0}}
/// ]"#;
///
/// let mut session = SessionBuilder::new()
///     .store(SceneStore::load(data))
///     .build()
///     .unwrap();
///
/// assert_eq!(session.current_scene().id, SceneId(0));
/// session.select(ChoiceSlot::A);
/// assert_eq!(session.current_scene().id, SceneId(1));
/// session.go_back();
/// assert_eq!(session.current_scene().id, SceneId(0));
/// ```
pub struct Session {
    id: SessionId,
    store: SceneStore,
    navigation: Navigation,
    audio: Box<dyn AudioSink>,
    observers: Vec<Box<dyn Observer>>,
    ambient_on: bool,
}

impl Session {
    pub(crate) fn with_parts(
        store: SceneStore,
        audio: Box<dyn AudioSink>,
        observers: Vec<Box<dyn Observer>>,
    ) -> Self {
        let initial = store.first_scene_id();
        let id = SessionId::new();
        debug!(session = %id, initial = %initial, scenes = store.len(), "session started");
        Self {
            id,
            store,
            navigation: Navigation::new(initial),
            audio,
            observers,
            ambient_on: false,
        }
    }

    /// This session's unique id.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The scene store backing this session.
    pub fn store(&self) -> &SceneStore {
        &self.store
    }

    /// The navigation state.
    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    /// Resolve the current scene. Pure projection; never fails.
    ///
    /// When the current id dangles, this is the terminal sentinel.
    pub fn current_scene(&self) -> &Scene {
        self.store.lookup(self.navigation.current())
    }

    /// Take one of the current scene's choices.
    ///
    /// Plays the click cue first, then moves, then notifies observers
    /// with the newly resolved scene. The cue and the transition stay
    /// decoupled: a silent audio sink changes nothing about navigation.
    pub fn select(&mut self, slot: ChoiceSlot) {
        let target = self.current_scene().choice(slot).target;
        debug!(session = %self.id, slot = slot.name(), target = %target, "select");
        self.audio.play_effect();
        self.navigation.choose(target);
        self.notify();
    }

    /// Undo the most recent choice.
    ///
    /// With empty history this is a silent no-op and observers are not
    /// notified. Returns whether anything moved.
    pub fn go_back(&mut self) -> bool {
        if self.navigation.back() {
            self.notify();
            true
        } else {
            false
        }
    }

    /// Flip the ambient-audio flag and trigger the ambient cue.
    ///
    /// Returns the new flag value. Has no coupling to navigation state.
    pub fn toggle_ambient(&mut self) -> bool {
        self.ambient_on = !self.ambient_on;
        debug!(session = %self.id, on = self.ambient_on, "toggle ambient");
        self.audio.play_ambient();
        self.ambient_on
    }

    /// Whether the ambient-audio flag is set.
    pub fn ambient_on(&self) -> bool {
        self.ambient_on
    }

    /// Register an observer on a running session.
    pub fn subscribe(&mut self, observer: impl Observer + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Render the current scene to a framework-free view description.
    pub fn view(&self) -> SceneView {
        view::render(self.current_scene(), !self.navigation.history().is_empty())
    }

    fn notify(&mut self) {
        // Clone the resolved scene so notification does not hold a
        // borrow of the store while observers run.
        let scene = self.current_scene().clone();
        for observer in &mut self.observers {
            observer.scene_changed(&scene);
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("current", &self.navigation.current())
            .field("history_len", &self.navigation.history().len())
            .field("ambient_on", &self.ambient_on)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::SceneId;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const STORY: &[u8] = br#"[
        {"id": 0, "title": "Gate", "text": "A gate stands open.",
         "a": {"text": "Enter", "to": 1}, "b": {"text": "Leave", "to": 99}},
        {"id": 1, "title": "Courtyard", "text": "Quiet inside.",
         "a": {"text": "Onward", "to": 2}, "b": {"text": "Back out", "to": 0}},
        {"id": 2, "title": "Hall", "text": "Dust everywhere.",
         "a": {"text": "", "to": 0}, "b": {"text": "", "to": 0}}
    ]"#;

    /// Audio sink counting cue invocations.
    #[derive(Clone, Default)]
    struct CountingAudio {
        effects: Arc<AtomicUsize>,
        ambients: Arc<AtomicUsize>,
    }

    impl AudioSink for CountingAudio {
        fn play_effect(&self) {
            self.effects.fetch_add(1, Ordering::SeqCst);
        }

        fn play_ambient(&self) {
            self.ambients.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn session_with(audio: CountingAudio) -> Session {
        SessionBuilder::new()
            .store(SceneStore::load(STORY))
            .audio(audio)
            .build()
            .unwrap()
    }

    #[test]
    fn session_starts_at_first_scene() {
        let session = session_with(CountingAudio::default());
        assert_eq!(session.current_scene().id, SceneId(0));
        assert!(session.navigation().history().is_empty());
    }

    #[test]
    fn select_moves_to_choice_target() {
        let mut session = session_with(CountingAudio::default());

        session.select(ChoiceSlot::A);

        assert_eq!(session.current_scene().id, SceneId(1));
        assert_eq!(
            session.navigation().history().scene_ids(),
            vec![SceneId(0)]
        );
    }

    #[test]
    fn select_plays_click_cue() {
        let audio = CountingAudio::default();
        let mut session = session_with(audio.clone());

        session.select(ChoiceSlot::A);
        session.select(ChoiceSlot::B);

        assert_eq!(audio.effects.load(Ordering::SeqCst), 2);
        assert_eq!(audio.ambients.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn dangling_target_resolves_to_terminal_sentinel() {
        let mut session = session_with(CountingAudio::default());

        session.select(ChoiceSlot::B); // to 99, which does not exist

        assert_eq!(session.current_scene(), Scene::story_ended());
        // The dangling id is still on the history stack.
        assert!(session.go_back());
        assert_eq!(session.current_scene().id, SceneId(0));
    }

    #[test]
    fn go_back_on_empty_history_is_a_no_op() {
        let mut session = session_with(CountingAudio::default());

        assert!(!session.go_back());
        assert_eq!(session.current_scene().id, SceneId(0));
    }

    #[test]
    fn go_back_does_not_play_cue() {
        let audio = CountingAudio::default();
        let mut session = session_with(audio.clone());

        session.select(ChoiceSlot::A);
        session.go_back();

        assert_eq!(audio.effects.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn toggle_ambient_flips_flag_and_plays_cue() {
        let audio = CountingAudio::default();
        let mut session = session_with(audio.clone());

        assert!(session.toggle_ambient());
        assert!(!session.toggle_ambient());

        assert_eq!(audio.ambients.load(Ordering::SeqCst), 2);
        // Ambient toggling never touches navigation.
        assert_eq!(session.current_scene().id, SceneId(0));
        assert!(session.navigation().history().is_empty());
    }

    #[test]
    fn observers_are_notified_with_resolved_scene() {
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);

        let mut session = SessionBuilder::new()
            .store(SceneStore::load(STORY))
            .observe(FnObserver::new(move |scene: &Scene| {
                seen_clone.lock().unwrap().push(scene.id);
            }))
            .build()
            .unwrap();

        session.select(ChoiceSlot::A);
        session.go_back();
        session.go_back(); // no-op, must not notify

        let seen = seen.lock().unwrap();
        assert_eq!(*seen, vec![SceneId(1), SceneId(0)]);
    }

    #[test]
    fn subscribe_adds_observer_to_running_session() {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = Arc::clone(&count);

        let mut session = session_with(CountingAudio::default());
        session.subscribe(FnObserver::new(move |_scene: &Scene| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        }));

        session.select(ChoiceSlot::A);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn empty_store_session_sits_on_terminal_sentinel() {
        let mut session = SessionBuilder::new()
            .store(SceneStore::load(b"[]"))
            .build()
            .unwrap();

        assert_eq!(session.current_scene(), Scene::story_ended());

        // Selecting a sentinel's inert choice loops back to id 0.
        session.select(ChoiceSlot::A);
        assert_eq!(session.current_scene(), Scene::story_ended());
    }

    #[test]
    fn malformed_story_session_shows_load_failure_scene() {
        let session = SessionBuilder::new()
            .store(SceneStore::load(b"garbage"))
            .build()
            .unwrap();

        assert_eq!(session.current_scene(), Scene::load_failure());
        assert_ne!(session.current_scene(), Scene::story_ended());
    }

    #[test]
    fn session_ids_are_unique() {
        let a = session_with(CountingAudio::default());
        let b = session_with(CountingAudio::default());
        assert_ne!(a.id(), b.id());
    }
}
