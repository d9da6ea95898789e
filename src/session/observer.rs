//! Session observers: how presentation layers react to state changes.
//!
//! The session notifies every registered observer with the resolved
//! current scene after each mutation. Observers stand in for whatever
//! reactive machinery a UI shell uses; the engine itself stays framework
//! free.

use crate::story::Scene;

/// Receives the resolved current scene after every session mutation.
///
/// Notification always carries the scene returned by the store lookup,
/// so observers see the sentinel when a choice target dangles.
pub trait Observer: Send {
    /// Called after `select`, and after `go_back` when it moved.
    fn scene_changed(&mut self, scene: &Scene);
}

/// Observer backed by a closure.
///
/// # Example
///
/// ```rust
/// use plotline::session::{FnObserver, Observer};
/// use plotline::story::Scene;
///
/// let mut titles: Vec<String> = Vec::new();
/// let mut observer = FnObserver::new(move |scene: &Scene| {
///     titles.push(scene.title.clone());
/// });
///
/// observer.scene_changed(Scene::story_ended());
/// ```
pub struct FnObserver<F>
where
    F: FnMut(&Scene) + Send,
{
    callback: F,
}

impl<F> FnObserver<F>
where
    F: FnMut(&Scene) + Send,
{
    /// Wrap a closure as an observer.
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> Observer for FnObserver<F>
where
    F: FnMut(&Scene) + Send,
{
    fn scene_changed(&mut self, scene: &Scene) {
        (self.callback)(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn fn_observer_invokes_closure() {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = Arc::clone(&count);

        let mut observer = FnObserver::new(move |_scene: &Scene| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        observer.scene_changed(Scene::story_ended());
        observer.scene_changed(Scene::story_ended());

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn fn_observer_sees_the_scene() {
        let mut seen = None;
        {
            let mut observer = FnObserver::new(|scene: &Scene| {
                seen = Some(scene.title.clone());
            });
            observer.scene_changed(Scene::load_failure());
        }
        assert_eq!(seen.as_deref(), Some(Scene::load_failure().title.as_str()));
    }
}
