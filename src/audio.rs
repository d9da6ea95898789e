//! The audio capability boundary.
//!
//! Playback is delegated to whatever the embedding platform provides.
//! Both cues are fire-and-forget: no return value, no completion
//! callback, and playback failures are invisible to the engine.

use tracing::debug;

/// A sink for the engine's two audio cues.
///
/// Implementations must be safe to invoke repeatedly without blocking
/// the calling thread. The engine never inspects the outcome.
pub trait AudioSink: Send {
    /// Play the click effect for a choice activation.
    fn play_effect(&self);

    /// Play the ambient background cue.
    fn play_ambient(&self);
}

/// Sink that swallows every cue.
///
/// The default for sessions built without an audio capability, and a
/// convenient stand-in for tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play_effect(&self) {
        debug!("click cue dropped (null audio)");
    }

    fn play_ambient(&self) {
        debug!("ambient cue dropped (null audio)");
    }
}
