//! Audio-related small types and handles.

use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug)]
pub enum AudioCmd {
    /// Start (or resume) the episode at the given index.
    Play(usize),
    /// Pause the episode at the given index, keeping its position.
    Pause(usize),
    /// Move the episode's playback position to an absolute offset.
    Seek { index: usize, position: Duration },
    /// Quit the audio thread, optionally fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}

/// Runtime playback information shared with the event loop.
#[derive(Debug, Clone)]
pub struct PlaybackInfo {
    /// Episode currently loaded in the engine (playing or paused), if any.
    pub index: Option<usize>,
    /// Elapsed playback time for the current episode.
    pub elapsed: Duration,
    /// Whether playback is currently audible.
    pub playing: bool,
    finished: Option<usize>,
}

impl PlaybackInfo {
    /// Record that an episode ran to its natural end.
    ///
    /// Ends are rare enough that a single slot suffices: only one episode
    /// can be audible, so two ends can't race between event-loop polls.
    pub fn mark_finished(&mut self, index: usize) {
        self.finished = Some(index);
    }

    /// Consume the pending end-of-episode notification, if one arrived.
    pub fn take_finished(&mut self) -> Option<usize> {
        self.finished.take()
    }
}

impl Default for PlaybackInfo {
    fn default() -> Self {
        Self {
            index: None,
            elapsed: Duration::ZERO,
            playing: false,
            finished: None,
        }
    }
}

pub type PlaybackHandle = Arc<Mutex<PlaybackInfo>>;
