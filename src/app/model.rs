//! Application model types: `App` and `PlaybackState`.
//!
//! The `App` struct holds the scanned episodes, the selection cursor and the
//! latest playback snapshot used by the UI, MPRIS and the event loop.

use crate::audio::PlaybackHandle;
use crate::library::Episode;

/// Session-wide playback state, as shown in the status line and on MPRIS.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    /// No episode loaded at all.
    Stopped,
    Playing,
    Paused,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::Stopped
    }
}

/// The main application model.
pub struct App {
    pub episodes: Vec<Episode>,
    pub selected: usize,
    pub playback: PlaybackState,
    pub playback_handle: Option<PlaybackHandle>,
    pub current_dir: Option<String>,
    pub details_window: bool,
}

impl App {
    pub fn new(episodes: Vec<Episode>) -> Self {
        Self {
            episodes,
            selected: 0,
            playback: PlaybackState::Stopped,
            playback_handle: None,
            current_dir: None,
            details_window: false,
        }
    }

    /// Attach the `PlaybackHandle` used to observe playback progress.
    pub fn set_playback_handle(&mut self, h: PlaybackHandle) {
        self.playback_handle = Some(h);
    }

    /// Record the scanned directory in the app state.
    pub fn set_current_dir(&mut self, dir: String) {
        self.current_dir = Some(dir);
    }

    pub fn toggle_details_window(&mut self) {
        self.details_window = !self.details_window;
    }

    pub fn has_episodes(&self) -> bool {
        !self.episodes.is_empty()
    }

    pub fn set_selected(&mut self, idx: usize) {
        if idx < self.episodes.len() {
            self.selected = idx;
        }
    }

    /// Move the cursor to the next card, wrapping at the end.
    pub fn next(&mut self) {
        if self.episodes.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.episodes.len();
    }

    /// Move the cursor to the previous card, wrapping at the start.
    pub fn prev(&mut self) {
        if self.episodes.is_empty() {
            return;
        }
        self.selected = if self.selected == 0 {
            self.episodes.len() - 1
        } else {
            self.selected - 1
        };
    }
}
