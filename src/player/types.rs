//! Card state and the playback backend seam used by the controller.

use std::time::Duration;

/// What the play/pause toggle on a card currently shows.
///
/// The glyph doubles as the card's state: a card showing `Play` is paused,
/// a card showing `Pause` is playing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ToggleGlyph {
    Play,
    Pause,
}

impl Default for ToggleGlyph {
    fn default() -> Self {
        Self::Play
    }
}

/// UI state of one episode card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardState {
    pub glyph: ToggleGlyph,
    /// Scrubber position, 0..=100.
    pub slider: u8,
    /// Elapsed time rendered as `m:ss` ("0:00", "1:05").
    pub time_label: String,
}

impl Default for CardState {
    fn default() -> Self {
        Self {
            glyph: ToggleGlyph::Play,
            slider: 0,
            time_label: "0:00".to_string(),
        }
    }
}

/// Playback backend driven by the controller.
///
/// One implementation wraps the rodio engine; tests substitute a recording
/// fake. `duration` returns `None` while the episode's length is unknown.
pub trait Transport {
    fn play(&mut self, card: usize);
    fn pause(&mut self, card: usize);
    fn seek_to(&mut self, card: usize, position: Duration);
    fn duration(&self, card: usize) -> Option<Duration>;
}

/// Format an elapsed position as `m:ss` with zero-padded seconds.
///
/// Minutes are not padded: 50 seconds renders as "0:50", 65 as "1:05".
pub fn format_elapsed(position: Duration) -> String {
    let secs = position.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}
