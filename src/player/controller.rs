use std::time::Duration;

use super::types::{CardState, ToggleGlyph, Transport, format_elapsed};

/// Controller for the episode cards.
///
/// Holds one [`CardState`] per episode (bound once at construction, indexed
/// by episode id) plus the session reference naming the card that is
/// currently audible. At most one card plays at a time; `toggle_play`
/// enforces that by pausing the previous card before starting a new one.
pub struct PlayerController<T: Transport> {
    transport: T,
    cards: Vec<CardState>,
    current: Option<usize>,
}

impl<T: Transport> PlayerController<T> {
    /// Bind `card_count` cards, all initially paused at 0:00.
    pub fn new(transport: T, card_count: usize) -> Self {
        Self {
            transport,
            cards: vec![CardState::default(); card_count],
            current: None,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn cards(&self) -> &[CardState] {
        &self.cards
    }

    pub fn card(&self, id: usize) -> Option<&CardState> {
        self.cards.get(id)
    }

    /// The card currently holding the playback session, if any.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Start the card if it is paused, pause it if it is playing.
    ///
    /// Whichever other card holds the session is paused first and its glyph
    /// reset, so exclusivity holds unconditionally. A toggle that lands
    /// while a start is still in flight reads as a normal pause.
    pub fn toggle_play(&mut self, id: usize) {
        if id >= self.cards.len() {
            debug_assert!(false, "toggle_play: unknown card {id}");
            return;
        }

        if let Some(cur) = self.current {
            if cur != id {
                self.transport.pause(cur);
                self.cards[cur].glyph = ToggleGlyph::Play;
            }
        }

        match self.cards[id].glyph {
            ToggleGlyph::Play => {
                self.transport.play(id);
                self.cards[id].glyph = ToggleGlyph::Pause;
                self.current = Some(id);
            }
            ToggleGlyph::Pause => {
                self.transport.pause(id);
                self.cards[id].glyph = ToggleGlyph::Play;
                self.current = None;
            }
        }
    }

    /// Apply a position notification from the backend to the card.
    ///
    /// While the episode's duration is unknown the card is left exactly as
    /// it was; there is nothing sensible to show yet.
    pub fn position_update(&mut self, id: usize, position: Duration, duration: Option<Duration>) {
        let Some(card) = self.cards.get_mut(id) else {
            debug_assert!(false, "position_update: unknown card {id}");
            return;
        };
        let Some(duration) = duration else {
            return;
        };
        if duration.is_zero() {
            return;
        }

        let percent = (position.as_secs_f64() / duration.as_secs_f64() * 100.0).clamp(0.0, 100.0);
        card.slider = percent.round() as u8;
        card.time_label = format_elapsed(position);
    }

    /// Jump the card to `scrubber_value` percent of its duration.
    ///
    /// This is an absolute seek, not an increment. Unknown duration is a
    /// silent no-op; the card's state refreshes on the next position update.
    pub fn seek(&mut self, id: usize, scrubber_value: f64) {
        if id >= self.cards.len() {
            debug_assert!(false, "seek: unknown card {id}");
            return;
        }
        let Some(duration) = self.transport.duration(id) else {
            return;
        };

        let percent = scrubber_value.clamp(0.0, 100.0);
        let target = duration.mul_f64(percent / 100.0);

        // The engine only publishes positions for the loaded episode, so the
        // card must reflect the jump immediately, not wait for a tick.
        let card = &mut self.cards[id];
        card.slider = percent.round() as u8;
        card.time_label = format_elapsed(target);

        self.transport.seek_to(id, target);
    }

    /// The episode finished on its own: reset the card and release the
    /// session so the next toggle does not pause a card that already
    /// stopped. Safe to call on an already-reset card.
    pub fn track_ended(&mut self, id: usize) {
        let Some(card) = self.cards.get_mut(id) else {
            debug_assert!(false, "track_ended: unknown card {id}");
            return;
        };
        *card = CardState::default();
        if self.current == Some(id) {
            self.current = None;
        }
    }
}
