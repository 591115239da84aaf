use super::*;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Play(usize),
    Pause(usize),
    Seek(usize, Duration),
}

struct FakeTransport {
    durations: Vec<Option<Duration>>,
    calls: Vec<Call>,
}

impl FakeTransport {
    fn new(durations: Vec<Option<Duration>>) -> Self {
        Self {
            durations,
            calls: Vec::new(),
        }
    }
}

impl Transport for FakeTransport {
    fn play(&mut self, card: usize) {
        self.calls.push(Call::Play(card));
    }

    fn pause(&mut self, card: usize) {
        self.calls.push(Call::Pause(card));
    }

    fn seek_to(&mut self, card: usize, position: Duration) {
        self.calls.push(Call::Seek(card, position));
    }

    fn duration(&self, card: usize) -> Option<Duration> {
        self.durations.get(card).copied().flatten()
    }
}

fn controller(cards: usize) -> PlayerController<FakeTransport> {
    let durations = vec![Some(Duration::from_secs(120)); cards];
    PlayerController::new(FakeTransport::new(durations), cards)
}

#[test]
fn toggle_starts_a_paused_card() {
    let mut c = controller(2);
    c.toggle_play(0);

    assert_eq!(c.card(0).unwrap().glyph, ToggleGlyph::Pause);
    assert_eq!(c.current(), Some(0));
    assert_eq!(c.transport().calls, vec![Call::Play(0)]);
}

#[test]
fn toggling_another_card_pauses_the_previous_one() {
    let mut c = controller(3);
    c.toggle_play(0);
    c.toggle_play(1);

    assert_eq!(c.card(0).unwrap().glyph, ToggleGlyph::Play);
    assert_eq!(c.card(1).unwrap().glyph, ToggleGlyph::Pause);
    assert_eq!(c.current(), Some(1));
    assert_eq!(
        c.transport().calls,
        vec![Call::Play(0), Call::Pause(0), Call::Play(1)]
    );

    // Exactly one card is ever in the Pause-glyph (playing) state.
    let playing = c
        .cards()
        .iter()
        .filter(|card| card.glyph == ToggleGlyph::Pause)
        .count();
    assert_eq!(playing, 1);
}

#[test]
fn toggle_twice_returns_to_paused_and_clears_session() {
    let mut c = controller(2);
    c.toggle_play(0);
    c.toggle_play(0);

    assert_eq!(c.card(0).unwrap().glyph, ToggleGlyph::Play);
    assert_eq!(c.current(), None);
    assert_eq!(c.transport().calls, vec![Call::Play(0), Call::Pause(0)]);
}

#[test]
fn position_update_writes_slider_and_label() {
    let mut c = controller(1);
    c.position_update(0, Duration::from_secs(50), Some(Duration::from_secs(200)));

    let card = c.card(0).unwrap();
    assert_eq!(card.slider, 25);
    assert_eq!(card.time_label, "0:50");
}

#[test]
fn position_update_at_natural_end_reads_full() {
    let mut c = controller(1);
    c.position_update(0, Duration::from_secs(65), Some(Duration::from_secs(65)));

    let card = c.card(0).unwrap();
    assert_eq!(card.slider, 100);
    assert_eq!(card.time_label, "1:05");
}

#[test]
fn position_update_clamps_past_the_end() {
    let mut c = controller(1);
    c.position_update(0, Duration::from_secs(90), Some(Duration::from_secs(60)));

    assert_eq!(c.card(0).unwrap().slider, 100);
}

#[test]
fn unknown_duration_leaves_card_untouched() {
    let mut c = controller(1);
    c.position_update(0, Duration::from_secs(30), Some(Duration::from_secs(60)));
    let before = c.card(0).unwrap().clone();

    c.position_update(0, Duration::from_secs(45), None);
    assert_eq!(c.card(0).unwrap(), &before);
}

#[test]
fn zero_duration_is_treated_as_unknown() {
    let mut c = controller(1);
    c.position_update(0, Duration::from_secs(10), Some(Duration::ZERO));

    let card = c.card(0).unwrap();
    assert_eq!(card.slider, 0);
    assert_eq!(card.time_label, "0:00");
}

#[test]
fn seek_maps_percent_onto_duration() {
    let mut c = controller(1);
    c.seek(0, 50.0);

    assert_eq!(
        c.transport().calls,
        vec![Call::Seek(0, Duration::from_secs(60))]
    );
}

#[test]
fn seek_clamps_out_of_range_values() {
    let mut c = controller(1);
    c.seek(0, 150.0);
    c.seek(0, -3.0);

    assert_eq!(
        c.transport().calls,
        vec![
            Call::Seek(0, Duration::from_secs(120)),
            Call::Seek(0, Duration::ZERO),
        ]
    );
}

#[test]
fn seek_updates_the_card_immediately() {
    let mut c = controller(1);
    c.seek(0, 50.0);

    // No position notification arrives for an unloaded episode, so the
    // scrubber and label must reflect the jump right away.
    let card = c.card(0).unwrap();
    assert_eq!(card.slider, 50);
    assert_eq!(card.time_label, "1:00");
}

#[test]
fn successive_scrub_steps_accumulate() {
    let mut c = controller(1);

    // Step the scrubber the way the key handler does: relative to the
    // card's current value.
    for _ in 0..2 {
        let from = c.card(0).unwrap().slider;
        c.seek(0, from as f64 + 5.0);
    }

    assert_eq!(c.card(0).unwrap().slider, 10);
    assert_eq!(
        c.transport().calls,
        vec![
            Call::Seek(0, Duration::from_secs(6)),
            Call::Seek(0, Duration::from_secs(12)),
        ]
    );
}

#[test]
fn seek_without_known_duration_is_a_noop() {
    let mut c = PlayerController::new(FakeTransport::new(vec![None]), 1);
    c.seek(0, 50.0);

    assert!(c.transport().calls.is_empty());
    assert_eq!(c.card(0).unwrap(), &CardState::default());
}

#[test]
fn track_ended_resets_card_regardless_of_prior_state() {
    let mut c = controller(2);
    c.toggle_play(1);
    c.position_update(1, Duration::from_secs(50), Some(Duration::from_secs(200)));

    c.track_ended(1);
    let card = c.card(1).unwrap();
    assert_eq!(card.glyph, ToggleGlyph::Play);
    assert_eq!(card.slider, 0);
    assert_eq!(card.time_label, "0:00");

    // Resetting an already-reset card is harmless.
    c.track_ended(1);
    assert_eq!(c.card(1).unwrap(), &CardState::default());
}

#[test]
fn track_ended_releases_the_session() {
    let mut c = controller(2);
    c.toggle_play(0);
    c.track_ended(0);
    assert_eq!(c.current(), None);

    // A stale session must not pause the finished card on the next toggle.
    c.toggle_play(1);
    assert_eq!(
        c.transport().calls,
        vec![Call::Play(0), Call::Play(1)]
    );
}

#[test]
fn track_ended_for_another_card_keeps_the_session() {
    let mut c = controller(2);
    c.toggle_play(0);
    c.track_ended(1);
    assert_eq!(c.current(), Some(0));
}

#[test]
fn format_elapsed_pads_seconds_only() {
    assert_eq!(format_elapsed(Duration::ZERO), "0:00");
    assert_eq!(format_elapsed(Duration::from_secs(9)), "0:09");
    assert_eq!(format_elapsed(Duration::from_secs(65)), "1:05");
    assert_eq!(format_elapsed(Duration::from_secs(600)), "10:00");
    // Sub-second fractions floor to the whole second.
    assert_eq!(format_elapsed(Duration::from_millis(59_900)), "0:59");
}
