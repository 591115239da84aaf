use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, PlaybackState};
use crate::audio::AudioEngine;
use crate::config;
use crate::mpris::{ControlCmd, MprisHandle};
use crate::runtime::mpris_sync::update_mpris;
use crate::ui;

use super::Controller;

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    /// Last now-playing index as emitted to MPRIS.
    pub last_mpris_index: Option<usize>,
    /// Last playback state as emitted to MPRIS.
    pub last_mpris_playback: PlaybackState,
}

impl EventLoopState {
    pub fn new(app: &App) -> Self {
        Self {
            last_mpris_index: None,
            last_mpris_playback: app.playback,
        }
    }
}

/// Main terminal event loop: handles input, UI drawing, sync with the audio
/// thread and MPRIS. Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    controller: &mut Controller,
    engine: &AudioEngine,
    mpris: &MprisHandle,
    control_rx: &mpsc::Receiver<ControlCmd>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        let now_playing = sync_playback(app, controller);

        // Keep MPRIS in sync even when changes come from media keys or an
        // episode ending on its own.
        if now_playing != state.last_mpris_index || app.playback != state.last_mpris_playback {
            update_mpris(mpris, app, now_playing);
            state.last_mpris_index = now_playing;
            state.last_mpris_playback = app.playback;
        }

        terminal.draw(|f| {
            ui::draw(
                f,
                app,
                controller.cards(),
                controller.current(),
                &settings.ui,
                &settings.controls,
            )
        })?;

        while let Ok(cmd) = control_rx.try_recv() {
            if handle_control_cmd(cmd, settings, app, controller, engine, mpris)? {
                return Ok(());
            }
        }

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if handle_key_event(key, settings, app, controller, engine)? {
                        return Ok(());
                    }
                }
                Event::FocusLost => {
                    // The terminal went to the background: stop being audible,
                    // keep the card's position for when the user comes back.
                    if settings.controls.pause_on_focus_loss {
                        if let Some(cur) = controller.current() {
                            controller.toggle_play(cur);
                        }
                    }
                }
                _ => {}
            }
        }
    }
}

/// Drain the audio thread's snapshot into the controller and app state.
///
/// Returns the index of the episode the engine has loaded, if any.
fn sync_playback(app: &mut App, controller: &mut Controller) -> Option<usize> {
    let handle = app.playback_handle.as_ref().cloned()?;

    let (finished, index, elapsed) = {
        let mut info = handle.lock().ok()?;
        (info.take_finished(), info.index, info.elapsed)
    };

    if let Some(fin) = finished {
        controller.track_ended(fin);
    }

    if let Some(idx) = index {
        let duration = app.episodes.get(idx).and_then(|ep| ep.duration);
        controller.position_update(idx, elapsed, duration);
    }

    app.playback = if controller.current().is_some() {
        PlaybackState::Playing
    } else if index.is_some() {
        PlaybackState::Paused
    } else {
        PlaybackState::Stopped
    };

    index
}

/// The card a global play/seek command should land on: the session holder,
/// then the loaded-but-paused episode, then the cursor.
fn target_card(app: &App, controller: &Controller) -> Option<usize> {
    controller
        .current()
        .or_else(|| {
            app.playback_handle
                .as_ref()
                .and_then(|h| h.lock().ok().and_then(|info| info.index))
        })
        .or_else(|| app.has_episodes().then_some(app.selected))
}

fn handle_control_cmd(
    cmd: ControlCmd,
    settings: &config::Settings,
    app: &mut App,
    controller: &mut Controller,
    engine: &AudioEngine,
    mpris: &MprisHandle,
) -> Result<bool, Box<dyn std::error::Error>> {
    match cmd {
        ControlCmd::Quit => {
            engine.quit_softly(Duration::from_millis(settings.audio.quit_fade_out_ms));
            return Ok(true);
        }
        ControlCmd::Play => {
            if controller.current().is_none() {
                if let Some(target) = target_card(app, controller) {
                    controller.toggle_play(target);
                }
            }
        }
        ControlCmd::Pause | ControlCmd::Stop => {
            if let Some(cur) = controller.current() {
                controller.toggle_play(cur);
            }
        }
        ControlCmd::PlayPause => match controller.current() {
            Some(cur) => controller.toggle_play(cur),
            None => {
                if let Some(target) = target_card(app, controller) {
                    controller.toggle_play(target);
                }
            }
        },
        ControlCmd::Next => app.next(),
        ControlCmd::Prev => app.prev(),
        ControlCmd::SeekBy(offset_us) => {
            if let Some(target) = target_card(app, controller) {
                // Translate the absolute offset into a scrubber step.
                let duration = app.episodes.get(target).and_then(|ep| ep.duration);
                if let Some(dur) = duration.filter(|d| !d.is_zero()) {
                    let step = offset_us as f64 / dur.as_micros() as f64 * 100.0;
                    scrub(app, controller, step);
                }
            }
        }
    }

    update_mpris(mpris, app, target_card(app, controller));
    Ok(false)
}

fn handle_key_event(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    controller: &mut Controller,
    engine: &AudioEngine,
) -> Result<bool, Box<dyn std::error::Error>> {
    match key.code {
        KeyCode::Char('q') => {
            engine.quit_softly(Duration::from_millis(settings.audio.quit_fade_out_ms));
            return Ok(true);
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.next();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.prev();
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if app.has_episodes() {
                controller.toggle_play(app.selected);
            }
        }
        KeyCode::Char('l') | KeyCode::Right => {
            scrub(app, controller, settings.controls.seek_step_percent as f64);
        }
        KeyCode::Char('h') | KeyCode::Left => {
            scrub(app, controller, -(settings.controls.seek_step_percent as f64));
        }
        KeyCode::Char('0') => {
            if let Some(target) = target_card(app, controller) {
                controller.seek(target, 0.0);
            }
        }
        KeyCode::Char('K') => {
            app.toggle_details_window();
        }
        _ => {}
    }

    Ok(false)
}

/// Nudge the focused card's scrubber by `step` percent.
fn scrub(app: &App, controller: &mut Controller, step: f64) {
    let Some(target) = target_card(app, controller) else {
        return;
    };
    let Some(card) = controller.card(target) else {
        return;
    };
    controller.seek(target, card.slider as f64 + step);
}
