//! UI rendering helpers for the terminal user interface.
//!
//! This module renders the episode cards using `ratatui`: one list row per
//! card (toggle glyph, heading, elapsed label) plus a progress gauge for the
//! focused card.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock, time::Duration};

use crate::app::{App, PlaybackState};
use crate::config::{ControlsSettings, UiSettings};
use crate::player::{CardState, ToggleGlyph};

static CONTROLS_MAP: LazyLock<BTreeMap<String, String>> = LazyLock::new(|| {
    let mut map: BTreeMap<String, String> = BTreeMap::new();
    map.insert("j/k".to_string(), "up/down".to_string());
    map.insert("enter/space".to_string(), "play/pause card".to_string());
    // h/l is filled dynamically from config.
    map.insert("0".to_string(), "back to start".to_string());
    map.insert("K".to_string(), "episode details".to_string());
    map.insert("q".to_string(), "quit".to_string());
    map
});

/// Render the controls help text, incorporating the scrub step.
fn controls_text(seek_step_percent: u8) -> String {
    let order = ["j/k", "enter/space", "h/l", "0", "K", "q"];
    order
        .iter()
        .filter_map(|k| {
            if *k == "h/l" {
                Some(format!("[h/l] scrub -/+{}%", seek_step_percent))
            } else {
                CONTROLS_MAP.get(*k).map(|v| format!("[{}] {}", k, v))
            }
        })
        .collect::<Vec<String>>()
        .join(" | ")
}

/// The glyph a card currently shows, resolved against the configured strings.
fn glyph_text<'a>(card: &CardState, ui: &'a UiSettings) -> &'a str {
    match card.glyph {
        ToggleGlyph::Play => &ui.play_glyph,
        ToggleGlyph::Pause => &ui.pause_glyph,
    }
}

/// Format a total duration as `m:ss`, or a dash while it is unknown.
fn format_total(total: Option<Duration>) -> String {
    match total {
        Some(d) => {
            let secs = d.as_secs();
            format!("{}:{:02}", secs / 60, secs % 60)
        }
        None => "-:--".to_string(),
    }
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Render the entire UI from `app` plus the controller's card states.
pub fn draw(
    frame: &mut Frame,
    app: &App,
    cards: &[CardState],
    session: Option<usize>,
    ui_settings: &UiSettings,
    controls_settings: &ControlsSettings,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" podbay ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Status box
    let status = {
        let mut parts: Vec<String> = Vec::new();

        match app.playback {
            PlaybackState::Stopped => parts.push("Stopped".to_string()),
            PlaybackState::Playing => parts.push("Playing".to_string()),
            PlaybackState::Paused => parts.push("Paused".to_string()),
        }

        let now_playing = session
            .or_else(|| {
                app.playback_handle
                    .as_ref()
                    .and_then(|h| h.lock().ok().and_then(|info| info.index))
            })
            .and_then(|i| app.episodes.get(i));
        if let Some(ep) = now_playing {
            parts.push(format!("Episode: {}", ep.display));
        }

        if let Some(dir) = &app.current_dir {
            parts.push(format!("Dir: {}", dir));
        }

        parts.join(" • ")
    };

    let status_par = Paragraph::new(status)
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" status "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, chunks[1]);

    // Episode cards
    {
        let items: Vec<ListItem> = app
            .episodes
            .iter()
            .enumerate()
            .map(|(i, ep)| {
                let card = cards.get(i);
                let glyph = card
                    .map(|c| glyph_text(c, ui_settings))
                    .unwrap_or(&ui_settings.play_glyph);
                let row = if ui_settings.show_card_time {
                    let label = card.map(|c| c.time_label.as_str()).unwrap_or("0:00");
                    format!(
                        "{} {}  [{} / {}]",
                        glyph,
                        ep.display,
                        label,
                        format_total(ep.duration)
                    )
                } else {
                    format!("{} {}", glyph, ep.display)
                };
                ListItem::new(row)
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" episodes "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ratatui::widgets::ListState::default();
        if app.has_episodes() {
            state.select(Some(app.selected));
        }
        frame.render_stateful_widget(list, chunks[2], &mut state);
    }

    // Progress gauge for the focused card (the session if one is live,
    // otherwise the cursor).
    {
        let focus = session.unwrap_or(app.selected);
        let (percent, label) = match (cards.get(focus), app.episodes.get(focus)) {
            (Some(card), Some(ep)) => (
                card.slider.min(100) as u16,
                format!("{} / {}", card.time_label, format_total(ep.duration)),
            ),
            _ => (0, "-:-- / -:--".to_string()),
        };

        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(" progress "))
            .percent(percent)
            .label(label);
        frame.render_widget(gauge, chunks[3]);
    }

    // Overlay episode details popup (keeps list visible under it)
    if app.details_window {
        let list_area = chunks[2];
        let popup_area = centered_rect_sized(72, 9, list_area);
        frame.render_widget(Clear, popup_area);

        let episode = app.episodes.get(app.selected);
        let details = if let Some(ep) = episode {
            format!(
                "Title: {}\nAuthor: {}\nShow: {}\nDuration: {}\nPath: {}",
                ep.title,
                ep.author.as_deref().unwrap_or("-"),
                ep.show.as_deref().unwrap_or("-"),
                format_total(ep.duration),
                ep.path.display()
            )
        } else {
            "No episode selected".to_string()
        };
        let details_paragraph = Paragraph::new(details)
            .block(
                Block::default()
                    .padding(Padding {
                        left: 1,
                        right: 0,
                        top: 0,
                        bottom: 0,
                    })
                    .borders(Borders::ALL)
                    .title(" episode (K closes) "),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(details_paragraph, popup_area);
    }

    let footer = Paragraph::new(controls_text(controls_settings.seek_step_percent))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(footer, chunks[4]);
}
