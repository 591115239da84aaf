//! MPRIS (`org.mpris.MediaPlayer2`) integration.
//!
//! Media keys and `playerctl` drive the same controller operations the
//! keyboard does: play/pause the current card, move the selection, seek.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, mpsc::Sender};
use std::time::Duration;

use async_io::{Timer, block_on};
use zbus::{Connection, interface};
use zvariant::{OwnedValue, Value};

use crate::app::PlaybackState;

pub const BUS_NAME: &str = "org.mpris.MediaPlayer2.podbay";

#[derive(Clone, Debug)]
pub enum ControlCmd {
    Quit,
    Play,
    Pause,
    PlayPause,
    Stop,
    Next,
    Prev,
    /// Relative seek, offset in microseconds (the MPRIS `Seek` convention).
    SeekBy(i64),
}

/// Metadata for the episode currently holding (or last holding) the session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NowPlaying {
    pub title: String,
    pub author: Option<String>,
    pub show: Option<String>,
    pub length: Option<Duration>,
}

#[derive(Debug, Default)]
struct SharedState {
    playback: PlaybackState,
    now_playing: Option<NowPlaying>,
}

pub struct MprisHandle {
    state: Arc<Mutex<SharedState>>,
}

impl MprisHandle {
    pub fn set_playback(&self, playback: PlaybackState) {
        if let Ok(mut s) = self.state.lock() {
            s.playback = playback;
        }
    }

    pub fn set_now_playing(&self, now_playing: Option<NowPlaying>) {
        if let Ok(mut s) = self.state.lock() {
            s.now_playing = now_playing;
        }
    }
}

struct RootIface {
    tx: Sender<ControlCmd>,
}

#[interface(name = "org.mpris.MediaPlayer2")]
impl RootIface {
    fn raise(&self) {
        // No-op for TUI.
    }

    fn quit(&self) {
        let _ = self.tx.send(ControlCmd::Quit);
    }

    #[zbus(property)]
    fn can_quit(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_raise(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn has_track_list(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn identity(&self) -> &str {
        "podbay"
    }

    #[zbus(property)]
    fn supported_uri_schemes(&self) -> Vec<String> {
        vec![]
    }

    #[zbus(property)]
    fn supported_mime_types(&self) -> Vec<String> {
        vec![]
    }
}

struct PlayerIface {
    tx: Sender<ControlCmd>,
    state: Arc<Mutex<SharedState>>,
}

#[interface(name = "org.mpris.MediaPlayer2.Player")]
impl PlayerIface {
    fn next(&self) {
        let _ = self.tx.send(ControlCmd::Next);
    }

    fn previous(&self) {
        let _ = self.tx.send(ControlCmd::Prev);
    }

    fn play(&self) {
        let _ = self.tx.send(ControlCmd::Play);
    }

    fn pause(&self) {
        let _ = self.tx.send(ControlCmd::Pause);
    }

    fn play_pause(&self) {
        let _ = self.tx.send(ControlCmd::PlayPause);
    }

    fn stop(&self) {
        let _ = self.tx.send(ControlCmd::Stop);
    }

    fn seek(&self, offset: i64) {
        let _ = self.tx.send(ControlCmd::SeekBy(offset));
    }

    #[zbus(property)]
    fn playback_status(&self) -> &str {
        let Ok(s) = self.state.lock() else {
            return "Stopped";
        };
        match s.playback {
            PlaybackState::Stopped => "Stopped",
            PlaybackState::Playing => "Playing",
            PlaybackState::Paused => "Paused",
        }
    }

    #[zbus(property)]
    fn can_control(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_play(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_pause(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_seek(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_go_next(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_go_previous(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn metadata(&self) -> HashMap<String, OwnedValue> {
        let now_playing = self
            .state
            .lock()
            .ok()
            .and_then(|s| s.now_playing.clone())
            .unwrap_or_default();
        build_metadata(&now_playing)
    }
}

/// Assemble the `xesam:`/`mpris:` metadata map for `playerctl metadata`.
fn build_metadata(now_playing: &NowPlaying) -> HashMap<String, OwnedValue> {
    let mut map = HashMap::new();

    insert_str(&mut map, "xesam:title", &now_playing.title);
    if let Some(author) = &now_playing.author {
        insert_str(&mut map, "xesam:artist", author);
    }
    if let Some(show) = &now_playing.show {
        insert_str(&mut map, "xesam:album", show);
    }
    if let Some(length) = now_playing.length
        && let Ok(v) = OwnedValue::try_from(Value::from(length.as_micros() as i64))
    {
        map.insert("mpris:length".to_string(), v);
    }

    map
}

fn insert_str(map: &mut HashMap<String, OwnedValue>, key: &str, value: &str) {
    if let Ok(v) = OwnedValue::try_from(Value::from(value.to_string())) {
        map.insert(key.to_string(), v);
    }
}

pub fn spawn_mpris(tx: Sender<ControlCmd>) -> MprisHandle {
    let state = Arc::new(Mutex::new(SharedState::default()));

    let state_for_thread = state.clone();
    std::thread::spawn(move || {
        block_on(async move {
            let path = "/org/mpris/MediaPlayer2";

            let connection = match Connection::session().await {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("MPRIS: failed to connect to session bus: {e}");
                    return;
                }
            };

            if let Err(e) = connection.request_name(BUS_NAME).await {
                eprintln!("MPRIS: failed to acquire name: {e}");
                return;
            }

            let object_server = connection.object_server();

            if let Err(e) = object_server.at(path, RootIface { tx: tx.clone() }).await {
                eprintln!("MPRIS: failed to register root iface: {e}");
                return;
            }

            if let Err(e) = object_server
                .at(
                    path,
                    PlayerIface {
                        tx,
                        state: state_for_thread,
                    },
                )
                .await
            {
                eprintln!("MPRIS: failed to register player iface: {e}");
                return;
            }

            // Keep the service alive.
            loop {
                Timer::after(std::time::Duration::from_secs(3600)).await;
            }
        });
    });

    MprisHandle { state }
}
