use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::config::AudioSettings;
use crate::library::Episode;
use crate::player::Transport;

use super::thread::spawn_audio_thread;
use super::types::{AudioCmd, PlaybackHandle, PlaybackInfo};

/// Owning handle to the audio thread.
pub struct AudioEngine {
    tx: Sender<AudioCmd>,
    playback: PlaybackHandle,
    durations: Arc<[Option<Duration>]>,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl AudioEngine {
    pub fn new(episodes: Vec<Episode>, audio_settings: AudioSettings) -> Self {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let playback_info: PlaybackHandle = Arc::new(Mutex::new(PlaybackInfo::default()));
        let durations: Arc<[Option<Duration>]> =
            episodes.iter().map(|e| e.duration).collect::<Vec<_>>().into();

        let audio_handle =
            spawn_audio_thread(episodes, rx, playback_info.clone(), audio_settings);

        Self {
            tx,
            playback: playback_info,
            durations,
            join: Mutex::new(Some(audio_handle)),
        }
    }

    pub fn playback_handle(&self) -> PlaybackHandle {
        self.playback.clone()
    }

    /// A cheap transport handle the player controller can own.
    pub fn transport(&self) -> EngineTransport {
        EngineTransport {
            tx: self.tx.clone(),
            durations: self.durations.clone(),
        }
    }

    pub fn send(&self, cmd: AudioCmd) -> Result<(), mpsc::SendError<AudioCmd>> {
        self.tx.send(cmd)
    }

    pub fn quit_softly(&self, fade_out: Duration) {
        let _ = self.send(AudioCmd::Quit {
            fade_out_ms: fade_out.as_millis() as u64,
        });

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}

/// [`Transport`] implementation that forwards to the audio thread.
///
/// Durations come from the library scan; an episode whose file carried no
/// readable length reports `None` until (if ever) one is known.
#[derive(Clone)]
pub struct EngineTransport {
    tx: Sender<AudioCmd>,
    durations: Arc<[Option<Duration>]>,
}

impl Transport for EngineTransport {
    fn play(&mut self, card: usize) {
        let _ = self.tx.send(AudioCmd::Play(card));
    }

    fn pause(&mut self, card: usize) {
        let _ = self.tx.send(AudioCmd::Pause(card));
    }

    fn seek_to(&mut self, card: usize, position: Duration) {
        let _ = self.tx.send(AudioCmd::Seek {
            index: card,
            position,
        });
    }

    fn duration(&self, card: usize) -> Option<Duration> {
        self.durations.get(card).copied().flatten()
    }
}
