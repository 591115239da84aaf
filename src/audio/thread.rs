use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use rodio::{OutputStreamBuilder, Sink};

use crate::config::AudioSettings;
use crate::library::Episode;

use super::sink::create_sink_at;
use super::types::{AudioCmd, PlaybackHandle};

pub(super) fn spawn_audio_thread(
    episodes: Vec<Episode>,
    rx: Receiver<AudioCmd>,
    playback_info: PlaybackHandle,
    audio_settings: AudioSettings,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let stream =
            OutputStreamBuilder::open_default_stream().expect("ERR: No audio output device");
        // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
        // but noisy for a TUI app.
        let mut stream = stream;
        stream.log_on_drop(false);

        let tick = Duration::from_millis(audio_settings.progress_tick_ms.max(1));

        // Episode loaded in the sink (playing or paused).
        let mut index: Option<usize> = None;
        let mut paused = true;
        let mut sink: Option<Sink> = None;
        // Offset the live sink started at. `Sink::get_pos` counts from the
        // sink's own start, so elapsed time is `base + get_pos()`.
        let mut base = Duration::ZERO;

        // Where each episode resumes if it gets toggled back on. Mirrors the
        // per-card position the UI keeps: pausing one card to play another
        // must not lose the paused card's place.
        let mut resume_at: Vec<Duration> = vec![Duration::ZERO; episodes.len()];

        loop {
            match rx.recv_timeout(tick) {
                Ok(AudioCmd::Play(i)) => {
                    if i >= episodes.len() {
                        continue;
                    }

                    // Same episode still loaded: just unpause.
                    if index == Some(i) && sink.is_some() {
                        if let Some(s) = sink.as_ref() {
                            s.play();
                        }
                        paused = false;
                        if let Ok(mut info) = playback_info.lock() {
                            info.playing = true;
                        }
                        continue;
                    }

                    if let Some(s) = sink.as_ref() {
                        s.stop();
                    }

                    let new_sink = create_sink_at(&stream, &episodes[i], resume_at[i]);
                    new_sink.play();
                    sink = Some(new_sink);
                    base = resume_at[i];
                    index = Some(i);
                    paused = false;

                    if let Ok(mut info) = playback_info.lock() {
                        info.index = Some(i);
                        info.elapsed = resume_at[i];
                        info.playing = true;
                    }
                }

                Ok(AudioCmd::Pause(i)) => {
                    if index != Some(i) {
                        continue;
                    }
                    if let Some(s) = sink.as_ref() {
                        s.pause();
                        resume_at[i] = base + s.get_pos();
                    }
                    paused = true;
                    if let Ok(mut info) = playback_info.lock() {
                        info.playing = false;
                        info.elapsed = resume_at[i];
                    }
                }

                Ok(AudioCmd::Seek { index: i, position }) => {
                    if i >= episodes.len() {
                        continue;
                    }
                    let position = match episodes[i].duration {
                        Some(total) => position.min(total),
                        None => position,
                    };
                    resume_at[i] = position;

                    // For the live episode, rebuild the sink at the target
                    // offset; `skip_duration` is the seeking primitive and
                    // works for every decodable source.
                    if index == Some(i) && sink.is_some() {
                        if let Some(s) = sink.take() {
                            s.stop();
                        }
                        let new_sink = create_sink_at(&stream, &episodes[i], position);
                        if !paused {
                            new_sink.play();
                        }
                        sink = Some(new_sink);
                        base = position;

                        if let Ok(mut info) = playback_info.lock() {
                            info.elapsed = position;
                        }
                    }
                }

                Ok(AudioCmd::Quit { fade_out_ms }) => {
                    if let Some(s) = sink.as_ref() {
                        if !paused && fade_out_ms > 0 {
                            let steps = 10u64;
                            for step in 0..steps {
                                s.set_volume(1.0 - (step as f32 + 1.0) / steps as f32);
                                thread::sleep(Duration::from_millis((fade_out_ms / steps).max(1)));
                            }
                        }
                        s.stop();
                    }
                    break;
                }

                Err(RecvTimeoutError::Timeout) => {
                    let Some(s) = sink.as_ref() else {
                        continue;
                    };
                    if paused {
                        continue;
                    }

                    if s.empty() {
                        // Natural end: reset the episode and tell the loop.
                        if let Some(i) = index.take() {
                            resume_at[i] = Duration::ZERO;
                            if let Ok(mut info) = playback_info.lock() {
                                info.index = None;
                                info.elapsed = Duration::ZERO;
                                info.playing = false;
                                info.mark_finished(i);
                            }
                        }
                        sink = None;
                        paused = true;
                    } else {
                        let elapsed = base + s.get_pos();
                        if let Ok(mut info) = playback_info.lock() {
                            info.elapsed = elapsed;
                        }
                    }
                }

                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}
