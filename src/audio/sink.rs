//! Utilities for creating `rodio` sinks from `Episode` values.

use std::fs::File;
use std::io::BufReader;
use std::time::Duration;

use rodio::{Decoder, OutputStream, Sink, Source};

use crate::library::Episode;

/// Create a paused `Sink` for `episode` that starts playback at `start_at`.
pub(super) fn create_sink_at(handle: &OutputStream, episode: &Episode, start_at: Duration) -> Sink {
    let file =
        File::open(&episode.path).unwrap_or_else(|_| panic!("failed to open {:?}", episode.path));

    let source = Decoder::new(BufReader::new(file))
        .unwrap_or_else(|_| panic!("failed to decode {:?}", episode.path))
        // `skip_duration` covers starting mid-file; `Duration::ZERO` is fine too.
        .skip_duration(start_at);

    let sink = Sink::connect_new(handle.mixer());
    sink.append(source);
    sink.pause();
    sink
}
