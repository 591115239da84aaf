use crate::app::App;
use crate::mpris::{MprisHandle, NowPlaying};

/// Push the current playback snapshot to MPRIS.
///
/// `now_playing` is the card holding the session, or the loaded-but-paused
/// card when nothing is audible.
pub fn update_mpris(mpris: &MprisHandle, app: &App, now_playing: Option<usize>) {
    let episode = now_playing.and_then(|i| app.episodes.get(i));
    mpris.set_now_playing(episode.map(|ep| NowPlaying {
        title: ep.title.clone(),
        author: ep.author.clone(),
        show: ep.show.clone(),
        length: ep.duration,
    }));
    mpris.set_playback(app.playback);
}
