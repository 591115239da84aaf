use super::types::PlaybackInfo;
use std::time::Duration;

#[test]
fn playback_info_defaults_to_idle() {
    let info = PlaybackInfo::default();
    assert_eq!(info.index, None);
    assert_eq!(info.elapsed, Duration::ZERO);
    assert!(!info.playing);
}

#[test]
fn take_finished_consumes_the_notification() {
    let mut info = PlaybackInfo::default();
    assert_eq!(info.take_finished(), None);

    info.mark_finished(3);
    assert_eq!(info.take_finished(), Some(3));
    assert_eq!(info.take_finished(), None);
}

#[test]
fn a_later_finish_overwrites_an_unconsumed_one() {
    let mut info = PlaybackInfo::default();
    info.mark_finished(1);
    info.mark_finished(2);
    assert_eq!(info.take_finished(), Some(2));
}
