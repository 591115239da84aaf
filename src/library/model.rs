use std::path::PathBuf;
use std::time::Duration;

/// One playable episode and the metadata shown on its card.
#[derive(Clone)]
pub struct Episode {
    pub path: PathBuf,
    pub title: String,
    pub author: Option<String>,
    pub show: Option<String>,
    /// Total length, `None` when the file's metadata doesn't carry one.
    pub duration: Option<Duration>,
    pub display: String,
}

/// Build the card heading: "Show — Title" when the show is known.
pub(crate) fn make_display(title: &str, show: Option<&str>) -> String {
    match show {
        Some(s) if !s.trim().is_empty() => format!("{} — {}", s.trim(), title),
        _ => title.to_string(),
    }
}
