use std::path::Path;

use lofty::file::{AudioFile, TaggedFileExt};
use lofty::tag::ItemKey;
use walkdir::{DirEntry, WalkDir};

use crate::config::LibrarySettings;

use super::model::{Episode, make_display};

pub(crate) fn is_episode_file(path: &Path, settings: &LibrarySettings) -> bool {
    let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
        return false;
    };
    let ext = ext.to_ascii_lowercase();

    settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .any(|e| !e.is_empty() && e == ext)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn keep_entry(entry: &DirEntry, settings: &LibrarySettings) -> bool {
    settings.include_hidden || entry.depth() == 0 || !is_hidden(entry.path())
}

/// Read an episode's card fields out of its file tags.
///
/// Files whose tags can't be read still become episodes: the filename stands
/// in for the title and the duration stays unknown until the engine decodes it.
fn probe(path: &Path) -> Episode {
    let mut episode = Episode {
        path: path.to_path_buf(),
        title: path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("UNKNOWN")
            .to_string(),
        author: None,
        show: None,
        duration: None,
        display: String::new(),
    };

    if let Ok(tagged) = lofty::read_from_path(path) {
        episode.duration = Some(tagged.properties().duration());

        if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
            let field = |key: &ItemKey| {
                tag.get_string(key)
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(str::to_string)
            };
            if let Some(v) = field(&ItemKey::TrackTitle) {
                episode.title = v;
            }
            episode.author = field(&ItemKey::TrackArtist);
            episode.show = field(&ItemKey::AlbumTitle);
        }
    }

    episode.display = make_display(&episode.title, episode.show.as_deref());
    episode
}

/// Walk `dir` and collect every episode file, sorted by display heading.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<Episode> {
    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    let mut episodes: Vec<Episode> = walker
        .into_iter()
        .filter_entry(|e| keep_entry(e, settings))
        .filter_map(Result::ok)
        .filter(|e| {
            let path = e.path();
            path.is_file()
                && (settings.include_hidden || !is_hidden(path))
                && is_episode_file(path, settings)
        })
        .map(|e| probe(e.path()))
        .collect();

    episodes.sort_by(|a, b| a.display.to_lowercase().cmp(&b.display.to_lowercase()));
    episodes
}
