use serde::Deserialize;

/// Application settings, read from `config.toml` with environment overrides.
///
/// Lookup order (highest wins): `PODBAY__`-prefixed environment variables
/// (`__` separates sections), then the config file when present, then the
/// struct defaults below. The default file location is
/// `$XDG_CONFIG_HOME/podbay/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub ui: UiSettings,
    pub controls: ControlsSettings,
    pub library: LibrarySettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// How often the engine publishes playback progress (milliseconds).
    pub progress_tick_ms: u64,
    /// Fade-out duration when quitting (milliseconds). 0 stops immediately.
    pub quit_fade_out_ms: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            progress_tick_ms: 200,
            quit_fade_out_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Text rendered in the header box.
    pub header_text: String,
    /// Glyph shown on a card that is paused (pressing it would play).
    pub play_glyph: String,
    /// Glyph shown on a card that is playing (pressing it would pause).
    pub pause_glyph: String,
    /// Whether episode rows carry the elapsed / total time label.
    pub show_card_time: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ podbay: podcasts, docked ~ ".to_string(),
            play_glyph: "▶".to_string(),
            pause_glyph: "⏸".to_string(),
            show_card_time: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Scrubber percent moved per `h` / `l` press (1..=100).
    pub seek_step_percent: u8,
    /// Pause the playing card when the terminal loses focus.
    pub pause_on_focus_loss: bool,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            seek_step_percent: 5,
            pause_on_focus_loss: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Extensions treated as episode files (case-insensitive, no dot).
    pub extensions: Vec<String>,
    /// Follow symlinks while scanning.
    pub follow_links: bool,
    /// Include hidden files and directories (dotfiles).
    pub include_hidden: bool,
    /// Recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        let extensions = ["mp3", "m4a", "ogg", "opus", "wav"];
        Self {
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
            follow_links: true,
            include_hidden: true,
            recursive: true,
            max_depth: None,
        }
    }
}
