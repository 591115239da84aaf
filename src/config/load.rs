use std::{env, path::PathBuf};

use super::schema::Settings;

impl Settings {
    /// Load settings from the optional config file plus `PODBAY__` environment
    /// overrides, falling back to defaults for anything unset.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        Self::load_from(resolve_config_path())
    }

    fn load_from(config_path: Option<PathBuf>) -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder
            .add_source(
                ::config::Environment::with_prefix("PODBAY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Reject values the runtime can't work with.
    pub fn validate(&self) -> Result<(), String> {
        if self.audio.progress_tick_ms == 0 {
            return Err("audio.progress_tick_ms must be >= 1".to_string());
        }
        if self.controls.seek_step_percent == 0 || self.controls.seek_step_percent > 100 {
            return Err("controls.seek_step_percent must be in 1..=100".to_string());
        }
        Ok(())
    }
}

/// The config file location: `PODBAY_CONFIG_PATH` wins, then the XDG default.
pub fn resolve_config_path() -> Option<PathBuf> {
    env::var_os("PODBAY_CONFIG_PATH")
        .map(PathBuf::from)
        .or_else(default_config_path)
}

/// `$XDG_CONFIG_HOME/podbay/config.toml`, or `~/.config/podbay/config.toml`
/// when `XDG_CONFIG_HOME` is unset.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;

    Some(config_home.join("podbay").join("config.toml"))
}
