use crate::config;

/// Config is optional; any load or validation problem falls back to defaults
/// after a note on stderr (printed before the alternate screen is entered).
pub fn load_settings() -> config::Settings {
    let settings = match config::Settings::load() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("podbay: failed to load config, using defaults: {e}");
            return config::Settings::default();
        }
    };

    match settings.validate() {
        Ok(()) => settings,
        Err(msg) => {
            eprintln!("podbay: invalid config, using defaults: {msg}");
            config::Settings::default()
        }
    }
}
