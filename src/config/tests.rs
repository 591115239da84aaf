use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_podbay_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("PODBAY_CONFIG_PATH", "/tmp/podbay-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/podbay-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("podbay")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("podbay")
            .join("config.toml")
    );
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[audio]
progress_tick_ms = 100
quit_fade_out_ms = 123

[controls]
seek_step_percent = 10
pause_on_focus_loss = false

[ui]
header_text = "hello"
play_glyph = ">"
pause_glyph = "||"
show_card_time = false

[library]
extensions = ["mp3"]
recursive = false
include_hidden = false
follow_links = false
max_depth = 3
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("PODBAY_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("PODBAY__AUDIO__PROGRESS_TICK_MS");

    let s = Settings::load().unwrap();
    assert_eq!(s.audio.progress_tick_ms, 100);
    assert_eq!(s.audio.quit_fade_out_ms, 123);
    assert_eq!(s.controls.seek_step_percent, 10);
    assert!(!s.controls.pause_on_focus_loss);
    assert_eq!(s.ui.header_text, "hello");
    assert_eq!(s.ui.play_glyph, ">");
    assert_eq!(s.ui.pause_glyph, "||");
    assert!(!s.ui.show_card_time);
    assert_eq!(s.library.extensions, vec!["mp3".to_string()]);
    assert!(!s.library.recursive);
    assert!(!s.library.include_hidden);
    assert!(!s.library.follow_links);
    assert_eq!(s.library.max_depth, Some(3));
    assert!(s.validate().is_ok());
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[controls]
seek_step_percent = 5
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("PODBAY_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("PODBAY__CONTROLS__SEEK_STEP_PERCENT", "20");

    let s = Settings::load().unwrap();
    assert_eq!(s.controls.seek_step_percent, 20);
}

#[test]
fn validate_rejects_out_of_range_values() {
    let mut s = Settings::default();
    assert!(s.validate().is_ok());

    s.audio.progress_tick_ms = 0;
    assert!(s.validate().is_err());

    s = Settings::default();
    s.controls.seek_step_percent = 0;
    assert!(s.validate().is_err());
    s.controls.seek_step_percent = 101;
    assert!(s.validate().is_err());
}
