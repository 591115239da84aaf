use std::env;
use std::path::PathBuf;
use std::sync::mpsc;

use crossterm::event::{DisableFocusChange, EnableFocusChange};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::{AudioEngine, EngineTransport};
use crate::library::scan;
use crate::mpris::ControlCmd;
use crate::player::PlayerController;

mod event_loop;
mod mpris_sync;
mod settings;

/// The concrete controller the runtime drives.
pub type Controller = PlayerController<EngineTransport>;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();

    // Scan the directory named on the command line, or the current one.
    let dir = match env::args().nth(1) {
        Some(d) => PathBuf::from(d),
        None => env::current_dir()?,
    };

    let episodes = scan(&dir, &settings.library);
    let engine = AudioEngine::new(episodes.clone(), settings.audio.clone());
    let mut controller: Controller = PlayerController::new(engine.transport(), episodes.len());
    let mut app = App::new(episodes);

    app.set_current_dir(dir.display().to_string());
    app.set_playback_handle(engine.playback_handle());

    let (control_tx, control_rx) = mpsc::channel::<ControlCmd>();
    let mpris = crate::mpris::spawn_mpris(control_tx);

    mpris_sync::update_mpris(&mpris, &app, None);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = {
        let mut state = event_loop::EventLoopState::new(&app);
        event_loop::run(
            &mut terminal,
            &settings,
            &mut app,
            &mut controller,
            &engine,
            &mpris,
            &control_rx,
            &mut state,
        )
    };

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    run_result
}
