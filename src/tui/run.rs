//! Terminal setup and entry points for the board UI.

use std::{
    io,
    path::{Path, PathBuf},
};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::CrosstermBackend, Terminal};

use crate::state::AppState;
use crate::tui::board::{BoardApp, BoardExit};
use crate::tui::menu::MenuApp;

/// Initialise the terminal and run the start menu.
/// Returns the store file the user picked, or None on quit.
pub fn run_start_menu(cfg_dir: &Path) -> io::Result<Option<PathBuf>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = MenuApp::new(cfg_dir);
    let result = app.run(&mut terminal);
    let chosen = app.chosen();

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;
    Ok(chosen)
}

/// Initialise the terminal and run the board view over a loaded store.
/// Returns the exit action requested by the user.
pub fn run_board(
    store_path: &Path,
    state: AppState,
    conflicts: Vec<PathBuf>,
) -> io::Result<BoardExit> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = BoardApp::new(store_path, state, conflicts);
    let result = app.run(&mut terminal);
    let exit_action = app.get_exit_action();

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;
    Ok(exit_action)
}
