//! Main application loop and event handling.

use crate::state::{AppMode, AppState, FocusTarget, SearchRequest};
use crate::ui;
use crate::worker::{start_worker, WorkerCommand, WorkerEvent};
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use marquee_core::{Config, FavoritesStore, FileStore, OmdbClient};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;
use tui_input::InputRequest;

/// Run the TUI application
pub fn run(config: &Config) -> Result<()> {
    // Fail before touching the terminal if the client cannot be built.
    let client = OmdbClient::new(&config.omdb).context("Cannot search OMDb")?;
    let store = FavoritesStore::new(FileStore::new(config.data_dir()));

    let mut app = AppState::new(store);
    app.load_favorites();

    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (evt_tx, evt_rx) = mpsc::channel();
    let worker = start_worker(
        Box::new(client),
        Duration::from_millis(config.search.debounce_ms),
        cmd_rx,
        evt_tx,
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the main loop
    let res = run_app(&mut terminal, &mut app, &cmd_tx, &evt_rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    let _ = cmd_tx.send(WorkerCommand::Quit);
    if worker.join().is_err() {
        tracing::warn!("Search worker panicked");
    }

    res
}

/// Main application loop
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    cmd_tx: &Sender<WorkerCommand>,
    evt_rx: &Receiver<WorkerEvent>,
) -> Result<()> {
    // The initial (empty) query counts as a change, like any later edit.
    dispatch(cmd_tx, Some(app.issue_search()));

    loop {
        // Apply finished searches
        while let Ok(event) = evt_rx.try_recv() {
            let WorkerEvent::SearchFinished { id, query, outcome } = event;
            if app.apply_search(id, outcome) {
                tracing::debug!(id, query = %query, "Applied search");
            }
        }

        // Draw UI
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events
        if event::poll(Duration::from_millis(100))? {
            let request = match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    handle_key_event(app, key)
                }
                Event::Mouse(mouse) => {
                    handle_mouse_event(app, mouse);
                    None
                }
                _ => None,
            };
            dispatch(cmd_tx, request);
        }

        // Check if should quit
        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

fn dispatch(cmd_tx: &Sender<WorkerCommand>, request: Option<SearchRequest>) {
    if let Some(SearchRequest { id, query }) = request {
        if cmd_tx.send(WorkerCommand::Search { id, query }).is_err() {
            tracing::error!("Search worker is gone");
        }
    }
}

/// Handle keyboard events
pub fn handle_key_event(app: &mut AppState, key: KeyEvent) -> Option<SearchRequest> {
    match app.mode {
        AppMode::Search => handle_search_keys(app, key.code, key.modifiers),
        AppMode::Help => {
            handle_help_keys(app, key.code);
            None
        }
    }
}

/// Handle mouse events; a left click activates the entry under it.
pub fn handle_mouse_event(app: &mut AppState, mouse: MouseEvent) {
    if app.mode != AppMode::Search {
        return;
    }
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        app.click(mouse.column, mouse.row);
    }
}

/// Handle keys in search mode
fn handle_search_keys(
    app: &mut AppState,
    key: KeyCode,
    modifiers: KeyModifiers,
) -> Option<SearchRequest> {
    // Global keys that work regardless of focus
    match (key, modifiers) {
        // Quit
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.quit();
            return None;
        }
        // Help
        (KeyCode::Char('?'), _) if app.focus != FocusTarget::Input => {
            app.toggle_help();
            return None;
        }
        // Cycle focus with Tab
        (KeyCode::Tab, _) => {
            app.cycle_focus();
            return None;
        }
        // Escape clears search or returns focus to it
        (KeyCode::Esc, _) => {
            if app.focus == FocusTarget::Input {
                return app.clear_query();
            }
            app.focus = FocusTarget::Input;
            return None;
        }
        _ => {}
    }

    // Focus-specific keys
    if app.focus == FocusTarget::Input {
        handle_input_keys(app, key, modifiers)
    } else {
        handle_list_keys(app, key, modifiers);
        None
    }
}

/// Handle keys when input is focused
fn handle_input_keys(
    app: &mut AppState,
    key: KeyCode,
    modifiers: KeyModifiers,
) -> Option<SearchRequest> {
    let req = match (key, modifiers) {
        // Down arrow switches to results if there are any
        (KeyCode::Down, _) => {
            if !app.search.results.is_empty() {
                app.focus = FocusTarget::Results;
            }
            return None;
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => InputRequest::DeleteLine,
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => InputRequest::DeletePrevWord,
        (KeyCode::Char('a'), KeyModifiers::CONTROL) | (KeyCode::Home, _) => InputRequest::GoToStart,
        (KeyCode::Char('e'), KeyModifiers::CONTROL) | (KeyCode::End, _) => InputRequest::GoToEnd,
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            InputRequest::InsertChar(c)
        }
        (KeyCode::Backspace, _) => InputRequest::DeletePrevChar,
        (KeyCode::Delete, _) => InputRequest::DeleteNextChar,
        (KeyCode::Left, _) => InputRequest::GoToPrevChar,
        (KeyCode::Right, _) => InputRequest::GoToNextChar,
        _ => return None,
    };
    app.edit_query(req)
}

/// Handle keys when a movie list is focused
fn handle_list_keys(app: &mut AppState, key: KeyCode, modifiers: KeyModifiers) {
    match (key, modifiers) {
        (KeyCode::Enter, _) => app.activate_selected(),
        // Navigation - vi keys and arrows
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => app.select_next(),
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => app.select_previous(),
        (KeyCode::Char('g'), KeyModifiers::NONE) | (KeyCode::Home, _) => app.select_first(),
        (KeyCode::Char('G'), _) | (KeyCode::End, _) => app.select_last(),
        (KeyCode::Char('q'), KeyModifiers::NONE) => app.quit(),
        _ => {}
    }
}

/// Handle keys in help mode
fn handle_help_keys(app: &mut AppState, key: KeyCode) {
    match key {
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => app.toggle_help(),
        _ => {}
    }
}
