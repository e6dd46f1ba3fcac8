// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard, mouse, focus)
// - Rendering the sheet

pub mod app;
pub mod buttons;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod layout;
pub mod theme;
pub mod views;

use crate::config::Config;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// How long to wait for input before redrawing (toasts expire between keys)
const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// even when the loop fails.
pub fn run_tui(log_buffer: LogBuffer, config: Config) -> Result<()> {
    let mouse = config.ui.mouse;

    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)
        .context("Failed to setup terminal")?;
    if mouse {
        execute!(stdout, EnableMouseCapture).context("Failed to enable mouse capture")?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::with_config(log_buffer, &config);
    tracing::info!("Sheet ready: {} rows", app.store.row_count());

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)
            .context("Failed to disable mouse capture")?;
    }
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableFocusChange
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Draws, then blocks on input for at most `POLL_INTERVAL`. Every input
/// event is handled before the next frame.
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        if event::poll(POLL_INTERVAL).context("Failed to poll input")? {
            match event::read().context("Failed to read input")? {
                Event::Key(key_event) => handle_key_event(app, key_event),
                Event::Mouse(mouse_event) => handle_mouse_event(app, mouse_event),
                Event::FocusLost => app.focus_lost(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Help overlay → Editor → Sheet
pub fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Keep InputHandler in sync on terminals that report releases
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return;
    }
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    // Ctrl-C always quits; an open edit is discarded like Esc
    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c')
    {
        app.cancel_edit();
        app.should_quit = true;
        return;
    }

    // Layer 1: Help overlay swallows the key that closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    // Layer 2: Editor captures all input while a cell is open
    if app.editor.is_editing() {
        handle_edit_keys(app, &key_event);
        return;
    }

    // Layer 3: Sheet navigation and actions
    handle_sheet_keys(app, &key_event);
}

/// Keys while a cell is being edited
///
/// Typing is never debounced: every press reaches the buffer.
fn handle_edit_keys(app: &mut App, key_event: &KeyEvent) {
    match key_event.code {
        KeyCode::Enter => app.commit_edit(),
        KeyCode::Esc => app.cancel_edit(),
        // Focus leaves the cell
        KeyCode::Tab | KeyCode::BackTab => app.commit_edit(),
        KeyCode::Backspace => app.editor.backspace(),
        KeyCode::Delete => app.editor.delete(),
        KeyCode::Up => app.edit_adjacent(-1),
        KeyCode::Down => app.edit_adjacent(1),
        KeyCode::Left => app.editor.caret_left(),
        KeyCode::Right => app.editor.caret_right(),
        KeyCode::Home => app.editor.caret_home(),
        KeyCode::End => app.editor.caret_end(),
        KeyCode::Char(c)
            if !key_event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.editor.insert_char(c)
        }
        _ => {}
    }
}

/// Keys while viewing the sheet
///
/// Action keys go through InputHandler for debounce; movement repeats freely.
fn handle_sheet_keys(app: &mut App, key_event: &KeyEvent) {
    let key = key_event.code;

    match key {
        // Movement
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1, 0),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1, 0),
        KeyCode::Left | KeyCode::Char('h') => app.move_cursor(0, -1),
        KeyCode::Right | KeyCode::Char('l') => app.move_cursor(0, 1),
        KeyCode::Home => app.cursor_col = 0,
        KeyCode::End => app.move_cursor(0, isize::MAX),
        KeyCode::PageUp => app.move_cursor(-10, 0),
        KeyCode::PageDown => app.move_cursor(10, 0),

        // Tabs
        KeyCode::Tab => app.tabs.next(),
        KeyCode::BackTab => app.tabs.prev(),
        KeyCode::Char(c @ '1'..='4') => {
            let index = (c as usize) - ('1' as usize);
            if let Some(tab) = crate::sheet::Tab::all().get(index) {
                app.tabs.select_tab(*tab);
            }
        }

        // Actions
        KeyCode::Enter | KeyCode::F(2) => {
            if app.handle_key_press(key) {
                app.begin_edit();
            }
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            if app.handle_key_press(key) {
                app.should_quit = true;
            }
        }
        KeyCode::Char('t') => {
            if app.handle_key_press(key) {
                app.next_theme();
            }
        }
        KeyCode::Char('?') => {
            if app.handle_key_press(key) {
                app.show_help = true;
            }
        }
        KeyCode::Char('y') => {
            if app.handle_key_press(key) {
                if let Some(text) = app.copy_cell() {
                    if clipboard::copy_to_clipboard(&text).is_ok() {
                        app.show_toast("✓ Copied to clipboard");
                    } else {
                        app.show_toast("✗ Failed to copy");
                    }
                }
            }
        }
        _ => {}
    }
}

/// Handle mouse input
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.show_help {
                app.show_help = false;
                return;
            }
            app.click(mouse_event.column, mouse_event.row, Instant::now());
        }
        // Wheel moves the cursor, like the arrow keys
        MouseEventKind::ScrollUp if !app.editor.is_editing() => app.move_cursor(-1, 0),
        MouseEventKind::ScrollDown if !app.editor.is_editing() => app.move_cursor(1, 0),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::Tab;

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn enter_edit_type_and_commit() {
        let mut app = App::new();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert!(app.editor.is_editing_cell(0, "status"));

        // Clear the seeded "in-process" and type a new value
        for _ in 0.."in-process".len() {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "Complete");
        press(&mut app, KeyCode::Enter);

        assert!(!app.editor.is_editing());
        assert_eq!(app.store.display_value(0, "status").unwrap(), "Complete");
    }

    #[test]
    fn escape_discards_typing() {
        let mut app = App::new();
        press(&mut app, KeyCode::F(2));
        type_text(&mut app, " extra");
        press(&mut app, KeyCode::Esc);

        assert!(!app.editor.is_editing());
        assert_eq!(
            app.store.display_value(0, "job-request").unwrap(),
            "Launch social media campaign for pro..."
        );
    }

    #[test]
    fn letters_type_instead_of_acting_while_editing() {
        let mut app = App::new();
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "qty");
        assert!(!app.should_quit);
        assert!(app.editor.session().unwrap().buffer().ends_with("qty"));
    }

    #[test]
    fn tab_commits_while_editing_and_switches_tabs_otherwise() {
        let mut app = App::new();
        app.cursor_row = 10;
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "new");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.store.display_value(10, "job-request").unwrap(), "new");
        assert_eq!(app.tabs.active(), Tab::AllOrders);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.tabs.active(), Tab::Pending);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.tabs.active(), Tab::Arrived);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.tabs.active(), Tab::Reviewed);
    }

    #[test]
    fn down_while_editing_opens_the_next_row() {
        let mut app = App::new();
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "!");
        press(&mut app, KeyCode::Down);

        assert!(app.editor.is_editing_cell(1, "job-request"));
        assert_eq!(app.cursor_row, 1);
        assert_eq!(
            app.store.display_value(0, "job-request").unwrap(),
            "Launch social media campaign for pro..."
        );
    }

    #[test]
    fn help_overlay_swallows_one_key() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn vim_keys_move_the_cursor() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('l'));
        assert_eq!((app.cursor_row, app.cursor_col), (2, 1));
        press(&mut app, KeyCode::End);
        assert_eq!(app.cursor_col, 8);
    }
}
