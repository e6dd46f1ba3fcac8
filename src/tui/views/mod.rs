// Views module - screen-level rendering
//
// The sheet is a single screen: header, toolbar, grid, tab strip and status
// bar stacked vertically, with the help overlay and toasts on top.

use super::app::{App, HitMap};
use crate::tui::components::{grid, header, help, status_bar, tab_strip, toolbar};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
///
/// Click geometry is rebuilt from scratch each frame.
pub fn draw(f: &mut Frame, app: &mut App) {
    let bg_block = Block::default().style(Style::default().bg(app.theme.bg).fg(app.theme.fg));
    f.render_widget(bg_block, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header
            Constraint::Length(2), // toolbar
            Constraint::Min(4),    // grid
            Constraint::Length(2), // tabs
            Constraint::Length(1), // status
        ])
        .split(f.area());

    app.hitmap = HitMap::default();
    header::render(f, chunks[0], app);
    toolbar::render(f, chunks[1], app);
    grid::render(f, chunks[2], app);
    tab_strip::render(f, chunks[3], app);
    status_bar::render(f, chunks[4], app);

    if app.show_help {
        help::render(f, app);
    }

    // Render toast notification (on top of everything)
    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }

    // Clear expired toast after render
    app.clear_expired_toast();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::Tab;
    use crate::tui::buttons::Button;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;
    use std::time::Instant;

    fn render(app: &mut App, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_text(buffer: &Buffer) -> String {
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|line| line.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn draws_every_panel() {
        let mut app = App::new();
        let text = screen_text(&render(&mut app, 160, 30));

        assert!(text.contains("Spreadsheet 3"));
        assert!(text.contains("New Action"));
        assert!(text.contains("Hide fields"));
        assert!(text.contains("Job Request"));
        assert!(text.contains("Aisha Patel"));
        assert!(text.contains("All Orders"));
        assert!(text.contains("VIEW"));
    }

    #[test]
    fn records_click_geometry() {
        let mut app = App::new();
        render(&mut app, 160, 30);

        assert_eq!(app.hitmap.tabs.len(), Tab::all().len());
        assert!(app.hitmap.buttons.iter().any(|(_, b)| *b == Button::Share));
        assert!(app.hitmap.buttons.iter().any(|(_, b)| *b == Button::AddTab));
        assert_eq!(app.hitmap.columns[0].index, 0);
        assert!(app.hitmap.body.height > 0);
    }

    #[test]
    fn clicking_a_rendered_tab_selects_it() {
        let mut app = App::new();
        render(&mut app, 160, 30);

        let (area, _) = app
            .hitmap
            .tabs
            .iter()
            .copied()
            .find(|(_, tab)| *tab == Tab::Reviewed)
            .unwrap();
        app.click(area.x, area.y, Instant::now());

        assert_eq!(app.tabs.active(), Tab::Reviewed);
    }

    #[test]
    fn editing_cell_shows_the_buffer() {
        let mut app = App::new();
        app.begin_edit();
        app.editor.update_buffer("Typed text");
        let text = screen_text(&render(&mut app, 160, 30));

        assert!(text.contains("Typed text"));
        assert!(text.contains("EDIT"));
    }

    #[test]
    fn grid_follows_the_cursor_down() {
        let mut app = App::new();
        app.move_cursor(24, 0);
        render(&mut app, 100, 20);

        let last_visible = app.hitmap.first_row + app.hitmap.body.height as usize;
        assert!(app.hitmap.first_row <= 24 && 24 < last_visible);
    }

    #[test]
    fn emoji_sequences_in_badge_columns_render() {
        let mut app = App::new();
        let hearts = "❤\u{FE0F}".repeat(20);
        app.store.set_cell(0, "status", hearts.as_str()).unwrap();
        app.store.set_cell(0, "priority", hearts.as_str()).unwrap();

        let text = screen_text(&render(&mut app, 160, 30));
        assert!(text.contains("Aisha Patel"));

        app.cursor_col = 2;
        app.begin_edit();
        render(&mut app, 160, 30);
    }

    #[test]
    fn small_terminal_does_not_panic() {
        let mut app = App::new();
        app.show_help = true;
        app.show_toast("Copied");
        render(&mut app, 20, 8);
    }
}
