// Help overlay
//
// Keyboard and mouse reference, opened with '?' and closed with any key.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Calculate centered rect for the overlay
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

pub fn render(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let key_style = Style::default().fg(theme.title);
    let desc_style = theme.base_style();
    let header_style = Style::default()
        .fg(theme.border_focused)
        .add_modifier(Modifier::BOLD);

    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<14}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Grid", header_style)),
        kb("↑↓←→, hjkl", "Move the cursor"),
        kb("Enter, F2", "Edit the cell"),
        kb("y", "Copy the cell"),
        Line::raw(""),
        Line::from(Span::styled("  Editing", header_style)),
        kb("Enter", "Save"),
        kb("Esc", "Discard changes"),
        kb("Tab", "Save and leave the cell"),
        kb("←→, Home/End", "Move the caret"),
        kb("↑↓", "Edit the cell above / below"),
        Line::raw(""),
        Line::from(Span::styled("  Tabs", header_style)),
        kb("Tab/Shift-Tab", "Next / previous tab"),
        kb("1-4", "Jump to a tab"),
        Line::raw(""),
        Line::from(Span::styled("  Mouse", header_style)),
        kb("Click", "Select a cell, tab or button"),
        kb("Double-click", "Edit the cell"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("t", "Cycle theme"),
        kb("?", "Toggle this help"),
        kb("q", "Quit"),
    ]);

    let area = centered_rect(50, 29, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(theme.bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_focused_style())
                .title(" Help ")
                .title_bottom(Line::from(" Press any key to close ").centered()),
        );

    f.render_widget(paragraph, area);
}
