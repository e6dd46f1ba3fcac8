// Status bar component
//
// Renders the editing mode, the cursor cell, the active tab and the most
// recent log line at the bottom of the screen.

use crate::logging::LogLevel;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar
///
/// Adapts to terminal width:
/// - Wide: mode, cell, tab, theme and the latest log line
/// - Normal: mode, cell, tab and the latest log line
/// - Compact: mode and cell only
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let bp = Breakpoint::from_width(area.width);

    let (mode, mode_style) = if app.editor.is_editing() {
        ("EDIT", theme.editing_style().add_modifier(Modifier::BOLD))
    } else {
        (
            "VIEW",
            Style::default()
                .bg(theme.status_bar)
                .fg(theme.badges.text)
                .add_modifier(Modifier::BOLD),
        )
    };

    let cell = format!(
        "{}{}",
        app.cursor_row + 1,
        char::from(b'A' + app.cursor_col as u8)
    );

    let mut spans = vec![
        Span::styled(format!(" {} ", mode), mode_style),
        Span::styled(format!(" {} ", cell), theme.status_style()),
        Span::styled(format!("│ {} ", app.current_column().label), theme.base_style()),
    ];

    if bp.at_least(Breakpoint::Normal) {
        spans.push(Span::styled(
            format!("│ {} ", app.tabs.active_label()),
            theme.status_style(),
        ));
    }
    if bp.at_least(Breakpoint::Wide) {
        spans.push(Span::styled(
            format!("│ {} ", app.theme_kind.name()),
            Style::default().fg(theme.muted),
        ));
    }
    if bp.at_least(Breakpoint::Normal) {
        if let Some(entry) = app.log_buffer.latest() {
            let color = match entry.level {
                LogLevel::Error => theme.error,
                LogLevel::Warn => theme.badges.yellow,
                _ => theme.muted,
            };
            spans.push(Span::styled(
                format!("│ {} {}", entry.timestamp.format("%H:%M:%S"), entry.message),
                Style::default().fg(color),
            ));
        }
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
