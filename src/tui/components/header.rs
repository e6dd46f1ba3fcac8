// Header bar component
//
// Breadcrumb on the left; search placeholder, signed-in user and the
// "New Action" button on the right.

use crate::tui::app::App;
use crate::tui::buttons::Button;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const SEARCH_PLACEHOLDER: &str = " 🔍 Search within sheet ";
const USER_NAME: &str = "John Doe";
const USER_INITIALS: &str = "JD";

/// Render the header and record its button positions
pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = &app.theme;
    let bp = Breakpoint::from_width(area.width);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.border_style());
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let muted = Style::default().fg(theme.muted);
    let y = inner.y;

    // Left: breadcrumb + more options
    let mut left = vec![Span::raw(" ")];
    if bp.at_least(Breakpoint::Normal) {
        left.push(Span::styled("Workspace", muted));
        left.push(Span::styled(" / ", muted));
        left.push(Span::styled("Folder 2", muted));
        left.push(Span::styled(" / ", muted));
    }
    left.push(Span::styled("Spreadsheet 3", theme.title_style()));
    left.push(Span::raw(" "));
    let more_x = inner.x + Line::from(left.clone()).width() as u16;
    left.push(Span::styled(Button::MoreOptions.label(), muted));

    // Right: search, user, new action
    let new_action = format!(" {} ", Button::NewAction.label());
    let user = format!("({}) {} ", USER_INITIALS, USER_NAME);
    let mut right: Vec<Span> = Vec::new();
    if bp.at_least(Breakpoint::Wide) {
        right.push(Span::styled(SEARCH_PLACEHOLDER, muted.add_modifier(Modifier::REVERSED)));
        right.push(Span::raw("  "));
    }
    if bp.at_least(Breakpoint::Normal) {
        right.push(Span::styled(user, theme.base_style()));
        right.push(Span::styled(Button::UserOptions.label(), muted));
        right.push(Span::raw("  "));
    }
    right.push(Span::styled(
        new_action.clone(),
        Style::default()
            .bg(theme.accent)
            .fg(theme.badges.text)
            .add_modifier(Modifier::BOLD),
    ));
    right.push(Span::raw(" "));

    let right_width = Line::from(right.clone()).width() as u16;
    let right_x = inner.right().saturating_sub(right_width);

    app.hitmap
        .buttons
        .push((Rect::new(more_x, y, 1, 1).intersection(inner), Button::MoreOptions));
    f.render_widget(Paragraph::new(Line::from(left)), Rect::new(inner.x, y, inner.width, 1));

    // Right group is dropped entirely when it would cover the breadcrumb
    if right_x <= more_x {
        return;
    }
    f.render_widget(
        Paragraph::new(Line::from(right)),
        Rect::new(right_x, y, right_width, 1),
    );

    let new_action_width = new_action.width() as u16;
    let new_action_x = inner.right().saturating_sub(new_action_width + 1);
    if bp.at_least(Breakpoint::Normal) {
        // "▾" sits two spaces left of the button
        let options = Rect::new(new_action_x.saturating_sub(3), y, 1, 1);
        app.hitmap.buttons.push((options, Button::UserOptions));
    }
    app.hitmap.buttons.push((
        Rect::new(new_action_x, y, new_action_width, 1),
        Button::NewAction,
    ));
}
