// Footer tab strip
//
// The four order tabs followed by an inert "+" button. The active tab is
// drawn as a filled pill.

use crate::sheet::Tab;
use crate::tui::app::App;
use crate::tui::buttons::Button;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Render the tab strip and record the tab positions
pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme.border_style());
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let active = app.tabs.active();
    let active_style = Style::default()
        .bg(theme.tab_active)
        .fg(theme.badges.text)
        .add_modifier(Modifier::BOLD);
    let inactive_style = Style::default().fg(theme.tab_inactive);

    let mut spans = vec![Span::raw(" ")];
    let mut x = inner.x + 1;
    let mut hits = Vec::new();

    for (i, tab) in Tab::all().iter().enumerate() {
        let label = format!(" {} {} ", i + 1, tab.label());
        let w = label.width() as u16;
        let style = if *tab == active {
            active_style
        } else {
            inactive_style
        };
        hits.push((Rect::new(x, inner.y, w, 1).intersection(inner), *tab));
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
        x += w + 1;
    }

    spans.push(Span::raw("  "));
    x += 2;
    let add_tab = Rect::new(x, inner.y, 1, 1).intersection(inner);
    spans.push(Span::styled(
        Button::AddTab.label(),
        Style::default().fg(theme.muted).add_modifier(Modifier::BOLD),
    ));

    f.render_widget(
        Paragraph::new(Line::from(spans)),
        Rect::new(inner.x, inner.y, inner.width, 1),
    );

    app.hitmap.tabs = hits;
    app.hitmap.buttons.push((add_tab, Button::AddTab));
}
