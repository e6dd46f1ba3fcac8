// Toolbar component
//
// View controls on the left, data actions on the right. Every button is
// inert: clicking one only logs it.

use crate::tui::app::App;
use crate::tui::buttons::{Button, TOOLBAR};
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Buttons before this index sit in the left group
const LEFT_GROUP: usize = 5;
/// Divider drawn before this button
const DIVIDER_BEFORE: Button = Button::Import;
const GAP: u16 = 2;

/// A button placed on the toolbar line
struct Placed {
    button: Button,
    label: &'static str,
    x: u16,
}

/// Place the toolbar buttons for a given width
///
/// The right group is right-aligned when both groups fit; otherwise the
/// buttons flow left to right and whatever does not fit is dropped.
fn place(x: u16, width: u16, compact: bool) -> Vec<Placed> {
    let label = |b: Button| if compact { b.short_label() } else { b.label() };
    let group_width = |buttons: &[Button]| -> u16 {
        buttons
            .iter()
            .map(|b| label(*b).width() as u16 + GAP)
            .sum::<u16>()
            + 2 // divider
    };

    let (left, right) = TOOLBAR.split_at(LEFT_GROUP);
    let end = x.saturating_add(width);
    let right_start = end.saturating_sub(group_width(right));
    let split = x + 1 + group_width(left) <= right_start;

    let mut placed = Vec::new();
    let mut cursor = x + 1;
    for (i, button) in TOOLBAR.iter().enumerate() {
        if i == LEFT_GROUP && split {
            cursor = right_start;
        }
        if *button == DIVIDER_BEFORE {
            cursor += 2;
        }
        let text = label(*button);
        let w = text.width() as u16;
        if cursor + w > end {
            break;
        }
        placed.push(Placed {
            button: *button,
            label: text,
            x: cursor,
        });
        cursor += w + GAP;
    }
    placed
}

/// Render the toolbar and record its button positions
pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(app.theme.border_style());
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let compact = !Breakpoint::from_width(area.width).at_least(Breakpoint::Normal);
    let placed = place(inner.x, inner.width, compact);

    let label_style = app.theme.base_style();
    let divider_style = Style::default().fg(app.theme.border);
    let mut spans = Vec::new();
    let mut column = inner.x;
    for p in &placed {
        if p.button == DIVIDER_BEFORE {
            spans.push(Span::raw(" ".repeat(p.x.saturating_sub(column + 2) as usize)));
            spans.push(Span::styled("│ ", divider_style));
        } else {
            spans.push(Span::raw(" ".repeat(p.x.saturating_sub(column) as usize)));
        }
        spans.push(Span::styled(p.label, label_style));
        column = p.x + p.label.width() as u16;

        app.hitmap.buttons.push((
            Rect::new(p.x, inner.y, p.label.width() as u16, 1),
            p.button,
        ));
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)),
        Rect::new(inner.x, inner.y, inner.width, 1),
    );
}
