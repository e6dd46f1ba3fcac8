// Grid component
//
// Column header line, then one line per visible row: a right-aligned row
// number in the gutter followed by the cells of the visible columns.
// Status and priority values render as colored badges. The cell being
// edited shows its buffer with a reversed caret.

use crate::sheet::{classify_priority, classify_status, COLUMNS};
use crate::tui::app::{layout_columns, App, ColumnSpan, GUTTER_WIDTH};
use crate::tui::buttons::Button;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const SEPARATOR: &str = "│";

/// Longest prefix of `chars` whose rendered width stays within `max` cells
///
/// Measured on the whole string so emoji presentation sequences count the
/// same way they render.
fn take_width(chars: impl IntoIterator<Item = char>, max: usize) -> String {
    let mut out = String::new();
    for c in chars {
        let mut candidate = out.clone();
        candidate.push(c);
        if candidate.width() > max {
            break;
        }
        out = candidate;
    }
    out
}

/// Fit text into exactly `width` display cells, truncating with `…`
pub fn fit(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if text.width() <= width {
        return format!("{}{}", text, " ".repeat(width.saturating_sub(text.width())));
    }

    let mut out = take_width(text.chars(), width - 1);
    out.push('…');
    let used = out.width();
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

/// Split an edit buffer into the text before the caret, the caret cell and
/// the text after it, scrolled so the caret stays inside `width` cells
pub fn edit_window(buffer: &str, caret: usize, width: usize) -> (String, String, String) {
    let chars: Vec<char> = buffer.chars().collect();
    let caret = caret.min(chars.len());

    let caret_text = chars.get(caret).copied().unwrap_or(' ').to_string();
    let caret_width = caret_text.width().max(1);

    // Drop leading characters until the caret fits
    let mut start = 0;
    while start < caret
        && chars[start..caret].iter().collect::<String>().width() + caret_width > width
    {
        start += 1;
    }
    let before: String = chars[start..caret].iter().collect();

    let room = width.saturating_sub(before.width() + caret_width);
    let mut after = take_width(chars.iter().skip(caret + 1).copied(), room);
    let pad = room.saturating_sub(after.width());
    after.push_str(&" ".repeat(pad));

    (before, caret_text, after)
}

/// Spans for one non-editing cell
fn cell_spans(value: &str, key: &str, width: usize, selected: bool, theme: &Theme) -> Vec<Span<'static>> {
    let badge = match key {
        "status" if !value.is_empty() => Some(theme.status_badge(classify_status(value))),
        "priority" if !value.is_empty() => Some(theme.priority_badge(classify_priority(value))),
        _ => None,
    };

    let text_style = if selected {
        theme.selected_style()
    } else {
        theme.base_style()
    };

    match badge {
        Some(style) if width > 2 => {
            let label = format!(" {} ", value);
            let badge_text = if label.width() <= width {
                label
            } else {
                fit(&label, width)
            };
            let rest = " ".repeat(width.saturating_sub(badge_text.width()));
            let style = if selected {
                style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                style
            };
            vec![Span::styled(badge_text, style), Span::styled(rest, text_style)]
        }
        _ => vec![Span::styled(fit(value, width), text_style)],
    }
}

/// Spans for the cell being edited
fn editing_spans(buffer: &str, caret: usize, width: usize, theme: &Theme) -> Vec<Span<'static>> {
    let (before, at, after) = edit_window(buffer, caret, width);
    let style = theme.editing_style();
    vec![
        Span::styled(before, style),
        Span::styled(at, style.add_modifier(Modifier::REVERSED)),
        Span::styled(after, style),
    ]
}

/// Render the grid, keeping the cursor in view and recording cell geometry
pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let border_style = if app.editor.is_editing() {
        app.theme.border_focused_style()
    } else {
        app.theme.border_style()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height < 2 || inner.width <= GUTTER_WIDTH + 1 {
        return;
    }

    let cells_x = inner.x + GUTTER_WIDTH + 1;
    let cells_width = inner.width - GUTTER_WIDTH - 1;
    let body_height = (inner.height - 1) as usize;

    app.scroll_rows_into_view(body_height);
    app.scroll_columns_into_view(cells_width);
    let columns = layout_columns(app.col_offset, cells_x, cells_width);

    let theme = &app.theme;
    let gutter_style = Style::default().fg(theme.gutter);
    let sep_style = Style::default().fg(theme.border);

    let mut lines = Vec::with_capacity(body_height + 1);
    lines.push(header_line(&columns, theme));

    let last_row = (app.row_offset + body_height).min(app.store.row_count());
    for row in app.row_offset..last_row {
        let mut spans = vec![
            Span::styled(format!("{:>width$}", row + 1, width = GUTTER_WIDTH as usize), gutter_style),
            Span::styled(SEPARATOR, sep_style),
        ];

        for span in &columns {
            let key = COLUMNS[span.index].key;
            let width = span.width as usize;
            match app.editor.session() {
                Some(s) if s.coord.row == row && s.coord.column == key => {
                    spans.extend(editing_spans(s.buffer(), s.caret(), width, theme));
                }
                _ => {
                    let value = app.store.display_value(row, key).unwrap_or_default();
                    let selected = row == app.cursor_row && span.index == app.cursor_col;
                    spans.extend(cell_spans(&value, key, width, selected, theme));
                }
            }
            spans.push(Span::styled(SEPARATOR, sep_style));
        }

        lines.push(Line::from(spans));
    }

    f.render_widget(Paragraph::new(lines), inner);

    for span in &columns {
        app.hitmap.buttons.push((
            Rect::new(span.x, inner.y, span.width, 1),
            Button::ColumnHeader(span.index),
        ));
    }
    app.hitmap.body = Rect::new(inner.x, inner.y + 1, inner.width, inner.height - 1);
    app.hitmap.first_row = app.row_offset;
    app.hitmap.columns = columns;
}

fn header_line(columns: &[ColumnSpan], theme: &Theme) -> Line<'static> {
    let header_style = Style::default()
        .fg(theme.column_header)
        .add_modifier(Modifier::BOLD);
    let sep_style = Style::default().fg(theme.border);

    let mut spans = vec![
        Span::raw(" ".repeat(GUTTER_WIDTH as usize)),
        Span::styled(SEPARATOR, sep_style),
    ];
    for span in columns {
        spans.push(Span::styled(
            fit(COLUMNS[span.index].label, span.width as usize),
            header_style,
        ));
        spans.push(Span::styled(SEPARATOR, sep_style));
    }
    Line::from(spans)
}
