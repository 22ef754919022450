//! Search input rendering.
//!
//! The field only displays the query it is given; edits are reported to
//! [`crate::state::AppState::edit_query`] by the event loop.

use crate::ui;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_input::Input;
use unicode_width::UnicodeWidthStr;

const PROMPT: &str = "Search: ";

pub fn render(f: &mut Frame, area: Rect, input: &Input, is_focused: bool) {
    let border_style = if is_focused {
        Style::default().fg(ui::BORDER_FOCUS)
    } else {
        Style::default().fg(ui::BORDER_DIM)
    };

    // Keep the cursor visible when the query is wider than the field.
    let prompt_width = PROMPT.width();
    let text_width = (area.width as usize).saturating_sub(2 + prompt_width + 1);
    let scroll = input.visual_scroll(text_width.max(1));

    let input_line = Paragraph::new(Line::from(vec![
        Span::styled(PROMPT, Style::default().fg(ui::ACCENT)),
        Span::styled(
            skip_columns(input.value(), scroll),
            Style::default().fg(ui::TEXT_PRIMARY),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(if is_focused {
                Style::default().bg(ui::BG_ELEVATED)
            } else {
                Style::default().bg(ui::BG_SURFACE)
            }),
    );

    f.render_widget(input_line, area);

    if is_focused {
        // Cursor position: 1 (border) + prompt + visual cursor
        let cursor_x =
            area.x + 1 + prompt_width as u16 + input.visual_cursor().saturating_sub(scroll) as u16;
        let cursor_y = area.y + 1;
        f.set_cursor_position((cursor_x, cursor_y));
    }
}

/// Drop the first `columns` display columns of `s`.
fn skip_columns(s: &str, columns: usize) -> String {
    let mut skipped = 0;
    let mut out = String::new();
    for ch in s.chars() {
        if skipped < columns {
            skipped += unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
            continue;
        }
        out.push(ch);
    }
    out
}
