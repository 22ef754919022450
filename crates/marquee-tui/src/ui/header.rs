//! List heading rendering.

use crate::ui;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Heading text with an optional dimmed detail (counts, status).
pub fn line<'a>(heading: &'a str, detail: Option<String>) -> Line<'a> {
    let mut spans = vec![Span::styled(
        heading,
        Style::default()
            .fg(ui::PRIMARY)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(detail) = detail {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            detail,
            Style::default()
                .fg(ui::TEXT_MUTED)
                .add_modifier(Modifier::DIM),
        ));
    }

    Line::from(spans)
}

pub fn render(f: &mut Frame, area: Rect, heading: &str, detail: Option<String>) {
    let paragraph = Paragraph::new(line(heading, detail))
        .alignment(Alignment::Left)
        .style(Style::default().bg(ui::BG_SURFACE));
    f.render_widget(paragraph, area);
}
