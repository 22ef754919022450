//! Footer / status bar rendering.

use crate::state::{AppState, FocusTarget};
use crate::ui;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans = vec![
        Span::styled("Tab:", Style::default().fg(ui::PRIMARY)),
        Span::styled(" focus  ", Style::default().fg(ui::TEXT_SECONDARY)),
    ];

    match app.focus {
        FocusTarget::Results => spans.extend(vec![
            Span::styled("↵:", Style::default().fg(ui::PRIMARY)),
            Span::styled(" add favorite  ", Style::default().fg(ui::TEXT_SECONDARY)),
        ]),
        FocusTarget::Favorites => spans.extend(vec![
            Span::styled("↵:", Style::default().fg(ui::PRIMARY)),
            Span::styled(" remove favorite  ", Style::default().fg(ui::TEXT_SECONDARY)),
        ]),
        FocusTarget::Input => {}
    }

    spans.extend(vec![
        Span::styled("?:", Style::default().fg(ui::PRIMARY)),
        Span::styled(" help  ", Style::default().fg(ui::TEXT_SECONDARY)),
        Span::styled("Esc:", Style::default().fg(ui::PRIMARY)),
        Span::styled(" clear  ", Style::default().fg(ui::TEXT_SECONDARY)),
        Span::styled("Ctrl-C:", Style::default().fg(ui::PRIMARY)),
        Span::styled(" quit", Style::default().fg(ui::TEXT_SECONDARY)),
    ]);

    if let Some(msg) = app.error.as_ref().or(app.search.error.as_ref()) {
        spans.push(Span::styled("  ", Style::default()));
        spans.push(Span::styled(
            format!("⚠ {msg}"),
            Style::default().fg(ui::ERROR).add_modifier(Modifier::BOLD),
        ));
    } else if let Some(note) = &app.search.note {
        spans.push(Span::styled("  ", Style::default()));
        spans.push(Span::styled(
            note.as_str(),
            Style::default().fg(ui::WARNING),
        ));
    }

    let hints = Paragraph::new(Line::from(spans)).style(Style::default().bg(ui::BG_SURFACE));
    f.render_widget(hints, area);
}
