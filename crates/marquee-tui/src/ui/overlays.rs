//! Overlay rendering (help).

use crate::ui;
use marquee_core::build_info::BUILD_INFO;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render_help(f: &mut Frame) {
    let help_text = [
        "marquee: movie search and favorites",
        "",
        "Focus:",
        "  Tab           Cycle focus (search / movies / favorites)",
        "  ↓ (in search) Move to movies",
        "",
        "Lists:",
        "  j / ↓         Down",
        "  k / ↑         Up",
        "  g / G         Top / Bottom",
        "  Enter         Movies: add to favorites",
        "                Favorites: remove from favorites",
        "  Mouse click   Same as Enter on the clicked entry",
        "",
        "Search:",
        "  Typing        Searches OMDb as you type",
        "  Ctrl+U        Clear the line",
        "  Esc           Clear search / back to search",
        "",
        "  ?             Toggle this help (outside search)",
        "  q / Ctrl-C    Quit",
        "",
        "Press Esc to close",
    ];

    let help = Paragraph::new(help_text.join("\n"))
        .style(Style::default().fg(ui::TEXT_PRIMARY).bg(ui::BG_DARK))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ui::PRIMARY))
                .title(format!(" Help · {} ", BUILD_INFO.compact()))
                .style(Style::default().bg(ui::BG_DARK)),
        );

    let area = centered_rect(60, 70, f.area());
    f.render_widget(Clear, area);
    f.render_widget(help, area);
}

/// Helper to create centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
