//! Movie list rendering, shared by the results and favorites lists.

use crate::state::ListViewport;
use crate::ui::{self, header, markers::Marker};
use marquee_core::Movie;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Everything a movie list needs from its owner.
pub struct MovieList<'a> {
    pub heading: &'a str,
    pub detail: Option<String>,
    pub movies: &'a [Movie],
    pub marker: Marker,
    pub empty_hint: &'a str,
    pub is_focused: bool,
}

pub fn render(f: &mut Frame, area: Rect, list: MovieList<'_>, viewport: &mut ListViewport) {
    let movies = list.movies;

    viewport.area = Some(area);
    viewport.viewport_height = (area.height.saturating_sub(2) as usize).max(1); // borders
    viewport.clamp(movies.len());
    viewport.update_scroll();

    let border_style = if list.is_focused {
        Style::default().fg(ui::BORDER_FOCUS)
    } else {
        Style::default().fg(ui::BORDER_DIM)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(header::line(list.heading, list.detail))
        .style(Style::default().bg(ui::BG_SURFACE));

    if movies.is_empty() {
        let hint = Paragraph::new(Span::styled(
            list.empty_hint,
            Style::default()
                .fg(ui::TEXT_MUTED)
                .add_modifier(Modifier::ITALIC),
        ))
        .block(block);
        f.render_widget(hint, area);
        return;
    }

    let start = viewport.scroll_offset.min(movies.len());
    let end = (start + viewport.viewport_height).min(movies.len());

    let items: Vec<ListItem> = movies[start..end]
        .iter()
        .enumerate()
        .map(|(i, movie)| {
            let is_selected = start + i == viewport.selected;
            let style = if is_selected {
                Style::default().bg(ui::BG_ELEVATED)
            } else {
                Style::default()
            };
            ListItem::new(row(movie, is_selected, list.is_focused, list.marker)).style(style)
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

/// One entry: title as the visible text, then year and type. The selected
/// entry also shows the poster and, when focused, the list's marker.
fn row<'a>(movie: &'a Movie, is_selected: bool, is_focused: bool, marker: Marker) -> Line<'a> {
    let mut spans = vec![
        Span::styled(
            if is_selected { "▸" } else { " " },
            Style::default().fg(ui::PRIMARY),
        ),
        Span::raw(" "),
        Span::styled(movie.title.as_str(), Style::default().fg(ui::TEXT_PRIMARY)),
    ];

    if !movie.year.is_empty() {
        spans.push(Span::styled(
            format!(" ({})", movie.year),
            Style::default().fg(ui::TEXT_SECONDARY),
        ));
    }
    if !movie.kind.is_empty() {
        spans.push(Span::styled(
            format!(" · {}", movie.kind),
            Style::default()
                .fg(ui::TEXT_MUTED)
                .add_modifier(Modifier::DIM),
        ));
    }

    if is_selected {
        if is_focused {
            spans.push(Span::raw("  "));
            spans.extend(marker.spans());
        }
        spans.push(Span::raw("  "));
        spans.push(match movie.poster_url() {
            Some(url) => Span::styled(url, Style::default().fg(ui::INFO)),
            None => Span::styled(
                "no poster",
                Style::default()
                    .fg(ui::TEXT_MUTED)
                    .add_modifier(Modifier::ITALIC),
            ),
        });
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn movie(id: &str, title: &str, poster: &str) -> Movie {
        Movie {
            title: title.to_string(),
            year: "1980".to_string(),
            imdb_id: id.to_string(),
            kind: "movie".to_string(),
            poster: poster.to_string(),
        }
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn renders_entries_in_order_with_marker_on_selection() {
        let movies = vec![
            movie("tt0076759", "A New Hope", "N/A"),
            movie("tt0080684", "Empire Strikes Back", "https://img/esb.jpg"),
        ];
        let mut viewport = ListViewport {
            selected: 1,
            ..Default::default()
        };

        let mut terminal = Terminal::new(TestBackend::new(100, 6)).unwrap();
        terminal
            .draw(|f| {
                render(
                    f,
                    f.area(),
                    MovieList {
                        heading: "Movies",
                        detail: Some("2 results".to_string()),
                        movies: &movies,
                        marker: Marker::AddToFavorites,
                        empty_hint: "Type to search",
                        is_focused: true,
                    },
                    &mut viewport,
                )
            })
            .unwrap();

        let text = buffer_text(&terminal);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].contains("Movies"));
        assert!(lines[1].contains("A New Hope (1980)"));
        assert!(!lines[1].contains("Add to Favourites"));
        assert!(lines[2].contains("Empire Strikes Back"));
        assert!(lines[2].contains("Add to Favourites"));
        assert!(lines[2].contains("https://img/esb.jpg"));
        assert_eq!(viewport.area, Some(Rect::new(0, 0, 100, 6)));
        assert_eq!(viewport.viewport_height, 4);
    }

    #[test]
    fn placeholder_poster_and_empty_hint() {
        let movies = vec![movie("tt0076759", "A New Hope", "N/A")];
        let mut viewport = ListViewport::default();

        let mut terminal = Terminal::new(TestBackend::new(100, 4)).unwrap();
        terminal
            .draw(|f| {
                render(
                    f,
                    f.area(),
                    MovieList {
                        heading: "Favorites",
                        detail: None,
                        movies: &movies,
                        marker: Marker::RemoveFromFavorites,
                        empty_hint: "",
                        is_focused: false,
                    },
                    &mut viewport,
                )
            })
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("no poster"));
        assert!(!text.contains("Remove from favourites"));

        let mut terminal = Terminal::new(TestBackend::new(60, 4)).unwrap();
        terminal
            .draw(|f| {
                render(
                    f,
                    f.area(),
                    MovieList {
                        heading: "Favorites",
                        detail: None,
                        movies: &[],
                        marker: Marker::RemoveFromFavorites,
                        empty_hint: "No favorites yet",
                        is_focused: false,
                    },
                    &mut viewport,
                )
            })
            .unwrap();
        assert!(buffer_text(&terminal).contains("No favorites yet"));
    }
}
