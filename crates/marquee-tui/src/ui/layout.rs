//! Screen layout: search row, movies, favorites, status bar.

use crate::state::{AppMode, AppState, FocusTarget, ListKind};
use crate::ui::{footer, header, markers::Marker, movie_list, overlays, search_input};
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    Frame,
};

pub fn render(f: &mut Frame, app: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Heading + search input
            Constraint::Percentage(55), // Movies
            Constraint::Min(4),         // Favorites
            Constraint::Length(1),      // Status bar
        ])
        .split(f.area());

    render_search_row(f, chunks[0], app);
    render_list(f, chunks[1], app, ListKind::Results);
    render_list(f, chunks[2], app, ListKind::Favorites);
    footer::render(f, chunks[3], app);

    if app.mode == AppMode::Help {
        overlays::render_help(f);
    }
}

fn render_search_row(f: &mut Frame, area: Rect, app: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(10)])
        .split(area);

    let detail = app.search.is_searching.then(|| "searching…".to_string());
    // Line up with the input text inside its border; empty on short terminals.
    let heading_area = columns[0].inner(Margin {
        horizontal: 1,
        vertical: 1,
    });
    header::render(f, heading_area, "marquee", detail);

    search_input::render(
        f,
        columns[1],
        &app.search.input,
        app.focus == FocusTarget::Input && app.mode == AppMode::Search,
    );
}

fn render_list(f: &mut Frame, area: Rect, app: &mut AppState, kind: ListKind) {
    let is_focused = app.focused_list() == Some(kind);
    let (detail, marker, empty_hint) = match kind {
        ListKind::Results => (
            Some(results_detail(app)),
            Marker::AddToFavorites,
            "Type a title to search",
        ),
        ListKind::Favorites => (
            Some(format!("{}", app.favorites.len())),
            Marker::RemoveFromFavorites,
            "No favorites yet. Press Enter on a movie to add it",
        ),
    };

    let movies = match kind {
        ListKind::Results => app.search.results.as_slice(),
        ListKind::Favorites => app.favorites.as_slice(),
    };
    let viewport = match kind {
        ListKind::Results => &mut app.ui.results,
        ListKind::Favorites => &mut app.ui.favorites,
    };

    movie_list::render(
        f,
        area,
        movie_list::MovieList {
            heading: kind.heading(),
            detail,
            movies,
            marker,
            empty_hint,
            is_focused,
        },
        viewport,
    );
}

fn results_detail(app: &AppState) -> String {
    let shown = app.search.results.len();
    match app.search.total_results {
        Some(total) if total > shown => format!("{shown} of {total}"),
        _ => format!("{shown}"),
    }
}
