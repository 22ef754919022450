//! Rendering of movie lists for the terminal.

use clap::ValueEnum;
use marquee_core::Movie;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Json,
    Plain,
}

/// Render `movies` in `format`. Color is only used for tables on a tty.
pub fn render(movies: &[Movie], format: Format) -> anyhow::Result<String> {
    Ok(match format {
        Format::Json => serde_json::to_string_pretty(movies)?,
        Format::Plain => plain(movies),
        Format::Table => table(movies, std::io::stdout().is_terminal()),
    })
}

fn plain(movies: &[Movie]) -> String {
    movies
        .iter()
        .map(|m| format!("{}\t{}", m.imdb_id, m.title))
        .collect::<Vec<_>>()
        .join("\n")
}

fn table(movies: &[Movie], color: bool) -> String {
    use owo_colors::OwoColorize;

    let header = format!("{:<4} {:<11} {:<6} {:<8} TITLE", "#", "IMDB ID", "YEAR", "TYPE");
    let mut lines = vec![if color {
        header.bold().to_string()
    } else {
        header
    }];

    for (i, movie) in movies.iter().enumerate() {
        let id = format!("{:<11}", movie.imdb_id);
        let id = if color { id.bright_blue().to_string() } else { id };
        let poster = if movie.poster_url().is_some() { "" } else { "  (no poster)" };
        let poster = if color {
            poster.dimmed().to_string()
        } else {
            poster.to_string()
        };
        lines.push(format!(
            "{:<4} {} {:<6} {:<8} {}{}",
            i + 1,
            id,
            movie.year,
            movie.kind,
            movie.title,
            poster
        ));
    }

    lines.join("\n")
}
