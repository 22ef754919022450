//! Favorite / unfavorite markers shown on the selected list entry.

use crate::ui;
use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

/// Marker a movie list overlays on its selected entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    AddToFavorites,
    RemoveFromFavorites,
}

impl Marker {
    pub fn label(self) -> &'static str {
        match self {
            Marker::AddToFavorites => "Add to Favourites",
            Marker::RemoveFromFavorites => "Remove from favourites",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Marker::AddToFavorites => "♥",
            Marker::RemoveFromFavorites => "✕",
        }
    }

    pub fn spans(self) -> Vec<Span<'static>> {
        let style = Style::default()
            .fg(ui::FAVORITE)
            .add_modifier(Modifier::BOLD);
        vec![
            Span::styled(self.icon(), style),
            Span::raw(" "),
            Span::styled(self.label(), style),
        ]
    }
}
