//! Application state management.
//!
//! [`AppState`] is the single owner of the query, the search results and the
//! favorites. Renderers borrow it immutably (apart from viewport bookkeeping);
//! key and mouse handlers mutate it through the operations below and hand
//! any resulting [`SearchRequest`] to the worker.

use marquee_core::{Favorites, FavoritesStore, Movie, SearchOutcome};
use ratatui::layout::Rect;
use tui_input::{Input, InputRequest};

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Main search mode
    Search,
    /// Help overlay
    Help,
}

/// Focus target in search mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// Search input is focused
    Input,
    /// Movies list is focused
    Results,
    /// Favorites list is focused
    Favorites,
}

/// Callback invoked when a list entry is activated.
pub type MovieAction = fn(&mut AppState, &Movie);

/// The two movie lists on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Results,
    Favorites,
}

impl ListKind {
    pub fn heading(self) -> &'static str {
        match self {
            ListKind::Results => "Movies",
            ListKind::Favorites => "Favorites",
        }
    }

    /// What activating an entry of this list does.
    pub fn action(self) -> MovieAction {
        match self {
            ListKind::Results => AppState::add_favorite,
            ListKind::Favorites => AppState::remove_favorite,
        }
    }

    pub fn focus(self) -> FocusTarget {
        match self {
            ListKind::Results => FocusTarget::Results,
            ListKind::Favorites => FocusTarget::Favorites,
        }
    }
}

/// A search the worker should run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub id: u64,
    pub query: String,
}

/// Application state
pub struct AppState {
    /// Current mode
    pub mode: AppMode,
    /// Current focus target
    pub focus: FocusTarget,
    /// Search state
    pub search: SearchState,
    /// Saved favorites
    pub favorites: Favorites,
    /// UI state
    pub ui: UiState,
    /// Whether to quit
    pub should_quit: bool,
    /// Last favorites storage error
    pub error: Option<String>,
    store: FavoritesStore,
}

impl AppState {
    /// Create a new application state backed by `store`.
    ///
    /// Favorites are not read until [`AppState::load_favorites`].
    pub fn new(store: FavoritesStore) -> Self {
        Self {
            mode: AppMode::Search,
            focus: FocusTarget::Input,
            search: SearchState::new(),
            favorites: Favorites::new(),
            ui: UiState::new(),
            should_quit: false,
            error: None,
            store,
        }
    }

    /// Read favorites from the store. Runs once at startup.
    ///
    /// Unreadable or malformed data leaves the collection empty and is
    /// reported in the status bar; the stored value is not touched.
    pub fn load_favorites(&mut self) {
        match self.store.load() {
            Ok(favorites) => {
                tracing::info!(count = favorites.len(), "Loaded favorites");
                self.favorites = favorites;
            }
            Err(e) => {
                tracing::warn!("Could not load favorites: {}", e);
                self.favorites = Favorites::new();
                self.error = Some(format!("Favorites not loaded: {e}"));
            }
        }
        self.ui.favorites.clamp(self.favorites.len());
    }

    /// Current query text.
    pub fn query(&self) -> &str {
        self.search.input.value()
    }

    /// Apply an edit to the search input.
    ///
    /// Returns the search to run when the text changed.
    pub fn edit_query(&mut self, req: InputRequest) -> Option<SearchRequest> {
        let changed = self.search.input.handle(req).is_some_and(|c| c.value);
        changed.then(|| self.issue_search())
    }

    /// Replace the query wholesale.
    pub fn set_query(&mut self, query: impl Into<String>) -> SearchRequest {
        self.search.input = Input::new(query.into());
        self.issue_search()
    }

    /// Clear the query. Like any other change, this issues a search.
    pub fn clear_query(&mut self) -> Option<SearchRequest> {
        if self.query().is_empty() {
            return None;
        }
        self.search.input.reset();
        Some(self.issue_search())
    }

    /// Start a search for the current query, superseding any in flight.
    pub fn issue_search(&mut self) -> SearchRequest {
        self.search.latest_id += 1;
        self.search.is_searching = true;
        SearchRequest {
            id: self.search.latest_id,
            query: self.query().to_string(),
        }
    }

    /// Apply a finished search.
    ///
    /// Only the most recently issued request may update state. A response
    /// without a results list, or a failure, leaves the results as they were.
    /// Returns whether the response was applied.
    pub fn apply_search(&mut self, id: u64, outcome: Result<SearchOutcome, String>) -> bool {
        if id != self.search.latest_id {
            tracing::debug!(id, latest = self.search.latest_id, "Discarding stale search");
            return false;
        }

        self.search.is_searching = false;
        match outcome {
            Ok(SearchOutcome::Found { movies, total }) => {
                self.search.results = movies;
                self.search.total_results = total;
                self.search.note = None;
                self.search.error = None;
                self.ui.results.reset();
                self.ui.results.clamp(self.search.results.len());
            }
            Ok(SearchOutcome::NoResults { reason }) => {
                // The latest id was issued for the current text, so an empty
                // query here is the one OMDb always rejects; say nothing.
                let empty_query = self.query().is_empty();
                self.search.note = reason.filter(|_| !empty_query);
                self.search.error = None;
            }
            Err(message) => {
                self.search.error = Some(message);
            }
        }
        true
    }

    /// Add `movie` to favorites unless its identifier is already present.
    pub fn add_favorite(&mut self, movie: &Movie) {
        if self.favorites.add(movie.clone()) {
            tracing::info!(imdb_id = %movie.imdb_id, "Added favorite");
            self.persist_favorites();
        }
    }

    /// Remove every favorite sharing `movie`'s identifier.
    pub fn remove_favorite(&mut self, movie: &Movie) {
        let removed = self.favorites.remove(&movie.imdb_id);
        tracing::info!(imdb_id = %movie.imdb_id, removed, "Removed favorite");
        self.ui.favorites.clamp(self.favorites.len());
        self.persist_favorites();
    }

    /// Write the full favorites collection to the store.
    ///
    /// On failure the in-memory collection keeps the change.
    pub fn persist_favorites(&mut self) {
        if let Err(e) = self.store.save(&self.favorites) {
            tracing::warn!("Could not save favorites: {}", e);
            self.error = Some(format!("Favorites not saved: {e}"));
        }
    }

    /// Movies shown by `kind`.
    pub fn movies(&self, kind: ListKind) -> &[Movie] {
        match kind {
            ListKind::Results => &self.search.results,
            ListKind::Favorites => self.favorites.as_slice(),
        }
    }

    /// Invoke `kind`'s action for the entry at `index`.
    pub fn activate(&mut self, kind: ListKind, index: usize) {
        let Some(movie) = self.movies(kind).get(index).cloned() else {
            return;
        };
        (kind.action())(self, &movie);
    }

    /// Activate the selected entry of the focused list.
    pub fn activate_selected(&mut self) {
        if let Some(kind) = self.focused_list() {
            let index = self.ui.viewport(kind).selected;
            self.activate(kind, index);
        }
    }

    /// Map a left click to a list entry, select it and activate it.
    pub fn click(&mut self, column: u16, row: u16) {
        for kind in [ListKind::Results, ListKind::Favorites] {
            let len = self.movies(kind).len();
            let Some(index) = self.ui.viewport(kind).row_at(column, row) else {
                continue;
            };
            if index < len {
                self.focus = kind.focus();
                self.ui.viewport_mut(kind).selected = index;
                self.activate(kind, index);
            }
            return;
        }
    }

    /// List that currently has focus, if any.
    pub fn focused_list(&self) -> Option<ListKind> {
        match self.focus {
            FocusTarget::Input => None,
            FocusTarget::Results => Some(ListKind::Results),
            FocusTarget::Favorites => Some(ListKind::Favorites),
        }
    }

    /// Cycle focus: input, movies, favorites.
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusTarget::Input => FocusTarget::Results,
            FocusTarget::Results => FocusTarget::Favorites,
            FocusTarget::Favorites => FocusTarget::Input,
        };
    }

    /// Move selection down in the focused list
    pub fn select_next(&mut self) {
        if let Some(kind) = self.focused_list() {
            let len = self.movies(kind).len();
            self.ui.viewport_mut(kind).select_next(len);
        }
    }

    /// Move selection up in the focused list
    pub fn select_previous(&mut self) {
        if let Some(kind) = self.focused_list() {
            self.ui.viewport_mut(kind).select_previous();
        }
    }

    /// Jump to top
    pub fn select_first(&mut self) {
        if let Some(kind) = self.focused_list() {
            self.ui.viewport_mut(kind).selected = 0;
        }
    }

    /// Jump to bottom
    pub fn select_last(&mut self) {
        if let Some(kind) = self.focused_list() {
            let len = self.movies(kind).len();
            self.ui.viewport_mut(kind).selected = len.saturating_sub(1);
        }
    }

    /// Check if should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Request quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Toggle help overlay
    pub fn toggle_help(&mut self) {
        self.mode = match self.mode {
            AppMode::Help => AppMode::Search,
            AppMode::Search => AppMode::Help,
        };
    }
}

/// Search state
pub struct SearchState {
    /// Query text and cursor
    pub input: Input,
    /// Results of the last applied search
    pub results: Vec<Movie>,
    /// Total hits reported by the API for those results
    pub total_results: Option<usize>,
    /// Why the last applied search had no results list
    pub note: Option<String>,
    /// Why the last applied search failed
    pub error: Option<String>,
    /// Whether a search is in flight
    pub is_searching: bool,
    /// Id of the most recently issued search
    pub latest_id: u64,
}

impl SearchState {
    /// Create a new search state
    pub fn new() -> Self {
        Self {
            input: Input::default(),
            results: Vec::new(),
            total_results: None,
            note: None,
            error: None,
            is_searching: false,
            latest_id: 0,
        }
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

/// Selection and scroll position of one list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListViewport {
    pub selected: usize,
    pub scroll_offset: usize,
    /// Rows visible inside the borders
    pub viewport_height: usize,
    /// Where the list was last drawn
    pub area: Option<Rect>,
}

impl ListViewport {
    pub fn reset(&mut self) {
        self.selected = 0;
        self.scroll_offset = 0;
    }

    /// Keep the selection inside a list of `len` entries.
    pub fn clamp(&mut self, len: usize) {
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    pub fn select_next(&mut self, len: usize) {
        if self.selected < len.saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Update scroll offset to keep selection visible
    pub fn update_scroll(&mut self) {
        let height = self.viewport_height.max(1);
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + height {
            self.scroll_offset = self.selected + 1 - height;
        }
    }

    /// Entry index under a screen cell, ignoring the border.
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.area?;
        let inside_x = column > area.x && column < area.right().saturating_sub(1);
        let inside_y = row > area.y && row < area.bottom().saturating_sub(1);
        if !(inside_x && inside_y) {
            return None;
        }
        Some(self.scroll_offset + (row - area.y - 1) as usize)
    }
}

/// UI state
#[derive(Debug, Default)]
pub struct UiState {
    pub results: ListViewport,
    pub favorites: ListViewport,
}

impl UiState {
    /// Create a new UI state
    pub fn new() -> Self {
        Self::default()
    }

    pub fn viewport(&self, kind: ListKind) -> &ListViewport {
        match kind {
            ListKind::Results => &self.results,
            ListKind::Favorites => &self.favorites,
        }
    }

    pub fn viewport_mut(&mut self, kind: ListKind) -> &mut ListViewport {
        match kind {
            ListKind::Results => &mut self.results,
            ListKind::Favorites => &mut self.favorites,
        }
    }
}
