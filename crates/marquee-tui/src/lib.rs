//! marquee-tui: Terminal UI for searching OMDb and keeping favorites.

pub mod app;
pub mod state;
pub mod ui;
mod worker;

pub use app::run;
pub use state::{AppMode, AppState};
