//! UI components and rendering.

pub mod footer;
pub mod header;
pub mod layout;
pub mod markers;
pub mod movie_list;
pub mod overlays;
pub mod search_input;
pub mod theme;

pub use layout::render;
pub use theme::*;
