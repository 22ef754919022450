//! Marquee palette: warm amber lights on a dark cinema backdrop.

use ratatui::style::Color;

/// Screen and panel backgrounds
pub const BG_DARK: Color = Color::Rgb(18, 18, 24); // #121218 auditorium
pub const BG_SURFACE: Color = Color::Rgb(24, 24, 32); // #181820 list panels
pub const BG_ELEVATED: Color = Color::Rgb(32, 32, 42); // #20202A selected row, focused input

/// Headings, prompts and the focus ring
pub const PRIMARY: Color = Color::Rgb(255, 179, 71); // #FFB347

/// The "Search:" prompt
pub const ACCENT: Color = Color::Rgb(103, 224, 227); // #67E0E3

/// Titles, years and hints, from loudest to quietest
pub const TEXT_PRIMARY: Color = Color::Rgb(230, 230, 235); // #E6E6EB
pub const TEXT_SECONDARY: Color = Color::Rgb(160, 160, 170); // #A0A0AA
pub const TEXT_MUTED: Color = Color::Rgb(100, 100, 110); // #64646E

/// Status bar notes and failures; poster links
pub const WARNING: Color = Color::Rgb(255, 193, 94); // #FFC15E
pub const ERROR: Color = Color::Rgb(255, 108, 108); // #FF6C6C
pub const INFO: Color = Color::Rgb(130, 170, 255); // #82AAFF

/// Add / remove favorite markers
pub const FAVORITE: Color = Color::Rgb(255, 99, 132); // #FF6384

/// Unfocused and focused list borders
pub const BORDER_DIM: Color = Color::Rgb(48, 48, 58); // #30303A
pub const BORDER_FOCUS: Color = PRIMARY;
