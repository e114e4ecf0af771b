//! Color constants for the terminal user interface.

use ratatui::style::Color;

// Board accents: each board gets its own border/status tint so it is
// obvious at a glance which one is showing.

/// Accent for the active board.
pub const ACTIVE_BLUE: Color = Color::Rgb(30, 90, 160);
/// Accent for the completed board.
pub const DONE_GREEN: Color = Color::Rgb(0, 110, 40);
/// Overdue due dates.
pub const OVERDUE_RED: Color = Color::Rgb(200, 40, 40);
/// Sync-conflict warning banner.
pub const WARN_AMBER: Color = Color::Rgb(215, 150, 0);
