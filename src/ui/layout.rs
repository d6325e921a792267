//! Layout definitions

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions for the four panes
pub struct AppLayout {
    pub field: Rect,
    pub list: Rect,
    pub input: Rect,
    pub status: Rect,
}

/// Create the main layout: starfield and list side by side, then the
/// input box and status bar
pub fn create_layout(area: Rect) -> AppLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Field + list (expandable)
            Constraint::Length(3), // Input (fixed height)
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(62), // Starfield
            Constraint::Percentage(38), // Item list
        ])
        .split(rows[0]);

    AppLayout {
        field: columns[0],
        list: columns[1],
        input: rows[1],
        status: rows[2],
    }
}
