//! UI components using ratatui

mod field;
mod input;
mod layout;
mod list;
mod status;
mod styles;

pub use field::*;
pub use input::*;
pub use layout::*;
pub use list::*;
pub use status::*;
pub use styles::*;

use ratatui::Frame;

use crate::todo::TodoItem;

/// Which pane has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Typing into the input box
    Input,
    /// Navigating the item list
    List,
}

/// State needed for rendering (borrowed references)
pub struct RenderState<'a> {
    pub items: &'a [TodoItem],
    pub selected: usize,
    pub focus: Focus,
    pub listening: bool,
    pub input: &'a str,
    pub cursor_position: usize,
    pub transcript: &'a str,
    pub trigger: &'a str,
    pub status_message: Option<&'a str>,
    pub completed: usize,
}

/// Main draw function
pub fn draw(frame: &mut Frame, state: &RenderState) {
    let chunks = create_layout(frame.area());

    // Draw the starfield
    draw_field(frame, chunks.field, state);

    // Draw the item list
    draw_list(frame, chunks.list, state);

    // Draw input area
    draw_input(frame, chunks.input, state);

    // Draw status bar
    draw_status(frame, chunks.status, state);
}
