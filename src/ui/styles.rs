//! UI styles and colors (Catppuccin theme)

use ratatui::style::{Color, Modifier, Style};

// Catppuccin Mocha palette
pub const RED: Color = Color::Rgb(243, 139, 168);
pub const YELLOW: Color = Color::Rgb(249, 226, 175);
pub const GREEN: Color = Color::Rgb(166, 227, 161);
pub const BLUE: Color = Color::Rgb(137, 180, 250);
pub const LAVENDER: Color = Color::Rgb(180, 190, 254);
pub const TEXT: Color = Color::Rgb(205, 214, 244);
pub const SUBTEXT0: Color = Color::Rgb(166, 173, 200);
pub const OVERLAY1: Color = Color::Rgb(127, 132, 156);
pub const OVERLAY0: Color = Color::Rgb(108, 112, 134);
pub const SURFACE2: Color = Color::Rgb(88, 91, 112);
pub const BASE: Color = Color::Rgb(30, 30, 46);

/// Style for an item sphere in the field. Pending items are blue, complete
/// ones green; depth (z) maps to brightness.
pub fn sphere_style(complete: bool, z: f32) -> Style {
    let color = if complete { GREEN } else { BLUE };
    let style = Style::default().fg(color);
    if z > 0.7 {
        style.add_modifier(Modifier::BOLD)
    } else if z < -0.7 {
        style.add_modifier(Modifier::DIM)
    } else {
        style
    }
}

pub fn selected_sphere_style(complete: bool) -> Style {
    let color = if complete { GREEN } else { BLUE };
    Style::default().fg(color).add_modifier(Modifier::REVERSED)
}

pub fn star_style() -> Style {
    Style::default().fg(SURFACE2)
}

pub fn pending_style() -> Style {
    Style::default().fg(TEXT)
}

pub fn complete_style() -> Style {
    Style::default()
        .fg(OVERLAY1)
        .add_modifier(Modifier::CROSSED_OUT)
}

pub fn checkbox_style(complete: bool) -> Style {
    if complete {
        Style::default().fg(GREEN)
    } else {
        Style::default().fg(BLUE)
    }
}

pub fn time_style() -> Style {
    Style::default().fg(OVERLAY0)
}

pub fn selection_style() -> Style {
    Style::default().fg(LAVENDER).add_modifier(Modifier::BOLD)
}

pub fn listening_style() -> Style {
    Style::default().fg(RED).add_modifier(Modifier::BOLD)
}

pub fn muted_style() -> Style {
    Style::default().fg(OVERLAY0)
}

pub fn transcript_style() -> Style {
    Style::default().fg(YELLOW)
}

pub fn border_style() -> Style {
    Style::default().fg(SURFACE2)
}

pub fn focused_border_style() -> Style {
    Style::default().fg(LAVENDER)
}

pub fn input_style() -> Style {
    Style::default().fg(TEXT)
}

pub fn cursor_style() -> Style {
    Style::default().fg(BASE).bg(TEXT)
}

pub fn status_style() -> Style {
    Style::default().fg(SUBTEXT0)
}

pub fn count_style() -> Style {
    Style::default().fg(GREEN)
}
