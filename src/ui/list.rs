//! Item list pane

use ratatui::{
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{styles, Focus, RenderState};

/// Draw the item list pane
pub fn draw_list(frame: &mut Frame, area: Rect, state: &RenderState) {
    let border_style = if state.focus == Focus::List {
        styles::focused_border_style()
    } else {
        styles::border_style()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Items ");

    let inner = block.inner(area);

    let visible = inner.height as usize;

    // Keep the selection visible
    let scroll = if visible > 0 && state.selected >= visible {
        state.selected + 1 - visible
    } else {
        0
    };

    let mut lines: Vec<Line> = Vec::new();

    for (idx, item) in state.items.iter().enumerate().skip(scroll).take(visible) {
        let selected = state.focus == Focus::List && idx == state.selected;

        let marker = if selected { "▸ " } else { "  " };
        let checkbox = if item.is_complete { "[x] " } else { "[ ] " };

        let text_style = if item.is_complete {
            styles::complete_style()
        } else {
            styles::pending_style()
        };

        lines.push(Line::from(vec![
            Span::styled(marker, styles::selection_style()),
            Span::styled(checkbox, styles::checkbox_style(item.is_complete)),
            Span::styled(item.text.clone(), text_style),
            Span::styled(
                format!("  {}", item.created_at.format("%H:%M")),
                styles::time_style(),
            ),
        ]));
    }

    if state.items.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("  No items yet. Type one below, or say \"{} ...\"", state.trigger),
            styles::muted_style(),
        )));
    }

    let paragraph = Paragraph::new(Text::from(lines)).block(block);

    frame.render_widget(paragraph, area);
}
