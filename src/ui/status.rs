//! Status bar widget

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{styles, RenderState};

/// Longest transcript tail shown in the bar.
const TRANSCRIPT_TAIL: usize = 40;

/// Draw the status bar
pub fn draw_status(frame: &mut Frame, area: Rect, state: &RenderState) {
    let mut spans = vec![];

    // Listening indicator
    if state.listening {
        spans.push(Span::styled(" ● Listening ", styles::listening_style()));
    } else {
        spans.push(Span::styled(" ○ Muted ", styles::muted_style()));
    }
    spans.push(Span::styled("| ", styles::status_style()));

    // Item counts
    spans.push(Span::styled(
        format!("{}/{} done", state.completed, state.items.len()),
        styles::count_style(),
    ));

    // Status message
    if let Some(msg) = state.status_message {
        spans.push(Span::styled(" | ", styles::status_style()));
        spans.push(Span::styled(msg, styles::status_style()));
    }

    // Transcript tail (right aligned)
    let transcript = tail(state.transcript, TRANSCRIPT_TAIL);
    let right = if transcript.is_empty() {
        String::new()
    } else {
        format!("heard: {} ", transcript)
    };

    // Calculate padding to right-align
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding = (area.width as usize).saturating_sub(left_len + right.chars().count());
    if padding > 0 {
        spans.push(Span::raw(" ".repeat(padding)));
    }
    spans.push(Span::styled(right, styles::transcript_style()));

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line);

    frame.render_widget(paragraph, area);
}

/// Last `max` chars of the transcript, prefixed with an ellipsis when cut
fn tail(text: &str, max: usize) -> String {
    let count = text.chars().count();
    if count <= max {
        return text.to_string();
    }
    let skipped: String = text.chars().skip(count - max).collect();
    format!("…{}", skipped)
}
