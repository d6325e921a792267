//! Starfield pane: items floating as spheres over a dot background

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{styles, Focus, RenderState};

/// Field half-width, matching the position bounds in the store.
const XY_HALF: f32 = 2.5;

/// Longest label drawn next to a sphere.
const MAX_LABEL: usize = 14;

/// Draw the starfield pane
pub fn draw_field(frame: &mut Frame, area: Rect, state: &RenderState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style())
        .title(" Field ");

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let width = inner.width as usize;
    let height = inner.height as usize;

    // Start from the star background
    let mut grid: Vec<Vec<(char, Style)>> = (0..height)
        .map(|row| {
            (0..width)
                .map(|col| (star_char(col, row), styles::star_style()))
                .collect()
        })
        .collect();

    // Overlay the items far to near, so near items win overlaps
    let mut order: Vec<usize> = (0..state.items.len()).collect();
    order.sort_by(|&a, &b| {
        let za = state.items[a].position[2];
        let zb = state.items[b].position[2];
        za.partial_cmp(&zb).unwrap_or(std::cmp::Ordering::Equal)
    });

    for idx in order {
        let item = &state.items[idx];
        let [x, y, z] = item.position;
        let col = project(x, width);
        let row = project(-y, height);

        let selected = state.focus == Focus::List && idx == state.selected;
        let style = if selected {
            styles::selected_sphere_style(item.is_complete)
        } else {
            styles::sphere_style(item.is_complete, z)
        };

        grid[row][col] = ('●', style);

        // Label to the right of the sphere, truncated to fit
        let mut label: String = item.text.chars().take(MAX_LABEL).collect();
        if item.text.chars().count() > MAX_LABEL {
            label.push('…');
        }
        for (i, c) in label.chars().enumerate() {
            let col = col + 2 + i;
            if col >= width {
                break;
            }
            grid[row][col] = (c, style);
        }
    }

    // Merge each row into spans, one per run of equal style
    let mut lines: Vec<Line> = Vec::with_capacity(height);
    for row in grid {
        let mut spans: Vec<Span> = Vec::new();
        let mut run = String::new();
        let mut run_style: Option<Style> = None;
        for (c, style) in row {
            match run_style {
                Some(s) if s == style => run.push(c),
                Some(s) => {
                    spans.push(Span::styled(std::mem::take(&mut run), s));
                    run.push(c);
                    run_style = Some(style);
                }
                None => {
                    run.push(c);
                    run_style = Some(style);
                }
            }
        }
        if let Some(s) = run_style {
            spans.push(Span::styled(run, s));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(Text::from(lines)), inner);
}

/// Map a field coordinate in ±2.5 to a cell index
fn project(v: f32, cells: usize) -> usize {
    let t = ((v + XY_HALF) / (2.0 * XY_HALF)).clamp(0.0, 1.0);
    ((t * cells.saturating_sub(1) as f32).round() as usize).min(cells - 1)
}

/// Deterministic sparse star placement
fn star_char(col: usize, row: usize) -> char {
    match (col.wrapping_mul(31) ^ row.wrapping_mul(61)) % 37 {
        0 => '·',
        19 => '✦',
        _ => ' ',
    }
}
