//! Twinkling star backdrop painted behind the sky sketches.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::chars::STAR_CHARS;

/// How long a twinkle pattern holds before reshuffling.
const TWINKLE_PERIOD_MS: u64 = 1500;

/// Render one backdrop cell using a deterministic per-cell hash.
pub fn render_star_char(x: u16, y: u16, elapsed_ms: u64, seed: u64) -> Span<'static> {
    let x = x as usize;
    let y = y as usize;
    let frame_num = (elapsed_ms / TWINKLE_PERIOD_MS) as usize;

    let cell = x
        .wrapping_mul(31)
        .wrapping_add(y.wrapping_mul(17))
        .wrapping_add(seed as usize);
    let mixed = cell.wrapping_mul(2654435761) >> 7;

    // Sparse: about 1.5% of cells carry a star, and those twinkle.
    if mixed % 200 >= 3 {
        return Span::raw(" ");
    }

    let ch = STAR_CHARS[mixed.wrapping_add(frame_num) % STAR_CHARS.len()];
    let color = match (mixed.wrapping_add(frame_num)) % 3 {
        0 => Color::Rgb(40, 40, 55),
        1 => Color::Rgb(70, 70, 95),
        _ => Color::Rgb(105, 105, 140),
    };
    Span::styled(ch.to_string(), Style::new().fg(color))
}

/// Paint the backdrop over the whole `area`.
pub fn render(frame: &mut Frame, area: Rect, elapsed_ms: u64, seed: u64) {
    let lines: Vec<Line> = (0..area.height)
        .map(|y| {
            let spans: Vec<Span> = (0..area.width)
                .map(|x| render_star_char(x, y, elapsed_ms, seed))
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}
