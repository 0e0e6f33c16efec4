//! Canvas helpers shared by the sketches.

use ratatui::{
    layout::Rect,
    style::Color,
    widgets::canvas::{Context, Line},
};

/// Canvas `x_bounds` and `y_bounds`.
pub type Bounds = ([f64; 2], [f64; 2]);

/// Braille dots per terminal cell, horizontally and vertically.
const DOTS_PER_CELL: (f64, f64) = (2.0, 4.0);

/// Smallest world box around `center` that holds `half_width` × `half_height`
/// and keeps world units square on screen for the given `area`.
pub fn fit_bounds(area: Rect, center: (f64, f64), half_width: f64, half_height: f64) -> Bounds {
    let dots_w = area.width as f64 * DOTS_PER_CELL.0;
    let dots_h = area.height as f64 * DOTS_PER_CELL.1;

    let (hw, hh) = if dots_w <= 0.0 || dots_h <= 0.0 {
        (half_width, half_height)
    } else {
        let scale = (2.0 * half_width / dots_w).max(2.0 * half_height / dots_h);
        (dots_w * scale / 2.0, dots_h * scale / 2.0)
    };

    (
        [center.0 - hw, center.0 + hw],
        [center.1 - hh, center.1 + hh],
    )
}

/// Draw a single segment.
pub fn segment(ctx: &mut Context, from: (f64, f64), to: (f64, f64), color: Color) {
    ctx.draw(&Line {
        x1: from.0,
        y1: from.1,
        x2: to.0,
        y2: to.1,
        color,
    });
}

/// Draw a closed polygon through `points`.
pub fn polygon(ctx: &mut Context, points: &[(f64, f64)], color: Color) {
    for (i, &from) in points.iter().enumerate() {
        let to = points[(i + 1) % points.len()];
        segment(ctx, from, to, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_bounds_contains_requested_box() {
        for area in [Rect::new(0, 0, 80, 24), Rect::new(0, 0, 20, 60), Rect::new(0, 0, 200, 50)] {
            let (x, y) = fit_bounds(area, (0.0, 0.0), 360.0, 200.0);
            assert!(x[0] <= -360.0 && x[1] >= 360.0);
            assert!(y[0] <= -200.0 && y[1] >= 200.0);
        }
    }

    #[test]
    fn test_fit_bounds_keeps_units_square() {
        let area = Rect::new(0, 0, 100, 30);
        let (x, y) = fit_bounds(area, (10.0, 5.0), 50.0, 50.0);
        let per_dot_x = (x[1] - x[0]) / 200.0;
        let per_dot_y = (y[1] - y[0]) / 120.0;
        assert!((per_dot_x - per_dot_y).abs() < 1e-9);
        assert!(((x[0] + x[1]) / 2.0 - 10.0).abs() < 1e-9);
        assert!(((y[0] + y[1]) / 2.0 - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_fit_bounds_empty_area() {
        let (x, y) = fit_bounds(Rect::new(0, 0, 0, 0), (0.0, 0.0), 4.0, 3.0);
        assert_eq!(x, [-4.0, 4.0]);
        assert_eq!(y, [-3.0, 3.0]);
    }
}
