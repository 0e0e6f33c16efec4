//! Box clock: a tumbling wireframe box whose width tracks the seconds, height
//! the minutes and depth the hours.

use chrono::Timelike;
use nalgebra::{Point3, Vector3};
use ratatui::{layout::Rect, widgets::canvas::Context};
use vignette_core::{Rgb, math::map_linear};

use crate::draw::{Bounds, fit_bounds, segment};
use crate::projection::{Camera, cube_edges, euler_xyz};

/// Rotation added to every axis each step, in radians.
pub const TICK: f32 = 0.0008;
pub const MIN_SCALE: f32 = 1.0;
pub const MAX_SCALE: f32 = 12.0;

const CAMERA: Camera = Camera::new(50.0, 50.0);

pub const BACKGROUND: Rgb = Rgb::from_hex(0x191919);
const SECONDS_COLOR: Rgb = Rgb::from_hex(0xad002b);
const MINUTES_COLOR: Rgb = Rgb::from_hex(0x4dba00);
const HOURS_COLOR: Rgb = Rgb::from_hex(0x061982);

/// Box scale for a time of day: x from seconds, y from minutes, z from hours,
/// each mapped onto whole numbers in `1..=12`.
pub fn clock_scale<T: Timelike>(time: &T) -> Vector3<f32> {
    let map = |value: u32, max: f32| map_linear(value as f32, 0.0, max, MIN_SCALE, MAX_SCALE).trunc();
    Vector3::new(
        map(time.second().min(59), 59.0),
        map(time.minute(), 59.0),
        map(time.hour(), 23.0),
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoxClock {
    pub rotation: Vector3<f32>,
    pub scale: Vector3<f32>,
}

impl BoxClock {
    pub fn new<T: Timelike>(now: &T) -> Self {
        Self {
            rotation: Vector3::zeros(),
            scale: clock_scale(now),
        }
    }

    pub fn step<T: Timelike>(&mut self, now: &T) {
        self.rotation.add_scalar_mut(TICK);
        self.scale = clock_scale(now);
    }

    fn to_screen(&self, local: Point3<f32>) -> (f64, f64) {
        let scaled = local.coords.component_mul(&self.scale);
        CAMERA.project(Point3::from(euler_xyz(self.rotation) * scaled))
    }

    pub fn bounds(&self, area: Rect) -> Bounds {
        let half = CAMERA.half_height();
        fit_bounds(area, (0.0, 0.0), half, half)
    }

    pub fn paint(&self, ctx: &mut Context) {
        // Edges come grouped by axis: x (seconds), y (minutes), z (hours).
        let colors = [SECONDS_COLOR, MINUTES_COLOR, HOURS_COLOR];
        for (i, (a, b)) in cube_edges().into_iter().enumerate() {
            segment(ctx, self.to_screen(a), self.to_screen(b), colors[i / 4].into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn at(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_scale_extremes() {
        assert_eq!(clock_scale(&at(0, 0, 0)), Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(clock_scale(&at(23, 59, 59)), Vector3::new(12.0, 12.0, 12.0));
    }

    #[test]
    fn test_scale_is_whole_and_bounded() {
        for h in 0..24 {
            for m in (0..60).step_by(7) {
                for s in (0..60).step_by(5) {
                    let scale = clock_scale(&at(h, m, s));
                    for c in scale.iter() {
                        assert_eq!(c.fract(), 0.0);
                        assert!((MIN_SCALE..=MAX_SCALE).contains(c));
                    }
                }
            }
        }
    }

    #[test]
    fn test_leap_second_is_clamped() {
        let leap = NaiveTime::from_hms_milli_opt(23, 59, 59, 1_500).unwrap();
        assert_eq!(clock_scale(&leap).x, 12.0);
    }

    #[test]
    fn test_step_rotates_all_axes() {
        let mut clock = BoxClock::new(&at(12, 30, 30));
        for _ in 0..10 {
            clock.step(&at(12, 30, 30));
        }
        for c in clock.rotation.iter() {
            assert!((c - 10.0 * TICK).abs() < 1e-6);
        }
    }

    #[test]
    fn test_unrotated_box_matches_scale() {
        let clock = BoxClock::new(&at(6, 15, 45));
        // A corner in the z = 0 plane projects without perspective.
        let (x, y) = clock.to_screen(Point3::new(1.0, 1.0, 0.0));
        assert!((x - clock.scale.x as f64).abs() < 1e-4);
        assert!((y - clock.scale.y as f64).abs() < 1e-4);
    }
}
