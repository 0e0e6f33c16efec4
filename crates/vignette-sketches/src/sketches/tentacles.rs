//! Tentacles: chains of segments swept around a sphere along a wandering
//! spherical path, each link trailing a little behind the one before.

use nalgebra::Point3;
use ratatui::{layout::Rect, widgets::canvas::Context};
use vignette_core::Rgb;

use crate::draw::{Bounds, fit_bounds, segment};
use crate::projection::Camera;

pub const NUM_TENTACLES: usize = 6;
pub const SEGMENTS_PER_TENTACLE: usize = 40;
pub const SPHERE_RADIUS: f32 = 400.0;
/// Time advanced per step.
pub const TICK: f32 = 1.0 / 500.0;
/// Ticks between successive tentacles.
const TENTACLE_SPACING: f32 = -100.0;
/// Spreads each tick offset into a visible lag along the path.
const LAG_FACTOR: f32 = 12.0;
/// Height gained by each successive segment above the sphere.
const ALTITUDE_STEP: f32 = 4.0;

const CAMERA: Camera = Camera::new(1600.0, 60.0);

pub const BACKGROUND: Rgb = Rgb::BLACK;

const PALETTES: [[Rgb; 5]; 3] = [
    [
        Rgb::new(169, 202, 240),
        Rgb::new(160, 191, 227),
        Rgb::new(142, 170, 202),
        Rgb::new(115, 137, 163),
        Rgb::new(70, 84, 99),
    ],
    [
        Rgb::new(206, 151, 96),
        Rgb::new(207, 105, 43),
        Rgb::new(193, 87, 37),
        Rgb::new(124, 40, 12),
        Rgb::new(120, 41, 13),
    ],
    [
        Rgb::new(115, 146, 34),
        Rgb::new(104, 135, 23),
        Rgb::new(92, 109, 29),
        Rgb::new(78, 93, 22),
        Rgb::new(63, 76, 16),
    ],
];

/// Angular path shared by every segment; returns `(longitude, latitude)`.
pub fn path(time: f32) -> (f32, f32) {
    let lon = (time + (time * 0.31).sin()).cos() * 2.0 + (time * 0.83).sin() * 3.0 + time * 0.02;
    let lat = (time * 0.7).sin() - (3.0 + time * 0.23).cos() * 3.0;
    (lon, lat)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Lag behind the sketch clock, in time units.
    pub time_offset: f32,
    /// Distance above the sphere surface.
    pub altitude: f32,
    pub color: Rgb,
    pub location: Point3<f32>,
}

impl Segment {
    pub fn new(tick_offset: f32, altitude: f32, color: Rgb) -> Self {
        Self {
            time_offset: tick_offset * LAG_FACTOR * TICK,
            altitude,
            color,
            location: Point3::origin(),
        }
    }

    /// Convert the path position at `time` to cartesian coordinates.
    pub fn calc(&mut self, time: f32, sphere_radius: f32) {
        let (lon, lat) = path(time + self.time_offset);
        let r = sphere_radius + self.altitude;
        self.location = Point3::new(
            lon.cos() * lat.cos() * r,
            lon.sin() * lat.cos() * r,
            lat.sin() * r,
        );
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tentacle {
    pub segments: Vec<Segment>,
}

impl Tentacle {
    pub fn new(tick_offset: f32, palette: &[Rgb; 5]) -> Self {
        let segments = (0..SEGMENTS_PER_TENTACLE)
            .map(|k| {
                let color = palette[k * palette.len() / SEGMENTS_PER_TENTACLE];
                Segment::new(tick_offset - k as f32, k as f32 * ALTITUDE_STEP, color)
            })
            .collect();
        Self { segments }
    }

    pub fn update(&mut self, time: f32) {
        for segment in &mut self.segments {
            segment.calc(time, SPHERE_RADIUS);
        }
    }
}

#[derive(Debug, Clone)]
pub struct Tentacles {
    tentacles: Vec<Tentacle>,
    time: f32,
}

impl Default for Tentacles {
    fn default() -> Self {
        Self::new()
    }
}

impl Tentacles {
    pub fn new() -> Self {
        let mut sketch = Self {
            tentacles: (0..NUM_TENTACLES)
                .map(|i| Tentacle::new(i as f32 * TENTACLE_SPACING, &PALETTES[i % PALETTES.len()]))
                .collect(),
            time: 0.0,
        };
        for tentacle in &mut sketch.tentacles {
            tentacle.update(0.0);
        }
        sketch
    }

    pub fn tentacles(&self) -> &[Tentacle] {
        &self.tentacles
    }

    pub fn step(&mut self) {
        self.time += TICK;
        for tentacle in &mut self.tentacles {
            tentacle.update(self.time);
        }
    }

    pub fn bounds(&self, area: Rect) -> Bounds {
        let half = CAMERA.half_height();
        fit_bounds(area, (0.0, 0.0), half, half)
    }

    pub fn paint(&self, ctx: &mut Context) {
        // Flip to y up with -z coming out of the screen.
        let to_screen = |p: Point3<f32>| CAMERA.project(Point3::new(p.x, -p.y, -p.z));
        for tentacle in self.tentacles() {
            for pair in tentacle.segments.windows(2) {
                segment(
                    ctx,
                    to_screen(pair[0].location),
                    to_screen(pair[1].location),
                    pair[0].color.into(),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_sit_at_their_altitude() {
        let mut sketch = Tentacles::new();
        for _ in 0..300 {
            sketch.step();
        }
        for tentacle in sketch.tentacles() {
            for seg in &tentacle.segments {
                let r = seg.location.coords.norm();
                assert!((r - (SPHERE_RADIUS + seg.altitude)).abs() < 0.05);
            }
        }
    }

    #[test]
    fn test_palette_spread_along_tentacle() {
        let tentacle = Tentacle::new(0.0, &PALETTES[0]);
        assert_eq!(tentacle.segments.first().unwrap().color, PALETTES[0][0]);
        assert_eq!(tentacle.segments.last().unwrap().color, PALETTES[0][4]);
    }

    #[test]
    fn test_tentacles_cycle_palettes() {
        let sketch = Tentacles::new();
        let heads: Vec<Rgb> = sketch.tentacles().iter().map(|t| t.segments[0].color).collect();
        assert_eq!(heads[0], heads[3]);
        assert_ne!(heads[0], heads[1]);
    }

    #[test]
    fn test_trailing_segments_lag_behind() {
        let tentacle = Tentacle::new(-100.0, &PALETTES[1]);
        for pair in tentacle.segments.windows(2) {
            assert!(pair[1].time_offset < pair[0].time_offset);
        }
    }

    #[test]
    fn test_projection_fits_view() {
        let sketch = Tentacles::new();
        let half = CAMERA.half_height();
        for tentacle in sketch.tentacles() {
            for seg in &tentacle.segments {
                let p = seg.location;
                let (x, y) = CAMERA.project(Point3::new(p.x, -p.y, -p.z));
                assert!(x.abs() < half * 1.5 && y.abs() < half * 1.5);
            }
        }
    }
}
