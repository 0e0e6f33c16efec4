//! Orbiting squares: one hundred squares spinning in place while the whole
//! field turns about a common centre, tinted blue on the right and green on
//! the left.

use nalgebra::{Rotation2, Vector2};
use rand::Rng;
use ratatui::{layout::Rect, widgets::canvas::Context};
use vignette_core::{
    Rgb,
    math::{avoid_zero, rand_float},
};

use crate::draw::{Bounds, fit_bounds, polygon};
use crate::orbit::{Orbiter, Palette, Rings};

pub const NUM_SQUARES: usize = 100;

const RINGS: Rings = Rings {
    radii: [200.0, 400.0, 600.0, 800.0],
    thresholds: [0.18, 0.50, 0.78, 1.0],
};
/// Radial scatter off the rings: a twenty-third of the width. The width is
/// a fixed 1280 unit reference viewport, since the view is scaled to fit
/// the terminal rather than sized by it.
const RING_JITTER: f32 = 1280.0 / 23.0;
const MIN_SIZE: f32 = 45.0;
const MAX_SIZE: f32 = 90.0;

/// Spin about the square's own centre, radians per step.
const SPIN_LIMIT: f32 = 0.065;
const SPIN_TOLERANCE: f32 = 0.009;
/// Orbital speed, radians per step.
const ORBIT_LIMIT: f32 = 0.0065;
const ORBIT_TOLERANCE: f32 = 0.0001;

const VIEW_HALF_EXTENT: f64 = 540.0;

pub const BACKGROUND: Rgb = Rgb::new(70, 71, 76);
const BLUE: Rgb = Rgb::new(21, 21, 235);
const DK_BLUE: Rgb = Rgb::new(10, 10, 115);
const GREEN: Rgb = Rgb::new(149, 194, 81);
const DK_GREEN: Rgb = Rgb::new(57, 74, 31);
const STROKE: Palette = Palette::new(GREEN, BLUE);
const FILL: Palette = Palette::new(DK_GREEN, DK_BLUE);
const STROKE_ALPHA: u8 = 165;
const FILL_ALPHA: u8 = 130;

#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    pub orbiter: Orbiter,
    pub size: f32,
    pub spin: f32,
    pub spin_speed: f32,
    pub stroke: Rgb,
    pub fill: Rgb,
}

impl Square {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let orbit_speed = avoid_zero(rng, ORBIT_LIMIT, ORBIT_TOLERANCE);
        let orbiter = Orbiter::spawn(rng, &RINGS, RING_JITTER, orbit_speed);
        let mut square = Self {
            orbiter,
            size: rand_float(rng, MIN_SIZE, MAX_SIZE),
            spin: rand_float(rng, 0.0, std::f32::consts::TAU),
            spin_speed: avoid_zero(rng, SPIN_LIMIT, SPIN_TOLERANCE),
            stroke: Rgb::BLACK,
            fill: Rgb::BLACK,
        };
        square.recolor(rng);
        square
    }

    pub fn recolor<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.fill = FILL.recolor(rng, self.orbiter.angle);
        self.stroke = STROKE.recolor(rng, self.orbiter.angle);
    }

    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.orbiter.orbit();
        self.recolor(rng);
        self.spin += self.spin_speed;
    }

    /// Corners of the square scaled by `scale`, in world coordinates.
    fn corners(&self, scale: f32) -> [(f64, f64); 4] {
        let half = self.size * scale / 2.0;
        let rotation = Rotation2::new(self.spin);
        [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)].map(|(sx, sy)| {
            let p = self.orbiter.position + rotation * Vector2::new(sx * half, sy * half);
            (p.x as f64, p.y as f64)
        })
    }
}

#[derive(Debug, Clone)]
pub struct OrbitingSquares {
    squares: Vec<Square>,
}

impl OrbitingSquares {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            squares: (0..NUM_SQUARES).map(|_| Square::new(rng)).collect(),
        }
    }

    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for square in &mut self.squares {
            square.step(rng);
        }
    }

    pub fn bounds(&self, area: Rect) -> Bounds {
        fit_bounds(area, (0.0, 0.0), VIEW_HALF_EXTENT, VIEW_HALF_EXTENT)
    }

    pub fn paint(&self, ctx: &mut Context) {
        for square in self.squares() {
            // A terminal cell has no alpha; an inset square stands in for the
            // translucent fill.
            let fill = square.fill.with_alpha(FILL_ALPHA, BACKGROUND);
            polygon(ctx, &square.corners(0.5), fill.into());
            let stroke = square.stroke.with_alpha(STROKE_ALPHA, BACKGROUND);
            polygon(ctx, &square.corners(1.0), stroke.into());
        }
    }
}
