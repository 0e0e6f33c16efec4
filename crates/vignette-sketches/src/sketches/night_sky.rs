//! Night sky: a dense cluster of slowly wobbling stars, joined by faint
//! threads whose reach is modulated by Perlin noise.

use nalgebra::Vector2;
use noise::{NoiseFn, Perlin};
use rand::Rng;
use ratatui::{
    layout::Rect,
    widgets::canvas::{Context, Points},
};
use vignette_core::{
    Rgb,
    math::{map_linear, rand_float},
};

use crate::draw::{Bounds, fit_bounds, segment};

pub const WIDTH: f32 = 700.0;
pub const HEIGHT: f32 = 300.0;
const HALF_WIDTH: f32 = WIDTH / 2.0;
const HALF_HEIGHT: f32 = HEIGHT / 2.0;
/// Diagonal of the 960x540 field the point density is tuned for.
const REFERENCE_DIAGONAL: f32 = 1101.4536;
const NOISE_SCALE: f64 = 0.03;
const MAX_LINE_OPACITY: f32 = 85.0;

pub const BACKGROUND: Rgb = Rgb::BLACK;

fn half_diagonal() -> f32 {
    HALF_WIDTH.hypot(HALF_HEIGHT)
}

/// Number of stars for the field size.
pub fn num_points() -> usize {
    (500.0 * half_diagonal() / REFERENCE_DIAGONAL) as usize
}

/// Base link distance for the field size.
pub fn link_limit() -> f32 {
    160.0 * half_diagonal() / REFERENCE_DIAGONAL
}

#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub start: Vector2<f32>,
    /// Wobble radius.
    pub wobble: f32,
    pub diameter: f32,
    pub clockwise: bool,
    /// Phase in degrees.
    pub phi: f32,
    pub position: Vector2<f32>,
    /// Indices of nearby stars that may be linked.
    pub neighbours: Vec<usize>,
}

impl Point {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let wobble = rand_float(rng, 5.0, 30.0);
        let start = sample_start(rng);
        Self {
            start,
            wobble,
            diameter: map_linear(wobble, 5.0, 30.0, 0.5, 2.0),
            clockwise: rng.gen_bool(0.5),
            phi: rand_float(rng, 0.0, 360.0),
            position: start,
            neighbours: Vec::new(),
        }
    }

    /// Place the star on its wobble circle at frame `time`.
    pub fn update(&mut self, time: f32) {
        let time = if self.clockwise { time } else { -time };
        let phase = (time * self.diameter + self.phi).to_radians();
        self.position = self.start + Vector2::new(phase.cos(), phase.sin()) * self.wobble;
    }
}

/// Rejection-sample a start position, dense in the middle and thinning out
/// towards the edges.
fn sample_start<R: Rng + ?Sized>(rng: &mut R) -> Vector2<f32> {
    loop {
        let rand_x = rand_float(rng, 0.0, HALF_WIDTH * 0.74) + rand_float(rng, 0.0, 40.0);
        let rand_y = rand_float(rng, 0.0, HALF_HEIGHT * 0.84) + rand_float(rng, 0.0, 40.0);
        let angle = rand_float(rng, 0.0, std::f32::consts::TAU);
        let candidate = Vector2::new(rand_x * angle.cos(), rand_y * angle.sin());
        let dx = map_linear(candidate.x, 0.0, HALF_WIDTH, 0.0, 1.15);
        let dy = map_linear(candidate.y, 0.0, HALF_HEIGHT, 0.0, 1.35);
        let probability = (-(dx * dx * 2.0 + dy * dy * 2.0)).exp();
        if rand_float(rng, 0.0, 1.0) < probability {
            return candidate;
        }
    }
}

/// A thread between two stars: endpoints and opacity (0-85).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thread {
    pub from: Vector2<f32>,
    pub to: Vector2<f32>,
    pub opacity: f32,
}

#[derive(Debug, Clone)]
pub struct NightSky {
    points: Vec<Point>,
    noise: Perlin,
    time: u64,
}

impl NightSky {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut points: Vec<Point> = (0..num_points()).map(|_| Point::new(rng)).collect();
        let third = link_limit() / 3.0;
        let starts: Vec<Vector2<f32>> = points.iter().map(|p| p.start).collect();
        for (i, point) in points.iter_mut().enumerate() {
            point.neighbours = starts
                .iter()
                .enumerate()
                .filter(|&(j, other)| j != i && (other - point.start).norm() < third)
                .map(|(j, _)| j)
                .collect();
        }
        Self {
            points,
            noise: Perlin::new(rng.r#gen()),
            time: 0,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn step(&mut self) {
        self.time += 1;
        let time = self.time as f32;
        for point in &mut self.points {
            point.update(time);
        }
    }

    /// Perlin noise remapped to `0..=1`.
    fn noise_at(&self, p: Vector2<f32>) -> f32 {
        let n = self
            .noise
            .get([p.x as f64 * NOISE_SCALE, p.y as f64 * NOISE_SCALE]);
        ((n as f32 + 1.0) / 2.0).clamp(0.0, 1.0)
    }

    /// Threads visible this frame.
    pub fn threads(&self) -> Vec<Thread> {
        let half_limit = link_limit() / 2.0;
        let mut threads = Vec::new();
        for point in &self.points {
            for &j in &point.neighbours {
                let other = &self.points[j];
                let midway = point.position + other.position * 0.5;
                let reach = map_linear(self.noise_at(midway), 0.0, 1.0, 5.0, half_limit);
                let d = (point.position - other.position).norm();
                if d < reach {
                    threads.push(Thread {
                        from: point.position,
                        to: other.position,
                        opacity: map_linear(d, 0.0, reach, MAX_LINE_OPACITY, 0.0),
                    });
                }
            }
        }
        threads
    }

    pub fn bounds(&self, area: Rect) -> Bounds {
        fit_bounds(area, (0.0, 0.0), HALF_WIDTH as f64, HALF_HEIGHT as f64)
    }

    pub fn paint(&self, ctx: &mut Context) {
        let flip = |v: Vector2<f32>| (v.x as f64, -v.y as f64);

        for thread in self.threads() {
            let color = Rgb::WHITE.with_alpha(thread.opacity as u8, BACKGROUND);
            segment(ctx, flip(thread.from), flip(thread.to), color.into());
        }

        ctx.layer();
        let coords: Vec<(f64, f64)> = self.points().iter().map(|p| flip(p.position)).collect();
        ctx.draw(&Points {
            coords: &coords,
            color: Rgb::WHITE.into(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sketches::test_rng;

    #[test]
    fn test_point_count_scales_with_field() {
        assert_eq!(num_points(), 172);
        assert!((link_limit() - 55.3).abs() < 0.1);
    }

    #[test]
    fn test_starts_inside_sampling_window() {
        let sky = NightSky::new(&mut test_rng(61));
        for p in sky.points() {
            assert!(p.start.x.abs() <= HALF_WIDTH * 0.74 + 40.0);
            assert!(p.start.y.abs() <= HALF_HEIGHT * 0.84 + 40.0);
            assert!((0.5..=2.0).contains(&p.diameter));
        }
    }

    #[test]
    fn test_neighbours_are_symmetric() {
        let sky = NightSky::new(&mut test_rng(62));
        for (i, p) in sky.points().iter().enumerate() {
            assert!(!p.neighbours.contains(&i));
            for &j in &p.neighbours {
                assert!(sky.points()[j].neighbours.contains(&i));
            }
        }
    }

    #[test]
    fn test_points_wobble_around_start() {
        let mut sky = NightSky::new(&mut test_rng(63));
        for _ in 0..240 {
            sky.step();
            for p in sky.points() {
                assert!(((p.position - p.start).norm() - p.wobble).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn test_thread_opacity_in_range() {
        let mut sky = NightSky::new(&mut test_rng(64));
        for _ in 0..30 {
            sky.step();
            for thread in sky.threads() {
                assert!((0.0..=MAX_LINE_OPACITY).contains(&thread.opacity));
            }
        }
    }
}
