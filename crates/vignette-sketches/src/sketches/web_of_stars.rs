//! Web of stars: glowing points circling their own anchors, strung together
//! whenever two of them drift close.

use nalgebra::Vector2;
use rand::Rng;
use ratatui::{
    layout::Rect,
    widgets::canvas::{Circle, Context, Points},
};
use vignette_core::{Rgb, math::rand_float};

use crate::draw::{Bounds, fit_bounds, segment};

pub const NUM_STARS: usize = 60;
pub const WIDTH: f32 = 800.0;
pub const HEIGHT: f32 = 450.0;
/// Keeps anchors away from the field edges.
const EDGE_BUFFER: f32 = 50.0;
const MIN_RADIUS: f32 = 50.0;
const MAX_RADIUS: f32 = 150.0;
/// Radians per step.
const THETA_STEP: f32 = 0.02615;
const STAR_SIZE: f32 = 10.0;
/// Stars nearer than this are linked.
pub const LINK_DISTANCE: f32 = 60.0;

pub const BACKGROUND: Rgb = Rgb::grey(10);
const LINK_ALPHA: u8 = 0x96;
const GLOW_RINGS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub origin: Vector2<f32>,
    pub radius: f32,
    /// `1.0` or `-1.0`.
    pub direction: f32,
    pub offset: f32,
    pub theta: f32,
    pub location: Vector2<f32>,
}

impl Star {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let origin = Vector2::new(
            rand_float(rng, EDGE_BUFFER, WIDTH - EDGE_BUFFER),
            rand_float(rng, EDGE_BUFFER, HEIGHT - EDGE_BUFFER),
        );
        let radius = rand_float(rng, MIN_RADIUS, MAX_RADIUS);
        let direction = if rng.gen_bool(0.5) { -1.0 } else { 1.0 };
        let offset = rand_float(rng, 0.0, std::f32::consts::TAU);
        Self {
            origin,
            radius,
            direction,
            offset,
            theta: 0.0,
            location: origin + Vector2::new(radius, 0.0),
        }
    }

    pub fn step(&mut self) {
        let phase = self.theta + self.offset;
        self.location = self.origin + Vector2::new(phase.sin(), phase.cos()) * self.radius;
        self.theta += THETA_STEP * self.direction;
    }
}

#[derive(Debug, Clone)]
pub struct WebOfStars {
    stars: Vec<Star>,
}

impl WebOfStars {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            stars: (0..NUM_STARS).map(|_| Star::new(rng)).collect(),
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn step(&mut self) {
        for star in &mut self.stars {
            star.step();
        }
    }

    /// Index pairs of distinct stars closer than [`LINK_DISTANCE`].
    pub fn links(&self) -> Vec<(usize, usize)> {
        let mut links = Vec::new();
        for (i, a) in self.stars.iter().enumerate() {
            for (j, b) in self.stars.iter().enumerate().skip(i + 1) {
                let distance = (a.location - b.location).norm();
                if distance > 0.0 && distance < LINK_DISTANCE {
                    links.push((i, j));
                }
            }
        }
        links
    }

    pub fn bounds(&self, area: Rect) -> Bounds {
        fit_bounds(
            area,
            (WIDTH as f64 / 2.0, HEIGHT as f64 / 2.0),
            WIDTH as f64 / 2.0,
            HEIGHT as f64 / 2.0,
        )
    }

    pub fn paint(&self, ctx: &mut Context) {
        let flip = |v: Vector2<f32>| (v.x as f64, (HEIGHT - v.y) as f64);

        let link_color = Rgb::WHITE.with_alpha(LINK_ALPHA, BACKGROUND).into();
        let stars = self.stars();
        for (i, j) in self.links() {
            segment(
                ctx,
                flip(stars[i].location),
                flip(stars[j].location),
                link_color,
            );
        }

        ctx.layer();
        for star in stars {
            let (x, y) = flip(star.location);
            // Concentric rings, brighter towards the core.
            for ring in 1..GLOW_RINGS {
                let color = Rgb::WHITE.with_alpha((ring * 50) as u8, BACKGROUND);
                ctx.draw(&Circle {
                    x,
                    y,
                    radius: ((STAR_SIZE - 2.0 * ring as f32) / 2.0) as f64,
                    color: color.into(),
                });
            }
            ctx.draw(&Points {
                coords: &[(x, y)],
                color: Rgb::WHITE.into(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sketches::test_rng;

    #[test]
    fn test_star_stays_on_its_circle() {
        let mut sketch = WebOfStars::new(&mut test_rng(51));
        for _ in 0..500 {
            sketch.step();
            for star in sketch.stars() {
                let r = (star.location - star.origin).norm();
                assert!((r - star.radius).abs() < 1e-2);
            }
        }
    }

    #[test]
    fn test_direction_sets_theta_sign() {
        let mut sketch = WebOfStars::new(&mut test_rng(52));
        for _ in 0..10 {
            sketch.step();
        }
        for star in sketch.stars() {
            assert_eq!(star.theta.signum(), star.direction);
        }
    }

    #[test]
    fn test_links_are_short_and_distinct() {
        let mut sketch = WebOfStars::new(&mut test_rng(53));
        sketch.step();
        let links = sketch.links();
        for &(i, j) in &links {
            assert!(i < j);
            let d = (sketch.stars()[i].location - sketch.stars()[j].location).norm();
            assert!(d < LINK_DISTANCE);
        }
    }
}
