//! Orbital motion and angle-driven coloring shared by the orbit sketches.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use nalgebra::Vector2;
use rand::Rng;
use vignette_core::Rgb;
use vignette_core::math::{map_linear, rand_float, rotate_2d};

/// Largest random nudge added to the shade when recoloring.
const SHADE_JITTER: f32 = 0.02;

/// Concentric rings with cumulative selection thresholds.
#[derive(Debug, Clone, Copy)]
pub struct Rings {
    pub radii: [f32; 4],
    /// Cumulative probability of landing on each ring; the last entry is 1.
    pub thresholds: [f32; 4],
}

impl Rings {
    /// Pick a ring radius according to the thresholds.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        let chance = rand_float(rng, 0.0, 1.0);
        self.radii
            .iter()
            .zip(self.thresholds)
            .find(|&(_, threshold)| chance < threshold)
            .map(|(radius, _)| *radius)
            .unwrap_or(self.radii[self.radii.len() - 1])
    }
}

/// A body circling the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbiter {
    pub position: Vector2<f32>,
    /// Distance from the origin, fixed at spawn.
    pub radius: f32,
    /// Angular coordinate, `atan2(y, x)`, in `-π..=π`.
    pub angle: f32,
    /// Rotation applied each step, in radians.
    pub speed: f32,
}

impl Orbiter {
    /// Place a body at a random angle on one of `rings`, pushed outwards by
    /// up to `jitter`.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, rings: &Rings, jitter: f32, speed: f32) -> Self {
        let angle = rand_float(rng, 0.0, TAU);
        let radius = rings.choose(rng) + rand_float(rng, 0.0, jitter);
        let position = Vector2::new(angle.cos() * radius, angle.sin() * radius);
        Self {
            position,
            radius,
            angle: position.y.atan2(position.x),
            speed,
        }
    }

    /// Advance one step along the orbit.
    pub fn orbit(&mut self) {
        self.position = rotate_2d(self.position, self.speed);
        self.angle = self.position.y.atan2(self.position.x);
    }
}

/// Which half-plane an angular coordinate falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Interpolation factor for an angular coordinate.
///
/// Both halves start at 0 on the horizontal axis and meet at 0.5 on the
/// vertical axis, so the blend is continuous all the way round.
pub fn shade_for_angle(angle: f32) -> (f32, Side) {
    let angle = angle.abs();
    if angle >= FRAC_PI_2 {
        (map_linear(angle, PI, FRAC_PI_2, 0.0, 0.5), Side::Left)
    } else {
        (map_linear(angle, 0.0, FRAC_PI_2, 0.0, 0.5), Side::Right)
    }
}

/// Two endpoint colors, one for each half of the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub left: Rgb,
    pub right: Rgb,
}

impl Palette {
    pub const fn new(left: Rgb, right: Rgb) -> Self {
        Self { left, right }
    }

    /// Color for `angle`, with `nudge` added to the shade.
    pub fn color_at(&self, angle: f32, nudge: f32) -> Rgb {
        let (shade, side) = shade_for_angle(angle);
        match side {
            Side::Left => self.left.lerp(self.right, shade + nudge),
            Side::Right => self.right.lerp(self.left, shade + nudge),
        }
    }

    /// Color for `angle` with a small random shimmer.
    pub fn recolor<R: Rng + ?Sized>(&self, rng: &mut R, angle: f32) -> Rgb {
        self.color_at(angle, rand_float(rng, -SHADE_JITTER, SHADE_JITTER))
    }
}
