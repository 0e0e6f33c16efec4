//! Bouncy bubbles: a handful of balls under gravity, pushed apart by a spring
//! whenever they overlap.

use nalgebra::Vector2;
use rand::Rng;
use ratatui::{
    layout::Rect,
    style::Color,
    widgets::canvas::{Circle, Context, Rectangle},
};
use vignette_core::{Rgb, math::rand_float};

use crate::draw::{Bounds, fit_bounds};

pub const NUM_BALLS: usize = 13;
pub const SPRING: f32 = 0.05;
pub const GRAVITY: f32 = 0.03;
/// Velocity factor applied on hitting a wall (reverses and damps).
pub const FRICTION: f32 = -0.9;
pub const WIDTH: f32 = 720.0;
pub const HEIGHT: f32 = 400.0;
const MIN_DIAMETER: f32 = 30.0;
const MAX_DIAMETER: f32 = 70.0;

pub const BACKGROUND: Rgb = Rgb::BLACK;
const BALL_ALPHA: u8 = 204;
const WALL_COLOR: Rgb = Rgb::grey(50);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub position: Vector2<f32>,
    pub velocity: Vector2<f32>,
    pub diameter: f32,
}

impl Ball {
    pub fn new(x: f32, y: f32, diameter: f32) -> Self {
        Self {
            position: Vector2::new(x, y),
            velocity: Vector2::zeros(),
            diameter,
        }
    }

    pub fn radius(&self) -> f32 {
        self.diameter / 2.0
    }

    /// Apply gravity, integrate and bounce off the walls.
    pub fn step(&mut self) {
        self.velocity.y += GRAVITY;
        self.position += self.velocity;

        let r = self.radius();
        if self.position.x + r > WIDTH {
            self.position.x = WIDTH - r;
            self.velocity.x *= FRICTION;
        } else if self.position.x - r < 0.0 {
            self.position.x = r;
            self.velocity.x *= FRICTION;
        }

        if self.position.y + r > HEIGHT {
            self.position.y = HEIGHT - r;
            self.velocity.y *= FRICTION;
        } else if self.position.y - r < 0.0 {
            self.position.y = r;
            self.velocity.y *= FRICTION;
        }
    }
}

/// Push every ball overlapping `balls[index]` away from it.
///
/// The impulse is equal and opposite: whatever is added to the other ball is
/// taken from the one at `index`.
pub fn collide(balls: &mut [Ball], index: usize) {
    let this = balls[index];
    let mut dv = Vector2::zeros();

    for (j, other) in balls.iter_mut().enumerate() {
        if j == index {
            continue;
        }
        let delta = other.position - this.position;
        let distance = delta.norm();
        let min_dist = other.radius() + this.radius();
        if distance < min_dist {
            let angle = delta.y.atan2(delta.x);
            let target = this.position + Vector2::new(angle.cos(), angle.sin()) * min_dist;
            let accel = (target - other.position) * SPRING;
            dv -= accel;
            other.velocity += accel;
        }
    }

    balls[index].velocity += dv;
}

#[derive(Debug, Clone)]
pub struct Bubbles {
    balls: Vec<Ball>,
}

impl Bubbles {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let balls = (0..NUM_BALLS)
            .map(|_| {
                Ball::new(
                    rand_float(rng, 0.0, WIDTH),
                    rand_float(rng, 0.0, HEIGHT),
                    rand_float(rng, MIN_DIAMETER, MAX_DIAMETER),
                )
            })
            .collect();
        Self { balls }
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    /// One frame: each ball in turn collides with the rest, then moves.
    pub fn step(&mut self) {
        for i in 0..self.balls.len() {
            collide(&mut self.balls, i);
            self.balls[i].step();
        }
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
        ctx.draw(&Rectangle {
            x: 0.0,
            y: 0.0,
            width: WIDTH as f64,
            height: HEIGHT as f64,
            color: WALL_COLOR.into(),
        });
        let color: Color = Rgb::WHITE.with_alpha(BALL_ALPHA, BACKGROUND).into();
        for ball in self.balls() {
            // Field coordinates grow downwards; the canvas grows upwards.
            ctx.draw(&Circle {
                x: ball.position.x as f64,
                y: (HEIGHT - ball.position.y) as f64,
                radius: ball.radius() as f64,
                color,
            });
        }
    }
}
