//! Orbiting cubes: wireframe cubes tumbling about all three axes while they
//! circle the origin, fading with distance from the centre.

use nalgebra::{Point3, Vector3};
use rand::Rng;
use ratatui::{layout::Rect, widgets::canvas::Context};
use vignette_core::{
    Rgb,
    math::{avoid_zero, map_linear, rand_float},
};

use crate::draw::{Bounds, fit_bounds, segment};
use crate::orbit::{Orbiter, Palette, Rings};
use crate::projection::{Camera, cube_edges, euler_xyz};

pub const NUM_CUBES: usize = 100;

pub(crate) const MIN_SIZE: f32 = 1.25;
pub(crate) const MAX_SIZE: f32 = 2.0;
/// Widest a cube can appear from any angle: its space diagonal.
const MAX_EXTENT: f32 = 1.732_050_8 * MAX_SIZE;
const FIRST_ORBIT: f32 = MAX_EXTENT + MAX_SIZE * 0.5;
pub(crate) const RINGS: Rings = Rings {
    radii: [FIRST_ORBIT, FIRST_ORBIT * 2.0, FIRST_ORBIT * 3.0, FIRST_ORBIT * 4.0],
    thresholds: [0.16, 0.40, 0.72, 1.0],
};

/// Orbital speed, degrees per step.
const ORBIT_LIMIT: f32 = 0.13;
const ORBIT_TOLERANCE: f32 = 0.01;
/// Tumble speed on every axis, degrees per step.
const SPIN_LIMIT: f32 = 1.3;
const SPIN_TOLERANCE: f32 = 0.5;

pub(crate) const CAMERA: Camera = Camera::new(32.0, 50.0);

pub const BACKGROUND: Rgb = Rgb::from_hex(0x46474c);
const FACE: Palette = Palette::new(Rgb::from_hex(0x95c251), Rgb::from_hex(0x1515eb));
pub(crate) const DK_GREEN: Rgb = Rgb::from_hex(0x394a1f);
pub(crate) const DK_BLUE: Rgb = Rgb::from_hex(0x0a0a73);
pub(crate) const OUTLINE: Palette = Palette::new(DK_GREEN, DK_BLUE);
/// Face wireframe scale; an inset cube stands in for the shaded faces.
const FACE_SCALE: f32 = 0.6;

/// A body that circles the origin and tumbles about its own centre.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Tumbler {
    pub orbiter: Orbiter,
    pub size: f32,
    /// Euler angles in radians.
    pub rotation: Vector3<f32>,
    /// Radians per step, applied to every axis.
    pub spin_speed: f32,
}

impl Tumbler {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let size = rand_float(rng, MIN_SIZE, MAX_SIZE);
        let orbit_speed = avoid_zero(rng, ORBIT_LIMIT, ORBIT_TOLERANCE).to_radians();
        let orbiter = Orbiter::spawn(rng, &RINGS, RINGS.radii[0], orbit_speed);
        let rotation = Vector3::new(0.0, 0.0, rand_float(rng, 0.0, std::f32::consts::TAU));
        let spin_speed = avoid_zero(rng, SPIN_LIMIT, SPIN_TOLERANCE).to_radians();
        Self {
            orbiter,
            size,
            rotation,
            spin_speed,
        }
    }

    pub fn step(&mut self) {
        self.rotation.add_scalar_mut(self.spin_speed);
        self.orbiter.orbit();
    }

    /// Map a point in the body's own frame to the screen.
    pub fn to_screen(&self, local: Point3<f32>) -> (f64, f64) {
        let centre = Point3::new(self.orbiter.position.x, self.orbiter.position.y, 0.0);
        CAMERA.project(centre + euler_xyz(self.rotation) * local.coords)
    }
}

pub(crate) fn view_bounds(area: Rect) -> Bounds {
    let half = CAMERA.half_height();
    fit_bounds(area, (0.0, 0.0), half, half)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    pub(crate) body: Tumbler,
    /// Fades from 1.0 on the inner rings, through 0.5 at the outermost ring.
    pub opacity: f32,
    pub color: Rgb,
    pub outline: Rgb,
}

impl Cube {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let body = Tumbler::spawn(rng);
        let opacity =
            map_linear(body.orbiter.radius, RINGS.radii[1] - 2.0, RINGS.radii[3], 1.0, 0.5)
                .clamp(0.0, 1.0);
        let mut cube = Self {
            body,
            opacity,
            color: Rgb::BLACK,
            outline: Rgb::BLACK,
        };
        cube.recolor(rng);
        cube
    }

    pub fn recolor<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.color = FACE.recolor(rng, self.body.orbiter.angle);
        self.outline = OUTLINE.recolor(rng, self.body.orbiter.angle);
    }

    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.body.step();
        self.recolor(rng);
    }

    fn wireframe(&self, ctx: &mut Context, scale: f32, color: Rgb) {
        let half = self.body.size * scale / 2.0;
        let color = color.with_opacity(self.opacity, BACKGROUND).into();
        for (a, b) in cube_edges() {
            let from = self.body.to_screen(a * half);
            let to = self.body.to_screen(b * half);
            segment(ctx, from, to, color);
        }
    }
}

#[derive(Debug, Clone)]
pub struct OrbitingCubes {
    cubes: Vec<Cube>,
}

impl OrbitingCubes {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            cubes: (0..NUM_CUBES).map(|_| Cube::new(rng)).collect(),
        }
    }

    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cube in &mut self.cubes {
            cube.step(rng);
        }
    }

    pub fn bounds(&self, area: Rect) -> Bounds {
        view_bounds(area)
    }

    pub fn paint(&self, ctx: &mut Context) {
        for cube in self.cubes() {
            cube.wireframe(ctx, FACE_SCALE, cube.color);
            cube.wireframe(ctx, 1.0, cube.outline);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sketches::test_rng;

    #[test]
    fn test_opacity_range() {
        let sketch = OrbitingCubes::new(&mut test_rng(21));
        for cube in sketch.cubes() {
            assert!((0.0..=1.0).contains(&cube.opacity), "opacity {}", cube.opacity);
        }
    }

    #[test]
    fn test_outer_cubes_are_fainter() {
        let sketch = OrbitingCubes::new(&mut test_rng(22));
        let inner = sketch.cubes().iter().filter(|c| c.body.orbiter.radius < RINGS.radii[1]);
        let outer = sketch.cubes().iter().filter(|c| c.body.orbiter.radius > RINGS.radii[3]);
        let max_outer = outer.map(|c| c.opacity).fold(0.0, f32::max);
        let min_inner = inner.map(|c| c.opacity).fold(1.0, f32::min);
        assert!(min_inner > max_outer);
    }

    #[test]
    fn test_tumble_advances_every_axis() {
        let mut rng = test_rng(23);
        let mut sketch = OrbitingCubes::new(&mut rng);
        let before: Vec<Vector3<f32>> = sketch.cubes().iter().map(|c| c.body.rotation).collect();
        sketch.step(&mut rng);
        for (cube, rot) in sketch.cubes().iter().zip(before) {
            let delta = cube.body.rotation - rot;
            assert!((delta.x - cube.body.spin_speed).abs() < 1e-6);
            assert!((delta.y - cube.body.spin_speed).abs() < 1e-6);
            assert!((delta.z - cube.body.spin_speed).abs() < 1e-5);
            assert!(cube.body.spin_speed.abs() >= SPIN_TOLERANCE.to_radians() - 1e-6);
        }
    }

    #[test]
    fn test_outline_stays_between_dark_endpoints() {
        let mut rng = test_rng(25);
        let mut sketch = OrbitingCubes::new(&mut rng);
        for _ in 0..30 {
            sketch.step(&mut rng);
        }
        let within = |value: u8, a: u8, b: u8| value >= a.min(b) && value <= a.max(b);
        for cube in sketch.cubes() {
            let o = cube.outline;
            assert!(within(o.r, DK_GREEN.r, DK_BLUE.r), "{o:?}");
            assert!(within(o.g, DK_GREEN.g, DK_BLUE.g), "{o:?}");
            assert!(within(o.b, DK_GREEN.b, DK_BLUE.b), "{o:?}");
            assert_ne!(o, cube.color);
        }
    }

    #[test]
    fn test_centre_projects_to_orbit_position() {
        let cube = Cube::new(&mut test_rng(24));
        let (x, y) = cube.body.to_screen(Point3::origin());
        assert!((x - cube.body.orbiter.position.x as f64).abs() < 1e-4);
        assert!((y - cube.body.orbiter.position.y as f64).abs() < 1e-4);
    }
}
