//! Connections: small square plates on four rings. Plates whose bounding
//! circles overlap are joined by a line for as long as they overlap.

use nalgebra::{Rotation2, Vector2};
use rand::Rng;
use ratatui::{layout::Rect, widgets::canvas::Context};
use vignette_core::{
    Rgb,
    math::{avoid_zero, map_linear, rand_float},
};

use crate::draw::{Bounds, fit_bounds, polygon, segment};
use crate::orbit::{Orbiter, Palette, Rings};
use crate::projection::Camera;
use crate::sketches::cubes::OUTLINE;

pub const NUM_PLATES: usize = 100;

const RINGS: Rings = Rings {
    radii: [3.0, 6.0, 9.0, 12.0],
    thresholds: [0.18, 0.50, 0.78, 1.0],
};
const RING_JITTER: f32 = 3.0;
const MIN_SIZE: f32 = 1.25;
const MAX_SIZE: f32 = 2.0;
/// Degrees per step.
const ORBIT_LIMIT: f32 = 0.19;
const ORBIT_TOLERANCE: f32 = 0.03;
const SPIN_LIMIT: f32 = 1.5;
const SPIN_TOLERANCE: f32 = 0.3;

const CAMERA: Camera = Camera::new(20.0, 50.0);

pub const BACKGROUND: Rgb = Rgb::from_hex(0x46474c);
const FILL: Palette = Palette::new(Rgb::from_hex(0x95c251), Rgb::from_hex(0x1515eb));
const LINK_COLOR: Rgb = Rgb::grey(220);

#[derive(Debug, Clone, PartialEq)]
pub struct Plate {
    pub orbiter: Orbiter,
    pub size: f32,
    /// Radius of the circle circumscribing the plate.
    pub reach: f32,
    pub spin: f32,
    pub spin_speed: f32,
    pub opacity: f32,
    pub color: Rgb,
    pub outline: Rgb,
}

impl Plate {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let size = rand_float(rng, MIN_SIZE, MAX_SIZE);
        let orbit_speed = avoid_zero(rng, ORBIT_LIMIT, ORBIT_TOLERANCE).to_radians();
        let orbiter = Orbiter::spawn(rng, &RINGS, RING_JITTER, orbit_speed);
        let spin = rand_float(rng, 0.0, std::f32::consts::TAU);
        let spin_speed = avoid_zero(rng, SPIN_LIMIT, SPIN_TOLERANCE).to_radians();
        // Smaller plates are drawn more solidly.
        let opacity = map_linear(size, 1.5, 0.75, 0.588, 0.784).clamp(0.0, 1.0);
        let mut plate = Self {
            orbiter,
            size,
            reach: std::f32::consts::SQRT_2 * size / 2.0,
            spin,
            spin_speed,
            opacity,
            color: Rgb::BLACK,
            outline: Rgb::BLACK,
        };
        plate.recolor(rng);
        plate
    }

    pub fn recolor<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.color = FILL.recolor(rng, self.orbiter.angle);
        self.outline = OUTLINE.recolor(rng, self.orbiter.angle);
    }

    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.spin += self.spin_speed;
        self.orbiter.orbit();
        self.recolor(rng);
    }

    pub fn overlaps(&self, other: &Plate) -> bool {
        (self.orbiter.position - other.orbiter.position).norm() < self.reach + other.reach
    }

    /// Corners of the plate scaled by `scale`, in world coordinates.
    fn corners(&self, scale: f32) -> [(f64, f64); 4] {
        let half = self.size * scale / 2.0;
        let rotation = Rotation2::new(self.spin);
        [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)].map(|(sx, sy)| {
            let p = self.orbiter.position + rotation * Vector2::new(sx * half, sy * half);
            (p.x as f64, p.y as f64)
        })
    }
}

/// Index pairs `(i, j)`, `i < j`, of overlapping plates.
pub fn find_links(plates: &[Plate]) -> Vec<(usize, usize)> {
    let mut links = Vec::new();
    for (i, a) in plates.iter().enumerate() {
        for (j, b) in plates.iter().enumerate().skip(i + 1) {
            if a.overlaps(b) {
                links.push((i, j));
            }
        }
    }
    links
}

#[derive(Debug, Clone)]
pub struct Connections {
    plates: Vec<Plate>,
    links: Vec<(usize, usize)>,
}

impl Connections {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let plates: Vec<Plate> = (0..NUM_PLATES).map(|_| Plate::new(rng)).collect();
        let links = find_links(&plates);
        Self { plates, links }
    }

    pub fn plates(&self) -> &[Plate] {
        &self.plates
    }

    pub fn links(&self) -> &[(usize, usize)] {
        &self.links
    }

    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for plate in &mut self.plates {
            plate.step(rng);
        }
        self.links = find_links(&self.plates);
    }

    pub fn bounds(&self, area: Rect) -> Bounds {
        let half = CAMERA.half_height();
        fit_bounds(area, (0.0, 0.0), half, half)
    }

    pub fn paint(&self, ctx: &mut Context) {
        let plates = self.plates();
        for plate in plates {
            let fill = plate.color.with_opacity(plate.opacity, BACKGROUND);
            polygon(ctx, &plate.corners(0.5), fill.into());
            let outline = plate.outline.with_opacity(plate.opacity, BACKGROUND);
            polygon(ctx, &plate.corners(1.0), outline.into());
        }
        ctx.layer();
        for &(i, j) in self.links() {
            let a = plates[i].orbiter.position;
            let b = plates[j].orbiter.position;
            segment(
                ctx,
                (a.x as f64, a.y as f64),
                (b.x as f64, b.y as f64),
                LINK_COLOR.into(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sketches::test_rng;

    #[test]
    fn test_links_match_overlaps() {
        let mut rng = test_rng(41);
        let mut sketch = Connections::new(&mut rng);
        for _ in 0..50 {
            sketch.step(&mut rng);
        }
        let plates = sketch.plates();
        for i in 0..plates.len() {
            for j in (i + 1)..plates.len() {
                let linked = sketch.links().contains(&(i, j));
                assert_eq!(linked, plates[i].overlaps(&plates[j]));
            }
        }
    }

    #[test]
    fn test_hundred_plates_on_small_rings_touch() {
        let sketch = Connections::new(&mut test_rng(42));
        assert!(!sketch.links().is_empty());
    }

    #[test]
    fn test_plate_outline_follows_dark_palette() {
        use crate::sketches::cubes::{DK_BLUE, DK_GREEN};

        let mut rng = test_rng(44);
        let mut sketch = Connections::new(&mut rng);
        sketch.step(&mut rng);
        let within = |value: u8, a: u8, b: u8| value >= a.min(b) && value <= a.max(b);
        for plate in sketch.plates() {
            let o = plate.outline;
            assert!(within(o.r, DK_GREEN.r, DK_BLUE.r), "{o:?}");
            assert!(within(o.g, DK_GREEN.g, DK_BLUE.g), "{o:?}");
            assert!(within(o.b, DK_GREEN.b, DK_BLUE.b), "{o:?}");
        }
    }

    #[test]
    fn test_plate_opacity_range() {
        let sketch = Connections::new(&mut test_rng(43));
        for plate in sketch.plates() {
            assert!(plate.opacity > 0.0 && plate.opacity <= 1.0);
            assert!((plate.reach - plate.size * 0.707_106_77).abs() < 1e-4);
        }
    }
}
