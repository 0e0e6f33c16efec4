//! Orbiting whiskers: the orbiting cubes stripped down to a single tumbling
//! line each.

use nalgebra::Point3;
use rand::Rng;
use ratatui::{layout::Rect, widgets::canvas::Context};
use vignette_core::Rgb;

use crate::draw::{Bounds, segment};
use crate::orbit::Palette;
use crate::sketches::cubes::{Tumbler, view_bounds};

pub const NUM_WHISKERS: usize = 100;

pub const BACKGROUND: Rgb = Rgb::from_hex(0x3e3e3e);
const PALETTE: Palette = Palette::new(Rgb::from_hex(0x77b90f), Rgb::from_hex(0x245fff));

#[derive(Debug, Clone, PartialEq)]
pub struct Whisker {
    pub(crate) body: Tumbler,
    pub color: Rgb,
}

impl Whisker {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let body = Tumbler::spawn(rng);
        let color = PALETTE.recolor(rng, body.orbiter.angle);
        Self { body, color }
    }

    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.body.step();
        self.color = PALETTE.recolor(rng, self.body.orbiter.angle);
    }

    /// Screen endpoints: the whisker runs from its anchor along its local x axis.
    pub fn endpoints(&self) -> ((f64, f64), (f64, f64)) {
        (
            self.body.to_screen(Point3::origin()),
            self.body.to_screen(Point3::new(self.body.size, 0.0, 0.0)),
        )
    }
}

#[derive(Debug, Clone)]
pub struct OrbitingWhiskers {
    whiskers: Vec<Whisker>,
}

impl OrbitingWhiskers {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            whiskers: (0..NUM_WHISKERS).map(|_| Whisker::new(rng)).collect(),
        }
    }

    pub fn whiskers(&self) -> &[Whisker] {
        &self.whiskers
    }

    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for whisker in &mut self.whiskers {
            whisker.step(rng);
        }
    }

    pub fn bounds(&self, area: Rect) -> Bounds {
        view_bounds(area)
    }

    pub fn paint(&self, ctx: &mut Context) {
        for whisker in self.whiskers() {
            let (from, to) = whisker.endpoints();
            segment(ctx, from, to, whisker.color.into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sketches::test_rng;

    #[test]
    fn test_whisker_length_bounded() {
        let mut rng = test_rng(31);
        let mut sketch = OrbitingWhiskers::new(&mut rng);
        for _ in 0..100 {
            sketch.step(&mut rng);
        }
        for whisker in sketch.whiskers() {
            let ((x1, y1), (x2, y2)) = whisker.endpoints();
            let len = ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt();
            // Perspective stretches a tip raised towards the camera a little.
            let slack = 0.1 * (whisker.body.orbiter.radius + whisker.body.size) as f64;
            assert!(len <= whisker.body.size as f64 + slack);
        }
    }

    #[test]
    fn test_anchor_follows_orbit() {
        let mut rng = test_rng(32);
        let mut whisker = Whisker::new(&mut rng);
        let radius = whisker.body.orbiter.radius as f64;
        for _ in 0..1000 {
            whisker.step(&mut rng);
        }
        let ((x, y), _) = whisker.endpoints();
        assert!(((x * x + y * y).sqrt() - radius).abs() < 0.05);
    }
}
