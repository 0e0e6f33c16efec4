//! Sketch state management.

use chrono::NaiveTime;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::{
    Frame,
    layout::Rect,
    symbols::Marker,
    widgets::canvas::{Canvas, Context},
};
use vignette_core::{AnimationSpeed, Rgb, SketchKind};

use crate::backdrop;
use crate::draw::Bounds;
use crate::sketches::{
    box_clock::{self, BoxClock},
    bubbles::{self, Bubbles},
    connections::{self, Connections},
    cubes::{self, OrbitingCubes},
    night_sky::{self, NightSky},
    squares::{self, OrbitingSquares},
    tentacles::{self, Tentacles},
    web_of_stars::{self, WebOfStars},
    whiskers::{self, OrbitingWhiskers},
};

/// Length of one simulation step at medium speed (60 steps per second).
pub const STEP_MS: f32 = 1000.0 / 60.0;
/// Upper bound on catch-up steps after a slow frame.
pub const MAX_STEPS_PER_FRAME: u32 = 8;

fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// The live entities of the active sketch.
#[derive(Debug, Clone)]
enum Scene {
    Bubbles(Bubbles),
    Squares(OrbitingSquares),
    Cubes(OrbitingCubes),
    Whiskers(OrbitingWhiskers),
    Connections(Connections),
    WebOfStars(WebOfStars),
    NightSky(NightSky),
    Tentacles(Tentacles),
    BoxClock(BoxClock),
}

impl Scene {
    fn build(kind: SketchKind, rng: &mut ChaCha8Rng, now: NaiveTime) -> Self {
        match kind {
            SketchKind::BouncyBubbles => Scene::Bubbles(Bubbles::new(rng)),
            SketchKind::OrbitingSquares => Scene::Squares(OrbitingSquares::new(rng)),
            SketchKind::OrbitingCubes => Scene::Cubes(OrbitingCubes::new(rng)),
            SketchKind::OrbitingWhiskers => Scene::Whiskers(OrbitingWhiskers::new(rng)),
            SketchKind::Connections => Scene::Connections(Connections::new(rng)),
            SketchKind::WebOfStars => Scene::WebOfStars(WebOfStars::new(rng)),
            SketchKind::NightSky => Scene::NightSky(NightSky::new(rng)),
            SketchKind::Tentacles => Scene::Tentacles(Tentacles::new()),
            SketchKind::BoxClock => Scene::BoxClock(BoxClock::new(&now)),
        }
    }

    fn step(&mut self, rng: &mut ChaCha8Rng, now: NaiveTime) {
        match self {
            Scene::Bubbles(s) => s.step(),
            Scene::Squares(s) => s.step(rng),
            Scene::Cubes(s) => s.step(rng),
            Scene::Whiskers(s) => s.step(rng),
            Scene::Connections(s) => s.step(rng),
            Scene::WebOfStars(s) => s.step(),
            Scene::NightSky(s) => s.step(),
            Scene::Tentacles(s) => s.step(),
            Scene::BoxClock(s) => s.step(&now),
        }
    }

    fn bounds(&self, area: Rect) -> Bounds {
        match self {
            Scene::Bubbles(s) => s.bounds(area),
            Scene::Squares(s) => s.bounds(area),
            Scene::Cubes(s) => s.bounds(area),
            Scene::Whiskers(s) => s.bounds(area),
            Scene::Connections(s) => s.bounds(area),
            Scene::WebOfStars(s) => s.bounds(area),
            Scene::NightSky(s) => s.bounds(area),
            Scene::Tentacles(s) => s.bounds(area),
            Scene::BoxClock(s) => s.bounds(area),
        }
    }

    fn background(&self) -> Rgb {
        match self {
            Scene::Bubbles(_) => bubbles::BACKGROUND,
            Scene::Squares(_) => squares::BACKGROUND,
            Scene::Cubes(_) => cubes::BACKGROUND,
            Scene::Whiskers(_) => whiskers::BACKGROUND,
            Scene::Connections(_) => connections::BACKGROUND,
            Scene::WebOfStars(_) => web_of_stars::BACKGROUND,
            Scene::NightSky(_) => night_sky::BACKGROUND,
            Scene::Tentacles(_) => tentacles::BACKGROUND,
            Scene::BoxClock(_) => box_clock::BACKGROUND,
        }
    }

    /// Sky sketches get a twinkling backdrop behind the canvas.
    fn has_backdrop(&self) -> bool {
        matches!(self, Scene::NightSky(_) | Scene::WebOfStars(_))
    }

    fn paint(&self, ctx: &mut Context) {
        match self {
            Scene::Bubbles(s) => s.paint(ctx),
            Scene::Squares(s) => s.paint(ctx),
            Scene::Cubes(s) => s.paint(ctx),
            Scene::Whiskers(s) => s.paint(ctx),
            Scene::Connections(s) => s.paint(ctx),
            Scene::WebOfStars(s) => s.paint(ctx),
            Scene::NightSky(s) => s.paint(ctx),
            Scene::Tentacles(s) => s.paint(ctx),
            Scene::BoxClock(s) => s.paint(ctx),
        }
    }
}

/// State of the active sketch.
#[derive(Debug)]
pub struct SketchState {
    /// Kind of the scene currently built.
    kind: Option<SketchKind>,
    /// Live entities; `None` until the first render.
    scene: Option<Scene>,
    /// Seed the generator was created from.
    seed: u64,
    rng: ChaCha8Rng,
    /// Elapsed time at the last update, in milliseconds.
    last_update_ms: u64,
    /// Fractional steps carried over between frames.
    pending_steps: f32,
    /// Steps taken since the scene was built.
    steps: u64,
}

impl Default for SketchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SketchState {
    /// Create a sketch state seeded from the system clock.
    pub fn new() -> Self {
        Self::with_seed(clock_seed())
    }

    /// Create a sketch state with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            kind: None,
            scene: None,
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            last_update_ms: 0,
            pending_steps: 0.0,
            steps: 0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Kind of the sketch currently built, if any.
    pub fn kind(&self) -> Option<SketchKind> {
        self.kind
    }

    /// Steps taken since the current sketch was built.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Drop the current sketch and reseed; the next render rebuilds it.
    pub fn restart(&mut self, seed: u64) {
        tracing::info!(seed, "restarting sketch");
        *self = Self::with_seed(seed);
    }

    /// Restart with a fresh seed from the system clock and return it.
    pub fn reseed(&mut self) -> u64 {
        let mut seed = clock_seed();
        if seed == self.seed {
            seed = seed.wrapping_add(1);
        }
        self.restart(seed);
        seed
    }

    /// Number of whole steps owed for the time elapsed since the last update.
    fn steps_owed(&mut self, elapsed_ms: u64, speed: AnimationSpeed) -> u32 {
        let delta_ms = elapsed_ms.saturating_sub(self.last_update_ms);
        self.last_update_ms = elapsed_ms;

        self.pending_steps += delta_ms as f32 / STEP_MS * speed.time_scale();
        let whole = self.pending_steps.floor();
        self.pending_steps -= whole;
        (whole as u32).min(MAX_STEPS_PER_FRAME)
    }

    /// Build the sketch if needed and run the simulation steps owed.
    ///
    /// Returns the number of steps taken.
    pub fn advance(
        &mut self,
        kind: SketchKind,
        elapsed_ms: u64,
        speed: AnimationSpeed,
        now: NaiveTime,
    ) -> u32 {
        if self.kind != Some(kind) || self.scene.is_none() {
            tracing::debug!(sketch = kind.slug(), seed = self.seed, "building sketch");
            self.scene = Some(Scene::build(kind, &mut self.rng, now));
            self.kind = Some(kind);
            self.last_update_ms = elapsed_ms;
            self.pending_steps = 0.0;
            self.steps = 0;
            return 0;
        }

        let steps = self.steps_owed(elapsed_ms, speed);
        if let Some(scene) = self.scene.as_mut() {
            for _ in 0..steps {
                scene.step(&mut self.rng, now);
            }
        }
        self.steps += steps as u64;
        steps
    }

    /// Draw the current sketch into `area`.
    pub fn draw(&self, frame: &mut Frame, area: Rect, elapsed_ms: u64) {
        let Some(scene) = &self.scene else {
            return;
        };
        if area.is_empty() {
            return;
        }

        if scene.has_backdrop() {
            backdrop::render(frame, area, elapsed_ms, self.seed);
        }

        let (x_bounds, y_bounds) = scene.bounds(area);
        let canvas = Canvas::default()
            .background_color(scene.background().into())
            .marker(Marker::Braille)
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(|ctx| scene.paint(ctx));
        frame.render_widget(canvas, area);
    }

    /// Advance and draw in one go.
    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        kind: SketchKind,
        elapsed_ms: u64,
        speed: AnimationSpeed,
        now: NaiveTime,
    ) {
        self.advance(kind, elapsed_ms, speed, now);
        self.draw(frame, area, elapsed_ms);
    }
}
