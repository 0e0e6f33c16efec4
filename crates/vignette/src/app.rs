use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Color, Stylize},
    text::{Line, Span},
};
use tracing::info;
use vignette_config::Config;
use vignette_core::{AnimationSpeed, SketchKind};
use vignette_sketches::SketchState;

const ACCENT: Color = Color::Cyan;

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Is the simulation clock stopped?
    paused: bool,
    show_help: bool,
    sketch: SketchKind,
    speed: AnimationSpeed,
    frame_interval: Duration,
    state: SketchState,
    /// Simulation clock; stands still while paused.
    sim_time: Duration,
    last_frame: Option<Instant>,
}

impl App {
    /// Construct a new instance of [`App`] from the effective configuration.
    pub fn new(config: &Config) -> Self {
        let state = match config.seed {
            Some(seed) => SketchState::with_seed(seed),
            None => SketchState::new(),
        };
        Self {
            running: false,
            paused: false,
            show_help: config.show_help,
            sketch: config.sketch,
            speed: config.speed,
            frame_interval: Duration::from_secs(1) / config.fps.max(1),
            state,
            sim_time: Duration::ZERO,
            last_frame: None,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        info!(
            sketch = self.sketch.slug(),
            speed = self.speed.name(),
            seed = self.state.seed(),
            "starting"
        );
        while self.running {
            let frame_start = Instant::now();
            self.tick(frame_start);
            terminal.draw(|frame| self.render(frame))?;
            let budget = self.frame_interval.saturating_sub(frame_start.elapsed());
            self.handle_crossterm_events(budget)?;
        }
        info!("quitting");
        Ok(())
    }

    /// Advance the simulation clock to `now`.
    fn tick(&mut self, now: Instant) {
        if let Some(last) = self.last_frame {
            if !self.paused {
                self.sim_time += now.saturating_duration_since(last);
            }
        }
        self.last_frame = Some(now);
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let [sketch_area, help_area] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(u16::from(self.show_help)),
        ])
        .areas(frame.area());

        self.state.render(
            frame,
            sketch_area,
            self.sketch,
            self.sim_time.as_millis() as u64,
            self.speed,
            Local::now().time(),
        );

        if self.show_help {
            frame.render_widget(self.help_line(), help_area);
        }
    }

    fn help_line(&self) -> Line<'static> {
        let mut spans: Vec<Span<'static>> = vec![
            self.sketch.name().bold().fg(ACCENT),
            format!(" ({})  ", self.speed.name()).dark_gray(),
        ];
        if self.paused {
            spans.push("paused  ".yellow());
        }
        spans.extend([
            "q".bold().fg(ACCENT),
            " quit  ".dark_gray(),
            "n/p".bold().fg(ACCENT),
            " sketch  ".dark_gray(),
            "s".bold().fg(ACCENT),
            " speed  ".dark_gray(),
            "space".bold().fg(ACCENT),
            " pause  ".dark_gray(),
            "r".bold().fg(ACCENT),
            " reseed  ".dark_gray(),
            "h".bold().fg(ACCENT),
            " help".dark_gray(),
        ]);
        Line::from(spans).centered()
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits at most `timeout` so the next frame is drawn on time.
    fn handle_crossterm_events(&mut self, timeout: Duration) -> color_eyre::Result<()> {
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(width, height) => {
                    tracing::debug!(width, height, "terminal resized");
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('n') | KeyCode::Right) => self.switch_sketch(self.sketch.next()),
            (_, KeyCode::Char('p') | KeyCode::Left) => self.switch_sketch(self.sketch.prev()),
            (_, KeyCode::Char('s')) => self.cycle_speed(),
            (_, KeyCode::Char(' ')) => self.paused = !self.paused,
            (_, KeyCode::Char('r')) => self.reseed(),
            (_, KeyCode::Char('h')) => self.show_help = !self.show_help,
            _ => {}
        }
    }

    fn switch_sketch(&mut self, sketch: SketchKind) {
        info!(sketch = sketch.slug(), "switching sketch");
        self.sketch = sketch;
    }

    fn cycle_speed(&mut self) {
        self.speed = self.speed.next();
        info!(speed = self.speed.name(), "speed changed");
    }

    /// Rebuild the current sketch from a fresh seed.
    fn reseed(&mut self) {
        let seed = self.state.reseed();
        info!(seed, sketch = self.sketch.slug(), "reseeded");
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
