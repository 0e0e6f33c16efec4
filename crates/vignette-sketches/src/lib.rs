//! Generative-art sketches for the vignette sketchbook.
//!
//! Every sketch owns a small list of entities built once from a seeded random
//! generator. On each simulation step the entities are moved, collided or
//! recolored in place, and on each frame they are drawn onto a braille
//! [`ratatui::widgets::canvas::Canvas`].

mod backdrop;
mod chars;
mod draw;
mod orbit;
mod projection;
mod sketches;
mod state;

pub use state::{MAX_STEPS_PER_FRAME, STEP_MS, SketchState};
