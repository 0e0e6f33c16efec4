//! Core types shared across the vignette sketchbook.
//!
//! Holds the sketch catalogue, animation speed, color handling and the small
//! numeric helpers every sketch leans on.

mod color;
pub mod math;
mod sketch;
mod speed;

pub use color::Rgb;
pub use sketch::{ParseSketchKindError, SketchKind};
pub use speed::{AnimationSpeed, ParseAnimationSpeedError};
