use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a sketch name does not match any known sketch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sketch '{0}'")]
pub struct ParseSketchKindError(pub String);

/// The sketches available in the sketchbook.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SketchKind {
    #[default]
    BouncyBubbles,
    OrbitingSquares,
    OrbitingCubes,
    OrbitingWhiskers,
    Connections,
    WebOfStars,
    NightSky,
    Tentacles,
    BoxClock,
}

impl SketchKind {
    /// Every sketch, in presentation order.
    pub const ALL: [SketchKind; 9] = [
        SketchKind::BouncyBubbles,
        SketchKind::OrbitingSquares,
        SketchKind::OrbitingCubes,
        SketchKind::OrbitingWhiskers,
        SketchKind::Connections,
        SketchKind::WebOfStars,
        SketchKind::NightSky,
        SketchKind::Tentacles,
        SketchKind::BoxClock,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|k| *k == self).unwrap_or(0)
    }

    /// Cycle to the next sketch.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Cycle to the previous sketch.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Human readable title.
    pub fn name(self) -> &'static str {
        match self {
            SketchKind::BouncyBubbles => "Bouncy Bubbles",
            SketchKind::OrbitingSquares => "Orbiting Squares",
            SketchKind::OrbitingCubes => "Orbiting Cubes",
            SketchKind::OrbitingWhiskers => "Orbiting Whiskers",
            SketchKind::Connections => "Connections",
            SketchKind::WebOfStars => "Web of Stars",
            SketchKind::NightSky => "Night Sky",
            SketchKind::Tentacles => "Tentacles",
            SketchKind::BoxClock => "Box Clock",
        }
    }

    /// Identifier used on the command line and in the config file.
    pub fn slug(self) -> &'static str {
        match self {
            SketchKind::BouncyBubbles => "bouncy-bubbles",
            SketchKind::OrbitingSquares => "orbiting-squares",
            SketchKind::OrbitingCubes => "orbiting-cubes",
            SketchKind::OrbitingWhiskers => "orbiting-whiskers",
            SketchKind::Connections => "connections",
            SketchKind::WebOfStars => "web-of-stars",
            SketchKind::NightSky => "night-sky",
            SketchKind::Tentacles => "tentacles",
            SketchKind::BoxClock => "box-clock",
        }
    }
}

impl fmt::Display for SketchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for SketchKind {
    type Err = ParseSketchKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Self::ALL
            .into_iter()
            .find(|k| k.slug() == wanted)
            .ok_or_else(|| ParseSketchKindError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_visits_every_sketch() {
        let mut kind = SketchKind::default();
        for _ in 0..SketchKind::ALL.len() {
            kind = kind.next();
        }
        assert_eq!(kind, SketchKind::default());
    }

    #[test]
    fn test_prev_undoes_next() {
        for kind in SketchKind::ALL {
            assert_eq!(kind.next().prev(), kind);
        }
        assert_eq!(SketchKind::BouncyBubbles.prev(), SketchKind::BoxClock);
    }

    #[test]
    fn test_parse_slug() {
        assert_eq!("box-clock".parse(), Ok(SketchKind::BoxClock));
        assert_eq!("Night_Sky".parse(), Ok(SketchKind::NightSky));
        assert_eq!(
            "fireworks".parse::<SketchKind>(),
            Err(ParseSketchKindError("fireworks".into()))
        );
    }

    #[test]
    fn test_slug_roundtrip() {
        for kind in SketchKind::ALL {
            assert_eq!(kind.slug().parse::<SketchKind>(), Ok(kind));
        }
    }
}
