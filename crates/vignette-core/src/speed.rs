use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a speed name is not slow, medium or fast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown speed '{0}' (expected slow, medium or fast)")]
pub struct ParseAnimationSpeedError(pub String);

/// Animation speed setting for the sketches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl AnimationSpeed {
    /// Cycle to the next speed setting.
    pub fn next(self) -> Self {
        match self {
            AnimationSpeed::Slow => AnimationSpeed::Medium,
            AnimationSpeed::Medium => AnimationSpeed::Fast,
            AnimationSpeed::Fast => AnimationSpeed::Slow,
        }
    }

    /// Get display name for the speed.
    pub fn name(self) -> &'static str {
        match self {
            AnimationSpeed::Slow => "Slow",
            AnimationSpeed::Medium => "Medium",
            AnimationSpeed::Fast => "Fast",
        }
    }

    /// Simulation steps per reference frame (one reference frame is 1/60 s).
    pub fn time_scale(self) -> f32 {
        match self {
            AnimationSpeed::Slow => 0.5,
            AnimationSpeed::Medium => 1.0,
            AnimationSpeed::Fast => 2.0,
        }
    }
}

impl std::str::FromStr for AnimationSpeed {
    type Err = ParseAnimationSpeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "slow" => Ok(AnimationSpeed::Slow),
            "medium" => Ok(AnimationSpeed::Medium),
            "fast" => Ok(AnimationSpeed::Fast),
            _ => Err(ParseAnimationSpeedError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_cycle() {
        let start = AnimationSpeed::Slow;
        assert_eq!(start.next().next().next(), start);
    }

    #[test]
    fn test_speed_parse() {
        assert_eq!("FAST".parse::<AnimationSpeed>(), Ok(AnimationSpeed::Fast));
        assert_eq!(
            "warp".parse::<AnimationSpeed>(),
            Err(ParseAnimationSpeedError("warp".to_string()))
        );
    }

    #[test]
    fn test_time_scale_ordering() {
        assert!(AnimationSpeed::Slow.time_scale() < AnimationSpeed::Medium.time_scale());
        assert!(AnimationSpeed::Medium.time_scale() < AnimationSpeed::Fast.time_scale());
    }
}
