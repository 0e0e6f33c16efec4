use std::path::PathBuf;

use clap::Parser;
use vignette_config::Config;
use vignette_core::{AnimationSpeed, SketchKind};

/// A terminal sketchbook of generative-art animations.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Sketch to start with (e.g. bouncy-bubbles, night-sky, box-clock)
    #[arg(short, long)]
    pub sketch: Option<SketchKind>,

    /// Animation speed: slow, medium or fast
    #[arg(long)]
    pub speed: Option<AnimationSpeed>,

    /// Seed for the random layout of each sketch
    #[arg(long)]
    pub seed: Option<u64>,

    /// Target frames per second
    #[arg(long)]
    pub fps: Option<u32>,

    /// Custom config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the effective configuration to the config file and exit
    #[arg(long)]
    pub write_config: bool,
}

impl Cli {
    /// Overlay the command line flags on a loaded configuration.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(sketch) = self.sketch {
            config.sketch = sketch;
        }
        if let Some(speed) = self.speed {
            config.speed = speed;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(fps) = self.fps {
            config.fps = fps;
        }
        config.normalized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "vignette", "--sketch", "night-sky", "--speed", "fast", "--seed", "42", "--fps", "30",
        ])
        .unwrap();
        assert_eq!(cli.sketch, Some(SketchKind::NightSky));
        assert_eq!(cli.speed, Some(AnimationSpeed::Fast));
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.fps, Some(30));
        assert!(!cli.write_config);
    }

    #[test]
    fn test_unknown_sketch_is_rejected() {
        assert!(Cli::try_parse_from(["vignette", "--sketch", "fireworks"]).is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli {
            sketch: Some(SketchKind::Tentacles),
            fps: Some(10_000),
            ..Cli::default()
        };
        let config = cli.apply(Config {
            speed: AnimationSpeed::Slow,
            ..Config::default()
        });
        assert_eq!(config.sketch, SketchKind::Tentacles);
        assert_eq!(config.speed, AnimationSpeed::Slow);
        assert_eq!(config.fps, vignette_config::MAX_FPS);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let config = Config {
            sketch: SketchKind::BoxClock,
            seed: Some(7),
            ..Config::default()
        };
        assert_eq!(Cli::default().apply(config.clone()), config);
    }
}
