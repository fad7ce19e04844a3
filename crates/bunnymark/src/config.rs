//! Demo configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `bunnymark.ron` in the working directory, or the file given with `--config`
//! 3. Environment variables prefixed with `BUNNYMARK_`
//! 4. Command-line overrides (applied by the caller, see [`crate::cli::Args`])
//!
//! Example environment variable: `BUNNYMARK_SWARM__SPAWN_PER_CLICK=500`

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, ensure};
use bunnymark_core::Background;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Largest accepted `swarm.initial_capacity`; more bunnies still fit, the
/// buffers just grow on demand
pub const MAX_INITIAL_CAPACITY: usize = 1 << 20;

/// Main demo configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BunnymarkConfig {
    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub swarm: SwarmConfig,

    #[serde(default)]
    pub hud: HudConfig,

    #[serde(default)]
    pub assets: AssetsConfig,

    #[serde(default)]
    pub audio: AudioConfig,
}

/// Window settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Initial width in logical pixels
    pub width: u32,
    /// Initial height in logical pixels
    pub height: u32,
    pub title: String,
    /// Disable to measure uncapped frame rates
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 352,
            height: 430,
            title: "Bunnymark".to_owned(),
            vsync: true,
        }
    }
}

/// Swarm spawning settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwarmConfig {
    /// Bunnies scattered over the window at startup
    pub initial_count: usize,
    /// Bunnies added per left click
    pub spawn_per_click: usize,
    /// Largest speed per axis in physical pixels/sec
    pub max_speed: f32,
    /// Sprite width in logical pixels (scaled by the window's pixel density)
    pub sprite_width: f32,
    /// Sprite height in logical pixels
    pub sprite_height: f32,
    /// Preallocated bunny slots
    pub initial_capacity: usize,
    /// Fixed RNG seed for reproducible runs
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            initial_count: 1,
            spawn_per_click: 1000,
            max_speed: 50.0,
            sprite_width: 26.0,
            sprite_height: 37.0,
            initial_capacity: 64,
            seed: None,
        }
    }
}

/// Overlay text settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HudConfig {
    /// Font file inside the asset directory
    pub font_file: String,
    /// Font size in points
    pub font_size: f32,
    /// Distance of the labels from the window edges, in points
    pub margin: f32,
    /// How often the FPS and bunny labels are rebuilt
    pub refresh_interval_ms: u64,
    pub background: Background,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            font_file: "monogram.ttf".to_owned(),
            font_size: 32.0,
            margin: 16.0,
            refresh_interval_ms: 1000,
            background: Background::White,
        }
    }
}

impl HudConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }
}

/// Asset lookup settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Asset directory; resolved next to the executable when unset
    #[serde(default)]
    pub dir: Option<PathBuf>,
    /// Sprite image inside the asset directory
    pub sprite_file: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: None,
            sprite_file: "bunny.png".to_owned(),
        }
    }
}

/// Background music settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    pub enabled: bool,
    /// Music file inside the asset directory
    pub music_file: String,
    /// Linear volume, 0.0 to 1.0
    pub volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            music_file: "background.mp3".to_owned(),
            volume: 1.0,
        }
    }
}

impl BunnymarkConfig {
    /// Load configuration with layered priority:
    /// 1. Compiled defaults (lowest priority)
    /// 2. `path` if given (must exist), otherwise `bunnymark.ron` (optional)
    /// 3. Environment variables prefixed with `BUNNYMARK_` (highest priority)
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).format(FileFormat::Ron).required(true),
            None => File::with_name("bunnymark")
                .format(FileFormat::Ron)
                .required(false),
        };

        let builder = Config::builder()
            // Layer 1: Compiled defaults
            .set_default("window.width", 352_i64)?
            .set_default("window.height", 430_i64)?
            .set_default("window.title", "Bunnymark")?
            .set_default("window.vsync", true)?
            .set_default("swarm.initial_count", 1_i64)?
            .set_default("swarm.spawn_per_click", 1000_i64)?
            .set_default("swarm.max_speed", 50.0)?
            .set_default("swarm.sprite_width", 26.0)?
            .set_default("swarm.sprite_height", 37.0)?
            .set_default("swarm.initial_capacity", 64_i64)?
            .set_default("hud.font_file", "monogram.ttf")?
            .set_default("hud.font_size", 32.0)?
            .set_default("hud.margin", 16.0)?
            .set_default("hud.refresh_interval_ms", 1000_i64)?
            .set_default("hud.background", "white")?
            .set_default("assets.sprite_file", "bunny.png")?
            .set_default("audio.enabled", true)?
            .set_default("audio.music_file", "background.mp3")?
            .set_default("audio.volume", 1.0)?
            // Layer 2: Config file
            .add_source(file)
            // Layer 3: Environment variables (BUNNYMARK_SWARM__MAX_SPEED, etc.)
            .add_source(
                Environment::with_prefix("BUNNYMARK")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build().context("Failed to build configuration")?;

        let config: Self = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the demo cannot run with
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.window.width > 0 && self.window.height > 0,
            "window size must be positive, got {}x{}",
            self.window.width,
            self.window.height
        );
        ensure!(
            self.swarm.sprite_width > 0.0 && self.swarm.sprite_height > 0.0,
            "sprite size must be positive, got {}x{}",
            self.swarm.sprite_width,
            self.swarm.sprite_height
        );
        ensure!(
            self.swarm.max_speed.is_finite() && self.swarm.max_speed >= 0.0,
            "max_speed must be a non-negative number, got {}",
            self.swarm.max_speed
        );
        ensure!(
            (0.0..=1.0).contains(&self.audio.volume),
            "audio volume must be within 0.0..=1.0, got {}",
            self.audio.volume
        );
        ensure!(
            self.hud.refresh_interval_ms > 0,
            "hud refresh interval must be positive"
        );
        ensure!(
            (1..=MAX_INITIAL_CAPACITY).contains(&self.swarm.initial_capacity),
            "initial_capacity must be within 1..={}, got {}",
            MAX_INITIAL_CAPACITY,
            self.swarm.initial_capacity
        );
        ensure!(
            self.hud.font_size > 0.0,
            "font size must be positive, got {}",
            self.hud.font_size
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = BunnymarkConfig::default();
        assert_eq!(config.window.width, 352);
        assert_eq!(config.window.height, 430);
        assert_eq!(config.swarm.spawn_per_click, 1000);
        assert_eq!(config.swarm.max_speed, 50.0);
        assert_eq!(config.hud.refresh_interval(), Duration::from_secs(1));
        assert_eq!(config.hud.background, Background::White);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".ron")
            .tempfile()
            .expect("Failed to create temp file");
        writeln!(
            file,
            r#"{{ "swarm": {{ "spawn_per_click": 250, "seed": 9 }}, "hud": {{ "background": "pulse" }} }}"#
        )
        .expect("Failed to write config");

        let config = BunnymarkConfig::load_from(Some(file.path())).expect("Failed to load config");
        assert_eq!(config.swarm.spawn_per_click, 250);
        assert_eq!(config.swarm.seed, Some(9));
        assert_eq!(config.hud.background, Background::Pulse);
        // Untouched keys keep their defaults
        assert_eq!(config.swarm.max_speed, 50.0);
        assert_eq!(config.window.title, "Bunnymark");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let missing = dir.path().join("nope.ron");
        assert!(BunnymarkConfig::load_from(Some(&missing)).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = BunnymarkConfig::default();
        config.swarm.max_speed = -1.0;
        assert!(config.validate().is_err());

        let mut config = BunnymarkConfig::default();
        config.audio.volume = 1.5;
        assert!(config.validate().is_err());

        let mut config = BunnymarkConfig::default();
        config.window.width = 0;
        assert!(config.validate().is_err());

        let mut config = BunnymarkConfig::default();
        config.swarm.sprite_height = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_refresh_interval() {
        let mut config = BunnymarkConfig::default();
        config.hud.refresh_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bounds_initial_capacity() {
        let mut config = BunnymarkConfig::default();
        config.swarm.initial_capacity = usize::MAX;
        assert!(config.validate().is_err());

        config.swarm.initial_capacity = 0;
        assert!(config.validate().is_err());

        config.swarm.initial_capacity = MAX_INITIAL_CAPACITY;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_rejects_huge_capacity_from_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".ron")
            .tempfile()
            .expect("Failed to create temp file");
        writeln!(file, r#"{{ "swarm": {{ "initial_capacity": 4611686018427387904 }} }}"#)
            .expect("Failed to write config");

        assert!(BunnymarkConfig::load_from(Some(file.path())).is_err());
    }
}
