//! Command-line arguments and their config overrides

use std::path::PathBuf;

use bunnymark_core::Background;
use clap::Parser;

use crate::config::BunnymarkConfig;

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Config file (RON); defaults to ./bunnymark.ron if present
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding bunny.png, monogram.ttf and background.mp3
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Bunnies spawned per left click
    #[arg(long)]
    pub spawn_per_click: Option<usize>,

    /// Bunnies scattered over the window at startup
    #[arg(long)]
    pub initial: Option<usize>,

    /// Clear colour: white or pulse
    #[arg(long)]
    pub background: Option<Background>,

    /// Present without vsync to see the uncapped frame rate
    #[arg(long)]
    pub no_vsync: bool,

    /// Disable background music
    #[arg(long)]
    pub mute: bool,

    /// Fixed RNG seed for reproducible spawns
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run the simulation without a window for N frames and report timings
    #[arg(long, value_name = "FRAMES")]
    pub headless: Option<u64>,
}

impl Args {
    /// Apply command-line overrides on top of the loaded config
    pub fn apply(&self, config: &mut BunnymarkConfig) {
        if let Some(dir) = &self.assets {
            config.assets.dir = Some(dir.clone());
        }
        if let Some(count) = self.spawn_per_click {
            config.swarm.spawn_per_click = count;
        }
        if let Some(count) = self.initial {
            config.swarm.initial_count = count;
        }
        if let Some(background) = self.background {
            config.hud.background = background;
        }
        if self.no_vsync {
            config.window.vsync = false;
        }
        if self.mute {
            config.audio.enabled = false;
        }
        if let Some(seed) = self.seed {
            config.swarm.seed = Some(seed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_change_nothing() {
        let mut config = BunnymarkConfig::default();
        Args::default().apply(&mut config);
        assert_eq!(config.swarm.spawn_per_click, 1000);
        assert!(config.window.vsync);
        assert!(config.audio.enabled);
        assert_eq!(config.assets.dir, None);
    }

    #[test]
    fn test_flags_override_config() {
        let args = Args::parse_from([
            "bunnymark",
            "--spawn-per-click",
            "250",
            "--initial",
            "10",
            "--background",
            "pulse",
            "--no-vsync",
            "--mute",
            "--seed",
            "42",
            "--assets",
            "/opt/bunny",
        ]);

        let mut config = BunnymarkConfig::default();
        args.apply(&mut config);

        assert_eq!(config.swarm.spawn_per_click, 250);
        assert_eq!(config.swarm.initial_count, 10);
        assert_eq!(config.hud.background, Background::Pulse);
        assert!(!config.window.vsync);
        assert!(!config.audio.enabled);
        assert_eq!(config.swarm.seed, Some(42));
        assert_eq!(config.assets.dir, Some(PathBuf::from("/opt/bunny")));
    }

    #[test]
    fn test_headless_flag() {
        let args = Args::parse_from(["bunnymark", "--headless", "600"]);
        assert_eq!(args.headless, Some(600));
    }
}
