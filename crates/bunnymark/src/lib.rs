//! # Bunnymark
//!
//! Sprite swarm stress test: bouncing bunnies drawn with one instanced draw
//! call, a left click adds another thousand, and an egui overlay shows the
//! bunny count and frame rate.

pub mod app;
pub mod assets;
#[cfg(feature = "audio")]
pub mod audio;
pub mod cli;
pub mod config;
pub mod headless;
pub mod render;
pub mod state;
pub mod ui;

pub use app::App;
pub use config::BunnymarkConfig;
pub use state::DemoState;
