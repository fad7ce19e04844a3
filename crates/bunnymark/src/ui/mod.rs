//! UI module: egui overlay for the swarm

mod fonts;
mod hud;

pub use fonts::{HUD_FONT, install_hud_font};
pub use hud::{HudStyle, show_hud};
