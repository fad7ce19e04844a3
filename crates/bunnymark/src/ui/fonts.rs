//! HUD font installation
//!
//! The overlay font is read from the asset directory at startup instead of
//! being embedded, so swapping fonts needs no rebuild.

use egui::{Context, FontData, FontDefinitions, FontFamily};

/// Name under which the HUD font is registered with egui
pub const HUD_FONT: &str = "hud";

/// Register `bytes` as the HUD font and put it first in both families.
///
/// egui's bundled fonts stay behind it as fallbacks for missing glyphs.
pub fn install_hud_font(ctx: &Context, bytes: Vec<u8>) {
    let mut fonts = FontDefinitions::default();

    fonts
        .font_data
        .insert(HUD_FONT.to_owned(), FontData::from_owned(bytes).into());

    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .insert(0, HUD_FONT.to_owned());
    }

    ctx.set_fonts(fonts);
}
