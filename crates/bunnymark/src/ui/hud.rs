//! HUD overlay: bunny count top-left, FPS bottom-left

use egui::{Align2, Color32, FontId, RichText};

use bunnymark_core::HudLabels;

/// Text styling for the overlay
#[derive(Debug, Clone, Copy)]
pub struct HudStyle {
    pub font_size: f32,
    pub margin: f32,
    pub color: Color32,
}

impl Default for HudStyle {
    fn default() -> Self {
        Self {
            font_size: 32.0,
            margin: 16.0,
            color: Color32::BLACK,
        }
    }
}

/// Show the HUD overlay from the cached label text
pub fn show_hud(ctx: &egui::Context, labels: &HudLabels, style: &HudStyle) {
    let font = FontId::proportional(style.font_size);

    if let Some(count_text) = labels.count_text() {
        egui::Area::new(egui::Id::new("bunny_count"))
            .anchor(Align2::LEFT_TOP, [style.margin, style.margin])
            .interactable(false)
            .show(ctx, |ui| {
                ui.label(RichText::new(count_text).font(font.clone()).color(style.color));
            });
    }

    egui::Area::new(egui::Id::new("fps"))
        .anchor(Align2::LEFT_BOTTOM, [style.margin, -style.margin])
        .interactable(false)
        .show(ctx, |ui| {
            ui.label(RichText::new(labels.fps_text()).font(font).color(style.color));
        });
}
