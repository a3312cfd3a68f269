//! Floating launcher button shown while the panel is closed.

use egui::{self, RichText, Vec2};
use crate::theme::*;

/// Render the round launcher. Returns true when clicked open.
pub fn launcher_button(ui: &mut egui::Ui) -> bool {
    ui.add(
        egui::Button::new(RichText::new("💬").size(24.0).color(TEXT_ON_ACCENT))
            .fill(ACCENT)
            .corner_radius(LAUNCHER_ROUNDING)
            .min_size(Vec2::new(LAUNCHER_SIZE, LAUNCHER_SIZE)),
    )
    .clicked()
}
