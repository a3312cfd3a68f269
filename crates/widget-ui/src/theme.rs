//! Widget theme constants — the light palette of the embedded panel

use egui::{Color32, CornerRadius, Stroke, Vec2};

pub const BG_PANEL: Color32 = Color32::from_rgb(255, 255, 255);
pub const BG_HEADER: Color32 = Color32::from_rgb(241, 245, 249);
pub const BUBBLE_USER: Color32 = Color32::from_rgb(219, 234, 254);
pub const BUBBLE_ASSISTANT: Color32 = Color32::from_rgb(241, 245, 249);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(34, 34, 34);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(136, 136, 136);
pub const TEXT_ON_ACCENT: Color32 = Color32::from_rgb(255, 255, 255);
pub const ACCENT: Color32 = Color32::from_rgb(37, 99, 235);
pub const ERROR: Color32 = Color32::from_rgb(239, 68, 68);

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(12);
pub const BUBBLE_ROUNDING: CornerRadius = CornerRadius::same(10);
pub const PANEL_PADDING: Vec2 = Vec2::new(12.0, 8.0);

pub const PANEL_WIDTH: f32 = 340.0;
pub const TRANSCRIPT_HEIGHT: f32 = 350.0;
pub const LAUNCHER_SIZE: f32 = 56.0;
pub const LAUNCHER_ROUNDING: CornerRadius = CornerRadius::same(28);

/// Apply the widget theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::light();
    style.visuals.panel_fill = BG_PANEL;
    style.visuals.window_fill = BG_PANEL;
    style.visuals.extreme_bg_color = BG_HEADER;

    style.visuals.widgets.inactive.bg_fill = BG_HEADER;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    style.visuals.widgets.hovered.bg_fill = BUBBLE_USER;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, TEXT_ON_ACCENT);

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.4);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);

    ctx.set_style(style);
}
