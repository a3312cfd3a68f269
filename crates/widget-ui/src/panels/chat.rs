//! Chat panel — transcript view and input row for the open widget.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use egui_commonmark::{CommonMarkCache, CommonMarkViewer};
use widget_types::entry::{Entry, Role};
use crate::state::UiState;
use crate::theme::*;

/// What the panel asks the app layer to do after this frame.
pub enum PanelAction {
    None,
    /// Collapse back to the launcher
    Close,
    /// Submit the drafted message
    Send(String),
}

/// Render the open chat panel.
pub fn chat_panel(
    ui: &mut egui::Ui,
    state: &mut UiState,
    title: &str,
    cache: &mut CommonMarkCache,
) -> PanelAction {
    let mut action = PanelAction::None;

    egui::Frame::default()
        .fill(BG_PANEL)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.set_width(PANEL_WIDTH);

            // Header
            ui.horizontal(|ui| {
                ui.heading(RichText::new(title).color(ACCENT).strong());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui
                        .button(RichText::new("✕").color(TEXT_SECONDARY))
                        .clicked()
                    {
                        action = PanelAction::Close;
                    }
                });
            });

            ui.separator();

            // Transcript — sticks to the latest entry on every change
            ScrollArea::vertical()
                .max_height(TRANSCRIPT_HEIGHT)
                .min_scrolled_height(TRANSCRIPT_HEIGHT)
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for entry in &state.transcript {
                        render_entry(ui, entry, cache);
                        ui.add_space(4.0);
                    }

                    if state.awaiting_reply() {
                        egui::Frame::default()
                            .fill(BUBBLE_ASSISTANT)
                            .corner_radius(BUBBLE_ROUNDING)
                            .inner_margin(8.0)
                            .show(ui, |ui| {
                                ui.label(
                                    RichText::new("AI is typing...").color(TEXT_SECONDARY),
                                );
                            });
                    }
                });

            if !state.status_text.is_empty() {
                ui.label(RichText::new(&state.status_text).color(ERROR).small());
            }

            ui.add_space(8.0);

            // Input row
            ui.horizontal(|ui| {
                let input = egui::TextEdit::singleline(&mut state.input_text)
                    .hint_text("Type a message...")
                    .desired_width(ui.available_width() - 70.0)
                    .font(egui::FontId::proportional(14.0));

                let response = ui.add(input);

                let send_enabled = state.can_send();
                let send_btn = ui.add_enabled(
                    send_enabled,
                    egui::Button::new(RichText::new("Send").color(TEXT_ON_ACCENT))
                        .fill(if send_enabled { ACCENT } else { BUBBLE_ASSISTANT })
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(60.0, 0.0)),
                );

                // Submit on Enter or button click
                if (response.lost_focus()
                    && ui.input(|i| i.key_pressed(egui::Key::Enter))
                    && state.can_send())
                    || send_btn.clicked()
                {
                    let text = state.input_text.trim().to_string();
                    state.push_user_entry(&text);
                    state.input_text.clear();
                    response.request_focus();
                    action = PanelAction::Send(text);
                }
            });
        });

    action
}

fn render_entry(ui: &mut egui::Ui, entry: &Entry, cache: &mut CommonMarkCache) {
    match entry.role {
        Role::User => {
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                egui::Frame::default()
                    .fill(BUBBLE_USER)
                    .corner_radius(BUBBLE_ROUNDING)
                    .inner_margin(8.0)
                    .show(ui, |ui| {
                        ui.label(RichText::new(&entry.text).color(TEXT_PRIMARY));
                    });
            });
        }
        Role::Assistant => {
            egui::Frame::default()
                .fill(BUBBLE_ASSISTANT)
                .corner_radius(BUBBLE_ROUNDING)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    // Assistant text is markdown
                    CommonMarkViewer::new().show(ui, cache, &entry.text);
                });
        }
    }
}
