//! Yes/no confirmation window.

use crate::theme::Theme;
use egui::{self, RichText};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Confirmed,
    Cancelled,
}

/// Show a centered modal-style window. Returns `None` while undecided.
pub fn show_confirm(
    ctx: &egui::Context,
    title: &str,
    message: &str,
    confirm_label: &str,
) -> Option<ConfirmOutcome> {
    let mut outcome = None;
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(RichText::new(message).size(Theme::FONT_SM).color(Theme::t1()));
            ui.add_space(Theme::SPACE_SM);
            ui.horizontal(|ui| {
                if ui.button(confirm_label).clicked() {
                    outcome = Some(ConfirmOutcome::Confirmed);
                }
                if ui.button("Cancel").clicked() {
                    outcome = Some(ConfirmOutcome::Cancelled);
                }
            });
        });
    if outcome.is_none() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        outcome = Some(ConfirmOutcome::Cancelled);
    }
    outcome
}
