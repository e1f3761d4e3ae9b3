//! Bottom bar: group transport for every loaded clip and the shared rate.

use crate::theme::Theme;
use crate::view::step_label;
use egui::{self, RichText};
use twinview_core::PlaybackRate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransportAction {
    StopAll,
    NudgeAll(f64),
    PlayAll,
    PauseAll,
    SetRate(PlaybackRate),
}

/// What the bar needs to know about the deck.
#[derive(Debug, Clone)]
pub struct TransportBarState<'a> {
    pub all_paused: bool,
    pub rate: PlaybackRate,
    pub rate_presets: &'a [f64],
    pub nudge_steps: &'a [f64],
    /// Nothing to drive while no clip is loaded.
    pub enabled: bool,
}

pub fn show_transport_bar(ui: &mut egui::Ui, state: &TransportBarState<'_>) -> Vec<TransportAction> {
    let mut actions = Vec::new();

    ui.add_enabled_ui(state.enabled, |ui| {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("ALL")
                    .size(Theme::FONT_XS)
                    .color(Theme::t3()),
            );
            if ui.button("\u{23F9}").on_hover_text("Stop all").clicked() {
                actions.push(TransportAction::StopAll);
            }
            for step in state.nudge_steps {
                if ui.button(format!("-{}", step_label(*step))).clicked() {
                    actions.push(TransportAction::NudgeAll(-step));
                }
            }

            let (icon, action) = if state.all_paused {
                ("\u{25B6}", TransportAction::PlayAll)
            } else {
                ("\u{23F8}", TransportAction::PauseAll)
            };
            let play = egui::Button::new(RichText::new(icon).size(Theme::FONT_MD).color(Theme::t1()))
                .fill(Theme::accent_subtle());
            if ui.add(play).clicked() {
                actions.push(action);
            }

            for step in state.nudge_steps.iter().rev() {
                if ui.button(format!("+{}", step_label(*step))).clicked() {
                    actions.push(TransportAction::NudgeAll(*step));
                }
            }

            ui.separator();

            let mut selected = state.rate.value();
            egui::ComboBox::from_id_salt("playback_rate")
                .selected_text(state.rate.to_string())
                .width(64.0)
                .show_ui(ui, |ui| {
                    for preset in state.rate_presets {
                        ui.selectable_value(&mut selected, *preset, format!("x{}", preset));
                    }
                });
            if selected != state.rate.value() {
                if let Ok(rate) = PlaybackRate::new(selected) {
                    actions.push(TransportAction::SetRate(rate));
                }
            }
        });
    });

    actions
}
