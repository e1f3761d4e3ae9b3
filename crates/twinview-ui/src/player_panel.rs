//! Per-slot player column: viewport, scrub bar, transport buttons and marks.

use crate::theme::Theme;
use crate::view::{step_label, SlotView};
use crate::viewer::{show_viewer, ViewerAction};
use egui::{self, RichText, Stroke};
use twinview_deck::MarkId;

const VIEWPORT_ASPECT: f32 = 9.0 / 16.0;
const VIEWPORT_MIN_HEIGHT: f32 = 120.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlotAction {
    /// Ask to swap the clip for another file.
    Replace,
    Stop,
    Nudge(f64),
    Play,
    Pause,
    /// Viewport click: play if paused, else pause.
    TogglePlay,
    SeekTo(f64),
    RecordMark,
    RemoveSelectedMark,
    JumpToMark(MarkId),
}

pub fn show_player_panel(ui: &mut egui::Ui, view: &SlotView, nudge_steps: &[f64]) -> Vec<SlotAction> {
    let mut actions = Vec::new();

    let height = (ui.available_width() * VIEWPORT_ASPECT).max(VIEWPORT_MIN_HEIGHT);
    for action in show_viewer(ui, view, height) {
        match action {
            ViewerAction::TogglePlay => actions.push(SlotAction::TogglePlay),
        }
    }

    ui.add_space(Theme::SPACE_XS);

    // ── Time readout + scrub ───────────────────────────────
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(view.time_readout())
                .monospace()
                .size(Theme::FONT_MD)
                .color(Theme::t1()),
        );
        let mut scrub = view.position;
        let range = 0.0..=view.duration.max(0.0);
        ui.spacing_mut().slider_width = ui.available_width().max(40.0);
        let response = ui.add_enabled(
            view.duration > 0.0,
            egui::Slider::new(&mut scrub, range).show_value(false),
        );
        if response.changed() {
            actions.push(SlotAction::SeekTo(scrub));
        }
    });

    // ── Transport ──────────────────────────────────────────
    ui.horizontal(|ui| {
        if ui.button("Replace\u{2026}").clicked() {
            actions.push(SlotAction::Replace);
        }
        ui.separator();
        if ui.button("\u{23F9}").on_hover_text("Stop").clicked() {
            actions.push(SlotAction::Stop);
        }
        for step in nudge_steps {
            if ui.button(format!("-{}", step_label(*step))).clicked() {
                actions.push(SlotAction::Nudge(-step));
            }
        }
        let (icon, action) = if view.paused {
            ("\u{25B6}", SlotAction::Play)
        } else {
            ("\u{23F8}", SlotAction::Pause)
        };
        if ui.button(icon).clicked() {
            actions.push(action);
        }
        for step in nudge_steps.iter().rev() {
            if ui.button(format!("+{}", step_label(*step))).clicked() {
                actions.push(SlotAction::Nudge(*step));
            }
        }
    });

    // ── Marks ──────────────────────────────────────────────
    ui.horizontal(|ui| {
        if ui.button("\u{25CF} Mark").clicked() {
            actions.push(SlotAction::RecordMark);
        }
        if ui
            .add_enabled(view.has_selection(), egui::Button::new("Delete mark"))
            .clicked()
        {
            actions.push(SlotAction::RemoveSelectedMark);
        }
    });

    ui.horizontal_wrapped(|ui| {
        for mark in &view.marks {
            let text = if mark.selected {
                RichText::new(format!("\u{2605} {}", mark.label())).color(Theme::amber())
            } else {
                RichText::new(mark.label()).color(Theme::t1())
            };
            let mut button = egui::Button::new(text.size(Theme::FONT_SM));
            if mark.selected {
                button = button
                    .fill(Theme::amber_subtle())
                    .stroke(Stroke::new(Theme::STROKE_SELECTED, Theme::amber()));
            }
            if ui.add(button).clicked() {
                actions.push(SlotAction::JumpToMark(mark.id));
            }
        }
    });

    actions
}
