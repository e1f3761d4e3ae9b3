//! Placeholder for an empty slot: drop target and click-to-browse.

use crate::theme::Theme;
use egui::{self, Pos2, Rounding, Stroke, Vec2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropZoneAction {
    Browse,
}

/// Paint the empty-slot prompt filling the remaining space. `hovered_by_file`
/// highlights the zone while a file is dragged over it.
pub fn show_drop_zone(ui: &mut egui::Ui, hovered_by_file: bool) -> Vec<DropZoneAction> {
    let mut actions = Vec::new();
    let size = ui.available_size().max(Vec2::new(120.0, 120.0));
    let (response, painter) = ui.allocate_painter(size, egui::Sense::click());
    let rect = response.rect.shrink(Theme::SPACE_SM);

    let highlighted = hovered_by_file || response.hovered();
    let (fill, stroke) = if highlighted {
        (Theme::accent_subtle(), Stroke::new(Theme::STROKE_EMPHASIS, Theme::accent()))
    } else {
        (Theme::white_04(), Stroke::new(Theme::STROKE_EMPHASIS, Theme::white_10()))
    };
    painter.rect_filled(rect, Rounding::same(Theme::RADIUS_LG), fill);
    painter.rect_stroke(rect, Rounding::same(Theme::RADIUS_LG), stroke);

    painter.text(
        Pos2::new(rect.center().x, rect.center().y - 12.0),
        egui::Align2::CENTER_CENTER,
        "Click or drop a video file",
        egui::FontId::proportional(Theme::FONT_LG),
        Theme::t2(),
    );
    painter.text(
        Pos2::new(rect.center().x, rect.center().y + 14.0),
        egui::Align2::CENTER_CENTER,
        "mp4 \u{00B7} mov \u{00B7} mkv \u{00B7} webm",
        egui::FontId::proportional(Theme::FONT_XS),
        Theme::t3(),
    );

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    if response.clicked() {
        actions.push(DropZoneAction::Browse);
    }
    actions
}
