//! Clip viewport: clip identity, load state and a progress strip.
//!
//! Frames are not decoded; the viewport stands in for the picture so the
//! two slots still read as side-by-side players.

use crate::theme::Theme;
use crate::view::{ClipStatus, SlotView};
use egui::{self, Pos2, Rect, Rounding, Stroke, Vec2};

const STATUS_ICON_SIZE: f32 = 40.0;
const PROGRESS_HEIGHT: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerAction {
    TogglePlay,
}

/// Paint the viewport for a loaded slot. Clicking it toggles playback.
pub fn show_viewer(ui: &mut egui::Ui, view: &SlotView, height: f32) -> Vec<ViewerAction> {
    let mut actions = Vec::new();
    let size = Vec2::new(ui.available_width(), height);
    let (response, painter) = ui.allocate_painter(size, egui::Sense::click());
    let rect = response.rect;

    painter.rect_filled(rect, Rounding::same(Theme::RADIUS), Theme::bg());

    // Safe area guide
    let inset = rect.shrink2(Vec2::new(rect.width() * 0.1, rect.height() * 0.1));
    painter.rect_stroke(
        inset,
        0.0,
        Stroke::new(Theme::STROKE_EMPHASIS, Theme::white_04()),
    );

    let (icon, caption, tint) = match &view.status {
        ClipStatus::Loading => ("\u{231B}", "Loading\u{2026}".to_string(), Theme::t3()),
        ClipStatus::Failed(reason) => ("\u{26A0}", reason.clone(), Theme::red()),
        ClipStatus::Ready if view.paused => ("\u{25B6}", String::new(), Theme::white_10()),
        ClipStatus::Ready => ("", String::new(), Theme::white_10()),
    };
    if !icon.is_empty() {
        painter.text(
            Pos2::new(rect.center().x, rect.center().y - 10.0),
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(STATUS_ICON_SIZE),
            tint,
        );
    }
    if !caption.is_empty() {
        painter.text(
            Pos2::new(rect.center().x, rect.center().y + 30.0),
            egui::Align2::CENTER_CENTER,
            caption,
            egui::FontId::proportional(Theme::FONT_XS),
            tint,
        );
    }

    // Clip name, top left
    painter.text(
        rect.left_top() + Vec2::splat(Theme::SPACE_SM),
        egui::Align2::LEFT_TOP,
        &view.name,
        egui::FontId::proportional(Theme::FONT_SM),
        Theme::t1(),
    );

    // Stream info, top right
    let mut info = Vec::new();
    if let Some((w, h)) = view.resolution {
        info.push(format!("{}\u{00D7}{}", w, h));
    }
    if let Some(fps) = view.frame_rate {
        info.push(format!("{:.2}fps", fps));
    }
    if !info.is_empty() {
        painter.text(
            Pos2::new(rect.right() - Theme::SPACE_SM, rect.top() + Theme::SPACE_SM),
            egui::Align2::RIGHT_TOP,
            info.join(" \u{00B7} "),
            egui::FontId::monospace(Theme::FONT_XS),
            Theme::t3(),
        );
    }

    // Progress strip along the bottom edge
    let strip = Rect::from_min_max(
        Pos2::new(rect.left(), rect.bottom() - PROGRESS_HEIGHT),
        rect.max,
    );
    painter.rect_filled(strip, 0.0, Theme::white_08());
    let filled = Rect::from_min_max(
        strip.min,
        Pos2::new(strip.left() + strip.width() * view.progress(), strip.bottom()),
    );
    painter.rect_filled(filled, 0.0, Theme::accent());

    if response.hovered() && view.status == ClipStatus::Ready {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    if response.clicked() && view.status == ClipStatus::Ready {
        actions.push(ViewerAction::TogglePlay);
    }

    actions
}
