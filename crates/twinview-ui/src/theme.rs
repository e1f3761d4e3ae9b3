//! Dark theme for the comparison window: palette, spacing and frames.

use egui::{Color32, Rounding, Stroke, Vec2};

/// Central theme; every widget takes its colors from here.
pub struct Theme;

impl Theme {
    // ── Typography ─────────────────────────────────────────────
    pub const FONT_XS: f32 = 11.0; // meta, gap labels
    pub const FONT_SM: f32 = 13.0; // body, buttons
    pub const FONT_MD: f32 = 15.0; // time readout
    pub const FONT_LG: f32 = 18.0; // empty-slot prompt

    // ── Spacing (4px base) ─────────────────────────────────────
    pub const SPACE_XS: f32 = 4.0;
    pub const SPACE_SM: f32 = 8.0;
    pub const SPACE_MD: f32 = 16.0;

    // ── Border radius ──────────────────────────────────────────
    pub const RADIUS: f32 = 6.0;
    pub const RADIUS_LG: f32 = 12.0;

    // ── Stroke widths ──────────────────────────────────────────
    pub const STROKE_SUBTLE: f32 = 0.5;
    pub const STROKE_EMPHASIS: f32 = 1.0;
    /// Outline of the selected mark button.
    pub const STROKE_SELECTED: f32 = 2.0;

    // ── Backgrounds ────────────────────────────────────────────
    pub const fn bg() -> Color32 {
        Color32::from_rgb(18, 18, 22)
    }
    pub const fn bg1() -> Color32 {
        Color32::from_rgb(28, 28, 34)
    }
    pub const fn bg2() -> Color32 {
        Color32::from_rgb(35, 35, 42)
    }
    pub const fn bg3() -> Color32 {
        Color32::from_rgb(45, 45, 55)
    }
    pub const fn bg4() -> Color32 {
        Color32::from_rgb(55, 55, 68)
    }

    // ── Text (opacity-based white) ─────────────────────────────
    pub const fn t1() -> Color32 {
        Color32::from_rgba_premultiplied(235, 235, 235, 235)
    }
    pub const fn t2() -> Color32 {
        Color32::from_rgba_premultiplied(153, 153, 153, 153)
    }
    pub const fn t3() -> Color32 {
        Color32::from_rgba_premultiplied(89, 89, 89, 89)
    }

    // ── Accent ─────────────────────────────────────────────────
    pub const fn accent() -> Color32 {
        Color32::from_rgb(86, 130, 255)
    }
    /// Accent @ 8%.
    pub const fn accent_subtle() -> Color32 {
        Color32::from_rgba_premultiplied(7, 10, 20, 20)
    }
    /// Accent @ 15%.
    pub const fn accent_hover() -> Color32 {
        Color32::from_rgba_premultiplied(13, 20, 38, 38)
    }

    // ── White-alpha overlay helpers ────────────────────────────
    pub const fn white_04() -> Color32 {
        Color32::from_rgba_premultiplied(10, 10, 10, 10)
    }
    pub const fn white_08() -> Color32 {
        Color32::from_rgba_premultiplied(20, 20, 20, 20)
    }
    pub const fn white_10() -> Color32 {
        Color32::from_rgba_premultiplied(26, 26, 26, 26)
    }

    // ── Semantic colors ────────────────────────────────────────
    pub const fn red() -> Color32 {
        Color32::from_rgb(255, 88, 85)
    }
    /// Selected mark highlight.
    pub const fn amber() -> Color32 {
        Color32::from_rgb(243, 156, 18)
    }
    pub const fn amber_subtle() -> Color32 {
        Color32::from_rgba_premultiplied(24, 16, 2, 40)
    }

    // ── Color helpers ──────────────────────────────────────────

    /// Return a color with replaced alpha.
    pub const fn with_alpha(c: Color32, a: u8) -> Color32 {
        Color32::from_rgba_premultiplied(
            (c.r() as u16 * a as u16 / 255) as u8,
            (c.g() as u16 * a as u16 / 255) as u8,
            (c.b() as u16 * a as u16 / 255) as u8,
            a,
        )
    }

    // ── Frame builders ─────────────────────────────────────────

    /// Frame around one clip column.
    pub fn slot_frame() -> egui::Frame {
        egui::Frame::none()
            .fill(Self::bg1())
            .stroke(Stroke::new(Self::STROKE_SUBTLE, Self::white_08()))
            .rounding(Rounding::same(Self::RADIUS_LG))
            .inner_margin(egui::Margin::same(Self::SPACE_SM))
    }

    /// Bottom transport bar.
    pub fn bar_frame() -> egui::Frame {
        egui::Frame::none()
            .fill(Self::bg1())
            .stroke(Stroke::new(Self::STROKE_SUBTLE, Self::white_08()))
            .inner_margin(egui::Margin::symmetric(Self::SPACE_MD, Self::SPACE_SM))
    }

    // ── Theme application ──────────────────────────────────────

    /// Apply the theme to an egui context.
    pub fn apply(ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        let visuals = &mut style.visuals;
        *visuals = egui::Visuals::dark();

        visuals.panel_fill = Self::bg();
        visuals.window_fill = Self::bg2();
        visuals.extreme_bg_color = Self::bg();
        visuals.faint_bg_color = Self::bg2();

        visuals.widgets.noninteractive.bg_fill = Self::bg2();
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, Self::t2());
        visuals.widgets.noninteractive.bg_stroke =
            Stroke::new(Self::STROKE_SUBTLE, Self::white_04());
        visuals.widgets.noninteractive.rounding = Rounding::same(Self::RADIUS);

        visuals.widgets.inactive.bg_fill = Self::bg3();
        visuals.widgets.inactive.weak_bg_fill = Self::bg3();
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, Self::t1());
        visuals.widgets.inactive.rounding = Rounding::same(Self::RADIUS);

        visuals.widgets.hovered.bg_fill = Self::bg4();
        visuals.widgets.hovered.weak_bg_fill = Self::bg4();
        visuals.widgets.hovered.bg_stroke = Stroke::new(Self::STROKE_SUBTLE, Self::accent_hover());
        visuals.widgets.hovered.rounding = Rounding::same(Self::RADIUS);

        visuals.widgets.active.bg_fill = Self::accent_subtle();
        visuals.widgets.active.fg_stroke = Stroke::new(Self::STROKE_EMPHASIS, Self::accent());
        visuals.widgets.active.rounding = Rounding::same(Self::RADIUS);

        visuals.selection.bg_fill = Self::with_alpha(Self::accent(), 90);
        visuals.selection.stroke = Stroke::new(1.0, Self::accent());

        visuals.window_rounding = Rounding::same(Self::RADIUS_LG);
        style.spacing.item_spacing = Vec2::new(Self::SPACE_XS, Self::SPACE_XS);
        style.spacing.button_padding = Vec2::new(Self::SPACE_SM, Self::SPACE_XS);

        ctx.set_style(style);
    }
}
