//! Plain-data snapshots the widgets render from.
//!
//! The app rebuilds these from the transport every frame, so widgets never
//! touch media handles directly.

use twinview_core::format_time;
use twinview_deck::MarkId;

/// Load state of a clip as shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum ClipStatus {
    Loading,
    Ready,
    Failed(String),
}

/// One mark button.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkView {
    pub id: MarkId,
    pub time: f64,
    /// Gap to the previous mark, already formatted (`+1.50`).
    pub gap: Option<String>,
    pub selected: bool,
}

impl MarkView {
    /// Button text: `0:01.50 (+0.50)`.
    pub fn label(&self) -> String {
        match &self.gap {
            Some(gap) => format!("{} ({})", format_time(self.time), gap),
            None => format_time(self.time),
        }
    }
}

/// Everything a loaded slot panel displays.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotView {
    pub name: String,
    pub status: ClipStatus,
    pub position: f64,
    /// Zero while the duration is unknown.
    pub duration: f64,
    pub paused: bool,
    pub resolution: Option<(u32, u32)>,
    pub frame_rate: Option<f64>,
    pub marks: Vec<MarkView>,
}

impl SlotView {
    pub fn has_selection(&self) -> bool {
        self.marks.iter().any(|m| m.selected)
    }

    /// `0:01.50 / 0:10.00`
    pub fn time_readout(&self) -> String {
        format!("{} / {}", format_time(self.position), format_time(self.duration))
    }

    /// Playhead as a fraction of the clip, 0 when the length is unknown.
    pub fn progress(&self) -> f32 {
        if self.duration > 0.0 {
            (self.position / self.duration).clamp(0.0, 1.0) as f32
        } else {
            0.0
        }
    }
}

/// Nudge button caption: `1`, `0.1`, `0.01`.
pub fn step_label(step: f64) -> String {
    format!("{}", step)
}
