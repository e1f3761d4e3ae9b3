//! Main window: two slot columns over a group transport bar.

use eframe::egui;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};
use twinview_core::AppConfig;
use twinview_deck::{Slot, TransportController};
use twinview_media::{Clock, ClipPlayer, MediaHandle, MediaSource, ReadyState, SystemClock, VIDEO_EXTENSIONS};
use twinview_ui::{
    show_confirm, show_drop_zone, show_player_panel, show_transport_bar, ClipStatus,
    ConfirmOutcome, DropZoneAction, MarkView, SlotAction, SlotView, Theme, TransportAction,
    TransportBarState,
};

pub struct TwinViewApp {
    config: AppConfig,
    clock: Arc<dyn Clock>,
    deck: TransportController<ClipPlayer>,
    /// Screen rect of each slot column from the last frame, for drop targeting.
    slot_rects: Vec<Option<egui::Rect>>,
    /// Slot awaiting a yes/no before its clip is replaced.
    pending_replace: Option<usize>,
}

impl TwinViewApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig, preload: Vec<PathBuf>) -> Self {
        Theme::apply(&cc.egui_ctx);

        let deck = TransportController::new(&config);
        let slot_rects = vec![None; deck.slot_count()];
        let mut app = Self {
            config,
            clock: Arc::new(SystemClock::new()),
            deck,
            slot_rects,
            pending_replace: None,
        };
        for (index, path) in preload.into_iter().enumerate().take(app.deck.slot_count()) {
            app.open_into(index, MediaSource::from_path(path));
        }
        app
    }

    /// Load `source` into slot `index` if it is a video.
    fn open_into(&mut self, index: usize, source: MediaSource) {
        let source = match source.accept() {
            Ok(source) => source,
            Err(e) => {
                debug!(error = %e, "Ignoring non-video file");
                return;
            }
        };
        let player = ClipPlayer::open(source, Arc::clone(&self.clock));
        if let Err(e) = self.deck.load(index, player) {
            warn!(error = %e, "Could not load clip");
        }
    }

    fn browse_into(&mut self, index: usize) {
        let picked = rfd::FileDialog::new()
            .add_filter("Video", VIDEO_EXTENSIONS)
            .pick_file();
        match picked {
            Some(path) => self.open_into(index, MediaSource::from_path(path)),
            None => debug!(slot = index, "File dialog cancelled"),
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let (dropped, pointer) = ctx.input(|i| (i.raw.dropped_files.clone(), i.pointer.hover_pos()));
        let mut files = dropped.into_iter().filter_map(|f| f.path.map(|p| (p, f.mime)));
        let Some((path, mime)) = files.next() else {
            return;
        };
        let ignored = files.count();
        if ignored > 0 {
            debug!(ignored, "Only the first dropped file is used");
        }
        let index = drop_target(&self.slot_rects, pointer, self.deck.first_empty_slot());
        info!(slot = index, path = %path.display(), "File dropped");
        self.open_into(index, MediaSource::with_declared_type(path, &mime));
    }

    fn apply_slot_action(&mut self, index: usize, action: SlotAction) {
        if let SlotAction::Replace = action {
            self.pending_replace = Some(index);
            return;
        }
        if let SlotAction::JumpToMark(id) = action {
            self.deck.jump_to_mark(index, id);
            return;
        }
        let Some(slot) = self.deck.slot_mut(index) else {
            return;
        };
        match action {
            SlotAction::Stop => slot.stop(),
            SlotAction::Nudge(delta) => slot.add_delta_time(delta),
            SlotAction::Play => slot.play(),
            SlotAction::Pause => slot.pause(),
            SlotAction::TogglePlay => slot.toggle_play(),
            SlotAction::SeekTo(seconds) => slot.seek_to(seconds),
            SlotAction::RecordMark => {
                if let Some(id) = slot.mark_current_time() {
                    debug!(slot = index, mark = %id, "Mark recorded");
                }
            }
            SlotAction::RemoveSelectedMark => {
                if let Some(mark) = slot.remove_selected_mark() {
                    debug!(slot = index, time = mark.time, "Mark removed");
                }
            }
            SlotAction::Replace | SlotAction::JumpToMark(_) => {}
        }
    }

    fn apply_transport_action(&mut self, action: TransportAction) {
        match action {
            TransportAction::StopAll => self.deck.stop_all(),
            TransportAction::NudgeAll(delta) => self.deck.add_delta_time_all(delta),
            TransportAction::PlayAll => self.deck.play_all(),
            TransportAction::PauseAll => self.deck.pause_all(),
            TransportAction::SetRate(rate) => self.deck.set_playback_rate(rate),
        }
    }

    fn show_confirm_replace(&mut self, ctx: &egui::Context) {
        let Some(index) = self.pending_replace else {
            return;
        };
        let message = format!(
            "Remove the clip in slot {} to load another? Its marks will be discarded.",
            index + 1
        );
        if let Some(outcome) = show_confirm(ctx, "Replace clip", &message, "Remove") {
            self.pending_replace = None;
            resolve_replace(&mut self.deck, index, outcome);
        }
    }
}

impl eframe::App for TwinViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.deck.poll(now);

        self.handle_dropped_files(ctx);

        // ── Bottom transport bar ───────────────────────────────
        let bar_state = TransportBarState {
            all_paused: self.deck.all_paused(),
            rate: self.deck.playback_rate(),
            rate_presets: &self.config.rate_presets,
            nudge_steps: &self.config.nudge_steps,
            enabled: self.deck.handle_count() > 0,
        };
        let transport_actions = egui::TopBottomPanel::bottom("transport_bar")
            .frame(Theme::bar_frame())
            .show(ctx, |ui| show_transport_bar(ui, &bar_state))
            .inner;
        for action in transport_actions {
            self.apply_transport_action(action);
        }

        // ── Slot columns ───────────────────────────────────────
        let views: Vec<Option<SlotView>> = (0..self.deck.slot_count())
            .map(|i| self.deck.slot(i).map(slot_view))
            .collect();
        let nudge_steps = self.config.nudge_steps.clone();
        let dragging = ctx.input(|i| !i.raw.hovered_files.is_empty());
        let mut slot_actions = Vec::new();
        let mut browse = Vec::new();
        let mut rects = vec![None; views.len()];

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(views.len(), |columns| {
                for (index, (column, view)) in columns.iter_mut().zip(&views).enumerate() {
                    let response = Theme::slot_frame().show(column, |ui| {
                        ui.set_min_height(ui.available_height());
                        match view {
                            Some(view) => {
                                for action in show_player_panel(ui, view, &nudge_steps) {
                                    slot_actions.push((index, action));
                                }
                            }
                            None => {
                                if show_drop_zone(ui, dragging).contains(&DropZoneAction::Browse) {
                                    browse.push(index);
                                }
                            }
                        }
                    });
                    rects[index] = Some(response.response.rect);
                }
            });
        });
        self.slot_rects = rects;

        for (index, action) in slot_actions {
            self.apply_slot_action(index, action);
        }
        for index in browse {
            self.browse_into(index);
        }

        self.show_confirm_replace(ctx);

        ctx.request_repaint_after(self.deck.time_until_next_poll(Instant::now()));
    }
}

/// Snapshot one loaded slot for the widgets.
fn slot_view(slot: &Slot<ClipPlayer>) -> SlotView {
    let player = slot.handle();
    let status = match player.ready_state() {
        ReadyState::Loading => ClipStatus::Loading,
        ReadyState::Ready => ClipStatus::Ready,
        ReadyState::Failed => {
            ClipStatus::Failed(player.failure().unwrap_or("Could not load clip").to_string())
        }
    };
    let video = player.probe().and_then(|p| p.primary_video());
    let marks = slot.marks();
    SlotView {
        name: player.source().name().to_string(),
        status,
        position: slot.position(),
        duration: slot.duration_or_zero(),
        paused: slot.is_paused(),
        resolution: video.map(|v| (v.width, v.height)),
        frame_rate: video.and_then(|v| v.frame_rate),
        marks: marks
            .iter()
            .enumerate()
            .map(|(i, mark)| MarkView {
                id: mark.id,
                time: mark.time,
                gap: marks.gap_label(i),
                selected: marks.is_selected(mark.id),
            })
            .collect(),
    }
}

/// Settle a replace request. Confirming empties the slot, which releases the
/// clip and its marks and brings the drop zone back for the next file.
fn resolve_replace<H: MediaHandle>(
    deck: &mut TransportController<H>,
    index: usize,
    outcome: ConfirmOutcome,
) {
    match outcome {
        ConfirmOutcome::Confirmed => {
            deck.remove(index);
        }
        ConfirmOutcome::Cancelled => debug!(slot = index, "Replace cancelled"),
    }
}

/// Slot a drop lands in: the column under the pointer, else the first empty
/// slot, else slot 0.
fn drop_target(
    rects: &[Option<egui::Rect>],
    pointer: Option<egui::Pos2>,
    first_empty: Option<usize>,
) -> usize {
    pointer
        .and_then(|p| rects.iter().position(|r| r.is_some_and(|r| r.contains(p))))
        .or(first_empty)
        .unwrap_or(0)
}
