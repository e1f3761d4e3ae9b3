//! TwinView UI - egui widgets for the comparison window
//!
//! Widgets never mutate clips directly. Each one renders from a
//! [`SlotView`] or bar state and returns the actions the user triggered;
//! the app applies them to the transport.

pub mod confirm;
pub mod drop_zone;
pub mod player_panel;
pub mod theme;
pub mod transport_bar;
pub mod view;
pub mod viewer;

pub use confirm::{show_confirm, ConfirmOutcome};
pub use drop_zone::{show_drop_zone, DropZoneAction};
pub use player_panel::{show_player_panel, SlotAction};
pub use theme::Theme;
pub use transport_bar::{show_transport_bar, TransportAction, TransportBarState};
pub use view::{step_label, ClipStatus, MarkView, SlotView};
pub use viewer::{show_viewer, ViewerAction};
