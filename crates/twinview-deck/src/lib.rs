//! TwinView Deck - synchronized transport and time marks
//!
//! Implements the comparison model on top of `twinview-media` handles:
//! - Two clip slots, each owning a handle and its marks
//! - Group transport (stop, nudge, play, pause, rate) across slots
//! - Sorted, deduplicated marks with a drift-cleared selection
//! - Fixed-interval sampling of positions and the aggregate pause state

pub mod marks;
pub mod poll;
pub mod slot;
pub mod transport;

pub use marks::{Mark, MarkId, MarkStore, Selection};
pub use poll::PollTimer;
pub use slot::{PendingSeek, Slot};
pub use transport::TransportController;
