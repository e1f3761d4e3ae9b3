//! Per-clip time marks with a single selection.
//!
//! Marks are kept sorted by time and never closer together than the store's
//! tolerance. The selection means "the playhead is parked on this mark": it
//! is dropped as soon as the observed position drifts away from the mark
//! and is never restored by coming back.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use twinview_core::defaults::MARK_TOLERANCE;
use twinview_core::format_gap;
use uuid::Uuid;

/// Stable identity of a mark, independent of its position in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkId(Uuid);

impl MarkId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for MarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A recorded point of interest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    pub id: MarkId,
    /// Seconds from the start of the clip.
    pub time: f64,
}

/// Which mark, if any, the playhead is parked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Selected(MarkId),
}

/// Sorted, deduplicated marks for one clip.
#[derive(Debug, Clone)]
pub struct MarkStore {
    marks: Vec<Mark>,
    selection: Selection,
    tolerance: f64,
}

impl MarkStore {
    pub fn new() -> Self {
        Self::with_tolerance(MARK_TOLERANCE)
    }

    /// Store using a custom dedup / drift tolerance in seconds.
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            marks: Vec::new(),
            selection: Selection::None,
            tolerance,
        }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Record a mark at `position`.
    ///
    /// Returns the new mark's id, or `None` if a mark already lies within
    /// the tolerance of `position`.
    pub fn mark_current_time(&mut self, position: f64) -> Option<MarkId> {
        if self
            .marks
            .iter()
            .any(|m| (m.time - position).abs() < self.tolerance)
        {
            debug!(position, "Mark already recorded here");
            return None;
        }

        let mark = Mark {
            id: MarkId::new(),
            time: position,
        };
        // Insert after any equal times to keep insertion order on ties.
        let at = self.marks.partition_point(|m| m.time <= position);
        self.marks.insert(at, mark);
        debug!(id = %mark.id, time = position, "Mark recorded");
        Some(mark.id)
    }

    /// Select a mark and return its time. Unknown ids leave the store as is.
    pub fn select(&mut self, id: MarkId) -> Option<f64> {
        let time = self.get(id)?.time;
        self.selection = Selection::Selected(id);
        Some(time)
    }

    /// Delete the selected mark, if any, and clear the selection.
    pub fn remove_selected(&mut self) -> Option<Mark> {
        let Selection::Selected(id) = self.selection else {
            return None;
        };
        self.selection = Selection::None;
        self.take(id)
    }

    /// Delete any mark. Clears the selection if it pointed at it.
    pub fn remove(&mut self, id: MarkId) -> Option<Mark> {
        if self.selection == Selection::Selected(id) {
            self.selection = Selection::None;
        }
        self.take(id)
    }

    fn take(&mut self, id: MarkId) -> Option<Mark> {
        let index = self.marks.iter().position(|m| m.id == id)?;
        let mark = self.marks.remove(index);
        debug!(id = %mark.id, time = mark.time, "Mark removed");
        Some(mark)
    }

    /// Gap between the mark at `index` and its predecessor.
    pub fn diff_to_previous(&self, index: usize) -> Option<f64> {
        if index == 0 {
            return None;
        }
        let current = self.marks.get(index)?;
        let previous = self.marks.get(index - 1)?;
        Some(current.time - previous.time)
    }

    /// Display form of [`diff_to_previous`](Self::diff_to_previous), e.g. `+1.50`.
    pub fn gap_label(&self, index: usize) -> Option<String> {
        self.diff_to_previous(index).map(format_gap)
    }

    /// Feed a freshly observed playhead position.
    ///
    /// Clears the selection if its mark is gone or lies further than the
    /// tolerance from `position`. Returns `true` if the selection was cleared.
    pub fn observe_position(&mut self, position: f64) -> bool {
        let Selection::Selected(id) = self.selection else {
            return false;
        };
        let keep = self
            .get(id)
            .is_some_and(|m| (position - m.time).abs() <= self.tolerance);
        if !keep {
            self.selection = Selection::None;
            debug!(%id, position, "Selection cleared");
        }
        !keep
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn is_selected(&self, id: MarkId) -> bool {
        self.selection == Selection::Selected(id)
    }

    pub fn get(&self, id: MarkId) -> Option<&Mark> {
        self.marks.iter().find(|m| m.id == id)
    }

    /// Marks in ascending time order.
    pub fn iter(&self) -> impl Iterator<Item = &Mark> {
        self.marks.iter()
    }

    pub fn as_slice(&self) -> &[Mark] {
        &self.marks
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn clear(&mut self) {
        self.marks.clear();
        self.selection = Selection::None;
    }
}

impl Default for MarkStore {
    fn default() -> Self {
        Self::new()
    }
}
