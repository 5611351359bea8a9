//! Navigation cursor

use crate::editor::ParamEditor;
use crate::limits::SlotId;

/// Index of the focused parameter slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationCursor {
    index: SlotId,
}

impl NavigationCursor {
    /// Create a cursor resting on slot 0
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    /// Focused slot
    pub fn index(&self) -> SlotId {
        self.index
    }

    /// Move focus back to slot 0
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Advance to the next visible slot
    ///
    /// Advances at most `editors.len()` times. Without any visible slot the
    /// cursor ends one full cycle later, back where it started.
    pub fn next_visible(&mut self, editors: &[ParamEditor]) -> SlotId {
        let count = editors.len();
        for _ in 0..count {
            self.index = (self.index + 1) % count;
            if editors[self.index].is_visible() {
                break;
            }
        }
        self.index
    }

    /// Stay on the focused slot if visible, otherwise advance to the next visible one
    pub fn current_visible(&mut self, editors: &[ParamEditor]) -> SlotId {
        let count = editors.len();
        if count == 0 {
            return self.index;
        }
        self.index %= count;
        if editors[self.index].is_visible() {
            return self.index;
        }
        self.next_visible(editors)
    }

    /// Retreat to the previous visible slot
    ///
    /// Bounded the same way as [`NavigationCursor::next_visible`].
    pub fn prev_visible(&mut self, editors: &[ParamEditor]) -> SlotId {
        let count = editors.len();
        for _ in 0..count {
            self.index = (self.index + count - 1) % count;
            if editors[self.index].is_visible() {
                break;
            }
        }
        self.index
    }
}
