//! Viewport and scroll offset management.

use crate::layout::{HEIGHT, PositionEntry};

/// Pixels scrolled per scroll input.
pub const SCROLL_STEP: u32 = 100;

/// Scroll state for the document viewport.
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Current vertical scroll offset in pixels.
    pub offset: u32,
    /// Pixels moved per scroll input.
    pub step: u32,
    /// Visible viewport height.
    pub viewport_height: u32,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(HEIGHT as u32, SCROLL_STEP)
    }
}

impl ScrollState {
    pub fn new(viewport_height: u32, step: u32) -> Self {
        Self {
            offset: 0,
            step,
            viewport_height,
        }
    }

    /// Scroll down by one step. There is no bottom limit.
    pub fn scroll_down(&mut self) {
        self.offset = self.offset.saturating_add(self.step);
    }

    /// Scroll up by one step, stopping at the top.
    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(self.step);
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    /// Whether any part of a `vstep`-tall cell at `entry` falls inside
    /// `[offset, offset + viewport_height]`.
    pub fn is_visible(&self, entry: &PositionEntry, vstep: i32) -> bool {
        // Widened so a saturated offset or a huge cell cannot overflow.
        let top = i64::from(self.offset);
        let y = i64::from(entry.y);
        if y > top + i64::from(self.viewport_height) {
            return false;
        }
        if y + i64::from(vstep) < top {
            return false;
        }
        true
    }

    /// Translate a page y-coordinate into viewport space, clamped to `i32`.
    pub fn to_viewport(&self, y: i32) -> i32 {
        let y = i64::from(y) - i64::from(self.offset);
        i32::try_from(y).unwrap_or(i32::MIN)
    }
}
